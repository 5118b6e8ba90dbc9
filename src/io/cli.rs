//! Command-line interface for batch sheet generation and configuration management

use crate::generation::{GenerationRequest, GenerationSummary, generate};
use crate::io::assets::{AssetLoader, AssetPaths};
use crate::io::configuration::{DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT, MixerConfig};
use crate::io::error::Result;
use crate::io::output::FileSink;
use crate::io::progress::ProgressManager;
use crate::layout::Dimensions;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetmix")]
#[command(
    author,
    version,
    about = "Mix A-type and B-type images onto print-ready sheets"
)]
/// Command-line arguments for the sheet generation tool
pub struct Cli {
    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Generate sheets from five source images
    Batch(BatchArgs),

    /// Show a configuration file, creating it with defaults if missing
    Config {
        /// Configuration file path
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

/// Options for batch generation; unset overrides keep configured values
#[derive(Args)]
// Mode switches are independent user choices
#[allow(clippy::struct_excessive_bools)]
pub struct BatchArgs {
    /// Path to the common A-type image
    #[arg(long)]
    pub common: PathBuf,

    /// Path to the uncommon A-type image
    #[arg(long)]
    pub uncommon: PathBuf,

    /// Path to the legendary A-type image
    #[arg(long)]
    pub legendary: PathBuf,

    /// Path to the normal B-type image
    #[arg(long)]
    pub normal: PathBuf,

    /// Path to the special B-type image
    #[arg(long)]
    pub special: PathBuf,

    /// Common A-type weight
    #[arg(long)]
    pub a_common: Option<f64>,

    /// Uncommon A-type weight
    #[arg(long)]
    pub a_uncommon: Option<f64>,

    /// Legendary A-type weight
    #[arg(long)]
    pub a_legendary: Option<f64>,

    /// Normal B-type weight
    #[arg(long)]
    pub b_normal: Option<f64>,

    /// Special B-type weight
    #[arg(long)]
    pub b_special: Option<f64>,

    /// Canvas width in pixels
    #[arg(long)]
    pub canvas_width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub canvas_height: Option<u32>,

    /// Source cell side length in pixels
    #[arg(long)]
    pub cell_size: Option<u32>,

    /// Cells per row
    #[arg(long)]
    pub images_per_row: Option<u32>,

    /// Total images across both categories (odd totals are rounded up)
    #[arg(short, long)]
    pub total: Option<usize>,

    /// Separate A and B pages with mirrored B pages for double-sided printing
    #[arg(short, long, overrides_with = "no_duplex")]
    pub duplex: bool,

    /// Shuffle both categories onto shared pages, even if configured for duplex
    #[arg(long, overrides_with = "duplex")]
    pub no_duplex: bool,

    /// Maximum pages per stream
    #[arg(short, long)]
    pub max_pages: Option<usize>,

    /// Base output filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Load configuration from this JSON file and save the merged result back
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Random seed for reproducible sheets
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Fail on source images that are not exactly the cell size
    #[arg(long)]
    pub strict_size: bool,

    /// Resample each distinct image once instead of on every placement
    #[arg(long)]
    pub cache_resample: bool,
}

impl BatchArgs {
    /// Source image locations
    pub fn asset_paths(&self) -> AssetPaths {
        AssetPaths {
            common: self.common.clone(),
            uncommon: self.uncommon.clone(),
            legendary: self.legendary.clone(),
            normal: self.normal.clone(),
            special: self.special.clone(),
        }
    }

    /// Overwrite configured values with the options given on the command line
    pub fn apply(&self, config: &mut MixerConfig) {
        fn set<T: Copy>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut config.a_common, self.a_common);
        set(&mut config.a_uncommon, self.a_uncommon);
        set(&mut config.a_legendary, self.a_legendary);
        set(&mut config.b_normal, self.b_normal);
        set(&mut config.b_special, self.b_special);
        set(&mut config.canvas_width, self.canvas_width);
        set(&mut config.canvas_height, self.canvas_height);
        set(&mut config.cell_size, self.cell_size);
        set(&mut config.images_per_row, self.images_per_row);

        if self.total.is_some() {
            config.total_images = self.total;
        }
        if self.max_pages.is_some() {
            config.max_pages = self.max_pages;
        }
        set(&mut config.duplex, self.duplex_override());
    }

    /// Duplex choice given on the command line; the later flag wins
    pub const fn duplex_override(&self) -> Option<bool> {
        match (self.duplex, self.no_duplex) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}

/// Execute the parsed command
///
/// # Errors
///
/// Returns an error if configuration, asset loading, generation or output fails
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Batch(args) => run_batch(&args, cli.quiet),
        Command::Config { config } => show_config(&config),
    }
}

fn run_batch(args: &BatchArgs, quiet: bool) -> Result<()> {
    let mut config = match &args.config {
        Some(path) if path.exists() => MixerConfig::load(path)?,
        _ => MixerConfig::default(),
    };
    args.apply(&mut config);

    let mut request = config.request();
    request.cache_resamples = args.cache_resample;
    // Fail on a degenerate layout before touching any image files
    request.plan()?;

    let loader = AssetLoader::new(Dimensions::square(config.cell_size)).strict(args.strict_size);
    let assets = loader.load_set(&args.asset_paths())?;

    if let Some(path) = &args.config {
        config.save(path)?;
    }

    let mut rng = args
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut sink = FileSink::new(&args.output, (!quiet).then(ProgressManager::new));

    let summary = generate(&request, &assets, &mut rng, &mut sink)?;
    sink.finish();

    report(&request, &summary, sink.written())
}

// Allow print for the user-facing statistics summary
#[allow(clippy::print_stderr)]
fn report(
    request: &GenerationRequest,
    summary: &GenerationSummary,
    written: &[PathBuf],
) -> Result<()> {
    let rarity = request.rarity_weights.normalize()?;
    let variant = request.variant_weights.normalize()?;

    if summary.count.was_adjusted() {
        eprintln!(
            "Note: requested {} images, generated {} to keep A:B at 1:1",
            summary.count.requested(),
            summary.count.effective()
        );
    }

    eprintln!("Generation statistics:");
    eprintln!(
        "  Layout: {}x{} cells, {} per row, {} rows, {} slots per page",
        summary.plan.cell().width,
        summary.plan.cell().height,
        summary.plan.columns(),
        summary.plan.rows(),
        summary.plan.slots_per_page()
    );
    eprintln!("  Total images: {}", summary.count.effective());

    let shares: Vec<String> = rarity
        .probabilities()
        .iter()
        .map(|(label, p)| format!("{}: {:.1}%", label.name(), p * 100.0))
        .collect();
    eprintln!(
        "  A-type: {} ({})",
        summary.count.per_category(),
        shares.join(", ")
    );

    let special = variant
        .probabilities()
        .first()
        .map_or(0.0, |&(_, p)| p * 100.0);
    eprintln!(
        "  B-type: {} (Special chance: {special:.1}%)",
        summary.count.per_category()
    );

    let drawn: Vec<String> = summary
        .rarity_tally
        .iter()
        .map(|(label, n)| format!("{}={n}", label.name()))
        .chain(
            summary
                .variant_tally
                .iter()
                .map(|(label, n)| format!("{}={n}", label.name())),
        )
        .collect();
    eprintln!("  Drawn: {}", drawn.join(", "));

    if summary.dropped > 0 {
        eprintln!("  Dropped by page limit: {}", summary.dropped);
    }
    for path in written {
        eprintln!("  Saved {}", path.display());
    }

    Ok(())
}

// Allow print for configuration display
#[allow(clippy::print_stderr)]
fn show_config(path: &Path) -> Result<()> {
    if !path.exists() {
        eprintln!("Creating new configuration file: {}", path.display());
        return MixerConfig::default().save(path);
    }

    let config = MixerConfig::load(path)?;
    eprintln!("Current configuration from {}:", path.display());
    eprintln!("  A-type weights:");
    eprintln!("    Common: {}", config.a_common);
    eprintln!("    Uncommon: {}", config.a_uncommon);
    eprintln!("    Legendary: {}", config.a_legendary);
    eprintln!("  B-type weights:");
    eprintln!("    Normal: {}", config.b_normal);
    eprintln!("    Special: {}", config.b_special);
    eprintln!(
        "  Canvas: {}x{}, cell {}px, {} per row",
        config.canvas_width, config.canvas_height, config.cell_size, config.images_per_row
    );
    eprintln!(
        "  Total images: {}",
        config
            .total_images
            .map_or_else(|| "one page per stream".to_string(), |n| n.to_string())
    );
    eprintln!("  Duplex: {}", config.duplex);
    if let Some(max_pages) = config.max_pages {
        eprintln!("  Max pages: {max_pages}");
    }

    Ok(())
}
