//! Input/output glue around the core: CLI, assets, configuration, output

/// PNG loading and normalization to the cell size
pub mod assets;
/// Command-line parsing and batch orchestration
pub mod cli;
/// Defaults and persisted JSON configuration
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// Page naming and PNG export
pub mod output;
/// Progress bars for slot placement
pub mod progress;
