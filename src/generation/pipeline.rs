//! Pipeline driving assignment and compositing into a page sink

use crate::composition::{AssetSet, Compositor, ImageAsset, Page};
use crate::generation::pagination::{CountAdjustment, PageId, PageStream, page_count};
use crate::generation::request::GenerationRequest;
use crate::io::error::{Result, invalid_configuration};
use crate::layout::LayoutPlan;
use crate::sampling::assignment::tally;
use crate::sampling::{Category, Rarity, Variant, assign};
use rand::Rng;
use rand::seq::SliceRandom;

/// Receives finished pages and placement progress
///
/// All file output happens on the sink side; the pipeline itself never
/// touches the file system.
pub trait PageSink {
    /// A stream is about to place `slots` images across its pages
    fn stream_started(&mut self, _stream: PageStream, _slots: usize) {}

    /// One more slot of `stream` has been filled
    fn slot_placed(&mut self, _stream: PageStream) {}

    /// Take ownership of a finished page
    ///
    /// # Errors
    ///
    /// Implementations return an error if the page cannot be stored
    fn emit(&mut self, id: PageId, page: Page) -> Result<()>;
}

/// Shape of one emitted page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRecord {
    /// Stream and position of the page
    pub id: PageId,
    /// Slots holding an image
    pub filled: usize,
    /// Slot capacity
    pub total_slots: usize,
    /// Whether the page was flipped for duplex printing
    pub mirrored: bool,
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Layout every page used
    pub plan: LayoutPlan,
    /// Requested and effective image totals
    pub count: CountAdjustment,
    /// Drawn count for each A-type rarity
    pub rarity_tally: Vec<(Rarity, usize)>,
    /// Drawn count for each B-type variant
    pub variant_tally: Vec<(Variant, usize)>,
    /// Emitted pages in emission order
    pub pages: Vec<PageRecord>,
    /// Drawn images left out by the page ceiling
    pub dropped: usize,
}

impl GenerationSummary {
    /// Pages emitted for `stream`
    pub fn pages_in(&self, stream: PageStream) -> impl Iterator<Item = &PageRecord> + '_ {
        self.pages
            .iter()
            .filter(move |record| record.id.stream == stream)
    }
}

/// Run one request end to end, handing each finished page to `sink`
///
/// A-type and B-type labels are drawn as two independent sequences of
/// equal length. In duplex mode each category becomes its own page stream
/// and every B page is mirrored; otherwise both sequences are shuffled
/// together into one mixed stream.
///
/// # Errors
///
/// Returns an error if:
/// - The layout is degenerate or the page ceiling is zero
/// - Either weight set cannot be normalized
/// - The sink fails to store a page
pub fn generate<R, S>(
    request: &GenerationRequest,
    assets: &AssetSet,
    rng: &mut R,
    sink: &mut S,
) -> Result<GenerationSummary>
where
    R: Rng,
    S: PageSink,
{
    if request.max_pages == Some(0) {
        return Err(invalid_configuration(
            "max_pages",
            &0,
            &"must allow at least one page",
        ));
    }

    let plan = request.plan()?;
    let count = CountAdjustment::even(request.requested_total(plan.slots_per_page()));
    if count.was_adjusted() {
        tracing::warn!(
            requested = count.requested(),
            effective = count.effective(),
            "odd image total raised to keep categories balanced"
        );
    }

    let rarities = assign(count.per_category(), &request.rarity_weights, rng)?;
    let variants = assign(count.per_category(), &request.variant_weights, rng)?;

    let front: Vec<&ImageAsset> = rarities.iter().map(|&r| assets.rarity(r)).collect();
    let back: Vec<&ImageAsset> = variants.iter().map(|&v| assets.variant(v)).collect();

    let mut compositor = Compositor::new(plan);
    if request.cache_resamples {
        compositor = compositor.with_cache();
    }

    let mut paginator = Paginator {
        compositor,
        sink,
        max_pages: request.max_pages,
        pages: Vec::new(),
        dropped: 0,
    };

    if request.duplex {
        paginator.run(PageStream::Category(Category::A), &front)?;
        paginator.run(PageStream::Category(Category::B), &back)?;
    } else {
        let mut mixed = front;
        mixed.extend(back);
        mixed.shuffle(rng);
        paginator.run(PageStream::Mixed, &mixed)?;
    }

    if let Some(cache) = paginator.compositor.cache() {
        tracing::debug!(
            hits = cache.stats.hits,
            misses = cache.stats.misses,
            "resample cache"
        );
    }

    Ok(GenerationSummary {
        plan,
        count,
        rarity_tally: Rarity::ALL
            .iter()
            .map(|rarity| (*rarity, tally(&rarities, rarity)))
            .collect(),
        variant_tally: Variant::ALL
            .iter()
            .map(|variant| (*variant, tally(&variants, variant)))
            .collect(),
        pages: paginator.pages,
        dropped: paginator.dropped,
    })
}

struct Paginator<'s, S> {
    compositor: Compositor,
    sink: &'s mut S,
    max_pages: Option<usize>,
    pages: Vec<PageRecord>,
    dropped: usize,
}

impl<S: PageSink> Paginator<'_, S> {
    // Slices one stream into page-sized chunks in generation order
    fn run(&mut self, stream: PageStream, images: &[&ImageAsset]) -> Result<()> {
        let slots = self.compositor.plan().slots_per_page();
        let needed = page_count(images.len(), slots)?;
        let pages = self.max_pages.map_or(needed, |ceiling| needed.min(ceiling));

        let kept = images.len().min(pages * slots);
        if kept < images.len() {
            tracing::warn!(
                %stream,
                dropped = images.len() - kept,
                ceiling = pages,
                "page ceiling reached, remaining images dropped"
            );
            self.dropped += images.len() - kept;
        }

        self.sink.stream_started(stream, kept);

        let compositor = &mut self.compositor;
        let sink = &mut *self.sink;
        for (offset, chunk) in images.get(..kept).unwrap_or(images).chunks(slots).enumerate() {
            let mut page = compositor.compose(chunk, |_| sink.slot_placed(stream));
            if stream.is_mirrored() {
                page.mirror();
            }

            let id = PageId {
                stream,
                number: offset + 1,
                of: pages,
            };
            self.pages.push(PageRecord {
                id,
                filled: page.filled(),
                total_slots: page.total_slots(),
                mirrored: page.is_mirrored(),
            });
            tracing::info!(
                %stream,
                page = id.number,
                of = id.of,
                filled = page.filled(),
                "page composed"
            );

            sink.emit(id, page)?;
        }

        Ok(())
    }
}
