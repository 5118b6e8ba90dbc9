//! End-to-end sheet generation: plan, assign, resolve, paginate, compose

/// Page counts, stream labels and odd-count adjustment
pub mod pagination;
/// Pipeline driving assignment and compositing into a page sink
pub mod pipeline;
/// Immutable description of one generation run
pub mod request;

pub use pagination::{CountAdjustment, PageId, PageStream};
pub use pipeline::{GenerationSummary, PageSink, generate};
pub use request::GenerationRequest;
