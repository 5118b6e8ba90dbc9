//! Weighted random composition of fixed-size images onto print-ready sheets
//!
//! A layout plan fixes how many scaled cells fit on a canvas, two independent
//! weighted draws pick A-type and B-type images for those cells, and the
//! compositor fills as many pages as the requested total needs. In duplex
//! mode the B-type pages are mirrored so both sides align after flipping.

#![forbid(unsafe_code)]

/// Page compositing and resample caching
pub mod composition;
/// End-to-end pipeline, requests and pagination
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Grid layout planning
pub mod layout;
/// Weighted label assignment
pub mod sampling;

pub use io::error::{MixerError, Result};
