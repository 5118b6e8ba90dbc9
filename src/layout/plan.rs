//! Derives scaled cell size and page capacity from canvas and cell dimensions

use crate::io::error::{Result, invalid_configuration};

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Horizontal extent in pixels
    pub width: u32,
    /// Vertical extent in pixels
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions from width and height
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create square dimensions
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Immutable page grid computed once per generation run
///
/// Width drives the scale factor: every column spans `canvas.width / columns`
/// source cells, and cell height is scaled by the same factor rather than
/// fitted to the canvas height independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    canvas: Dimensions,
    cell: Dimensions,
    columns: u32,
    rows: u32,
    slots: usize,
}

impl LayoutPlan {
    /// Plan the grid for source cells of `source_cell` size on `canvas`
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - Any canvas or cell dimension is zero
    /// - `columns` is zero
    /// - The scale factor floors a cell dimension to zero pixels
    /// - The canvas is shorter than one scaled cell
    pub fn compute(canvas: Dimensions, source_cell: Dimensions, columns: u32) -> Result<Self> {
        if canvas.width == 0 {
            return Err(invalid_configuration(
                "canvas_width",
                &canvas.width,
                &"must be positive",
            ));
        }
        if canvas.height == 0 {
            return Err(invalid_configuration(
                "canvas_height",
                &canvas.height,
                &"must be positive",
            ));
        }
        if columns == 0 {
            return Err(invalid_configuration(
                "images_per_row",
                &columns,
                &"must be positive",
            ));
        }
        if source_cell.width == 0 || source_cell.height == 0 {
            return Err(invalid_configuration(
                "cell_size",
                &format!("{}x{}", source_cell.width, source_cell.height),
                &"must be positive",
            ));
        }

        let row_span = u64::from(columns) * u64::from(source_cell.width);
        let width = scale_length(source_cell.width, canvas.width, row_span);
        let height = scale_length(source_cell.height, canvas.width, row_span);

        if width == 0 || height == 0 {
            return Err(invalid_configuration(
                "cell_size",
                &format!("{}x{}", source_cell.width, source_cell.height),
                &format!(
                    "scale factor {:.4} yields a {width}x{height} cell",
                    canvas.width as f64 / row_span as f64
                ),
            ));
        }

        let rows = canvas.height / height;
        if rows == 0 {
            return Err(invalid_configuration(
                "canvas_height",
                &canvas.height,
                &format!("shorter than one scaled cell ({height}px)"),
            ));
        }

        let plan = Self {
            canvas,
            cell: Dimensions::new(width, height),
            columns,
            rows,
            slots: columns as usize * rows as usize,
        };

        tracing::debug!(
            cell_width = width,
            cell_height = height,
            columns,
            rows,
            slots = plan.slots,
            "layout planned"
        );

        Ok(plan)
    }

    /// Canvas size the plan was computed for
    pub const fn canvas(&self) -> Dimensions {
        self.canvas
    }

    /// Cell size after scaling
    pub const fn cell(&self) -> Dimensions {
        self.cell
    }

    /// Number of cells per row
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of full rows that fit on the canvas
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total cell capacity of one page
    pub const fn slots_per_page(&self) -> usize {
        self.slots
    }

    /// Ratio between scaled and source cell width
    pub fn scale_factor(&self, source_cell: Dimensions) -> f64 {
        f64::from(self.canvas.width) / (f64::from(self.columns) * f64::from(source_cell.width))
    }

    /// Pixel origin of a row-major slot, or `None` past the page capacity
    pub const fn slot_origin(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.slots {
            return None;
        }
        let row = (index / self.columns as usize) as u32;
        let col = (index % self.columns as usize) as u32;
        Some((col * self.cell.width, row * self.cell.height))
    }
}

/// Plan a page grid from raw dimensions
///
/// # Errors
///
/// Returns `InvalidConfiguration` under the same conditions as [`LayoutPlan::compute`]
pub fn plan(
    canvas_width: u32,
    canvas_height: u32,
    cell_width: u32,
    cell_height: u32,
    columns: u32,
) -> Result<LayoutPlan> {
    LayoutPlan::compute(
        Dimensions::new(canvas_width, canvas_height),
        Dimensions::new(cell_width, cell_height),
        columns,
    )
}

// floor(length * canvas_width / row_span) without float rounding drift
fn scale_length(length: u32, canvas_width: u32, row_span: u64) -> u32 {
    let scaled = u64::from(length) * u64::from(canvas_width) / row_span;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}
