//! Page file naming and PNG export

use crate::composition::Page;
use crate::generation::{PageId, PageSink, PageStream};
use crate::io::configuration::PAGE_SUFFIX;
use crate::io::error::{MixerError, Result};
use crate::io::progress::ProgressManager;
use std::path::{Path, PathBuf};

/// Output path of a page derived from the base output path
///
/// Category pages get `_page_A` / `_page_B`, plus a 1-based index when the
/// stream has more than one page. A single mixed page keeps the base name;
/// several mixed pages become `_page_1`, `_page_2`, ...
pub fn page_path(base: &Path, id: PageId) -> PathBuf {
    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let extension = base
        .extension()
        .map_or_else(|| "png".into(), |ext| ext.to_string_lossy());

    let label = match id.stream {
        PageStream::Mixed => String::new(),
        PageStream::Category(category) => format!("_{}", category.suffix()),
    };
    let name = match (id.stream, id.of) {
        (PageStream::Mixed, 1) => format!("{stem}.{extension}"),
        (_, 1) => format!("{stem}{PAGE_SUFFIX}{label}.{extension}"),
        _ => format!("{stem}{PAGE_SUFFIX}{label}_{}.{extension}", id.number),
    };

    if let Some(parent) = base.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Save a finished page as an RGB image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_page(page: &Page, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MixerError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    page.bitmap()
        .save(path)
        .map_err(|e| MixerError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

/// Page sink writing every page next to the base output path
pub struct FileSink {
    base: PathBuf,
    progress: Option<ProgressManager>,
    written: Vec<PathBuf>,
}

impl FileSink {
    /// Sink writing pages derived from `base`, with optional progress bars
    pub fn new(base: impl Into<PathBuf>, progress: Option<ProgressManager>) -> Self {
        Self {
            base: base.into(),
            progress,
            written: Vec::new(),
        }
    }

    /// Files written so far, in emission order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Clear progress displays
    pub fn finish(&self) {
        if let Some(ref pm) = self.progress {
            pm.finish();
        }
    }
}

impl PageSink for FileSink {
    fn stream_started(&mut self, stream: PageStream, slots: usize) {
        if let Some(ref mut pm) = self.progress {
            pm.start_stream(stream, slots);
        }
    }

    fn slot_placed(&mut self, stream: PageStream) {
        if let Some(ref pm) = self.progress {
            pm.slot_placed(stream);
        }
    }

    fn emit(&mut self, id: PageId, page: Page) -> Result<()> {
        let path = page_path(&self.base, id);
        save_page(&page, &path)?;
        tracing::info!(path = %path.display(), "page saved");
        self.written.push(path);
        Ok(())
    }
}
