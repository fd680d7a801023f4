//! LabelRegistry - Drawers sharing one set of physical dimensions.

use crate::assemble::Converter;
use crate::config::RegistryConfig;
use crate::error::{LabelError, Result, ToolError};
use crate::generator::render_page;
use crate::layout::{chunk_keys, PageLayout};
use crate::model::DrawerEntry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// A converted page produced by [`LabelRegistry::finalize`].
#[derive(Debug)]
pub struct PageFile {
    /// Registry that produced the page.
    pub registry: String,
    /// Page index within the registry.
    pub index: usize,
    /// Target PDF path.
    pub path: PathBuf,
    /// Keys drawn on the page, top to bottom.
    pub keys: Vec<String>,
    /// Outcome of the SVG to PDF conversion.
    pub conversion: std::result::Result<(), ToolError>,
}

impl PageFile {
    /// Check if the PDF was produced.
    pub fn is_converted(&self) -> bool {
        self.conversion.is_ok()
    }
}

/// Named collection of drawers with shared dimensions and page layout.
#[derive(Debug)]
pub struct LabelRegistry {
    config: RegistryConfig,
    table: HashMap<String, DrawerEntry>,
    /// Registration order, for listing.
    order: Vec<String>,
    pending: Vec<String>,
}

impl LabelRegistry {
    /// Create an empty registry.
    ///
    /// Fails if a dimension is not positive or the page holds no drawers.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let invalid = |message: String| LabelError::InvalidRegistry {
            name: config.name.clone(),
            message,
        };

        for (field, value) in [
            ("length", config.length),
            ("width", config.width),
            ("height", config.height),
            ("font_height", config.font_height),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(invalid(format!("{} must be positive, got {}", field, value)));
            }
        }

        if config.page_capacity == 0 {
            return Err(invalid("page_capacity must be at least 1".to_string()));
        }

        Ok(Self {
            config,
            table: HashMap::new(),
            order: Vec::new(),
            pending: Vec::new(),
        })
    }

    /// Registry name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Registry dimensions and page parameters.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Spacing between front lines.
    pub fn inter_line(&self) -> f64 {
        self.config.inter_line()
    }

    /// Insert a drawer. An existing drawer with the same key is replaced.
    pub fn register(&mut self, entry: DrawerEntry) {
        let key = entry.key.clone();
        if self.table.insert(key.clone(), entry).is_some() {
            debug!("{}: replaced drawer '{}'", self.config.name, key);
        } else {
            self.order.push(key);
        }
    }

    /// Insert a drawer from its parts.
    pub fn register_lines(&mut self, key: &str, front: &[&str], bottom: &[&str]) {
        let to_vec = |lines: &[&str]| lines.iter().map(|s| s.to_string()).collect();
        self.register(DrawerEntry {
            key: key.to_string(),
            front: to_vec(front),
            bottom: to_vec(bottom),
        });
    }

    /// Queue `key` for printing. Returns false if the key is unknown.
    pub fn request(&mut self, key: &str) -> bool {
        if self.table.contains_key(key) {
            self.pending.push(key.to_string());
            true
        } else {
            false
        }
    }

    /// Look up a drawer by key.
    pub fn get(&self, key: &str) -> Option<&DrawerEntry> {
        self.table.get(key)
    }

    /// Check if `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Drawers in registration order.
    pub fn drawers(&self) -> impl Iterator<Item = &DrawerEntry> {
        self.order.iter().filter_map(|k| self.table.get(k))
    }

    /// Number of registered drawers.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the registry has no drawers.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Keys queued for printing.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    /// Pending keys split into pages.
    pub fn chunks(&self) -> Vec<Vec<String>> {
        chunk_keys(&self.pending, self.config.page_capacity)
    }

    /// Lay out the pending drawers page by page without writing anything.
    pub fn compose_pages(&self) -> Vec<PageLayout> {
        self.chunks()
            .iter()
            .map(|chunk| {
                PageLayout::compose(
                    &self.config,
                    chunk.iter().filter_map(|key| self.table.get(key)),
                )
            })
            .collect()
    }

    /// SVG path of page `index`.
    pub fn svg_path(&self, work_dir: &Path, index: usize) -> PathBuf {
        work_dir.join(format!("{}{}.svg", self.config.name, index))
    }

    /// PDF path of page `index`.
    pub fn pdf_path(&self, work_dir: &Path, index: usize) -> PathBuf {
        work_dir.join(format!("{}{}.pdf", self.config.name, index))
    }

    /// Render every pending drawer and convert each page to PDF.
    ///
    /// The pending queue is drained. Conversion failures are recorded in the
    /// returned pages and do not stop the remaining pages; filesystem errors
    /// abort after removing the PDFs this call already produced.
    /// Intermediate SVG files are removed whether or not conversion
    /// succeeded.
    pub fn finalize(&mut self, work_dir: &Path, converter: &dyn Converter) -> Result<Vec<PageFile>> {
        let pages = self.compose_pages();
        let chunks = self.chunks();
        self.pending.clear();

        let mut files = Vec::with_capacity(pages.len());
        for (index, (page, keys)) in pages.iter().zip(chunks).enumerate() {
            match self.finalize_page(work_dir, converter, index, page, keys) {
                Ok(file) => files.push(file),
                Err(e) => {
                    discard_pages(&files);
                    return Err(e);
                }
            }
        }

        Ok(files)
    }

    fn finalize_page(
        &self,
        work_dir: &Path,
        converter: &dyn Converter,
        index: usize,
        page: &PageLayout,
        keys: Vec<String>,
    ) -> Result<PageFile> {
        let svg_path = self.svg_path(work_dir, index);
        let pdf_path = self.pdf_path(work_dir, index);

        render_page(page).save(&svg_path)?;

        let conversion = converter.convert(&svg_path, &pdf_path);
        match &conversion {
            Ok(()) => info!("Generated file: '{}'", pdf_path.display()),
            Err(e) => error!("{}", e),
        }

        let file = PageFile {
            registry: self.config.name.clone(),
            index,
            path: pdf_path,
            keys,
            conversion,
        };

        if let Err(e) = std::fs::remove_file(&svg_path) {
            discard_pages(std::slice::from_ref(&file));
            return Err(e.into());
        }

        Ok(file)
    }
}

/// Best-effort removal of the PDFs of converted pages.
pub fn discard_pages(pages: &[PageFile]) {
    for page in pages.iter().filter(|p| p.is_converted()) {
        match std::fs::remove_file(&page.path) {
            Ok(()) => debug!("Removed {}", page.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove {}: {}", page.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolErrorKind;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn config(capacity: usize) -> RegistryConfig {
        RegistryConfig {
            name: "Electronics".into(),
            length: 116.0,
            width: 49.0,
            height: 12.0,
            font_height: 4.0,
            front_rows: 2,
            page_capacity: capacity,
        }
    }

    fn registry(capacity: usize, n: usize) -> LabelRegistry {
        let mut reg = LabelRegistry::new(config(capacity)).unwrap();
        for i in 0..n {
            reg.register_lines(&format!("k{}", i), &["Line", "Part"], &[]);
        }
        reg
    }

    /// Records calls and writes a placeholder PDF.
    #[derive(Default)]
    struct FakeConverter {
        calls: RefCell<Vec<(PathBuf, PathBuf)>>,
        fail: bool,
    }

    impl Converter for FakeConverter {
        fn convert(&self, svg: &Path, pdf: &Path) -> std::result::Result<(), ToolError> {
            assert!(svg.exists(), "svg must exist during conversion");
            self.calls
                .borrow_mut()
                .push((svg.to_path_buf(), pdf.to_path_buf()));
            if self.fail {
                return Err(ToolError {
                    command: format!("fake {}", svg.display()),
                    kind: ToolErrorKind::ExitStatus {
                        status: "exit status: 1".into(),
                        stderr: String::new(),
                    },
                });
            }
            std::fs::write(pdf, b"%PDF-1.4").unwrap();
            Ok(())
        }
    }

    #[test]
    fn test_inter_line() {
        let reg = registry(5, 0);
        assert_eq!(reg.inter_line(), (12.0 + 4.0) / (2.0 + 1.0));
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        let err = LabelRegistry::new(config(0)).unwrap_err();
        match err {
            LabelError::InvalidRegistry { name, message } => {
                assert_eq!(name, "Electronics");
                assert!(message.contains("page_capacity"));
            }
            other => panic!("Expected InvalidRegistry, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        for bad in [0.0, -1.0, f64::NAN] {
            let cfg = RegistryConfig {
                width: bad,
                ..config(5)
            };
            assert!(matches!(
                LabelRegistry::new(cfg),
                Err(LabelError::InvalidRegistry { .. })
            ));
        }
        let cfg = RegistryConfig {
            font_height: 0.0,
            ..config(5)
        };
        assert!(LabelRegistry::new(cfg).is_err());
    }

    #[test]
    fn test_register_last_write_wins() {
        let mut reg = registry(5, 0);
        reg.register_lines("k", &["old"], &[]);
        reg.register_lines("k", &["new"], &["J:1"]);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("k").unwrap().front, vec!["new".to_string()]);
        assert_eq!(reg.drawers().count(), 1);
    }

    #[test]
    fn test_request_unknown_key() {
        let mut reg = registry(5, 2);
        assert!(!reg.request("missing"));
        assert!(reg.pending().is_empty());
        assert!(reg.request("k1"));
        assert!(reg.request("k1"));
        assert_eq!(reg.pending(), &["k1".to_string(), "k1".to_string()]);
    }

    #[test]
    fn test_chunks() {
        let mut reg = registry(5, 7);
        for i in 0..7 {
            reg.request(&format!("k{}", i));
        }
        let chunks = reg.chunks();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 5);
        assert_eq!(chunks[1], vec!["k5".to_string(), "k6".to_string()]);
    }

    #[test]
    fn test_compose_positions() {
        let mut reg = registry(2, 3);
        for key in ["k2", "k0", "k1"] {
            reg.request(key);
        }
        let pages = reg.compose_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].drawers[1].key, "k0");
        assert_eq!(pages[0].drawers[1].origin.y, 3.0 + 49.0);
        assert_eq!(pages[1].drawers[0].key, "k1");
        assert_eq!(pages[1].drawers[0].origin.y, 3.0);
    }

    #[test]
    fn test_finalize_empty_queue() {
        let dir = tempfile::tempdir().unwrap();
        let converter = FakeConverter::default();
        let mut reg = registry(5, 3);
        let pages = reg.finalize(dir.path(), &converter).unwrap();
        assert!(pages.is_empty());
        assert!(converter.calls.borrow().is_empty());
    }

    #[test]
    fn test_finalize_writes_pages() {
        let dir = tempfile::tempdir().unwrap();
        let converter = FakeConverter::default();
        let mut reg = registry(5, 7);
        for i in 0..7 {
            reg.request(&format!("k{}", i));
        }

        let pages = reg.finalize(dir.path(), &converter).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].path, dir.path().join("Electronics0.pdf"));
        assert_eq!(pages[1].path, dir.path().join("Electronics1.pdf"));
        assert_eq!(pages[1].keys, vec!["k5".to_string(), "k6".to_string()]);
        assert!(pages.iter().all(|p| p.is_converted() && p.path.exists()));
        assert!(!dir.path().join("Electronics0.svg").exists());
        assert!(!dir.path().join("Electronics1.svg").exists());
        assert!(reg.pending().is_empty());
    }

    #[test]
    fn test_finalize_conversion_failure_continues() {
        let dir = tempfile::tempdir().unwrap();
        let converter = FakeConverter {
            fail: true,
            ..Default::default()
        };
        let mut reg = registry(1, 2);
        reg.request("k0");
        reg.request("k1");

        let pages = reg.finalize(dir.path(), &converter).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(converter.calls.borrow().len(), 2);
        assert!(pages.iter().all(|p| !p.is_converted()));
        assert!(!dir.path().join("Electronics0.svg").exists());
        assert!(!dir.path().join("Electronics1.svg").exists());
    }

    /// Converts successfully but deletes the SVG, so its removal fails.
    struct SvgStealingConverter;

    impl Converter for SvgStealingConverter {
        fn convert(&self, svg: &Path, pdf: &Path) -> std::result::Result<(), ToolError> {
            std::fs::write(pdf, b"%PDF-1.4").unwrap();
            std::fs::remove_file(svg).unwrap();
            Ok(())
        }
    }

    #[test]
    fn test_finalize_io_error_removes_pages() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = registry(1, 2);
        reg.request("k0");
        reg.request("k1");

        let result = reg.finalize(dir.path(), &SvgStealingConverter);
        assert!(matches!(result, Err(LabelError::Io(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_finalize_missing_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        let converter = FakeConverter::default();
        let mut reg = registry(5, 1);
        reg.request("k0");
        let result = reg.finalize(&dir.path().join("nope"), &converter);
        assert!(result.is_err());
        assert!(converter.calls.borrow().is_empty());
    }
}
