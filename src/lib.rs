//! iconsheet - merge a directory of SVG icons into a single icon-sheet
//!
//! Every icon is normalized into a common coordinate box: its shapes are
//! rewritten into one absolute path, rescaled and re-centered into the
//! canonical viewport, and emitted as a stroked or filled path element.
//!
//! # Example
//!
//! ```rust
//! use iconsheet::{convert_icon, ConvertOptions, MemoryReporter};
//!
//! let markup = r#"<svg viewBox="0 0 24 24"><circle cx="12" cy="12" r="10"/></svg>"#;
//! let mut out = Vec::new();
//! let mut reporter = MemoryReporter::new();
//! convert_icon(markup, &mut out, &ConvertOptions::default(), "dot", &mut reporter).unwrap();
//!
//! let element = String::from_utf8(out).unwrap();
//! assert!(element.starts_with(r#"<path d="M2,12"#));
//! assert!(element.contains(r#"stroke="currentColor""#));
//! ```

pub mod appearance;
pub mod config;
pub mod emit;
pub mod error;
pub mod normalize;
pub mod path;
pub mod reader;
pub mod report;
pub mod shape;
pub mod sheet;

pub use appearance::{Appearance, AppearanceMode};
pub use config::{ConfigError, SheetConfig};
pub use error::ConvertError;
pub use path::TransformParams;
pub use report::{MemoryReporter, Reporter, StderrReporter};
pub use shape::{IconTree, ShapeNode};
pub use sheet::{generate_sheet, SheetError, SheetSummary};

use std::io::Write;

/// Options for converting a single icon
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Visual margin in the icon's original coordinate units
    pub padding: f64,
    /// Edge length of the canonical output viewport
    pub size: f64,
    /// Requested appearance
    pub appearance: AppearanceMode,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            padding: 0.0,
            size: 24.0,
            appearance: AppearanceMode::Automatic,
        }
    }
}

impl ConvertOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the target icon size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the requested appearance
    pub fn with_appearance(mut self, appearance: AppearanceMode) -> Self {
        self.appearance = appearance;
        self
    }
}

/// Convert one icon's markup and write its path element to `out`.
///
/// This is the whole per-icon pipeline: read the shape tree, resolve the
/// appearance, normalize every shape into one raw path, transform it into
/// the canonical viewport, and emit the path element. The caller wraps the
/// output in an identifying group element when merging icons into a sheet.
///
/// Non-fatal problems go to `reporter`; the returned error means the icon
/// as a whole failed and nothing was written.
pub fn convert_icon(
    markup: &str,
    out: &mut impl Write,
    options: &ConvertOptions,
    icon: &str,
    reporter: &mut dyn Reporter,
) -> Result<(), ConvertError> {
    let tree = reader::read_icon(markup, icon, reporter)?;
    let appearance = options.appearance.resolve(&tree.shapes, icon, reporter);

    let mut raw = String::new();
    for shape in &tree.shapes {
        raw.push_str(&normalize::to_path_fragment(shape, icon, reporter)?);
    }

    let params = TransformParams {
        padding: options.padding,
        target_size: options.size,
        original_size: tree.original_size(options.size),
    };
    let d = path::transform(&raw, &params, icon, reporter);

    emit::write_path_element(out, &d, appearance)?;
    Ok(())
}
