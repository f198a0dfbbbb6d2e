//! Error types for icon conversion

use thiserror::Error;

/// Errors that abort the conversion of a single icon
///
/// None of these are fatal to a whole batch; the sheet driver reports the
/// error and moves on to the next icon.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Rounded rectangle carrying two different corner radii
    #[error("round rects with different corner radii are not supported (rx={rx}, ry={ry})")]
    UnsupportedShape { rx: f64, ry: f64 },

    /// The file content is not well-formed XML
    #[error("invalid markup: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Well-formed XML whose root element is not `<svg>`
    #[error("no <svg> root element found")]
    NotAnSvg,

    /// The output sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
