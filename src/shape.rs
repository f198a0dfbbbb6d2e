//! Shape tree data model
//!
//! An icon is read into an owned tree of [`ShapeNode`] values plus an
//! optional view box. The tree is built fresh per icon, never mutated, and
//! discarded when the icon's conversion finishes.

use std::collections::HashMap;

use svgtypes::ViewBox;

/// Raw attribute mapping of a leaf element, attribute name to value.
pub type AttrMap = HashMap<String, String>;

/// One node of an icon's shape tree.
///
/// Every supported primitive gets its own variant so conversion dispatch is
/// exhaustive; adding a primitive means the compiler points at every match
/// that needs a new arm. Unsupported tags are kept as [`ShapeNode::Unknown`]
/// so the normalizer can name them in diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeNode {
    /// `<path>`; the `d` attribute passes through verbatim.
    Path(AttrMap),
    /// `<line>` with x1/y1/x2/y2.
    Line(AttrMap),
    /// `<polyline>` with whitespace-separated coordinate pairs.
    Polyline(AttrMap),
    /// `<polygon>`; converted identically to a polyline.
    Polygon(AttrMap),
    /// `<circle>` with cx/cy/r.
    Circle(AttrMap),
    /// `<ellipse>` with cx/cy/rx/ry.
    Ellipse(AttrMap),
    /// `<rect>` without a corner radius.
    Rect(AttrMap),
    /// `<rect>` carrying an rx and/or ry attribute.
    RoundRect(AttrMap),
    /// `<g>`; children in document order, element nodes only.
    Group(Vec<ShapeNode>),
    /// Non-geometric tags that are expected and silently skipped (title, defs).
    Ignored,
    /// Any other tag; contributes nothing but is reported by name.
    Unknown(String),
}

/// A parsed icon: the root element's view box, if declared, and its child
/// shapes in document order.
#[derive(Debug, Clone)]
pub struct IconTree {
    /// Native coordinate rectangle the icon was authored against.
    pub view_box: Option<ViewBox>,
    /// Element children of the root `<svg>`.
    pub shapes: Vec<ShapeNode>,
}

impl IconTree {
    /// The icon's native size: the larger of the view box's dimensions, or
    /// `fallback` (the configured target size) when no view box is declared.
    pub fn original_size(&self, fallback: f64) -> f64 {
        match &self.view_box {
            Some(vb) => vb.w.max(vb.h),
            None => fallback,
        }
    }
}
