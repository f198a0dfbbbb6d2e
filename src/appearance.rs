//! Stroke/fill appearance classification
//!
//! Icon sets in this domain are authored with one dominant visual technique,
//! either stroke-only or fill-only, so the first shape encountered decides
//! the whole icon. The requested mode and the resolved result are separate
//! types: [`AppearanceMode::Automatic`] is a pre-resolution input state and
//! can never reach the emission stage.

use serde::Deserialize;

use crate::report::Reporter;
use crate::shape::ShapeNode;

/// Requested appearance, as configured per set or per icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    Stroke,
    Fill,
    /// Classify from the icon's shapes at conversion time.
    #[default]
    Automatic,
}

/// Resolved appearance of an emitted icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Stroke,
    Fill,
}

impl AppearanceMode {
    /// Resolve to a concrete appearance, classifying the shape tree when
    /// automatic.
    ///
    /// When no shape decides (empty icon, or only unsupported tags), falls
    /// back to stroke with a diagnostic.
    pub fn resolve(
        self,
        shapes: &[ShapeNode],
        icon: &str,
        reporter: &mut dyn Reporter,
    ) -> Appearance {
        match self {
            AppearanceMode::Stroke => Appearance::Stroke,
            AppearanceMode::Fill => Appearance::Fill,
            AppearanceMode::Automatic => match shapes.iter().find_map(classify) {
                Some(appearance) => appearance,
                None => {
                    reporter.warn(
                        icon,
                        "could not determine the icon appearance, using stroke as default",
                    );
                    Appearance::Stroke
                }
            },
        }
    }
}

/// Classify one node, depth-first.
///
/// A leaf shape decides immediately from its `fill` attribute: present, and
/// neither empty nor the literal `"none"`, means fill. A group yields the
/// first decision among its children. Anything else yields `None` so the
/// search continues with the next sibling.
pub fn classify(node: &ShapeNode) -> Option<Appearance> {
    match node {
        ShapeNode::Path(attrs)
        | ShapeNode::Line(attrs)
        | ShapeNode::Polyline(attrs)
        | ShapeNode::Polygon(attrs)
        | ShapeNode::Circle(attrs)
        | ShapeNode::Ellipse(attrs)
        | ShapeNode::Rect(attrs)
        | ShapeNode::RoundRect(attrs) => match attrs.get("fill") {
            Some(fill) if !fill.is_empty() && fill != "none" => Some(Appearance::Fill),
            _ => Some(Appearance::Stroke),
        },
        ShapeNode::Group(children) => children.iter().find_map(classify),
        ShapeNode::Ignored | ShapeNode::Unknown(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;
    use crate::shape::AttrMap;

    fn attrs(pairs: &[(&str, &str)]) -> AttrMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_filled_path_classifies_as_fill() {
        let node = ShapeNode::Path(attrs(&[("fill", "red")]));
        assert_eq!(classify(&node), Some(Appearance::Fill));
    }

    #[test]
    fn test_fill_none_classifies_as_stroke() {
        let node = ShapeNode::Path(attrs(&[("fill", "none")]));
        assert_eq!(classify(&node), Some(Appearance::Stroke));
    }

    #[test]
    fn test_missing_fill_classifies_as_stroke() {
        let node = ShapeNode::Line(attrs(&[("x1", "0")]));
        assert_eq!(classify(&node), Some(Appearance::Stroke));
    }

    #[test]
    fn test_group_takes_first_descendant_decision() {
        let node = ShapeNode::Group(vec![
            ShapeNode::Unknown("foreignObject".to_string()),
            ShapeNode::Group(vec![ShapeNode::Circle(attrs(&[("fill", "#fff")]))]),
            ShapeNode::Rect(attrs(&[("fill", "none")])),
        ]);
        assert_eq!(classify(&node), Some(Appearance::Fill));
    }

    #[test]
    fn test_empty_group_yields_none() {
        assert_eq!(classify(&ShapeNode::Group(vec![])), None);
    }

    #[test]
    fn test_resolve_explicit_mode_skips_classification() {
        let mut reporter = MemoryReporter::new();
        let shapes = vec![ShapeNode::Path(attrs(&[("fill", "red")]))];
        let resolved = AppearanceMode::Stroke.resolve(&shapes, "pin", &mut reporter);
        assert_eq!(resolved, Appearance::Stroke);
        assert!(reporter.warnings.is_empty());
    }

    #[test]
    fn test_resolve_automatic_defaults_to_stroke_with_warning() {
        let mut reporter = MemoryReporter::new();
        let resolved = AppearanceMode::Automatic.resolve(&[], "blank", &mut reporter);
        assert_eq!(resolved, Appearance::Stroke);
        assert_eq!(reporter.warnings.len(), 1);
        assert!(reporter.warnings[0].contains("appearance"));
    }
}
