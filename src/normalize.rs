//! Shape-to-path conversion
//!
//! Rewrites every supported primitive into a fragment of SVG path
//! mini-language. Fragments concatenate left-to-right in document order with
//! no separators; the path grammar is self-delimiting by command letters.
//! Coordinates pass through in the icon's native space, untransformed; the
//! transform pipeline normalizes them afterwards.

use crate::error::ConvertError;
use crate::report::Reporter;
use crate::shape::{AttrMap, ShapeNode};

/// Convert one shape node into its path fragment.
///
/// Total over the shape enum except for one condition: a rounded rectangle
/// whose `rx` and `ry` differ, which is the only unsupported geometry.
/// Missing or malformed numeric attributes produce NaN coordinates; the
/// fragment then fails path parsing downstream and the icon falls back to
/// its raw path text instead of panicking here.
pub fn to_path_fragment(
    node: &ShapeNode,
    icon: &str,
    reporter: &mut dyn Reporter,
) -> Result<String, ConvertError> {
    match node {
        ShapeNode::Path(attrs) => Ok(attrs.get("d").cloned().unwrap_or_default()),
        ShapeNode::Line(attrs) => {
            let (x1, y1) = (raw(attrs, "x1"), raw(attrs, "y1"));
            let (x2, y2) = (raw(attrs, "x2"), raw(attrs, "y2"));
            Ok(format!("M{x1},{y1}L{x2},{y2}"))
        }
        ShapeNode::Polyline(attrs) | ShapeNode::Polygon(attrs) => {
            Ok(convert_points(raw(attrs, "points")))
        }
        ShapeNode::Circle(attrs) | ShapeNode::Ellipse(attrs) => {
            let cx = num(attrs, "cx");
            let cy = num(attrs, "cy");
            // A plain circle's r stands in for both radii.
            let (rx, ry) = if attrs.get("r").is_some_and(|v| !v.is_empty()) {
                (num(attrs, "r"), num(attrs, "r"))
            } else {
                (num(attrs, "rx"), num(attrs, "ry"))
            };
            Ok(format!(
                "M{},{}a{},{},0,1,0,{},0a{},{},0,1,0,{},0",
                cx - rx,
                cy,
                rx,
                ry,
                rx * 2.0,
                rx,
                ry,
                -rx * 2.0
            ))
        }
        ShapeNode::Rect(attrs) => Ok(convert_rect(
            num(attrs, "x"),
            num(attrs, "y"),
            num(attrs, "width"),
            num(attrs, "height"),
        )),
        ShapeNode::RoundRect(attrs) => {
            let rx = attrs.get("rx").filter(|v| !v.is_empty());
            let ry = attrs.get("ry").filter(|v| !v.is_empty());
            let r = match (rx, ry) {
                (Some(rx), Some(ry)) => {
                    let (rx, ry) = (parse_num(rx), parse_num(ry));
                    if rx != ry && !(rx.is_nan() && ry.is_nan()) {
                        return Err(ConvertError::UnsupportedShape { rx, ry });
                    }
                    rx
                }
                (Some(r), None) | (None, Some(r)) => parse_num(r),
                // The reader only builds RoundRect when a radius is present.
                (None, None) => f64::NAN,
            };
            Ok(convert_round_rect(
                num(attrs, "x"),
                num(attrs, "y"),
                num(attrs, "width"),
                num(attrs, "height"),
                r,
            ))
        }
        ShapeNode::Group(children) => {
            let mut path = String::new();
            for child in children {
                path.push_str(&to_path_fragment(child, icon, reporter)?);
            }
            Ok(path)
        }
        ShapeNode::Ignored => Ok(String::new()),
        ShapeNode::Unknown(tag) => {
            reporter.warn(icon, &format!("unknown tag found: {tag}"));
            Ok(String::new())
        }
    }
}

/// Whitespace-separated coordinate pairs: `M` for the first, `L` after.
fn convert_points(points: &str) -> String {
    let mut path = String::new();
    for (i, pair) in points.split_whitespace().collect::<Vec<_>>().chunks(2).enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let x = pair[0];
        let y = pair.get(1).copied().unwrap_or("NaN");
        path.push_str(&format!("{command}{x},{y}"));
    }
    path
}

fn convert_rect(x: f64, y: f64, width: f64, height: f64) -> String {
    format!("M{x},{y}l{width},0l0,{height}l{},0l0,{}", -width, -height)
}

/// Closed rounded rectangle, clockwise from the top-left corner inset.
///
/// Each corner is a single quadratic curve, not a true circular arc.
/// Consuming icon sheets were authored against this approximation, so it is
/// kept as is.
fn convert_round_rect(x: f64, y: f64, width: f64, height: f64, r: f64) -> String {
    let mut path = String::new();
    path.push_str(&format!("M{},{}", x, y + r));
    path.push_str(&format!("q0,{},{},{}", -r, r, -r)); // top-left
    path.push_str(&format!("l{},0", width - r * 2.0));
    path.push_str(&format!("q{},0,{},{}", r, r, r)); // top-right
    path.push_str(&format!("l0,{}", height - r * 2.0));
    path.push_str(&format!("q0,{},{},{}", r, -r, r)); // bottom-right
    path.push_str(&format!("l{},0", -(width - r * 2.0)));
    path.push_str(&format!("q{},0,{},{}", -r, -r, -r)); // bottom-left
    path.push_str(&format!("l0,{}", -(height - r * 2.0)));
    path
}

fn raw<'a>(attrs: &'a AttrMap, name: &str) -> &'a str {
    attrs.get(name).map(String::as_str).unwrap_or("")
}

fn num(attrs: &AttrMap, name: &str) -> f64 {
    attrs.get(name).map_or(f64::NAN, |v| parse_num(v))
}

fn parse_num(value: &str) -> f64 {
    value.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathData;
    use crate::report::MemoryReporter;
    use crate::shape::AttrMap;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> AttrMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn fragment(node: &ShapeNode) -> String {
        let mut reporter = MemoryReporter::new();
        to_path_fragment(node, "test", &mut reporter).unwrap()
    }

    #[test]
    fn test_path_passes_through_verbatim() {
        let node = ShapeNode::Path(attrs(&[("d", "M1 2 L3 4z")]));
        assert_eq!(fragment(&node), "M1 2 L3 4z");
    }

    #[test]
    fn test_line() {
        let node = ShapeNode::Line(attrs(&[("x1", "1"), ("y1", "2"), ("x2", "3"), ("y2", "4")]));
        assert_eq!(fragment(&node), "M1,2L3,4");
    }

    #[test]
    fn test_polyline_and_polygon() {
        let node = ShapeNode::Polyline(attrs(&[("points", "0 0 4 0 4 4")]));
        assert_eq!(fragment(&node), "M0,0L4,0L4,4");

        let node = ShapeNode::Polygon(attrs(&[("points", "0 0 4 0 4 4")]));
        assert_eq!(fragment(&node), "M0,0L4,0L4,4");
    }

    #[test]
    fn test_circle_is_two_mirrored_arcs() {
        let node = ShapeNode::Circle(attrs(&[("cx", "12"), ("cy", "12"), ("r", "10")]));
        assert_eq!(fragment(&node), "M2,12a10,10,0,1,0,20,0a10,10,0,1,0,-20,0");
    }

    #[test]
    fn test_ellipse_uses_both_radii() {
        let node = ShapeNode::Ellipse(attrs(&[("cx", "6"), ("cy", "4"), ("rx", "3"), ("ry", "2")]));
        assert_eq!(fragment(&node), "M3,4a3,2,0,1,0,6,0a3,2,0,1,0,-6,0");
    }

    #[test]
    fn test_rect_is_a_closed_quad() {
        let node = ShapeNode::Rect(attrs(&[
            ("x", "1"),
            ("y", "2"),
            ("width", "10"),
            ("height", "5"),
        ]));
        assert_eq!(fragment(&node), "M1,2l10,0l0,5l-10,0l0,-5");
    }

    #[test]
    fn test_round_rect_has_four_edges_and_four_corners() {
        let node = ShapeNode::RoundRect(attrs(&[
            ("x", "0"),
            ("y", "0"),
            ("width", "10"),
            ("height", "10"),
            ("rx", "2"),
            ("ry", "2"),
        ]));
        let d = fragment(&node);
        assert_eq!(d.matches('q').count(), 4);
        assert_eq!(d.matches('l').count(), 4);
        assert!(d.starts_with("M0,2"));
        assert_eq!(d, "M0,2q0,-2,2,-2l6,0q2,0,2,2l0,6q0,2,-2,2l-6,0q-2,0,-2,-2l0,-6");
    }

    #[test]
    fn test_round_rect_with_unequal_radii_is_unsupported() {
        let node = ShapeNode::RoundRect(attrs(&[
            ("x", "0"),
            ("y", "0"),
            ("width", "10"),
            ("height", "10"),
            ("rx", "2"),
            ("ry", "3"),
        ]));
        let mut reporter = MemoryReporter::new();
        let result = to_path_fragment(&node, "test", &mut reporter);
        assert!(matches!(
            result,
            Err(ConvertError::UnsupportedShape { rx, ry }) if rx == 2.0 && ry == 3.0
        ));
    }

    #[test]
    fn test_round_rect_single_radius_attribute() {
        let with_ry_only = ShapeNode::RoundRect(attrs(&[
            ("x", "0"),
            ("y", "0"),
            ("width", "10"),
            ("height", "10"),
            ("ry", "2"),
        ]));
        let with_rx_only = ShapeNode::RoundRect(attrs(&[
            ("x", "0"),
            ("y", "0"),
            ("width", "10"),
            ("height", "10"),
            ("rx", "2"),
        ]));
        assert_eq!(fragment(&with_ry_only), fragment(&with_rx_only));
    }

    #[test]
    fn test_group_concatenates_children_in_order() {
        let node = ShapeNode::Group(vec![
            ShapeNode::Line(attrs(&[("x1", "0"), ("y1", "0"), ("x2", "1"), ("y2", "1")])),
            ShapeNode::Path(attrs(&[("d", "M5,5")])),
        ]);
        assert_eq!(fragment(&node), "M0,0L1,1M5,5");
    }

    #[test]
    fn test_unknown_tag_is_empty_and_reported() {
        let mut reporter = MemoryReporter::new();
        let node = ShapeNode::Unknown("foreignObject".to_string());
        let d = to_path_fragment(&node, "test", &mut reporter).unwrap();
        assert_eq!(d, "");
        assert_eq!(reporter.warnings.len(), 1);
        assert!(reporter.warnings[0].contains("foreignObject"));
    }

    #[test]
    fn test_ignored_tags_are_empty_and_silent() {
        let mut reporter = MemoryReporter::new();
        let d = to_path_fragment(&ShapeNode::Ignored, "test", &mut reporter).unwrap();
        assert_eq!(d, "");
        assert!(reporter.warnings.is_empty());
    }

    #[test]
    fn test_every_shape_fragment_starts_with_a_move() {
        let shapes = vec![
            ShapeNode::Line(attrs(&[("x1", "0"), ("y1", "0"), ("x2", "1"), ("y2", "1")])),
            ShapeNode::Polyline(attrs(&[("points", "0 0 1 1")])),
            ShapeNode::Polygon(attrs(&[("points", "0 0 1 1")])),
            ShapeNode::Circle(attrs(&[("cx", "5"), ("cy", "5"), ("r", "2")])),
            ShapeNode::Ellipse(attrs(&[("cx", "5"), ("cy", "5"), ("rx", "2"), ("ry", "1")])),
            ShapeNode::Rect(attrs(&[("x", "0"), ("y", "0"), ("width", "2"), ("height", "2")])),
            ShapeNode::RoundRect(attrs(&[
                ("x", "0"),
                ("y", "0"),
                ("width", "4"),
                ("height", "4"),
                ("rx", "1"),
            ])),
        ];
        for shape in &shapes {
            assert!(
                fragment(shape).starts_with('M'),
                "fragment for {shape:?} must begin with a move"
            );
        }
    }

    // With the radius at zero every corner curve degenerates to a point, so
    // a rounded rect describes the same quadrilateral as a plain rect.
    #[test]
    fn test_round_rect_with_zero_radius_matches_plain_rect() {
        let plain = fragment(&ShapeNode::Rect(attrs(&[
            ("x", "0"),
            ("y", "0"),
            ("width", "10"),
            ("height", "10"),
        ])));
        let rounded = fragment(&ShapeNode::RoundRect(attrs(&[
            ("x", "0"),
            ("y", "0"),
            ("width", "10"),
            ("height", "10"),
            ("rx", "0.0"),
        ])));
        assert_eq!(corners(&plain), corners(&rounded));
    }

    /// Distinct segment endpoints of a path, in draw order.
    fn corners(d: &str) -> Vec<(f64, f64)> {
        use svgtypes::PathSegment;

        let path = PathData::parse(d).unwrap().absolutize();
        let mut points: Vec<(f64, f64)> = Vec::new();
        for seg in path.segments() {
            let end = match *seg {
                PathSegment::MoveTo { x, y, .. }
                | PathSegment::LineTo { x, y, .. }
                | PathSegment::Quadratic { x, y, .. } => (x, y),
                _ => continue,
            };
            let degenerate = points
                .last()
                .is_some_and(|&(px, py)| (px - end.0).abs() < 1e-9 && (py - end.1).abs() < 1e-9);
            if !degenerate {
                points.push(end);
            }
        }
        points
    }
}
