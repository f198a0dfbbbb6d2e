//! Shape tree reading
//!
//! Parses raw SVG markup with roxmltree, locates the root `<svg>` element,
//! and builds the owned [`IconTree`] the rest of the pipeline works on. Tag
//! dispatch happens once, here; downstream code only ever matches on the
//! closed [`ShapeNode`] enum.

use std::str::FromStr;

use roxmltree::{Document, Node};
use svgtypes::ViewBox;

use crate::error::ConvertError;
use crate::report::Reporter;
use crate::shape::{AttrMap, IconTree, ShapeNode};

/// Parse icon markup into a shape tree.
///
/// Fails when the markup is not well-formed XML or the root element is not
/// `<svg>`. A `viewBox` attribute that does not parse is dropped with a
/// diagnostic, so the configured target size stands in for the native size.
pub fn read_icon(
    markup: &str,
    icon: &str,
    reporter: &mut dyn Reporter,
) -> Result<IconTree, ConvertError> {
    let doc = Document::parse(markup)?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(ConvertError::NotAnSvg);
    }

    let view_box = match root.attribute("viewBox") {
        Some(text) => match ViewBox::from_str(text) {
            Ok(vb) => Some(vb),
            Err(_) => {
                reporter.warn(icon, &format!("could not parse viewBox \"{text}\""));
                None
            }
        },
        None => None,
    };

    let shapes = root
        .children()
        .filter(Node::is_element)
        .map(build_node)
        .collect();

    Ok(IconTree { view_box, shapes })
}

fn build_node(node: Node) -> ShapeNode {
    match node.tag_name().name() {
        "path" => ShapeNode::Path(attributes(&node)),
        "line" => ShapeNode::Line(attributes(&node)),
        "polyline" => ShapeNode::Polyline(attributes(&node)),
        "polygon" => ShapeNode::Polygon(attributes(&node)),
        "circle" => ShapeNode::Circle(attributes(&node)),
        "ellipse" => ShapeNode::Ellipse(attributes(&node)),
        "rect" => {
            // An empty radius attribute counts as absent, same as no attribute.
            if has_attr(&node, "rx") || has_attr(&node, "ry") {
                ShapeNode::RoundRect(attributes(&node))
            } else {
                ShapeNode::Rect(attributes(&node))
            }
        }
        "g" => ShapeNode::Group(
            node.children()
                .filter(Node::is_element)
                .map(build_node)
                .collect(),
        ),
        "title" | "defs" => ShapeNode::Ignored,
        other => ShapeNode::Unknown(other.to_string()),
    }
}

fn attributes(node: &Node) -> AttrMap {
    node.attributes()
        .map(|a| (a.name().to_string(), a.value().to_string()))
        .collect()
}

fn has_attr(node: &Node, name: &str) -> bool {
    node.attribute(name).is_some_and(|v| !v.is_empty())
}
