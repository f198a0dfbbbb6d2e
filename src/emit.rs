//! Output emission
//!
//! Writes the single `<path .../>` element an icon contributes to the sheet.
//! This is the only place paint attributes are decided; nothing upstream
//! embeds them.

use std::io::{self, Write};

use crate::appearance::Appearance;

/// Write one self-contained path element carrying the resolved appearance's
/// paint attributes.
pub fn write_path_element(
    out: &mut impl Write,
    d: &str,
    appearance: Appearance,
) -> io::Result<()> {
    match appearance {
        Appearance::Stroke => write!(
            out,
            r#"<path d="{d}" fill="none" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round"/>"#
        ),
        Appearance::Fill => write!(out, r#"<path d="{d}" fill="currentColor" stroke="none"/>"#),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(d: &str, appearance: Appearance) -> String {
        let mut out = Vec::new();
        write_path_element(&mut out, d, appearance).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_stroke_paint_attributes() {
        let element = emit("M0,0L1,1", Appearance::Stroke);
        assert_eq!(
            element,
            r#"<path d="M0,0L1,1" fill="none" stroke="currentColor" stroke-linecap="round" stroke-linejoin="round"/>"#
        );
    }

    #[test]
    fn test_fill_paint_attributes() {
        let element = emit("M0,0L1,1", Appearance::Fill);
        assert_eq!(
            element,
            r#"<path d="M0,0L1,1" fill="currentColor" stroke="none"/>"#
        );
    }
}
