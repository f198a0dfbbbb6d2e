//! Path transform pipeline
//!
//! Takes the concatenated raw path of an icon and rewrites it into the
//! canonical viewport: absolute coordinates, translated by the padding,
//! scaled to the target size, rounded, and serialized compactly. The steps
//! are strictly ordered; padding is specified in the icon's original
//! coordinate space, so the translation must happen before the
//! size-normalizing scale or the margin would not come out uniform across
//! icons of differing native sizes.

use svgtypes::{PathParser, PathSegment};

use crate::report::Reporter;

/// Scale and translation parameters, derived once per icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    /// Visual margin in the icon's original coordinate units.
    pub padding: f64,
    /// Edge length of the canonical output viewport.
    pub target_size: f64,
    /// The icon's native size, from its view box or the target size.
    pub original_size: f64,
}

impl TransformParams {
    /// The single uniform scale factor applied after translation.
    pub fn scale_factor(&self) -> f64 {
        self.target_size / (self.original_size + self.padding * 2.0)
    }
}

/// Transform a raw path into canonical-viewport text.
///
/// When the raw path does not parse, the untransformed text is returned as a
/// best-effort fallback and a diagnostic names the parser's error; a broken
/// icon degrades instead of aborting the set.
pub fn transform(
    raw: &str,
    params: &TransformParams,
    icon: &str,
    reporter: &mut dyn Reporter,
) -> String {
    match PathData::parse(raw) {
        Ok(path) => path
            .absolutize()
            .translate(params.padding, params.padding)
            .scale(params.scale_factor())
            .round(1)
            .to_svg_d(),
        Err(err) => {
            reporter.warn(icon, &format!("could not parse path: {err}"));
            raw.to_string()
        }
    }
}

/// An owned, mutable path as a segment list.
///
/// The builder steps consume and return `self` so a whole transform chain
/// reads as one expression, in the order the steps must run.
#[derive(Debug, Clone, PartialEq)]
pub struct PathData(Vec<PathSegment>);

impl PathData {
    /// Parse path mini-language text into segments.
    pub fn parse(text: &str) -> Result<Self, svgtypes::Error> {
        let segments = PathParser::from(text).collect::<Result<Vec<_>, _>>()?;
        Ok(Self(segments))
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Rewrite every segment to absolute coordinates.
    pub fn absolutize(mut self) -> Self {
        let (mut x, mut y) = (0.0, 0.0);
        let (mut start_x, mut start_y) = (0.0, 0.0);
        for seg in &mut self.0 {
            match seg {
                PathSegment::MoveTo { abs, x: ex, y: ey } => {
                    if !*abs {
                        *ex += x;
                        *ey += y;
                        *abs = true;
                    }
                    x = *ex;
                    y = *ey;
                    start_x = x;
                    start_y = y;
                }
                PathSegment::LineTo { abs, x: ex, y: ey } => {
                    if !*abs {
                        *ex += x;
                        *ey += y;
                        *abs = true;
                    }
                    x = *ex;
                    y = *ey;
                }
                PathSegment::HorizontalLineTo { abs, x: ex } => {
                    if !*abs {
                        *ex += x;
                        *abs = true;
                    }
                    x = *ex;
                }
                PathSegment::VerticalLineTo { abs, y: ey } => {
                    if !*abs {
                        *ey += y;
                        *abs = true;
                    }
                    y = *ey;
                }
                PathSegment::CurveTo {
                    abs,
                    x1,
                    y1,
                    x2,
                    y2,
                    x: ex,
                    y: ey,
                } => {
                    if !*abs {
                        *x1 += x;
                        *y1 += y;
                        *x2 += x;
                        *y2 += y;
                        *ex += x;
                        *ey += y;
                        *abs = true;
                    }
                    x = *ex;
                    y = *ey;
                }
                PathSegment::SmoothCurveTo {
                    abs,
                    x2,
                    y2,
                    x: ex,
                    y: ey,
                } => {
                    if !*abs {
                        *x2 += x;
                        *y2 += y;
                        *ex += x;
                        *ey += y;
                        *abs = true;
                    }
                    x = *ex;
                    y = *ey;
                }
                PathSegment::Quadratic {
                    abs,
                    x1,
                    y1,
                    x: ex,
                    y: ey,
                } => {
                    if !*abs {
                        *x1 += x;
                        *y1 += y;
                        *ex += x;
                        *ey += y;
                        *abs = true;
                    }
                    x = *ex;
                    y = *ey;
                }
                PathSegment::SmoothQuadratic { abs, x: ex, y: ey } => {
                    if !*abs {
                        *ex += x;
                        *ey += y;
                        *abs = true;
                    }
                    x = *ex;
                    y = *ey;
                }
                PathSegment::EllipticalArc {
                    abs, x: ex, y: ey, ..
                } => {
                    if !*abs {
                        *ex += x;
                        *ey += y;
                        *abs = true;
                    }
                    x = *ex;
                    y = *ey;
                }
                PathSegment::ClosePath { abs } => {
                    *abs = true;
                    x = start_x;
                    y = start_y;
                }
            }
        }
        self
    }

    /// Translate every point by `(dx, dy)`.
    ///
    /// Relative segments are deltas and therefore translation-invariant;
    /// only absolute coordinates move.
    pub fn translate(mut self, dx: f64, dy: f64) -> Self {
        for seg in &mut self.0 {
            match seg {
                PathSegment::MoveTo { abs: true, x, y }
                | PathSegment::LineTo { abs: true, x, y }
                | PathSegment::SmoothQuadratic { abs: true, x, y }
                | PathSegment::EllipticalArc { abs: true, x, y, .. } => {
                    *x += dx;
                    *y += dy;
                }
                PathSegment::HorizontalLineTo { abs: true, x } => *x += dx,
                PathSegment::VerticalLineTo { abs: true, y } => *y += dy,
                PathSegment::CurveTo {
                    abs: true,
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    *x1 += dx;
                    *y1 += dy;
                    *x2 += dx;
                    *y2 += dy;
                    *x += dx;
                    *y += dy;
                }
                PathSegment::SmoothCurveTo {
                    abs: true,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    *x2 += dx;
                    *y2 += dy;
                    *x += dx;
                    *y += dy;
                }
                PathSegment::Quadratic {
                    abs: true,
                    x1,
                    y1,
                    x,
                    y,
                } => {
                    *x1 += dx;
                    *y1 += dy;
                    *x += dx;
                    *y += dy;
                }
                _ => {}
            }
        }
        self
    }

    /// Scale every coordinate uniformly, arc radii included.
    pub fn scale(mut self, factor: f64) -> Self {
        for seg in &mut self.0 {
            match seg {
                PathSegment::MoveTo { x, y, .. }
                | PathSegment::LineTo { x, y, .. }
                | PathSegment::SmoothQuadratic { x, y, .. } => {
                    *x *= factor;
                    *y *= factor;
                }
                PathSegment::HorizontalLineTo { x, .. } => *x *= factor,
                PathSegment::VerticalLineTo { y, .. } => *y *= factor,
                PathSegment::CurveTo {
                    x1, y1, x2, y2, x, y, ..
                } => {
                    *x1 *= factor;
                    *y1 *= factor;
                    *x2 *= factor;
                    *y2 *= factor;
                    *x *= factor;
                    *y *= factor;
                }
                PathSegment::SmoothCurveTo { x2, y2, x, y, .. } => {
                    *x2 *= factor;
                    *y2 *= factor;
                    *x *= factor;
                    *y *= factor;
                }
                PathSegment::Quadratic { x1, y1, x, y, .. } => {
                    *x1 *= factor;
                    *y1 *= factor;
                    *x *= factor;
                    *y *= factor;
                }
                PathSegment::EllipticalArc {
                    rx, ry, x, y, ..
                } => {
                    *rx *= factor;
                    *ry *= factor;
                    *x *= factor;
                    *y *= factor;
                }
                PathSegment::ClosePath { .. } => {}
            }
        }
        self
    }

    /// Round every numeric coordinate to `digits` decimal places.
    pub fn round(mut self, digits: i32) -> Self {
        let factor = 10f64.powi(digits);
        let round = |v: &mut f64| *v = (*v * factor).round() / factor;
        for seg in &mut self.0 {
            match seg {
                PathSegment::MoveTo { x, y, .. }
                | PathSegment::LineTo { x, y, .. }
                | PathSegment::SmoothQuadratic { x, y, .. } => {
                    round(x);
                    round(y);
                }
                PathSegment::HorizontalLineTo { x, .. } => round(x),
                PathSegment::VerticalLineTo { y, .. } => round(y),
                PathSegment::CurveTo {
                    x1, y1, x2, y2, x, y, ..
                } => {
                    round(x1);
                    round(y1);
                    round(x2);
                    round(y2);
                    round(x);
                    round(y);
                }
                PathSegment::SmoothCurveTo { x2, y2, x, y, .. } => {
                    round(x2);
                    round(y2);
                    round(x);
                    round(y);
                }
                PathSegment::Quadratic { x1, y1, x, y, .. } => {
                    round(x1);
                    round(y1);
                    round(x);
                    round(y);
                }
                PathSegment::EllipticalArc {
                    rx,
                    ry,
                    x_axis_rotation,
                    x,
                    y,
                    ..
                } => {
                    round(rx);
                    round(ry);
                    round(x_axis_rotation);
                    round(x);
                    round(y);
                }
                PathSegment::ClosePath { .. } => {}
            }
        }
        self
    }

    /// Serialize to compact path text.
    ///
    /// A repeated command letter (other than a move) is elided, separators
    /// are commas, and no separator precedes a negative number since its
    /// minus sign already delimits it.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        let mut prev_cmd = None;
        let mut after_number = false;
        for seg in &self.0 {
            let cmd = command_letter(seg);
            let elide = prev_cmd == Some(cmd) && !matches!(cmd, 'M' | 'm');
            if !elide {
                d.push(cmd);
                after_number = false;
            }
            for value in segment_args(seg) {
                write_coord(&mut d, &mut after_number, value);
            }
            prev_cmd = Some(cmd);
        }
        d
    }
}

fn command_letter(seg: &PathSegment) -> char {
    let (letter, abs) = match seg {
        PathSegment::MoveTo { abs, .. } => ('m', abs),
        PathSegment::LineTo { abs, .. } => ('l', abs),
        PathSegment::HorizontalLineTo { abs, .. } => ('h', abs),
        PathSegment::VerticalLineTo { abs, .. } => ('v', abs),
        PathSegment::CurveTo { abs, .. } => ('c', abs),
        PathSegment::SmoothCurveTo { abs, .. } => ('s', abs),
        PathSegment::Quadratic { abs, .. } => ('q', abs),
        PathSegment::SmoothQuadratic { abs, .. } => ('t', abs),
        PathSegment::EllipticalArc { abs, .. } => ('a', abs),
        PathSegment::ClosePath { abs } => ('z', abs),
    };
    if *abs {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}

fn segment_args(seg: &PathSegment) -> Vec<f64> {
    match *seg {
        PathSegment::MoveTo { x, y, .. }
        | PathSegment::LineTo { x, y, .. }
        | PathSegment::SmoothQuadratic { x, y, .. } => vec![x, y],
        PathSegment::HorizontalLineTo { x, .. } => vec![x],
        PathSegment::VerticalLineTo { y, .. } => vec![y],
        PathSegment::CurveTo {
            x1, y1, x2, y2, x, y, ..
        } => vec![x1, y1, x2, y2, x, y],
        PathSegment::SmoothCurveTo { x2, y2, x, y, .. } => vec![x2, y2, x, y],
        PathSegment::Quadratic { x1, y1, x, y, .. } => vec![x1, y1, x, y],
        PathSegment::EllipticalArc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            x,
            y,
            ..
        } => vec![
            rx,
            ry,
            x_axis_rotation,
            if large_arc { 1.0 } else { 0.0 },
            if sweep { 1.0 } else { 0.0 },
            x,
            y,
        ],
        PathSegment::ClosePath { .. } => vec![],
    }
}

fn write_coord(d: &mut String, after_number: &mut bool, value: f64) {
    // -0.0 normalizes to 0
    let value = if value == 0.0 { 0.0 } else { value };
    if *after_number && value >= 0.0 {
        d.push(',');
    }
    d.push_str(&value.to_string());
    *after_number = true;
}
