//! SVG export.

use crate::geometry::union_bounds;
use crate::shapes::{Shape, ShapeStyle};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Serialize shapes as a standalone SVG document.
///
/// One element per shape, in draw order. Empty strokes are skipped. The
/// `viewBox` covers the content bounds padded by the widest stroke.
pub fn export_svg(shapes: &[Shape]) -> String {
    let mut out = String::new();
    match view_box(shapes) {
        Some((x, y, w, h)) => out.push_str(&format!(
            r#"<svg xmlns="{SVG_NS}" viewBox="{x} {y} {w} {h}" width="{w}" height="{h}">"#
        )),
        None => out.push_str(&format!(r#"<svg xmlns="{SVG_NS}">"#)),
    }
    out.push('\n');

    for shape in shapes {
        if let Some(element) = shape_element(shape) {
            out.push_str("  ");
            out.push_str(&element);
            out.push('\n');
        }
    }

    out.push_str("</svg>\n");
    out
}

fn view_box(shapes: &[Shape]) -> Option<(f64, f64, f64, f64)> {
    let drawn = || shapes.iter().filter(|s| !s.is_empty());
    let bounds = union_bounds(drawn().map(Shape::bounds))?;
    let pad = drawn()
        .map(|s| s.style().thickness / 2.0)
        .fold(0.0, f64::max);
    let bounds = bounds.inflate(pad, pad);
    Some((bounds.x0, bounds.y0, bounds.width(), bounds.height()))
}

fn shape_element(shape: &Shape) -> Option<String> {
    let stroke = stroke_attrs(shape.style());
    match shape {
        Shape::Freehand(f) => {
            if f.is_empty() {
                return None;
            }
            Some(format!(
                r#"<path d="{}" fill="none" {stroke} stroke-linecap="round" stroke-linejoin="round"/>"#,
                f.to_path().to_svg()
            ))
        }
        Shape::Rectangle(r) => {
            let rect = r.as_rect();
            Some(format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" {stroke}/>"#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height()
            ))
        }
        Shape::Circle(c) => Some(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" {stroke}/>"#,
            c.center.x, c.center.y, c.radius
        )),
    }
}

fn stroke_attrs(style: &ShapeStyle) -> String {
    format!(
        r#"stroke="{}" stroke-width="{}""#,
        escape_xml(&style.color),
        style.thickness
    )
}

fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
