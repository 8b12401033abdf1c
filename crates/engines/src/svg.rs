//! Vector markup serialization and the CSS background wrapper.
//!
//! Markup always uses the fixed `0 0 100 100` viewBox with
//! `preserveAspectRatio="none"`, so it stretches to whatever box displays it.

use backdrop_core::geometry::{fmt_fixed, fmt_num, fmt_point};
use backdrop_core::{Scene, Shape, VIEWPORT_SIZE};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

/// Decimals used for group scale factors; coordinates use two.
const SCALE_DECIMALS: usize = 4;

/// Serializes `scene` to an SVG document.
///
/// Emits shared blur filters in `<defs>`, then a background rectangle in the
/// palette's first color, then one element per shape in paint order. Shapes
/// with no drawable geometry (an empty path, a polygon with fewer than three
/// points) are skipped.
pub fn to_svg(scene: &Scene) -> String {
    let size = fmt_num(VIEWPORT_SIZE);
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {size} {size}" width="{size}" height="{size}" preserveAspectRatio="none">"#
    );

    let blurs = scene.blur_levels();
    if !blurs.is_empty() {
        out.push_str("<defs>");
        for (i, std_dev) in blurs.iter().enumerate() {
            out.push_str(&format!(
                r#"<filter id="blur-{i}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="{}"/></filter>"#,
                fmt_num(*std_dev)
            ));
        }
        out.push_str("</defs>");
    }

    out.push_str(&format!(
        r#"<rect width="{size}" height="{size}" fill="{}"/>"#,
        scene.palette().background()
    ));
    for shape in scene.shapes() {
        write_shape(&mut out, shape, &blurs);
    }
    out.push_str("</svg>");

    debug!(shapes = scene.len(), bytes = out.len(), "serialized scene");
    out
}

fn write_shape(out: &mut String, shape: &Shape, blurs: &[f64]) {
    match shape {
        Shape::Path { d, fill, opacity } => {
            if d.is_empty() {
                return;
            }
            out.push_str(&format!(
                r#"<path d="{d}" fill="{fill}" opacity="{}"/>"#,
                fmt_num(*opacity)
            ));
        }
        Shape::Circle {
            center,
            radius,
            fill,
            opacity,
            blur,
        } => {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}" opacity="{}""#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                fmt_num(*opacity)
            ));
            let filter = blur.and_then(|b| blurs.iter().position(|l| l.to_bits() == b.to_bits()));
            if let Some(i) = filter {
                out.push_str(&format!(r#" filter="url(#blur-{i})""#));
            }
            out.push_str("/>");
        }
        Shape::Polygon { points, fill } => {
            if points.len() < 3 {
                return;
            }
            let points: Vec<String> = points.iter().map(|p| fmt_point(*p)).collect();
            out.push_str(&format!(
                r#"<polygon points="{}" fill="{fill}"/>"#,
                points.join(" ")
            ));
        }
        Shape::Group {
            translate,
            scale,
            children,
        } => {
            out.push_str(&format!(
                r#"<g transform="translate({} {}) scale({})">"#,
                fmt_num(translate.x),
                fmt_num(translate.y),
                fmt_fixed(*scale, SCALE_DECIMALS)
            ));
            for child in children {
                write_shape(out, child, blurs);
            }
            out.push_str("</g>");
        }
    }
}

/// Wraps markup in a base64 `data:` URI.
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

/// A CSS declaration using the markup as an inline background image.
pub fn to_css_background(svg: &str) -> String {
    format!(
        "background-image: url(\"{}\");\nbackground-size: cover;",
        to_data_uri(svg)
    )
}
