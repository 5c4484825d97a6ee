//! Turns text lines into the two pixel sets the canvas needs.
//!
//! The rasterizer draws onto an off-screen cairo surface filled with a
//! sentinel color and then scans every pixel: whatever is not
//! sentinel-colored is glyph ink, and every remaining position inside the
//! bounding area becomes part of the black clearing fill. The two sets
//! partition the bounding rectangle by construction.

use std::collections::HashSet;

use cairo::{Context, Format, ImageSurface};
use log::debug;
use thiserror::Error;

use super::color::{self, Color};
use super::font::ResolvedFont;
use super::pixel::{Area, Pixel, Point};

/// Errors raised while rasterizing text into pixels.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Cairo drawing operation failed: {0}")]
    Draw(#[from] cairo::Error),

    #[error("Raster surface data is unavailable: {0}")]
    Surface(#[from] cairo::BorrowError),
}

/// Measures the bounding box of `lines` in local surface coordinates.
///
/// Width is the widest measured line, height is the tallest single-line
/// height times the number of lines, and the origin is always (0, 0).
/// Dimensions come from font metrics alone; actual glyph ink may overhang
/// and gets clipped by the raster surface. An empty line still measures one
/// line-height.
pub fn text_box(lines: &[String], font: &ResolvedFont) -> Result<Area, RasterError> {
    // Measurement needs a context but never shows anything.
    let surface = ImageSurface::create(Format::ARgb32, 1, 1)?;
    let ctx = Context::new(&surface)?;
    let layout = pangocairo::functions::create_layout(&ctx);
    layout.set_font_description(Some(font.description()));

    let mut max_width = 0;
    let mut max_height = 0;
    for line in lines {
        layout.set_text(line);
        let (width, height) = layout.pixel_size();
        max_width = max_width.max(width);
        max_height = max_height.max(height);
    }

    Ok(Area::new(
        Point::new(0, 0),
        max_width,
        max_height * lines.len() as i32,
    ))
}

/// Renders `lines` and collects every non-sentinel pixel, translated by
/// `offset`.
///
/// The surface is filled with [`color::CYAN`] first; the sentinel marks "no
/// ink here" and never leaves this function. Line `i` gets its baseline at
/// `font_size * (i + 1)`, so the lines stack inside the declared area.
pub fn text_pixels(
    lines: &[String],
    font: &ResolvedFont,
    area: &Area,
    offset: Point,
) -> Result<HashSet<Pixel>, RasterError> {
    debug!(
        "Rendering {} line(s) onto a {}x{} surface",
        lines.len(),
        area.width,
        area.height
    );

    let mut surface = ImageSurface::create(Format::ARgb32, area.width, area.height)?;
    {
        let ctx = Context::new(&surface)?;

        // Aliased glyph edges cannot blend into the sentinel.
        let mut font_options = cairo::FontOptions::new()?;
        font_options.set_antialias(cairo::Antialias::None);
        ctx.set_font_options(&font_options);

        set_source_color(&ctx, color::CYAN);
        ctx.paint()?;

        let layout = pangocairo::functions::create_layout(&ctx);
        layout.set_font_description(Some(font.description()));
        set_source_color(&ctx, color::WHITE);

        for (index, line) in lines.iter().enumerate() {
            layout.set_text(line);
            // Pango draws from the layout's top left; shift up by the
            // layout baseline so the text baseline lands where asked.
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
            ctx.move_to(0.0, font.size() * (index + 1) as f64 - baseline);
            pangocairo::functions::show_layout(&ctx, &layout);
        }
    }
    surface.flush();

    let stride = surface.stride() as usize;
    let data = surface.data()?;

    let mut pixels = HashSet::new();
    for y in 0..area.height {
        let row = &data[y as usize * stride..];
        for x in 0..area.width {
            let at = x as usize * 4;
            let word = u32::from_ne_bytes([row[at], row[at + 1], row[at + 2], row[at + 3]]);
            let color = Color::from_surface_word(word);
            if color != color::CYAN {
                pixels.insert(Pixel::new(Point::new(x, y) + offset, color));
            }
        }
    }

    debug!("{} text pixel(s)", pixels.len());
    Ok(pixels)
}

/// Produces the black fill for `area`, skipping positions already covered by
/// `text_pixels`.
///
/// Coverage is positional: a foreground pixel excludes its location from the
/// fill no matter which color it carries.
pub fn clear_space(area: &Area, offset: Point, text_pixels: &HashSet<Pixel>) -> HashSet<Pixel> {
    debug!("Clearing {}x{} around the text", area.width, area.height);

    let covered: HashSet<Point> = text_pixels.iter().map(|pixel| pixel.position).collect();

    let mut blanking = HashSet::new();
    for x in 0..area.width {
        for y in 0..area.height {
            let position = Point::new(x, y) + offset;
            if !covered.contains(&position) {
                blanking.insert(Pixel::new(position, color::BLACK));
            }
        }
    }
    blanking
}

fn set_source_color(ctx: &Context, color: Color) {
    ctx.set_source_rgb(
        f64::from(color.r) / 255.0,
        f64::from(color.g) / 255.0,
        f64::from(color.b) / 255.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(size: f64) -> ResolvedFont {
        ResolvedFont::new("Monospace", size)
    }

    fn render(lines: &[&str], size: f64, offset: Point) -> (Area, HashSet<Pixel>, HashSet<Pixel>) {
        let lines: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        let font = mono(size);
        let area = text_box(&lines, &font).unwrap();
        let text = text_pixels(&lines, &font, &area, offset).unwrap();
        let clear = clear_space(&area, offset, &text);
        (area, text, clear)
    }

    #[test]
    fn blank_lines_leave_only_clear_space() {
        let (area, text, clear) = render(&[" ", " "], 16.0, Point::new(4, 9));
        assert!(text.is_empty());
        assert_eq!(clear.len(), (area.width * area.height) as usize);
    }

    #[test]
    fn empty_text_still_measures_one_line_height() {
        let font = mono(16.0);
        let area = text_box(&[String::new()], &font).unwrap();
        assert_eq!(area.width, 0);
        assert!(area.height > 0);
    }

    #[test]
    fn area_height_scales_with_line_count() {
        let font = mono(16.0);
        let one = text_box(&["flut".to_string()], &font).unwrap();
        let three = text_box(
            &["flut".to_string(), "fl".to_string(), "f".to_string()],
            &font,
        )
        .unwrap();
        assert_eq!(three.height, one.height * 3);
        assert_eq!(three.width, one.width);
    }

    #[test]
    fn text_and_clear_space_partition_the_area() {
        let offset = Point::new(3, 3);
        let (area, text, clear) = render(&["AB"], 14.0, offset);
        assert!(!text.is_empty());

        let text_positions: HashSet<Point> = text.iter().map(|pixel| pixel.position).collect();
        let clear_positions: HashSet<Point> = clear.iter().map(|pixel| pixel.position).collect();
        assert!(text_positions.is_disjoint(&clear_positions));
        assert_eq!(
            text.len() + clear.len(),
            (area.width * area.height) as usize
        );

        for position in text_positions.iter().chain(clear_positions.iter()) {
            assert!(position.x >= offset.x && position.x < offset.x + area.width);
            assert!(position.y >= offset.y && position.y < offset.y + area.height);
        }
    }

    #[test]
    fn rasterization_is_deterministic() {
        let (_, first, _) = render(&["flut"], 16.0, Point::new(0, 0));
        let (_, second, _) = render(&["flut"], 16.0, Point::new(0, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn offset_translates_positions_and_keeps_colors() {
        let shift = Point::new(7, 11);
        let (_, base, _) = render(&["hi"], 16.0, Point::new(0, 0));
        let (_, moved, _) = render(&["hi"], 16.0, shift);

        let translated: HashSet<Pixel> = base
            .iter()
            .map(|pixel| Pixel::new(pixel.position + shift, pixel.color))
            .collect();
        assert_eq!(moved, translated);
    }

    #[test]
    fn sentinel_color_never_escapes() {
        let (_, text, clear) = render(&["flut"], 18.0, Point::new(0, 0));
        assert!(text.iter().all(|pixel| pixel.color != color::CYAN));
        assert!(clear.iter().all(|pixel| pixel.color == color::BLACK));
    }
}
