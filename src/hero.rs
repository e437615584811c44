//! Hero image handling: decode, uniform fit scaling, centered placement,
//! alpha-masked compositing.

use std::path::Path;

use anyhow::Context as _;
use image::RgbaImage;

use crate::{
    composite,
    error::{CardError, CardResult},
    surface::CardSurface,
    theme::{HERO_MAX_HEIGHT, HERO_MAX_WIDTH_FRAC},
};

/// Read and decode the hero into straight RGBA8. Sources without an alpha
/// channel come out fully opaque.
pub fn load_hero(path: &Path) -> CardResult<RgbaImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read hero image '{}'", path.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("decode hero image '{}'", path.display()))?;
    Ok(decoded.to_rgba8())
}

/// Scaled hero dimensions: one uniform factor, the tighter of "half the
/// canvas width" and the fixed height cap. Small heroes scale up.
pub fn fit_dimensions(
    hero_w: u32,
    hero_h: u32,
    canvas_w: u32,
) -> CardResult<(u32, u32)> {
    if hero_w == 0 || hero_h == 0 {
        return Err(CardError::raster("hero image has zero dimension"));
    }
    let scale = f32::min(
        canvas_w as f32 * HERO_MAX_WIDTH_FRAC / hero_w as f32,
        HERO_MAX_HEIGHT as f32 / hero_h as f32,
    );
    let w = ((hero_w as f32 * scale).floor() as u32).max(1);
    let h = ((hero_h as f32 * scale).floor() as u32).max(1);
    Ok((w, h))
}

/// Top-left corner that centers a `w`x`h` block on the canvas.
pub fn centered_offset(canvas_w: u32, canvas_h: u32, w: u32, h: u32) -> (u32, u32) {
    ((canvas_w.saturating_sub(w)) / 2, (canvas_h.saturating_sub(h)) / 2)
}

/// Resize the hero and composite it centered on the canvas, masked by its
/// own alpha.
pub fn composite_hero(canvas: &mut CardSurface, hero: &RgbaImage) -> CardResult<()> {
    let (w, h) = fit_dimensions(hero.width(), hero.height(), canvas.width)?;
    let scaled = image::imageops::resize(hero, w, h, image::imageops::FilterType::Lanczos3);
    let (x, y) = centered_offset(canvas.width, canvas.height, w, h);
    tracing::debug!(w, h, x, y, "hero placed");
    composite::blit_over(canvas, scaled.as_raw(), w, h, x, y)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn fit_is_width_bound_for_wide_heroes() {
        // 2400x300 against a 1200-wide canvas: scale 0.25.
        assert_eq!(fit_dimensions(2400, 300, 1200).unwrap(), (600, 75));
    }

    #[test]
    fn fit_is_height_bound_for_tall_heroes() {
        // 300x2400: scale 480/2400 = 0.2.
        assert_eq!(fit_dimensions(300, 2400, 1200).unwrap(), (60, 480));
    }

    #[test]
    fn fit_scales_small_heroes_up() {
        // 100x50: scale min(6.0, 9.6) = 6.0.
        assert_eq!(fit_dimensions(100, 50, 1200).unwrap(), (600, 300));
    }

    #[test]
    fn fit_preserves_aspect_ratio_within_a_pixel() {
        let (w, h) = fit_dimensions(797, 449, 1200).unwrap();
        let got = w as f32 / h as f32;
        let want = 797.0 / 449.0;
        assert!((got - want).abs() * h as f32 <= 1.0 + f32::EPSILON * want);
        assert!(w <= 600 && h <= 480);
    }

    #[test]
    fn fit_rejects_degenerate_heroes() {
        assert!(fit_dimensions(0, 10, 1200).is_err());
        assert!(fit_dimensions(10, 0, 1200).is_err());
    }

    #[test]
    fn centered_offset_matches_floor_halves() {
        assert_eq!(centered_offset(1200, 630, 600, 450), (300, 90));
        assert_eq!(centered_offset(1200, 630, 601, 449), (299, 90));
    }

    #[test]
    fn load_hero_decodes_png_and_keeps_alpha() {
        let img = RgbaImage::from_raw(2, 1, vec![10, 20, 30, 128, 40, 50, 60, 255]).unwrap();
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();

        let dir = std::env::temp_dir().join("ogcard_hero_decode");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hero.png");
        std::fs::write(&path, &buf).unwrap();

        let hero = load_hero(&path).unwrap();
        assert_eq!(hero.dimensions(), (2, 1));
        assert_eq!(hero.get_pixel(0, 0).0, [10, 20, 30, 128]);
    }

    #[test]
    fn load_hero_fails_on_undecodable_bytes() {
        let dir = std::env::temp_dir().join("ogcard_hero_decode");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("not-an-image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(load_hero(&path).is_err());
    }

    #[test]
    fn fully_transparent_hero_leaves_canvas_untouched() {
        let mut canvas = CardSurface::filled(1200, 630, [45, 90, 61, 255]).unwrap();
        let before = canvas.data.clone();
        let hero = RgbaImage::from_raw(4, 4, vec![0u8; 4 * 4 * 4]).unwrap();
        composite_hero(&mut canvas, &hero).unwrap();
        assert_eq!(canvas.data, before);
    }

    #[test]
    fn opaque_hero_covers_the_canvas_center() {
        let mut canvas = CardSurface::filled(1200, 630, [0, 0, 0, 255]).unwrap();
        let hero = RgbaImage::from_pixel(10, 10, image::Rgba([255, 0, 0, 255]));
        composite_hero(&mut canvas, &hero).unwrap();
        // 10x10 scales to 480x480 at (360, 75); the center must be red.
        let center = canvas.pixel(600, 315);
        assert!(center[0] >= 250 && center[1] <= 5 && center[2] <= 5);
        assert_eq!(center[3], 255);
        // Far corner stays background.
        assert_eq!(canvas.pixel(0, 0), [0, 0, 0, 255]);
    }
}
