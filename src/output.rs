//! Output resolution and the PNG writer: slug validation, the
//! `assets/social/og-<slug>.png` path scheme, RGBA→RGB flattening, and an
//! atomic encode-then-rename write.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    error::{CardError, CardResult},
    surface::CardSurface,
};

/// Card directory, relative to the invocation root.
pub const OUTPUT_DIR: &str = "assets/social";
/// Base URL suggested for the post's OG tags.
pub const SITE_BASE_URL: &str = "https://mediumfeel.com";

/// Slugs are restricted to `[A-Za-z0-9_-]` so they can never escape the
/// output directory or produce invalid filenames.
pub fn validate_slug(slug: &str) -> CardResult<()> {
    if slug.is_empty() {
        return Err(CardError::validation("slug must not be empty"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CardError::validation(format!(
            "slug '{slug}' contains characters outside [A-Za-z0-9_-]"
        )));
    }
    Ok(())
}

/// `<root>/assets/social/og-<slug>.png`.
pub fn card_path(root: &Path, slug: &str) -> PathBuf {
    root.join(OUTPUT_DIR).join(format!("og-{slug}.png"))
}

/// Public URL the written card will be served from.
pub fn card_url(slug: &str) -> String {
    format!("{SITE_BASE_URL}/{OUTPUT_DIR}/og-{slug}.png")
}

/// Drop the alpha channel. The canvas is opaque by construction, so this is
/// a format conversion, not a blend.
pub fn flatten_rgb(surface: &CardSurface) -> Vec<u8> {
    let mut rgb = Vec::with_capacity((surface.width as usize) * (surface.height as usize) * 3);
    for px in surface.data.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}

/// Encode the surface as RGB PNG and move it into place. The encode goes to
/// a sibling temp file first, so a failure never leaves a partial card at
/// the destination.
pub fn write_card(surface: &CardSurface, path: &Path) -> CardResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let rgb = flatten_rgb(surface);
    let tmp = path.with_extension("png.tmp");
    image::save_buffer_with_format(
        &tmp,
        &rgb,
        surface.width,
        surface.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("move '{}' into place", path.display()))?;
    Ok(())
}
