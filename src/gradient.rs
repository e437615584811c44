//! Background synthesis: a field of elliptical Gaussian glows is shaped,
//! mapped through the theme's color ramp, and smoothed into an amorphous
//! green gradient.

use std::f32::consts::PI;

use crate::{
    blur,
    error::CardResult,
    surface::CardSurface,
    theme::{self, GlowBlob},
};

/// Sample the theme ramp at `t`. Out-of-range values clamp to the edge
/// stops; exact stop positions return exact stop colors.
pub fn sample_stops(t: f32) -> [u8; 3] {
    let stops = &theme::GRADIENT_STOPS;
    let t = t.clamp(0.0, 1.0);
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.pos {
            let span = hi.pos - lo.pos;
            let local = if span > 0.0 { (t - lo.pos) / span } else { 0.0 };
            return lerp_rgb(lo.rgb, hi.rgb, local);
        }
    }
    stops[stops.len() - 1].rgb
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], f: f32) -> [u8; 3] {
    let f = f.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for c in 0..3 {
        let v = f32::from(a[c]) * (1.0 - f) + f32::from(b[c]) * f;
        out[c] = v.round() as u8;
    }
    out
}

/// Cosine S-curve on [0, 1]; steepens the contrast between the glow cores
/// and the dark surround.
pub fn shape(v: f32) -> f32 {
    0.5 - 0.5 * (v.clamp(0.0, 1.0) * PI).cos()
}

/// Per-pixel sum of the glow sources, normalized so the brightest pixel is
/// 1.0. An all-zero field stays zero (everywhere the dark edge stop).
pub fn glow_field(width: u32, height: u32) -> Vec<f32> {
    field_from_blobs(width, height, &theme::GLOW_BLOBS)
}

fn field_from_blobs(width: u32, height: u32, blobs: &[GlowBlob]) -> Vec<f32> {
    let mut field = vec![0.0f32; (width as usize) * (height as usize)];
    let mut max = 0.0f32;
    for y in 0..height {
        let ny = (y as f32 + 0.5) / height as f32;
        for x in 0..width {
            let nx = (x as f32 + 0.5) / width as f32;
            let mut sum = 0.0f32;
            for blob in blobs {
                let dx = (nx - blob.cx) / blob.sigma_x;
                let dy = (ny - blob.cy) / blob.sigma_y;
                sum += blob.weight * (-0.5 * (dx * dx + dy * dy)).exp();
            }
            field[(y * width + x) as usize] = sum;
            max = max.max(sum);
        }
    }
    if max > 0.0 {
        for v in &mut field {
            *v /= max;
        }
    }
    field
}

/// Fill a `width`x`height` surface with the shaped glow field mapped
/// through the color ramp, then blur it to remove banding.
pub fn synthesize(width: u32, height: u32) -> CardResult<CardSurface> {
    let field = glow_field(width, height);
    let mut surface = CardSurface::filled(width, height, [0, 0, 0, 255])?;

    // Full brightness lands on the brightest stop (0.50); darkness on the
    // 0.00 edge stop. The ramp is symmetric, so only its lower half is used.
    for (px, &v) in surface.data.chunks_exact_mut(4).zip(field.iter()) {
        let t = 0.5 * shape(v);
        let rgb = sample_stops(t);
        px[..3].copy_from_slice(&rgb);
    }

    surface.data = blur::blur_rgba8(
        &surface.data,
        width,
        height,
        theme::BLUR_RADIUS,
        theme::BLUR_SIGMA,
    )?;
    tracing::debug!(width, height, "gradient synthesized");
    Ok(surface)
}
