//! Fixed design constants for the card: canvas size, the green gradient
//! ramp, glow placement, grid tint, and hero fit limits. All values mirror
//! the blog's CSS design system.

/// Output card width in pixels (Open Graph standard).
pub const CARD_WIDTH: u32 = 1200;
/// Output card height in pixels (Open Graph standard).
pub const CARD_HEIGHT: u32 = 630;

/// One entry of the piecewise-linear color ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position in [0, 1].
    pub pos: f32,
    pub rgb: [u8; 3],
}

/// The CSS radial-gradient stops. Symmetric around the brightest lime at
/// 0.50; both extremes share the darkest green, so 0.0 and 1.0 are
/// interchangeable edge colors.
pub const GRADIENT_STOPS: [ColorStop; 11] = [
    ColorStop { pos: 0.00, rgb: [45, 90, 61] },    // #2d5a3d
    ColorStop { pos: 0.15, rgb: [58, 107, 71] },   // #3a6b47
    ColorStop { pos: 0.25, rgb: [74, 143, 92] },   // #4a8f5c
    ColorStop { pos: 0.35, rgb: [109, 179, 63] },  // #6db33f
    ColorStop { pos: 0.45, rgb: [124, 217, 46] },  // #7cd92e
    ColorStop { pos: 0.50, rgb: [173, 255, 47] },  // #adff2f
    ColorStop { pos: 0.55, rgb: [124, 217, 46] },  // #7cd92e
    ColorStop { pos: 0.65, rgb: [109, 179, 63] },  // #6db33f
    ColorStop { pos: 0.75, rgb: [74, 143, 92] },   // #4a8f5c
    ColorStop { pos: 0.85, rgb: [58, 107, 71] },   // #3a6b47
    ColorStop { pos: 1.00, rgb: [45, 90, 61] },    // #2d5a3d
];

/// A weighted elliptical Gaussian glow source, in coordinates relative to
/// the canvas (0..1 on both axes).
#[derive(Clone, Copy, Debug)]
pub struct GlowBlob {
    pub cx: f32,
    pub cy: f32,
    pub sigma_x: f32,
    pub sigma_y: f32,
    pub weight: f32,
}

/// Glow sources for the background field. The primary blob sits at
/// (30%, 50%), the center of the CSS ellipse; the secondary glows break up
/// the concentric look.
pub const GLOW_BLOBS: [GlowBlob; 4] = [
    GlowBlob { cx: 0.30, cy: 0.50, sigma_x: 0.34, sigma_y: 0.30, weight: 1.00 },
    GlowBlob { cx: 0.78, cy: 0.18, sigma_x: 0.26, sigma_y: 0.22, weight: 0.55 },
    GlowBlob { cx: 0.88, cy: 0.82, sigma_x: 0.22, sigma_y: 0.26, weight: 0.40 },
    GlowBlob { cx: 0.08, cy: 0.88, sigma_x: 0.20, sigma_y: 0.22, weight: 0.35 },
];

/// Crosshatch line spacing in pixels.
pub const GRID_STEP: u32 = 32;
/// Crosshatch tint, lime at low alpha (straight RGBA).
pub const GRID_TINT: [u8; 4] = [173, 255, 47, 45];

/// The hero may occupy at most this fraction of the canvas width.
pub const HERO_MAX_WIDTH_FRAC: f32 = 0.5;
/// The hero may be at most this tall, in pixels.
pub const HERO_MAX_HEIGHT: u32 = 480;

/// Post-fill blur that keeps the gradient amorphous (no visible banding).
pub const BLUR_RADIUS: u32 = 12;
pub const BLUR_SIGMA: f32 = 6.0;
