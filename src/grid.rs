//! The site's crosshatch: 1-px lines every `GRID_STEP` pixels on both axes,
//! in a low-alpha lime tint.

use crate::{
    composite,
    error::CardResult,
    surface::CardSurface,
    theme::{GRID_STEP, GRID_TINT},
};

/// Composite the crosshatch over the canvas. Lines are drawn into their own
/// transparent layer first, so intersections blend once instead of twice.
pub fn overlay_grid(canvas: &mut CardSurface) -> CardResult<()> {
    let mut layer = CardSurface::transparent(canvas.width, canvas.height)?;

    for y in (0..canvas.height).step_by(GRID_STEP as usize) {
        for x in 0..canvas.width {
            layer.put_pixel(x, y, GRID_TINT);
        }
    }
    for x in (0..canvas.width).step_by(GRID_STEP as usize) {
        for y in 0..canvas.height {
            layer.put_pixel(x, y, GRID_TINT);
        }
    }

    composite::over_in_place(canvas, &layer)
}
