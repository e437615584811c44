//! Straight-alpha "over" compositing, specialized for the card pipeline
//! where the destination is always opaque.

use crate::{
    error::{CardError, CardResult},
    surface::CardSurface,
};

/// Composite one straight-alpha source pixel over an opaque destination.
/// The result stays opaque.
pub fn over_opaque(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - sa;

    let mut out = [0u8; 4];
    out[3] = 255;
    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), sa);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Composite a same-sized layer over an opaque surface, in place.
pub fn over_in_place(dst: &mut CardSurface, layer: &CardSurface) -> CardResult<()> {
    if dst.width != layer.width || dst.height != layer.height {
        return Err(CardError::raster(
            "over_in_place expects same-dimension surfaces",
        ));
    }
    for (d, s) in dst
        .data
        .chunks_exact_mut(4)
        .zip(layer.data.chunks_exact(4))
    {
        let out = over_opaque([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite an RGBA8 block over a rectangle of the surface, using the
/// source's own alpha as the mask. The block must fit inside the surface.
pub fn blit_over(
    dst: &mut CardSurface,
    src: &[u8],
    src_w: u32,
    src_h: u32,
    ox: u32,
    oy: u32,
) -> CardResult<()> {
    let expected = (src_w as usize)
        .checked_mul(src_h as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CardError::raster("blit source size overflow"))?;
    if src.len() != expected {
        return Err(CardError::raster("blit_over expects src matching width*height*4"));
    }
    if ox.checked_add(src_w).is_none_or(|r| r > dst.width)
        || oy.checked_add(src_h).is_none_or(|b| b > dst.height)
    {
        return Err(CardError::raster("blit rectangle exceeds surface bounds"));
    }

    for row in 0..src_h {
        let src_start = ((row * src_w) as usize) * 4;
        let dst_start = (((oy + row) * dst.width + ox) as usize) * 4;
        let src_row = &src[src_start..src_start + (src_w as usize) * 4];
        let dst_row = &mut dst.data[dst_start..dst_start + (src_w as usize) * 4];
        for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
            let out = over_opaque([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
