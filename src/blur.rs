//! Separable Gaussian blur over straight RGBA8, used to keep the gradient
//! amorphous after discretized color-stop blending. Weights are Q16
//! fixed-point and renormalized so a constant image stays constant.

use crate::error::{CardError, CardResult};

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

pub fn blur_rgba8(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> CardResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CardError::raster("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(CardError::raster(
            "blur_rgba8 expects src matching width*height*4",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    smear(src, &mut tmp, width, height, &kernel, Axis::X);
    smear(&tmp, &mut out, width, height, &kernel, Axis::Y);
    Ok(out)
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> CardResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(CardError::raster("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r).map(|i| (-((i * i) as f64) / denom).exp()).collect();
    let sum: f64 = weights_f.iter().sum();

    // Quantize to Q16 and push any rounding residue onto the center tap so
    // the kernel sums to exactly 1<<16.
    let mut weights = Vec::<u32>::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for &wf in &weights_f {
        let q = (((wf / sum) * 65536.0).round() as i64).clamp(0, 65536);
        weights.push(q as u32);
        acc += q;
    }
    let mid = weights.len() / 2;
    let rebalanced = (i64::from(weights[mid]) + (65536 - acc)).clamp(0, 65536);
    weights[mid] = rebalanced as u32;

    Ok(weights)
}

fn smear(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32], axis: Axis) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let delta = ki as i32 - radius;
                let (sx, sy) = match axis {
                    Axis::X => ((x + delta).clamp(0, w - 1), y),
                    Axis::Y => (x, (y + delta).clamp(0, h - 1)),
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_radius_0_is_identity() {
        let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
        let out = blur_rgba8(&src, 1, 2, 0, 1.0).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn blur_constant_image_is_identity() {
        let (w, h) = (5u32, 4u32);
        let px = [90u8, 140u8, 60u8, 255u8];
        let src = px.repeat((w * h) as usize);
        let out = blur_rgba8(&src, w, h, 4, 2.0).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn blur_spreads_energy_from_single_pixel() {
        let (w, h) = (5u32, 5u32);
        let mut src = vec![0u8; (w * h * 4) as usize];
        let center = ((2 * w + 2) * 4) as usize;
        src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

        let out = blur_rgba8(&src, w, h, 2, 1.2).unwrap();

        let nonzero = out.chunks_exact(4).filter(|px| px[0] != 0).count();
        assert!(nonzero > 1);

        let sum_r: u32 = out.chunks_exact(4).map(|px| u32::from(px[0])).sum();
        assert!((sum_r as i32 - 255).abs() <= 4);
    }

    #[test]
    fn blur_preserves_full_alpha() {
        let (w, h) = (8u32, 3u32);
        let src: Vec<u8> = (0..w * h)
            .flat_map(|i| [(i * 7 % 256) as u8, (i * 13 % 256) as u8, 200, 255])
            .collect();
        let out = blur_rgba8(&src, w, h, 3, 1.5).unwrap();
        assert!(out.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn blur_rejects_wrong_buffer_length() {
        assert!(blur_rgba8(&[0u8; 5], 1, 1, 1, 1.0).is_err());
    }

    #[test]
    fn kernel_rejects_bad_sigma() {
        assert!(gaussian_kernel_q16(3, 0.0).is_err());
        assert!(gaussian_kernel_q16(3, f32::NAN).is_err());
    }

    #[test]
    fn kernel_sums_to_one_in_q16() {
        let k = gaussian_kernel_q16(5, 2.5).unwrap();
        let sum: u64 = k.iter().map(|&v| u64::from(v)).sum();
        assert_eq!(sum, 1 << 16);
    }
}
