use rayon::prelude::*;

use crate::foundation::{
    core::{Bgra8, RectI},
    error::{LithoError, LithoResult},
    math::clamp_to_byte,
};
use crate::surface::buffer::{Surface, same_size};

/// The 3×3 directional weight matrix behind edge-detect and relief effects.
///
/// The eight surrounding weights are cosines of the effect angle offset in
/// 45° steps around the center; the center weight is always zero, so a flat
/// neighborhood maps to the net weight sum times its own color.
pub fn directional_weights(angle_rad: f64) -> [f64; 9] {
    const DELTA: f64 = std::f64::consts::FRAC_PI_4;
    let a = angle_rad;
    [
        (a + DELTA).cos(),
        (a + 2.0 * DELTA).cos(),
        (a + 3.0 * DELTA).cos(),
        a.cos(),
        0.0,
        (a + 4.0 * DELTA).cos(),
        (a - DELTA).cos(),
        (a - 2.0 * DELTA).cos(),
        (a - 3.0 * DELTA).cos(),
    ]
}

/// Applies a 3×3 floating weight matrix (row-major around the center) to the
/// R, G, B channels of every ROI pixel, writing `dst` with alpha forced to
/// opaque.
///
/// Border pixels use a reduced kernel extent: offsets that fall outside the
/// surface are excluded from the sum (no wraparound, no mirroring). Channel
/// sums are clamped to the byte range, rounding half away from zero.
///
/// `weights` must contain exactly 9 elements and `src`/`dst` must share
/// dimensions; both are validated before any write. Empty ROIs are skipped.
#[tracing::instrument(skip_all, fields(rois = rois.len()))]
pub fn render_color_difference(
    weights: &[f64],
    src: &Surface,
    dst: &mut Surface,
    rois: &[RectI],
) -> LithoResult<()> {
    if weights.len() != 9 {
        return Err(LithoError::validation(
            "color difference weights must contain exactly 9 elements",
        ));
    }
    same_size(src, dst)?;

    let bounds = src.bounds();
    let width = src.width() as usize;

    for roi in rois {
        let rect = roi.intersect(bounds);
        if rect.is_empty() {
            continue;
        }

        let band = &mut dst.pixels_mut()[rect.y as usize * width..][..rect.height as usize * width];
        band.par_chunks_exact_mut(width)
            .enumerate()
            .for_each(|(i, dst_row)| {
                let y = rect.y + i as i32;
                convolve_row(weights, src, rect, y, dst_row);
            });
    }

    Ok(())
}

fn convolve_row(weights: &[f64], src: &Surface, rect: RectI, y: i32, dst_row: &mut [Bgra8]) {
    let w = src.width() as i32;
    let h = src.height() as i32;
    let pixels = src.pixels();

    // Kernel extent collapses at the borders: out-of-range offsets simply
    // drop out of the sum.
    let y0 = if y > 0 { -1 } else { 0 };
    let y1 = if y < h - 1 { 1 } else { 0 };

    for x in rect.x..rect.right() {
        let x0 = if x > 0 { -1 } else { 0 };
        let x1 = if x < w - 1 { 1 } else { 0 };

        let mut r_sum = 0.0f64;
        let mut g_sum = 0.0f64;
        let mut b_sum = 0.0f64;

        let base = y * w + x;
        for ky in y0..=y1 {
            let src_row = base + ky * w;
            let w_row = ((ky + 1) * 3) as usize;
            for kx in x0..=x1 {
                let weight = weights[w_row + (kx + 1) as usize];
                let c = pixels[(src_row + kx) as usize];
                r_sum += weight * f64::from(c.r);
                g_sum += weight * f64::from(c.g);
                b_sum += weight * f64::from(c.b);
            }
        }

        dst_row[x as usize] = Bgra8::from_bgra(
            clamp_to_byte(b_sum),
            clamp_to_byte(g_sum),
            clamp_to_byte(r_sum),
            255,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/convolve.rs"]
mod tests;
