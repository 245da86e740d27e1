use rayon::prelude::*;

use crate::foundation::{
    core::{Bgra8, RectI},
    error::LithoResult,
};
use crate::surface::buffer::{Surface, same_size};

/// The symmetric integer weight row for a blur of `radius`: length
/// `2*radius + 1`, `w[i] = w[len-1-i] = 16*(i+1)`, largest at the center.
pub fn gaussian_blur_row(radius: u32) -> Vec<i64> {
    let size = (2 * radius + 1) as usize;
    let mut weights = vec![0i64; size];
    for i in 0..=radius as usize {
        weights[i] = 16 * (i as i64 + 1);
        weights[size - i - 1] = weights[i];
    }
    weights
}

/// Blurs `src` into `dst` over the given ROIs with a fixed-point,
/// alpha-weighted windowed sum of half-width `radius`.
///
/// `src` and `dst` hold premultiplied samples; each window sample is
/// unmultiplied before weighting and the result is re-premultiplied. The
/// window is clipped at the surface edge (clipped samples contribute
/// nothing), and a window whose total weight is zero — a fully transparent
/// neighborhood — produces a fully transparent pixel.
///
/// `radius == 0` is a no-op: the destination is left untouched, so callers
/// wanting identity semantics pre-copy the source. Rows are processed in
/// parallel; within a row the per-column partial sums slide incrementally,
/// so cost per pixel is O(radius), not O(radius²).
#[tracing::instrument(skip(src, dst, rois), fields(rois = rois.len()))]
pub fn render_gaussian_blur(
    src: &Surface,
    dst: &mut Surface,
    rois: &[RectI],
    radius: u32,
) -> LithoResult<()> {
    same_size(src, dst)?;
    if radius == 0 {
        return Ok(());
    }

    let weights = gaussian_blur_row(radius);
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
                blur_row(src, &weights, radius as i32, rect, y, dst_row);
            });
    }

    Ok(())
}

/// Partial sums of one window column: total weight, alpha-scaled weight, and
/// the weighted straight-alpha channel sums.
#[derive(Clone, Copy, Default)]
struct ColumnSum {
    wa: i64,
    wc: i64,
    a: i64,
    b: i64,
    g: i64,
    r: i64,
}

impl ColumnSum {
    /// Accumulates the vertical window at column `src_x` for the row centered
    /// on `y`. Columns outside the surface stay zero.
    fn compute(src: &Surface, weights: &[i64], r: i32, y: i32, src_x: i32) -> Self {
        let mut sum = Self::default();
        let w = src.width() as i32;
        let h = src.height() as i32;
        if src_x < 0 || src_x >= w {
            return sum;
        }

        let pixels = src.pixels();
        for (wy, &weight) in weights.iter().enumerate() {
            let src_y = y + wy as i32 - r;
            if src_y < 0 || src_y >= h {
                continue;
            }

            let c = pixels[(src_y * w + src_x) as usize].to_straight_alpha();
            let alpha = i64::from(c.a);

            // Historical fixed-point pipeline: the sample weight is scaled by
            // alpha/255 approximated as (a + a>>7)>>8, with the alpha-scaled
            // weight accumulated before the final >>8.
            let mut wp = weight;
            sum.wa += wp;
            wp *= alpha + (alpha >> 7);
            sum.wc += wp;
            wp >>= 8;

            if c.a > 0 {
                sum.a += wp * alpha;
                sum.b += wp * i64::from(c.b);
                sum.g += wp * i64::from(c.g);
                sum.r += wp * i64::from(c.r);
            }
        }
        sum
    }
}

fn blur_row(src: &Surface, weights: &[i64], r: i32, rect: RectI, y: i32, dst_row: &mut [Bgra8]) {
    let wlen = weights.len();

    // Ring-indexed column sums: `head` is the physical slot of the window's
    // leftmost column. Advancing one pixel recomputes exactly one slot.
    let mut cols = vec![ColumnSum::default(); wlen];
    let mut head = 0usize;
    for (j, col) in cols.iter_mut().enumerate() {
        *col = ColumnSum::compute(src, weights, r, y, rect.x + j as i32 - r);
    }

    for x in rect.x..rect.right() {
        if x > rect.x {
            cols[head] = ColumnSum::compute(src, weights, r, y, x + r);
            head = (head + 1) % wlen;
        }

        let mut wa_sum = 0i64;
        let mut wc_sum = 0i64;
        let mut a_sum = 0i64;
        let mut b_sum = 0i64;
        let mut g_sum = 0i64;
        let mut r_sum = 0i64;
        for (j, &weight) in weights.iter().enumerate() {
            let col = &cols[(head + j) % wlen];
            wa_sum += weight * col.wa;
            wc_sum += weight * col.wc;
            a_sum += weight * col.a;
            b_sum += weight * col.b;
            g_sum += weight * col.g;
            r_sum += weight * col.r;
        }

        wc_sum >>= 8;

        dst_row[x as usize] = if wa_sum == 0 || wc_sum == 0 {
            Bgra8::ZERO
        } else {
            Bgra8::from_bgra(
                (b_sum / wc_sum) as u8,
                (g_sum / wc_sum) as u8,
                (r_sum / wc_sum) as u8,
                (a_sum / wa_sum) as u8,
            )
            .to_premultiplied_alpha()
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
