use crate::foundation::core::RectI;

/// Splits `bounds` into non-overlapping horizontal bands of `band_height`
/// rows (the last band takes the remainder). Band tiling is how callers
/// shard a dirty area across workers: every effect engine accepts any
/// disjoint ROI set, and bands keep each ROI's rows contiguous.
///
/// A non-positive `band_height` is treated as 1. Empty bounds yield no bands.
pub fn split_rows(bounds: RectI, band_height: i32) -> Vec<RectI> {
    if bounds.is_empty() {
        return Vec::new();
    }
    let band = band_height.max(1);

    let mut out = Vec::with_capacity(((bounds.height + band - 1) / band) as usize);
    let mut y = bounds.y;
    while y < bounds.bottom() {
        let h = band.min(bounds.bottom() - y);
        out.push(RectI::new(bounds.x, y, bounds.width, h));
        y += h;
    }
    out
}

/// The sorted, merged `[x0, x1)` spans that `rects` cover on row `y`,
/// clipped to `[0, width)`.
pub(crate) fn row_spans(rects: &[RectI], y: i32, width: i32) -> Vec<(i32, i32)> {
    let mut spans: Vec<(i32, i32)> = rects
        .iter()
        .filter(|r| !r.is_empty() && y >= r.y && y < r.bottom())
        .map(|r| (r.x.max(0), r.right().min(width)))
        .filter(|&(x0, x1)| x0 < x1)
        .collect();
    spans.sort_unstable();

    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(spans.len());
    for (x0, x1) in spans {
        match merged.last_mut() {
            Some(last) if x0 <= last.1 => last.1 = last.1.max(x1),
            _ => merged.push((x0, x1)),
        }
    }
    merged
}

#[cfg(test)]
#[path = "../../tests/unit/surface/region.rs"]
mod tests;
