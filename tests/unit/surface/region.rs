use super::*;

#[test]
fn split_rows_covers_bounds_without_overlap() {
    let bounds = RectI::new(2, 3, 10, 7);
    let bands = split_rows(bounds, 3);
    assert_eq!(bands.len(), 3);
    assert_eq!(bands[0], RectI::new(2, 3, 10, 3));
    assert_eq!(bands[1], RectI::new(2, 6, 10, 3));
    assert_eq!(bands[2], RectI::new(2, 9, 10, 1));

    let total: i32 = bands.iter().map(|b| b.height).sum();
    assert_eq!(total, bounds.height);
}

#[test]
fn split_rows_treats_non_positive_band_as_one() {
    let bounds = RectI::new(0, 0, 4, 3);
    assert_eq!(split_rows(bounds, 0).len(), 3);
    assert_eq!(split_rows(bounds, -5).len(), 3);
}

#[test]
fn split_rows_of_empty_bounds_is_empty() {
    assert!(split_rows(RectI::new(0, 0, 0, 5), 2).is_empty());
    assert!(split_rows(RectI::new(0, 0, 5, 0), 2).is_empty());
}

#[test]
fn row_spans_clips_and_merges() {
    let rects = [
        RectI::new(-3, 0, 5, 2), // clips to [0, 2)
        RectI::new(1, 0, 3, 1),  // overlaps the first on row 0
        RectI::new(6, 0, 10, 1), // clips to [6, 8)
    ];
    assert_eq!(row_spans(&rects, 0, 8), vec![(0, 4), (6, 8)]);
    assert_eq!(row_spans(&rects, 1, 8), vec![(0, 2)]);
    assert!(row_spans(&rects, 2, 8).is_empty());
}

#[test]
fn row_spans_ignores_empty_rects() {
    let rects = [RectI::new(2, 0, 0, 4)];
    assert!(row_spans(&rects, 0, 8).is_empty());
}
