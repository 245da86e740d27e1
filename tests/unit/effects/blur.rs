use super::*;

#[test]
fn weight_row_is_symmetric_and_center_heavy() {
    assert_eq!(gaussian_blur_row(0), vec![16]);
    assert_eq!(gaussian_blur_row(1), vec![16, 32, 16]);
    assert_eq!(gaussian_blur_row(3), vec![16, 32, 48, 64, 48, 32, 16]);
}

#[test]
fn radius_0_leaves_destination_untouched() {
    let src = Surface::filled(4, 4, Bgra8::opaque(10, 20, 30)).unwrap();
    let sentinel = Bgra8::from_bgra(1, 2, 3, 4);
    let mut dst = Surface::filled(4, 4, sentinel).unwrap();
    render_gaussian_blur(&src, &mut dst, &[src.bounds()], 0).unwrap();
    assert!(dst.pixels().iter().all(|&p| p == sentinel));
}

#[test]
fn rejects_dimension_mismatch() {
    let src = Surface::new(4, 4).unwrap();
    let mut dst = Surface::new(5, 4).unwrap();
    assert!(render_gaussian_blur(&src, &mut dst, &[src.bounds()], 1).is_err());
}

#[test]
fn constant_opaque_image_is_unchanged() {
    let c = Bgra8::opaque(10, 200, 77);
    let src = Surface::filled(6, 5, c).unwrap();
    let mut dst = Surface::new(6, 5).unwrap();
    render_gaussian_blur(&src, &mut dst, &[src.bounds()], 2).unwrap();
    assert!(dst.pixels().iter().all(|&p| p == c));
}

#[test]
fn fully_transparent_window_emits_transparent_pixels() {
    let src = Surface::new(4, 4).unwrap();
    let mut dst = Surface::filled(4, 4, Bgra8::opaque(9, 9, 9)).unwrap();
    render_gaussian_blur(&src, &mut dst, &[src.bounds()], 1).unwrap();
    assert!(dst.pixels().iter().all(|&p| p == Bgra8::ZERO));
}

/// Pins the fixed-point pipeline against a hand computation.
///
/// 2×1 buffer, premultiplied: white opaque then fully transparent, radius 1
/// (weights 16/32/16). Only the center row of each column window is in
/// bounds, so for x=0: wa = 32*32 + 16*32 = 1536, wc = 32*8192 >> 8 = 1024,
/// alpha = 261120/1536 = 170, channels = 261120/1024 = 255, and
/// premultiplying (255,255,255,170) gives 170. For x=1 the weights swap:
/// alpha = 85, channels 255, premultiplied 85.
#[test]
fn fixed_point_arithmetic_matches_hand_computation() {
    let src = Surface::from_pixels(
        2,
        1,
        vec![Bgra8::from_bgra(255, 255, 255, 255), Bgra8::ZERO],
    )
    .unwrap();
    let mut dst = Surface::new(2, 1).unwrap();
    render_gaussian_blur(&src, &mut dst, &[src.bounds()], 1).unwrap();

    assert_eq!(dst.pixel(0, 0), Bgra8::from_bgra(170, 170, 170, 170));
    assert_eq!(dst.pixel(1, 0), Bgra8::from_bgra(85, 85, 85, 85));
}

#[test]
fn single_bright_pixel_spreads_symmetrically() {
    let mut src = Surface::new(5, 5).unwrap();
    src.set_pixel(2, 2, Bgra8::from_bgra(255, 255, 255, 255));
    let mut dst = Surface::new(5, 5).unwrap();
    render_gaussian_blur(&src, &mut dst, &[src.bounds()], 2).unwrap();

    // Symmetric about the center in both axes.
    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(dst.pixel(x, y), dst.pixel(4 - x, y), "x mirror ({x},{y})");
            assert_eq!(dst.pixel(x, y), dst.pixel(x, 4 - y), "y mirror ({x},{y})");
        }
    }
    // Energy decays away from the source.
    assert!(dst.pixel(2, 2).a > dst.pixel(1, 2).a);
    assert!(dst.pixel(1, 2).a > dst.pixel(0, 2).a);
}

#[test]
fn roi_limits_the_written_area() {
    let src = Surface::filled(6, 6, Bgra8::opaque(50, 50, 50)).unwrap();
    let mut dst = Surface::new(6, 6).unwrap();
    render_gaussian_blur(&src, &mut dst, &[RectI::new(2, 2, 2, 2)], 1).unwrap();
    assert_eq!(dst.pixel(0, 0), Bgra8::ZERO);
    assert_eq!(dst.pixel(5, 5), Bgra8::ZERO);
    assert_ne!(dst.pixel(2, 2), Bgra8::ZERO);
}

#[test]
fn tiled_rois_match_a_single_full_roi() {
    // A deterministic but non-uniform source.
    let mut src = Surface::new(9, 7).unwrap();
    for y in 0..7u32 {
        for x in 0..9u32 {
            let v = ((x * 37 + y * 91) % 256) as u8;
            let a = ((x * 11 + y * 53) % 256) as u8;
            src.set_pixel(x, y, Bgra8::from_bgra(v.min(a), (v / 2).min(a), v.min(a), a));
        }
    }

    let mut whole = Surface::new(9, 7).unwrap();
    render_gaussian_blur(&src, &mut whole, &[src.bounds()], 2).unwrap();

    let mut tiled = Surface::new(9, 7).unwrap();
    let bands = crate::surface::region::split_rows(src.bounds(), 2);
    render_gaussian_blur(&src, &mut tiled, &bands, 2).unwrap();

    assert_eq!(whole, tiled);
}
