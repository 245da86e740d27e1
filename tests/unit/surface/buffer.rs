use super::*;

#[test]
fn rejects_zero_dimensions() {
    assert!(Surface::new(0, 4).is_err());
    assert!(Surface::new(4, 0).is_err());
}

#[test]
fn from_pixels_rejects_length_mismatch() {
    let data = vec![Bgra8::ZERO; 5];
    assert!(Surface::from_pixels(2, 3, data).is_err());
}

#[test]
fn pixels_are_row_major() {
    let mut s = Surface::new(3, 2).unwrap();
    let c = Bgra8::opaque(1, 2, 3);
    s.set_pixel(2, 1, c);
    assert_eq!(s.pixels()[5], c); // y * width + x
    assert_eq!(s.pixel(2, 1), c);
    assert_eq!(s.row(1)[2], c);
    assert_eq!(s.row(0)[2], Bgra8::ZERO);
}

#[test]
fn bounds_covers_the_whole_surface() {
    let s = Surface::new(7, 5).unwrap();
    assert_eq!(s.bounds(), RectI::new(0, 0, 7, 5));
}

#[test]
fn filled_sets_every_pixel() {
    let c = Bgra8::opaque(9, 9, 9);
    let s = Surface::filled(4, 4, c).unwrap();
    assert!(s.pixels().iter().all(|&p| p == c));
}
