use super::*;

#[test]
fn corners_keep_the_background_gradient() {
    let mut text = Typesetter::builtin();
    let icon = render_icon(64, &mut text).unwrap();
    assert_eq!(icon.size(), Size::square(64));
    assert_eq!(icon.pixel(0, 0), Some([18, 20, 36, 255]));
    assert_eq!(icon.pixel(63, 0), Some([18, 20, 36, 255]));
}

#[test]
fn border_ring_is_translucent_blue() {
    let mut text = Typesetter::builtin();
    let icon = render_icon(256, &mut text).unwrap();
    // Left edge of the ring at x = 8, halfway down.
    let [r, g, b, _] = icon.pixel(8, 128).unwrap();
    assert!(b > r && b > g, "{r} {g} {b}");
    assert!(b < 200, "ring should not be opaque: {b}");
}

#[test]
fn resampled_icon_has_requested_size() {
    let mut text = Typesetter::builtin();
    let small = render_icon_resampled(128, &mut text).unwrap();
    assert_eq!(small.size(), Size::square(128));
    assert_eq!(small.pixel(0, 0).unwrap()[3], 255);
}
