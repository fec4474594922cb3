use super::*;
use crate::foundation::core::Size;

const TOP: Rgba8 = Rgba8::rgb(18, 20, 36);
const BOTTOM: Rgba8 = Rgba8::rgb(24, 28, 52);

#[test]
fn gradient_endpoints() {
    for height in [16u32, 100, 250, 500] {
        let mut c = Canvas::new(Size::new(8, height)).unwrap();
        draw_gradient(&mut c, TOP, BOTTOM);
        assert_eq!(c.pixel(0, 0), Some([18, 20, 36, 255]));
        assert_eq!(c.pixel(7, 0), Some([18, 20, 36, 255]));
        let [r, g, b, a] = c.pixel(3, height - 1).unwrap();
        assert_eq!(a, 255);
        assert!(r.abs_diff(BOTTOM.r) <= 1, "r {r} at h={height}");
        assert!(g.abs_diff(BOTTOM.g) <= 1, "g {g} at h={height}");
        assert!(b.abs_diff(BOTTOM.b) <= 1, "b {b} at h={height}");
    }
}

#[test]
fn gradient_rows_are_uniform_and_monotonic() {
    let mut c = Canvas::new(Size::new(5, 64)).unwrap();
    draw_gradient(&mut c, TOP, BOTTOM);
    let mut prev_b = 0u8;
    for y in 0..64 {
        let first = c.pixel(0, y).unwrap();
        for x in 1..5 {
            assert_eq!(c.pixel(x, y).unwrap(), first);
        }
        assert!(first[2] >= prev_b);
        prev_b = first[2];
    }
}

#[test]
fn gradient_handles_descending_channels() {
    let mut c = Canvas::new(Size::new(1, 10)).unwrap();
    draw_gradient(&mut c, Rgba8::rgb(30, 30, 70), Rgba8::rgb(18, 18, 40));
    assert_eq!(c.pixel(0, 0), Some([30, 30, 70, 255]));
    // 30 - 12 * 1 / 10 = 28.8, truncated.
    assert_eq!(c.pixel(0, 1).unwrap()[0], 28);
}

#[test]
fn ring_alpha_falls_off_quadratically_and_is_capped() {
    let g = Glow::new(Point::new(0.0, 0.0), 100, Rgba8::rgb(70, 130, 255), 0.2);
    assert_eq!(g.ring_alpha(100), 0);
    assert_eq!(g.ring_alpha(50), 12);
    assert_eq!(g.ring_alpha(0), 51);
    let strong = Glow::new(Point::new(0.0, 0.0), 100, Rgba8::rgb(70, 130, 255), 1.0);
    assert_eq!(strong.ring_alpha(0), 80);
    assert_eq!(strong.with_rings(3, 60).ring_alpha(0), 60);
}

#[test]
fn glow_brightens_center_more_than_edge_and_keeps_background() {
    let mut c = Canvas::filled(Size::new(101, 101), Rgba8::rgb(18, 20, 36)).unwrap();
    let glow = Glow::new(Point::new(50.0, 50.0), 50, Rgba8::rgb(70, 130, 255), 0.2);
    draw_radial_glow(&mut c, &glow).unwrap();

    let center = c.pixel(50, 50).unwrap();
    let mid = c.pixel(75, 50).unwrap();
    let corner = c.pixel(0, 0).unwrap();
    assert_eq!(center[3], 255);
    assert!(center[2] > mid[2], "center {center:?} mid {mid:?}");
    assert!(mid[2] >= 36);
    assert_eq!(corner, [18, 20, 36, 255]);
    // Translucent: the glow never reaches the pure glow color.
    assert!(center[2] < 255);
    assert!(center[0] > 18 && center[0] < 70);
}

#[test]
fn zero_intensity_glow_is_a_noop() {
    let mut c = Canvas::filled(Size::new(20, 20), Rgba8::rgb(1, 2, 3)).unwrap();
    let before = c.clone();
    let glow = Glow::new(Point::new(10.0, 10.0), 10, Rgba8::rgb(70, 130, 255), 0.0);
    draw_radial_glow(&mut c, &glow).unwrap();
    assert_eq!(c, before);
}

#[test]
fn glow_centered_off_canvas_is_clipped() {
    let mut c = Canvas::filled(Size::new(20, 20), Rgba8::rgb(1, 2, 3)).unwrap();
    let glow = Glow::new(Point::new(-500.0, -500.0), 10, Rgba8::rgb(70, 130, 255), 1.0);
    draw_radial_glow(&mut c, &glow).unwrap();
    assert_eq!(c.pixel(0, 0), Some([1, 2, 3, 255]));
}

#[test]
fn opaque_grid_hits_multiples_of_spacing() {
    let mut c = Canvas::filled(Size::new(130, 70), Rgba8::rgb(18, 20, 36)).unwrap();
    draw_grid(&mut c, 60, Rgba8::rgb(26, 28, 46)).unwrap();
    let on_line = c.pixel(60, 30).unwrap();
    let off_line = c.pixel(30, 30).unwrap();
    assert!(on_line[2] >= 44, "{on_line:?}");
    assert_eq!(off_line, [18, 20, 36, 255]);
}
