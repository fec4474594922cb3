use super::*;
use crate::foundation::core::Size;
use crate::render::canvas::Canvas;
use crate::render::palette::Palette;

const BG: Rgba8 = Rgba8::rgb(0, 0, 0);

fn close(px: [u8; 4], c: Rgba8) -> bool {
    px[0].abs_diff(c.r) <= 2 && px[1].abs_diff(c.g) <= 2 && px[2].abs_diff(c.b) <= 2
}

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::filled(Size::new(w, h), BG).unwrap()
}

fn non_bg_bbox(c: &Canvas) -> Option<(u32, u32, u32, u32)> {
    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for y in 0..c.height() {
        for x in 0..c.width() {
            let px = c.pixel(x, y).unwrap();
            if px[0] > 8 || px[1] > 8 || px[2] > 8 {
                bbox = Some(match bbox {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
    }
    bbox
}

#[test]
fn anvil_parts_use_the_palette() {
    let pal = Palette::STORE.anvil;
    let mut c = canvas(200, 200);
    c.paint(|layer| {
        draw_anvil(layer, 100, 100, 40, &pal);
        Ok(())
    })
    .unwrap();

    // Face interior (between top highlight and bottom edge).
    assert!(close(c.pixel(90, 85).unwrap(), pal.steel));
    // Neck interior.
    assert!(close(c.pixel(100, 105).unwrap(), pal.dark));
    // Base interior below its highlight line.
    assert!(close(c.pixel(100, 120).unwrap(), pal.steel));
    // Heel sits at the right end of the neck row.
    assert!(close(c.pixel(135, 105).unwrap(), pal.steel));
    // Horn extends left of the face.
    assert!(close(c.pixel(38, 80).unwrap(), pal.steel));
}

#[test]
fn anvil_extent_follows_size() {
    let pal = Palette::STORE.anvil;
    let mut c = canvas(200, 200);
    c.paint(|layer| {
        draw_anvil(layer, 100, 100, 40, &pal);
        Ok(())
    })
    .unwrap();
    let (x0, y0, x1, y1) = non_bg_bbox(&c).unwrap();
    // Horn tip at cx - 5s/4 - 3s/4 = 20, right edge at cx + s = 140.
    assert!((19..=21).contains(&x0), "x0 {x0}");
    assert!((140..=141).contains(&x1), "x1 {x1}");
    // Face top at cy - 3s/4 = 70, base bottom at cy + s/3 + s/4 = 123.
    assert!((69..=71).contains(&y0), "y0 {y0}");
    assert!((123..=124).contains(&y1), "y1 {y1}");
}

#[test]
fn zero_size_shapes_draw_nothing() {
    let mut c = canvas(50, 50);
    let layer = {
        let mut layer = c.layer();
        draw_anvil(&mut layer, 25, 25, 0, &Palette::STORE.anvil);
        draw_spark(&mut layer, 25, 25, 0, Palette::STORE.orange);
        draw_shield(&mut layer, 25, 25, -3, Palette::STORE.green);
        layer
    };
    assert!(layer.is_empty());
    c.composite(layer).unwrap();
    assert!(non_bg_bbox(&c).is_none());
}

#[test]
fn spark_is_a_star_not_a_diamond() {
    let orange = Palette::STORE.orange;
    let mut c = canvas(60, 60);
    c.paint(|layer| {
        draw_spark(layer, 30, 30, 20, orange);
        Ok(())
    })
    .unwrap();
    assert!(close(c.pixel(30, 30).unwrap(), orange));
    // Along the axes the star reaches far out.
    assert!(close(c.pixel(30, 13).unwrap(), orange));
    assert!(close(c.pixel(46, 30).unwrap(), orange));
    // The diagonal at the same distance is empty (short points).
    assert!(close(c.pixel(42, 42).unwrap(), BG));
    let (x0, y0, x1, y1) = non_bg_bbox(&c).unwrap();
    assert!((9..=11).contains(&x0) && (49..=50).contains(&x1));
    assert!((9..=11).contains(&y0) && (49..=50).contains(&y1));
}

#[test]
fn shield_has_body_and_checkmark() {
    let green = Palette::PROMO.green;
    let mut c = canvas(80, 80);
    c.paint(|layer| {
        draw_shield(layer, 40, 40, 30, green);
        Ok(())
    })
    .unwrap();
    assert!(close(c.pixel(40, 20).unwrap(), green));
    assert!(close(c.pixel(15, 40).unwrap(), green));
    let white_pixels = (0..80)
        .flat_map(|y| (0..80).map(move |x| (x, y)))
        .filter(|&(x, y)| {
            let px = c.pixel(x, y).unwrap();
            px[0] > 240 && px[1] > 240 && px[2] > 240
        })
        .count();
    assert!(white_pixels > 10, "checkmark pixels {white_pixels}");
}

#[test]
fn particle_alpha_is_capped() {
    let blue = Palette::PROMO.blue;
    let mut c = canvas(40, 40);
    let p = Particle {
        base: Point::new(20.0, 20.0),
        speed: 1.0,
        phase_frames: 0,
    };
    c.paint(|layer| {
        draw_particle(layer, &p, 0, 96, 120.0, blue);
        Ok(())
    })
    .unwrap();
    let px = c.pixel(20, 20).unwrap();
    // 150/255 of the particle color over black.
    assert!(px[2].abs_diff(150) <= 3, "{px:?}");
    assert!(px[0].abs_diff(41) <= 3, "{px:?}");
}

#[test]
fn pixel_helpers_use_inclusive_corners() {
    let r = rounded_rect_px(10, 10, 19, 14, 100.0);
    assert_eq!(r.rect().width(), 10.0);
    assert_eq!(r.rect().height(), 5.0);
    let e = ellipse_px(0, 0, 6, 6);
    assert_eq!(e.center(), Point::new(3.5, 3.5));
}

#[test]
fn outline_stays_inside_its_box() {
    let blue = Palette::STORE.blue;
    let mut c = canvas(40, 40);
    c.paint(|layer| {
        outline_rounded_rect_px(layer, 5, 5, 34, 34, 4.0, 2.0, blue);
        Ok(())
    })
    .unwrap();
    // Straight edge, two pixels thick, starting at the box edge.
    assert!(close(c.pixel(20, 5).unwrap(), blue));
    assert!(close(c.pixel(20, 6).unwrap(), blue));
    assert!(close(c.pixel(20, 7).unwrap(), BG));
    assert!(close(c.pixel(20, 4).unwrap(), BG));
    assert!(close(c.pixel(34, 20).unwrap(), blue));
    assert!(close(c.pixel(20, 20).unwrap(), BG));
}
