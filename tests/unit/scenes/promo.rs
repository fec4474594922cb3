use super::*;
use crate::foundation::core::{Fps, FrameIndex};

fn close(px: [u8; 4], c: Rgba8) -> bool {
    px[0].abs_diff(c.r) <= 2 && px[1].abs_diff(c.g) <= 2 && px[2].abs_diff(c.b) <= 2
}

fn at(frame: u64) -> FrameTime {
    FrameTime {
        index: FrameIndex(frame),
        total_frames: 96,
        fps: Fps::whole(12).unwrap(),
    }
}

fn count_close(canvas: &Canvas, rows: std::ops::Range<u32>, c: Rgba8) -> usize {
    rows.flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| close(canvas.pixel(x, y).unwrap(), c))
        .count()
}

#[test]
fn timeline_splits_eight_seconds_into_three_scenes() {
    let promo = Promo::new().unwrap();
    let tl = promo.timeline();
    assert_eq!(tl.duration_s(), 8.0);
    assert_eq!(tl.require(at(29).secs()).unwrap().scene, PromoScene::Title);
    assert_eq!(tl.require(at(30).secs()).unwrap().scene, PromoScene::Features);
    assert_eq!(tl.require(at(65).secs()).unwrap().scene, PromoScene::Features);
    assert_eq!(tl.require(at(66).secs()).unwrap().scene, PromoScene::CallToAction);
    assert_eq!(tl.require(at(95).secs()).unwrap().scene, PromoScene::CallToAction);
}

#[test]
fn particle_field_is_staggered_along_the_bottom() {
    let promo = Promo::new().unwrap();
    let particles = promo.particles();
    assert_eq!(particles.len(), 8);
    for (i, p) in particles.iter().enumerate() {
        assert_eq!(p.base, Point::new(100.0 + i as f64 * 90.0, 380.0));
        assert_eq!(p.phase_frames, i as u64 * 10);
        assert!((p.speed - (0.7 + i as f64 * 0.1)).abs() < 1e-9);
    }
}

#[test]
fn badge_fades_in_after_one_second() {
    let promo = Promo::new().unwrap();
    let mut text = Typesetter::builtin();
    let before = promo.render_frame(at(6), &mut text).unwrap();
    let after = promo.render_frame(at(18), &mut text).unwrap();
    // Left padding of the badge, clear of its label.
    let g_before = before.pixel(280, 210).unwrap()[1];
    let g_after = after.pixel(280, 210).unwrap()[1];
    assert!(g_after > g_before + 100, "{g_before} -> {g_after}");
}

#[test]
fn feature_rows_settle_with_their_accent_dots() {
    let promo = Promo::new().unwrap();
    let pal = Palette::PROMO;
    let mut text = Typesetter::builtin();
    let frame = promo.render_frame(at(65), &mut text).unwrap();
    let expected = [pal.blue, pal.purple, pal.orange, pal.cyan];
    for (i, color) in expected.into_iter().enumerate() {
        let y = 90 + i as u32 * 72 + 16;
        assert!(close(frame.pixel(168, y).unwrap(), color), "row {i}");
    }
}

#[test]
fn score_bars_fill_during_the_reveal() {
    let promo = Promo::new().unwrap();
    let mut text = Typesetter::builtin();
    let start = promo.render_frame(at(31), &mut text).unwrap();
    let full = promo.render_frame(at(65), &mut text).unwrap();
    let empty = start.pixel(700, 107).unwrap();
    let filled = full.pixel(700, 107).unwrap();
    assert_ne!(empty, filled);
    assert!(filled[2] > empty[2] + 50);
}

#[test]
fn free_headline_grows_into_place() {
    let promo = Promo::new().unwrap();
    let green = Palette::PROMO.green;
    let mut text = Typesetter::builtin();
    let small = promo.render_frame(at(66), &mut text).unwrap();
    let large = promo.render_frame(at(80), &mut text).unwrap();
    let small_px = count_close(&small, 55..130, green);
    let large_px = count_close(&large, 55..130, green);
    assert!(small_px > 0);
    assert!(large_px > small_px * 2, "{small_px} vs {large_px}");
}

#[test]
fn download_button_appears_after_the_pricing_lines() {
    let promo = Promo::new().unwrap();
    let blue = Palette::PROMO.blue;
    let mut text = Typesetter::builtin();
    let before = promo.render_frame(at(75), &mut text).unwrap();
    let after = promo.render_frame(at(81), &mut text).unwrap();
    // Left padding of the button, inside it at every pulse phase.
    assert!(!close(before.pixel(165, 263).unwrap(), blue));
    assert!(close(after.pixel(165, 263).unwrap(), blue));
}
