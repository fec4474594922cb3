use super::*;
use crate::foundation::core::Size;
use crate::render::canvas::Canvas;

#[test]
fn builtin_typesetter_measures_exactly() {
    let mut ts = Typesetter::builtin();
    assert!(ts.face(Weight::Regular).is_builtin());
    assert!(ts.face(Weight::Bold).is_builtin());
    assert_eq!(
        ts.measure("SA", TextStyle::bold(51)).unwrap(),
        TextExtent {
            width: 66,
            height: 42
        }
    );
    assert_eq!(ts.measure("", TextStyle::regular(18)).unwrap(), TextExtent::default());
}

#[test]
fn missing_and_corrupt_candidates_fall_back_to_builtin() {
    let dir = std::env::temp_dir().join(format!("anvilcast-text-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let garbage = dir.join("garbage.ttf");
    std::fs::write(&garbage, b"definitely not a font").unwrap();
    let empty = dir.join("empty.ttf");
    std::fs::write(&empty, b"").unwrap();

    let fonts = FontCandidates {
        regular: vec![
            FontCandidate::new(dir.join("does-not-exist.ttf"), 0),
            FontCandidate::new(&garbage, 0),
            FontCandidate::new(&empty, 0),
        ],
        bold: vec![FontCandidate::new(dir.join("nope.ttc"), 1)],
    };
    let mut ts = Typesetter::new(&fonts);
    assert!(ts.face(Weight::Regular).is_builtin());
    assert!(ts.face(Weight::Bold).is_builtin());
    assert_eq!(ts.measure("ab", TextStyle::regular(8)).unwrap().width, 11);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn centered_label_is_symmetric() {
    let mut ts = Typesetter::builtin();
    let mut c = Canvas::filled(Size::new(256, 80), Rgba8::rgb(0, 0, 0)).unwrap();
    let mut layer = c.layer();
    let extent = ts
        .draw_centered(
            &mut layer,
            "SA",
            256,
            25,
            TextStyle::bold(51),
            Rgba8::rgb(255, 255, 255),
        )
        .unwrap();
    c.composite(layer).unwrap();
    assert_eq!(extent.width, 66);

    let mut min_x = u32::MAX;
    let mut max_x = 0;
    for y in 0..80 {
        for x in 0..256 {
            if c.pixel(x, y).unwrap()[0] > 128 {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
            }
        }
    }
    // (256 - 66) / 2 = 95.
    assert_eq!(min_x, 95);
    assert_eq!(max_x, 95 + 66 - 1);
}

fn ink_bounds(c: &Canvas) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..c.height() {
        for x in 0..c.width() {
            if c.pixel(x, y).unwrap()[0] > 128 {
                let (x0, y0, x1, y1) = bounds.unwrap_or((x, y, x, y));
                bounds = Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y)));
            }
        }
    }
    bounds
}

#[test]
fn outline_label_lands_below_its_top_edge_and_centered() {
    let mut ts = Typesetter::new(&FontCandidates::default());
    if ts.face(Weight::Bold).is_builtin() {
        // No system font on this machine; the builtin path is covered above.
        return;
    }
    let mut c = Canvas::filled(Size::new(256, 120), Rgba8::rgb(0, 0, 0)).unwrap();
    let mut layer = c.layer();
    ts.draw_centered(
        &mut layer,
        "SA",
        256,
        25,
        TextStyle::bold(51),
        Rgba8::rgb(255, 255, 255),
    )
    .unwrap();
    c.composite(layer).unwrap();

    let (x0, y0, x1, y1) = ink_bounds(&c).expect("label left no ink");
    let center = (x0 + x1) as i32 / 2;
    assert!((center - 128).abs() <= 4, "ink spans x {x0}..{x1}");
    assert!(y0 >= 25, "ink starts at y {y0}");
    assert!(y1 < 25 + 60, "ink ends at y {y1}");
}

#[test]
fn draw_returns_the_measured_extent() {
    let mut ts = Typesetter::builtin();
    let c = Canvas::new(Size::new(100, 40)).unwrap();
    let mut layer = c.layer();
    let style = TextStyle::regular(16);
    let drawn = ts
        .draw(&mut layer, "Hi!", 3, 4, style, Rgba8::rgb(255, 255, 255))
        .unwrap();
    assert_eq!(drawn, ts.measure("Hi!", style).unwrap());
    assert!(!layer.is_empty());
}

#[test]
fn candidate_index_defaults_to_zero() {
    let c: FontCandidate = serde_json::from_str(r#"{"path":"/x/y.ttf"}"#).unwrap();
    assert_eq!(c, FontCandidate::new("/x/y.ttf", 0));
    assert!(serde_json::from_str::<FontCandidate>(r#"{"path":"a","weight":1}"#).is_err());
}

#[test]
fn default_candidates_pair_collection_faces() {
    let fonts = FontCandidates::default();
    assert_eq!(fonts.regular[0].index, 0);
    assert_eq!(fonts.bold[0].path, fonts.regular[0].path);
    assert_eq!(fonts.bold[0].index, 1);
}
