use super::*;

fn close(px: [u8; 4], c: Rgba8) -> bool {
    px[0].abs_diff(c.r) <= 2 && px[1].abs_diff(c.g) <= 2 && px[2].abs_diff(c.b) <= 2
}

#[test]
fn layout_scales_with_height() {
    let base = BannerLayout::new(Size::new(772, 250));
    assert_eq!(base.scale, 1.0);
    assert_eq!((base.anvil_cx, base.anvil_cy, base.anvil_size), (131, 130, 40));
    assert_eq!(base.text_x, 247);
    assert_eq!(base.title, TextStyle::bold(48));

    let retina = BannerLayout::new(Size::new(1544, 500));
    assert_eq!(retina.scale, 2.0);
    assert_eq!((retina.anvil_cx, retina.anvil_cy, retina.anvil_size), (262, 260, 80));
    assert_eq!(retina.title, TextStyle::bold(96));
    assert_eq!(retina.sc(280.0), 560);
}

#[test]
fn banner_places_anvil_badge_and_dots() {
    let pal = Palette::STORE;
    let mut text = Typesetter::builtin();
    let c = render_banner(Size::new(772, 250), &mut text).unwrap();
    assert_eq!(c.size(), Size::new(772, 250));

    // Anvil face interior.
    assert!(close(c.pixel(121, 115).unwrap(), pal.anvil.steel));
    // Badge box below the pills: title 42 px tall with the built-in font, pills 17 px.
    assert!(close(c.pixel(252, 160).unwrap(), pal.green));
    // First and last decorative dots.
    assert!(close(c.pixel(732, 230).unwrap(), pal.blue));
    assert!(close(c.pixel(632, 230).unwrap(), pal.orange));
}

#[test]
fn retina_banner_doubles_positions() {
    let pal = Palette::STORE;
    let mut text = Typesetter::builtin();
    let c = render_banner(Size::new(1544, 500), &mut text).unwrap();
    assert!(close(c.pixel(1464, 460).unwrap(), pal.blue));
    assert!(close(c.pixel(242, 230).unwrap(), pal.anvil.steel));
}
