use super::*;

#[test]
fn file_names_carry_their_dimensions() {
    for kind in AssetKind::ALL {
        let size = kind.size();
        let dims = format!("{}x{}", size.width, size.height);
        if kind != AssetKind::Promo {
            assert!(kind.file_name().contains(&dims), "{kind}");
        }
    }
}

#[test]
fn only_gifs_are_animated() {
    let animated: Vec<_> = AssetKind::ALL.into_iter().filter(|k| k.is_animated()).collect();
    assert_eq!(animated, vec![AssetKind::BannerGif, AssetKind::Promo]);
    for kind in animated {
        assert!(kind.file_name().ends_with(".gif"));
    }
    assert_eq!(AssetKind::Promo.duration_s(), Some(8.0));
}

#[test]
fn cli_names_parse() {
    use clap::ValueEnum as _;
    assert_eq!(
        AssetKind::from_str("banner-retina", false).unwrap(),
        AssetKind::BannerRetina
    );
    assert!(AssetKind::from_str("favicon", false).is_err());
}
