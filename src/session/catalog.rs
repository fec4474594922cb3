use crate::foundation::core::Size;

/// One deliverable file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum AssetKind {
    /// 256x256 icon.
    #[value(name = "icon-256")]
    Icon256,
    /// 128x128 icon, downsampled from the 256 master.
    #[value(name = "icon-128")]
    Icon128,
    /// 772x250 banner.
    #[value(name = "banner")]
    Banner,
    /// 1544x500 banner.
    #[value(name = "banner-retina")]
    BannerRetina,
    /// 772x250 animated banner.
    #[value(name = "banner-gif")]
    BannerGif,
    /// 800x400 promo animation.
    #[value(name = "promo")]
    Promo,
}

impl AssetKind {
    /// Every asset, in render order.
    pub const ALL: [AssetKind; 6] = [
        AssetKind::Icon256,
        AssetKind::Icon128,
        AssetKind::Banner,
        AssetKind::BannerRetina,
        AssetKind::BannerGif,
        AssetKind::Promo,
    ];

    /// Output file name.
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Icon256 => "icon-256x256.png",
            AssetKind::Icon128 => "icon-128x128.png",
            AssetKind::Banner => "banner-772x250.png",
            AssetKind::BannerRetina => "banner-1544x500.png",
            AssetKind::BannerGif => "banner-772x250.gif",
            AssetKind::Promo => "spamanvil-promo.gif",
        }
    }

    /// Pixel size.
    pub fn size(self) -> Size {
        match self {
            AssetKind::Icon256 => Size::square(256),
            AssetKind::Icon128 => Size::square(128),
            AssetKind::Banner | AssetKind::BannerGif => Size::new(772, 250),
            AssetKind::BannerRetina => Size::new(1544, 500),
            AssetKind::Promo => Size::new(800, 400),
        }
    }

    /// Nominal length of an animated asset, in seconds.
    pub fn duration_s(self) -> Option<f64> {
        match self {
            AssetKind::BannerGif => Some(6.0),
            AssetKind::Promo => Some(8.0),
            _ => None,
        }
    }

    /// True for the GIF assets.
    pub fn is_animated(self) -> bool {
        self.duration_s().is_some()
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/catalog.rs"]
mod tests;
