use crate::foundation::core::Rgba8;

/// Three-tone metal palette for the anvil silhouette plus its side-edge accent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnvilPalette {
    /// Body fill.
    pub steel: Rgba8,
    /// Neck fill and shadow lines.
    pub dark: Rgba8,
    /// Highlight lines.
    pub light: Rgba8,
    /// Neck side edge.
    pub edge: Rgba8,
}

/// Named brand colors for one family of assets.
///
/// The store assets and the promo GIF use slightly different tones; each keeps its own palette
/// while sharing every drawing primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Gradient color at the top edge.
    pub bg_top: Rgba8,
    /// Gradient color at the bottom edge.
    pub bg_bottom: Rgba8,
    /// Titles.
    pub white: Rgba8,
    /// Subtitles and body text.
    pub light_gray: Rgba8,
    /// Secondary text.
    pub mid_gray: Rgba8,
    /// Success accents and the shield.
    pub green: Rgba8,
    /// Primary accent.
    pub blue: Rgba8,
    /// Sparks and warm glow.
    pub orange: Rgba8,
    /// Spark accent.
    pub gold: Rgba8,
    /// Spark accent.
    pub cyan: Rgba8,
    /// Provider accent.
    pub purple: Rgba8,
    /// Anvil body colors.
    pub anvil: AnvilPalette,
}

impl Palette {
    /// Icon and banner palette.
    pub const STORE: Palette = Palette {
        bg_top: Rgba8::rgb(18, 20, 36),
        bg_bottom: Rgba8::rgb(24, 28, 52),
        white: Rgba8::rgb(255, 255, 255),
        light_gray: Rgba8::rgb(180, 185, 200),
        mid_gray: Rgba8::rgb(120, 125, 140),
        green: Rgba8::rgb(0, 200, 100),
        blue: Rgba8::rgb(70, 130, 255),
        orange: Rgba8::rgb(255, 160, 40),
        gold: Rgba8::rgb(255, 200, 60),
        cyan: Rgba8::rgb(0, 190, 210),
        purple: Rgba8::rgb(140, 80, 240),
        anvil: AnvilPalette {
            steel: Rgba8::rgb(170, 180, 200),
            dark: Rgba8::rgb(110, 120, 140),
            light: Rgba8::rgb(210, 218, 235),
            edge: Rgba8::rgb(120, 125, 140),
        },
    };

    /// Promotional GIF palette: deeper blue background, brighter accents.
    pub const PROMO: Palette = Palette {
        bg_top: Rgba8::rgb(18, 18, 40),
        bg_bottom: Rgba8::rgb(30, 30, 70),
        white: Rgba8::rgb(255, 255, 255),
        light_gray: Rgba8::rgb(180, 180, 200),
        mid_gray: Rgba8::rgb(120, 130, 150),
        green: Rgba8::rgb(0, 210, 100),
        blue: Rgba8::rgb(70, 130, 255),
        orange: Rgba8::rgb(255, 160, 40),
        gold: Rgba8::rgb(255, 200, 60),
        cyan: Rgba8::rgb(0, 200, 220),
        purple: Rgba8::rgb(160, 80, 255),
        anvil: AnvilPalette {
            steel: Rgba8::rgb(180, 190, 210),
            dark: Rgba8::rgb(120, 130, 150),
            light: Rgba8::rgb(220, 225, 240),
            edge: Rgba8::rgb(120, 130, 150),
        },
    };

    /// Accent colors used for rows of dots, in display order.
    pub fn dot_colors(&self) -> [Rgba8; 5] {
        [self.blue, self.purple, self.cyan, self.green, self.orange]
    }
}
