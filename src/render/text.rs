//! Font resolution, text measurement and text drawing.
//!
//! Outline fonts are shaped with Parley and rasterized as `vello_cpu` glyph runs. When no
//! candidate font file loads, the built-in bitmap font takes over so rendering never fails for
//! lack of fonts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{AnvilError, AnvilResult};
use crate::render::builtin_font;
use crate::render::canvas::Layer;

/// One font file to try, with the face index inside a collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontCandidate {
    /// Font file.
    pub path: PathBuf,
    /// Face index inside a collection; 0 for plain font files.
    #[serde(default)]
    pub index: u32,
}

impl FontCandidate {
    /// Candidate for face `index` of `path`.
    pub fn new(path: impl Into<PathBuf>, index: u32) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }
}

/// Ordered candidate lists for the regular and bold faces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontCandidates {
    /// Tried in order for regular labels.
    pub regular: Vec<FontCandidate>,
    /// Tried in order for bold labels.
    pub bold: Vec<FontCandidate>,
}

impl FontCandidates {
    /// No candidates: every label uses the built-in font.
    pub fn none() -> Self {
        Self {
            regular: Vec::new(),
            bold: Vec::new(),
        }
    }

    /// Candidate list for `weight`.
    pub fn for_weight(&self, weight: Weight) -> &[FontCandidate] {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }
}

impl Default for FontCandidates {
    fn default() -> Self {
        Self {
            regular: vec![
                FontCandidate::new("/System/Library/Fonts/Helvetica.ttc", 0),
                FontCandidate::new("/Library/Fonts/Arial.ttf", 0),
                FontCandidate::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf", 0),
                FontCandidate::new(
                    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                    0,
                ),
            ],
            bold: vec![
                FontCandidate::new("/System/Library/Fonts/Helvetica.ttc", 1),
                FontCandidate::new("/Library/Fonts/Arial Bold.ttf", 0),
                FontCandidate::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf", 0),
                FontCandidate::new(
                    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
                    0,
                ),
            ],
        }
    }
}

/// Font weight of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    /// Normal weight.
    Regular,
    /// Bold weight.
    Bold,
}

/// Requested pixel size and weight of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// Nominal font size in pixels.
    pub size_px: u32,
    /// Face weight.
    pub weight: Weight,
}

impl TextStyle {
    /// Regular weight at `size_px`.
    pub const fn regular(size_px: u32) -> Self {
        Self {
            size_px,
            weight: Weight::Regular,
        }
    }

    /// Bold weight at `size_px`.
    pub const fn bold(size_px: u32) -> Self {
        Self {
            size_px,
            weight: Weight::Bold,
        }
    }
}

/// Measured size of a label in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    /// Advance width.
    pub width: i32,
    /// Line height.
    pub height: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<TextBrushRgba8> for Rgba8 {
    fn from(b: TextBrushRgba8) -> Self {
        Rgba8::rgba(b.r, b.g, b.b, b.a)
    }
}

/// A face registered with the layout engine.
#[derive(Clone, Debug)]
pub struct OutlineFace {
    family: String,
    weight: parley::style::FontWeight,
    source: FontCandidate,
    data: vello_cpu::peniko::FontData,
}

impl OutlineFace {
    /// Family name the face registered under.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// File and face index the face was loaded from.
    pub fn source(&self) -> &FontCandidate {
        &self.source
    }

    /// Raw bytes of the font file.
    pub fn bytes(&self) -> &[u8] {
        self.data.data.data()
    }
}

/// Resolved face for one weight.
#[derive(Clone, Debug)]
pub enum Face {
    /// A font file shaped with Parley.
    Outline(OutlineFace),
    /// The 5x7 bitmap font.
    Builtin,
}

impl Face {
    /// True when no font file loaded for this weight.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Face::Builtin)
    }
}

/// Stateful helper for building Parley text layouts from registered font families.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register raw font bytes and return the family name and weight of face `index`.
    pub(crate) fn register(
        &mut self,
        font_bytes: Vec<u8>,
        index: u32,
    ) -> AnvilResult<(String, parley::style::FontWeight)> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);

        let (family_id, weight) = families
            .iter()
            .find_map(|(id, fonts)| {
                fonts
                    .iter()
                    .find(|f| f.index() == index)
                    .map(|f| (*id, f.weight()))
            })
            .ok_or_else(|| {
                AnvilError::validation(format!("font file has no face with index {index}"))
            })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AnvilError::validation("registered font family has no name"))?
            .to_string();

        Ok((family_name, weight))
    }

    /// Shape and lay out a single unwrapped line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        face: &OutlineFace,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> AnvilResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(AnvilError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(face.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(face.weight));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Measures and draws labels with the resolved regular and bold faces.
///
/// Layout contexts are reused across calls but keep no per-frame state, so one typesetter serves
/// every frame of every asset in a session.
pub struct Typesetter {
    engine: TextLayoutEngine,
    regular: Face,
    bold: Face,
}

impl Typesetter {
    /// Resolve both weights from `fonts`, falling back to the built-in face per weight.
    pub fn new(fonts: &FontCandidates) -> Self {
        let mut engine = TextLayoutEngine::new();
        let regular = resolve_face(&mut engine, fonts.for_weight(Weight::Regular));
        let bold = resolve_face(&mut engine, fonts.for_weight(Weight::Bold));
        Self {
            engine,
            regular,
            bold,
        }
    }

    /// Typesetter that only uses the built-in bitmap font.
    pub fn builtin() -> Self {
        Self::new(&FontCandidates::none())
    }

    /// Face resolved for `weight`.
    pub fn face(&self, weight: Weight) -> &Face {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }

    /// Advance width and line height of `text`.
    pub fn measure(&mut self, text: &str, style: TextStyle) -> AnvilResult<TextExtent> {
        match face_for(&self.regular, &self.bold, style.weight) {
            Face::Builtin => {
                let (w, h) = builtin_font::measure(text, builtin_font::scale_for(style.size_px));
                Ok(TextExtent {
                    width: w as i32,
                    height: h as i32,
                })
            }
            Face::Outline(face) => {
                let layout = self.engine.layout_line(
                    text,
                    face,
                    style.size_px as f32,
                    TextBrushRgba8::default(),
                )?;
                Ok(extent_of(&layout))
            }
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)` and return its extent.
    pub fn draw(
        &mut self,
        layer: &mut Layer,
        text: &str,
        x: i32,
        y: i32,
        style: TextStyle,
        color: Rgba8,
    ) -> AnvilResult<TextExtent> {
        match face_for(&self.regular, &self.bold, style.weight) {
            Face::Builtin => {
                let scale = builtin_font::scale_for(style.size_px);
                builtin_font::draw(layer, text, x, y, scale, color);
                let (w, h) = builtin_font::measure(text, scale);
                Ok(TextExtent {
                    width: w as i32,
                    height: h as i32,
                })
            }
            Face::Outline(face) => {
                let layout =
                    self.engine
                        .layout_line(text, face, style.size_px as f32, color.into())?;
                let origin = Point::new(f64::from(x), f64::from(y));
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let brush = run.style().brush;
                        // Absolute pen position: run offset plus the line baseline.
                        let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        layer.glyphs(
                            &face.data,
                            run.run().font_size(),
                            origin,
                            brush.into(),
                            glyphs,
                        );
                    }
                }
                Ok(extent_of(&layout))
            }
        }
    }

    /// Draw `text` horizontally centered in `[0, width)` at row `y`.
    pub fn draw_centered(
        &mut self,
        layer: &mut Layer,
        text: &str,
        width: i32,
        y: i32,
        style: TextStyle,
        color: Rgba8,
    ) -> AnvilResult<TextExtent> {
        let extent = self.measure(text, style)?;
        self.draw(layer, text, (width - extent.width) / 2, y, style, color)
    }
}

fn face_for<'a>(regular: &'a Face, bold: &'a Face, weight: Weight) -> &'a Face {
    match weight {
        Weight::Regular => regular,
        Weight::Bold => bold,
    }
}

fn extent_of(layout: &parley::Layout<TextBrushRgba8>) -> TextExtent {
    TextExtent {
        width: layout.width().ceil() as i32,
        height: layout.height().ceil() as i32,
    }
}

fn resolve_face(engine: &mut TextLayoutEngine, candidates: &[FontCandidate]) -> Face {
    for candidate in candidates {
        match load_outline(engine, candidate) {
            Ok(face) => {
                tracing::debug!(
                    path = %candidate.path.display(),
                    index = candidate.index,
                    family = %face.family,
                    "font resolved"
                );
                return Face::Outline(face);
            }
            Err(err) => {
                tracing::debug!(
                    path = %candidate.path.display(),
                    index = candidate.index,
                    error = %err,
                    "font candidate skipped"
                );
            }
        }
    }
    tracing::debug!("no font candidate loaded, using built-in bitmap font");
    Face::Builtin
}

fn load_outline(engine: &mut TextLayoutEngine, candidate: &FontCandidate) -> AnvilResult<OutlineFace> {
    let bytes = read_font(&candidate.path)?;
    let (family, weight) = engine.register(bytes.clone(), candidate.index)?;
    let data = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(bytes),
        candidate.index,
    );
    Ok(OutlineFace {
        family,
        weight,
        source: candidate.clone(),
        data,
    })
}

fn read_font(path: &Path) -> AnvilResult<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(AnvilError::validation("font file is empty"));
    }
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
