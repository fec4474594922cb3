use crate::foundation::core::{Point, Rgba8, Size};
use crate::foundation::error::{AnvilError, AnvilResult};
use crate::render::composite::over_in_place;

/// Curve flattening tolerance, in pixels.
const TOLERANCE: f64 = 0.1;

/// An owned raster frame: premultiplied RGBA8, row-major, tightly packed.
///
/// Pixel effects (gradients, glows) write into the buffer directly. Vector content is drawn into
/// a [`Layer`] and composited source-over with [`Canvas::composite`], so earlier content stays
/// visible through translucent shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    size: Size,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a fully transparent canvas.
    pub fn new(size: Size) -> AnvilResult<Self> {
        let size = size.validate()?;
        Ok(Self {
            size,
            data: vec![0; size.pixel_count() * 4],
        })
    }

    /// Allocate a canvas filled with one color.
    pub fn filled(size: Size, color: Rgba8) -> AnvilResult<Self> {
        let mut canvas = Self::new(size)?;
        canvas.fill(color);
        Ok(canvas)
    }

    /// Canvas dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Premultiplied pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Premultiplied RGBA at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = (y as usize * self.size.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Rgba8) {
        let premul = color.premultiplied();
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
    }

    /// Start an empty vector layer matching this canvas.
    pub fn layer(&self) -> Layer {
        // `validate` already bounded both sides to u16.
        Layer::new(self.size.width as u16, self.size.height as u16)
    }

    /// Rasterize `layer` and composite it over the current content.
    pub fn composite(&mut self, layer: Layer) -> AnvilResult<()> {
        if u32::from(layer.width) != self.size.width || u32::from(layer.height) != self.size.height
        {
            return Err(AnvilError::render("layer size does not match canvas"));
        }
        if layer.is_empty() {
            return Ok(());
        }
        let pixmap = layer.into_pixmap();
        over_in_place(&mut self.data, pixmap.data_as_u8_slice())
    }

    /// Draw into a fresh layer and composite it.
    pub fn paint(&mut self, draw: impl FnOnce(&mut Layer) -> AnvilResult<()>) -> AnvilResult<()> {
        let mut layer = self.layer();
        draw(&mut layer)?;
        self.composite(layer)
    }

    /// Lanczos3 resample to `size`.
    pub fn resized(&self, size: Size) -> AnvilResult<Self> {
        let size = size.validate()?;
        let src = image::RgbaImage::from_raw(self.size.width, self.size.height, self.data.clone())
            .ok_or_else(|| AnvilError::render("canvas buffer length mismatch"))?;
        let out = image::imageops::resize(
            &src,
            size.width,
            size.height,
            image::imageops::FilterType::Lanczos3,
        );
        Ok(Self {
            size,
            data: out.into_raw(),
        })
    }

    /// Flatten onto opaque black and drop alpha.
    ///
    /// Premultiplied channels already equal "over black", so no division is needed.
    pub fn to_rgb_image(&self) -> AnvilResult<image::RgbImage> {
        let mut rgb = Vec::with_capacity(self.size.pixel_count() * 3);
        for px in self.data.chunks_exact(4) {
            rgb.extend_from_slice(&px[..3]);
        }
        image::RgbImage::from_raw(self.size.width, self.size.height, rgb)
            .ok_or_else(|| AnvilError::render("rgb buffer length mismatch"))
    }

    /// Flatten onto opaque black, keeping a fully opaque alpha channel.
    pub fn to_rgba_image(&self) -> AnvilResult<image::RgbaImage> {
        let mut rgba = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        image::RgbaImage::from_raw(self.size.width, self.size.height, rgba)
            .ok_or_else(|| AnvilError::render("rgba buffer length mismatch"))
    }
}

/// A batch of vector draws recorded into a `vello_cpu` render context.
pub struct Layer {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    draws: usize,
}

impl Layer {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            draws: 0,
        }
    }

    /// Return `true` when nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.draws == 0
    }

    /// Fill any `kurbo` shape.
    pub fn fill(&mut self, shape: &impl kurbo::Shape, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        let path = bezpath_to_cpu(&shape.to_path(TOLERANCE));
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&path);
        self.draws += 1;
    }

    /// Stroke the outline of any `kurbo` shape with square caps.
    pub fn stroke(&mut self, shape: &impl kurbo::Shape, width: f64, color: Rgba8) {
        if width <= 0.0 {
            return;
        }
        let style = kurbo::Stroke::new(width).with_caps(kurbo::Cap::Square);
        let outline = kurbo::stroke(
            shape.path_elements(TOLERANCE),
            &style,
            &kurbo::StrokeOpts::default(),
            TOLERANCE,
        );
        self.fill(&outline, color);
    }

    /// Fill a closed polygon.
    pub fn polygon(&mut self, points: &[Point], color: Rgba8) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = kurbo::BezPath::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        path.close_path();
        self.fill(&path, color);
    }

    /// Pixel-grid line between integer pixel coordinates, centered on the pixel rows/columns.
    pub fn line_px(&mut self, from: (i32, i32), to: (i32, i32), width: f64, color: Rgba8) {
        let a = Point::new(f64::from(from.0) + 0.5, f64::from(from.1) + 0.5);
        let b = Point::new(f64::from(to.0) + 0.5, f64::from(to.1) + 0.5);
        self.stroke(&kurbo::Line::new(a, b), width, color);
    }

    /// Connected pixel-grid polyline.
    pub fn polyline_px(&mut self, points: &[(i32, i32)], width: f64, color: Rgba8) {
        for pair in points.windows(2) {
            self.line_px(pair[0], pair[1], width, color);
        }
    }

    /// Axis-aligned rectangle fill without curve flattening.
    pub fn fill_rect(&mut self, rect: kurbo::Rect, color: Rgba8) {
        if color.a == 0 || rect.area() <= 0.0 {
            return;
        }
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
        self.draws += 1;
    }

    /// Fill a shaped glyph run whose glyph positions are relative to `origin`.
    pub(crate) fn glyphs(
        &mut self,
        font: &vello_cpu::peniko::FontData,
        font_size: f32,
        origin: Point,
        color: Rgba8,
        glyphs: impl Iterator<Item = vello_cpu::Glyph>,
    ) {
        if color.a == 0 {
            return;
        }
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        self.ctx.set_paint(paint(color));
        self.ctx
            .glyph_run(font)
            .font_size(font_size)
            .fill_glyphs(glyphs);
        self.draws += 1;
    }

    fn into_pixmap(mut self) -> vello_cpu::Pixmap {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap
    }
}

fn paint(color: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
