/// `round(x * y / 255)` for 8-bit channel products.
pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Pixel-grid rectangle in the inclusive-corner convention used by the layouts:
/// `[x0, y0, x1, y1]` covers columns `x0..=x1` and rows `y0..=y1`.
pub(crate) fn px_rect(x0: i32, y0: i32, x1: i32, y1: i32) -> kurbo::Rect {
    kurbo::Rect::new(
        f64::from(x0.min(x1)),
        f64::from(y0.min(y1)),
        f64::from(x0.max(x1) + 1),
        f64::from(y0.max(y1) + 1),
    )
}

/// Scale a design-space length (defined at 250 px banner height) and truncate.
pub(crate) fn scaled(v: f64, scale: f64) -> i32 {
    (v * scale) as i32
}
