use std::io::Cursor;

use crate::foundation::error::AnvilResult;
use crate::render::canvas::Canvas;

/// Encode a canvas as an 8-bit RGB PNG, flattened onto black.
pub fn encode_static(canvas: &Canvas) -> AnvilResult<Vec<u8>> {
    let rgb = canvas.to_rgb_image()?;
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
