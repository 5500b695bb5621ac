use crate::error::{GasketError, Result};

/// Normalized RGBA face colors, indexed by the face color index of a triangle
pub type Palette = [[f32; 4]; 4];

pub const DEFAULT_PALETTE: Palette = [
    [0.0, 1.0, 1.0, 1.0],
    [0.0, 0.5, 0.1, 1.0],
    [0.0, 1.0, 0.6, 1.0],
    [0.9, 0.3, 0.2, 1.0],
];

/// Convert a `#RRGGBB` color picker value to normalized RGBA with full alpha
pub fn hex_to_rgba(hex: &str) -> Result<[f32; 4]> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| GasketError::InvalidColor(hex.to_string()))?;

    let packed =
        u32::from_str_radix(digits, 16).map_err(|_| GasketError::InvalidColor(hex.to_string()))?;

    Ok(srgb_to_rgba([
        ((packed >> 16) & 255) as u8,
        ((packed >> 8) & 255) as u8,
        (packed & 255) as u8,
    ]))
}

/// Normalize color picker bytes, alpha is always opaque
pub fn srgb_to_rgba(rgb: [u8; 3]) -> [f32; 4] {
    [
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        1.0,
    ]
}

/// Inverse of [`hex_to_rgba`], alpha is dropped
pub fn rgba_to_hex(rgba: [f32; 4]) -> String {
    let [r, g, b] = srgb_bytes(rgba);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Quantize the RGB channels to bytes for color pickers
pub fn srgb_bytes(rgba: [f32; 4]) -> [u8; 3] {
    let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [quantize(rgba[0]), quantize(rgba[1]), quantize(rgba[2])]
}
