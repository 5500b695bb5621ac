mod color;

pub use color::{hex_to_rgba, rgba_to_hex, srgb_bytes, srgb_to_rgba, Palette, DEFAULT_PALETTE};
