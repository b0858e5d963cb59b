// Simple RGBA color struct, each channel a float in [0, 1].
// The host multiplies sprites by it, so alpha is blend opacity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BACKGROUND: Color = Color::new(0.19, 0.19, 0.19, 1.0);
    pub const HUD_PANEL: Color = Color::new(0.0, 0.0, 0.0, 0.5);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    // Picks from the palette using a host supplied index, wrapping it so a
    // misbehaving random source can't index out of bounds
    pub fn from_palette(index: i32) -> Color {
        PALETTE[index.rem_euclid(PALETTE.len() as i32) as usize]
    }
}

pub const PALETTE: [Color; 3] = [
    Color::new(1.0, 0.25, 0.25, 0.75),
    Color::new(0.25, 1.0, 0.25, 0.6),
    Color::new(0.25, 0.25, 1.0, 0.65),
];
