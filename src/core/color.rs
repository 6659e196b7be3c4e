/// An opaque sRGB color; alpha is supplied at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba()` string with the given alpha, clamped to [0, 1] and
    /// printed with three decimals.
    pub fn css_rgba(&self, alpha: f32) -> String {
        let a = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, a)
    }
}

// Teal, sky and mint
pub const PALETTE: [Rgb; 3] = [
    Rgb::new(76, 175, 147),
    Rgb::new(98, 200, 221),
    Rgb::new(136, 212, 171),
];
