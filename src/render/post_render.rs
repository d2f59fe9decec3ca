use image::RgbaImage;

/// Presentation effect applied to a composed frame.
///
/// Hooks are attached by the embedding application and never influence the
/// animation state.
pub trait PostRenderHook: Send + Sync {
    fn name(&self) -> &'static str;

    /// Rewrites the composed frame in place.
    fn apply(&self, canvas: &mut RgbaImage);
}

/// Dark, desaturated map look.
///
/// Composites the frame with opaque black in `color` mode (keeping only the
/// luminosity), overlays a light grey and finally inverts the result by a
/// fixed amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DarkMapFilter {
    /// Overlay source colour channel, in `[0, 1]`.
    overlay: f32,
    /// Inversion amount, `1.0` being a full inversion.
    invert: f32,
}

impl DarkMapFilter {
    pub fn new(overlay: f32, invert: f32) -> Self {
        Self { overlay: overlay.clamp(0.0, 1.0), invert: invert.clamp(0.0, 1.0) }
    }

    /// Luminosity of a colour as used by the `color` blend mode.
    fn luminosity(r: f32, g: f32, b: f32) -> f32 { 0.3 * r + 0.59 * g + 0.11 * b }

    /// `overlay` blend of backdrop `cb` with source `cs`.
    fn overlay(cb: f32, cs: f32) -> f32 {
        if cb <= 0.5 { 2.0 * cb * cs } else { 1.0 - 2.0 * (1.0 - cb) * (1.0 - cs) }
    }

    /// Maps one channel triple to the filtered grey value.
    pub fn filter_value(&self, r: u8, g: u8, b: u8) -> u8 {
        let lum = Self::luminosity(f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0);
        let overlaid = Self::overlay(lum, self.overlay);
        let inverted = self.invert * (1.0 - overlaid) + (1.0 - self.invert) * overlaid;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = (inverted.clamp(0.0, 1.0) * 255.0).round() as u8;
        value
    }
}

impl Default for DarkMapFilter {
    fn default() -> Self { Self::new(200.0 / 255.0, 0.99) }
}

impl PostRenderHook for DarkMapFilter {
    fn name(&self) -> &'static str { "dark-map" }

    fn apply(&self, canvas: &mut RgbaImage) {
        for pixel in canvas.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            let v = self.filter_value(r, g, b);
            pixel.0 = [v, v, v, a];
        }
    }
}
