//! Gamma lookup table for perceived brightness.

/// Gamma exponent that suits WS2812 parts.
pub const WS2812_GAMMA: f32 = 2.8;

/// Build a gamma table: `lut[v] = round((v / 255) ^ gamma * 255)`.
///
/// A `gamma` of `1.0` yields the identity table. The ends are pinned so
/// black stays black and full scale stays full scale.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gamma_lut(gamma: f32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (value, slot) in lut.iter_mut().enumerate() {
        let normalized = f32::from(value as u8) / 255.0;
        let corrected = libm::powf(normalized, gamma) * 255.0;
        *slot = libm::roundf(corrected).clamp(0.0, 255.0) as u8;
    }
    lut[0] = 0;
    lut[255] = 255;
    lut
}

/// Gamma table with [`WS2812_GAMMA`].
pub fn ws2812_lut() -> [u8; 256] {
    gamma_lut(WS2812_GAMMA)
}
