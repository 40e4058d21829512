//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Thin wrappers over `palette`'s WCAG 2.1 implementation so the rest of the
//! crate works with 8-bit sRGB values and `f64` ratios.

use palette::Srgb;
use palette::color_difference::Wcag21RelativeContrast;

/// Lowest possible contrast ratio (identical colors).
pub const MIN_RATIO: f64 = 1.0;
/// Highest possible contrast ratio (black on white).
pub const MAX_RATIO: f64 = 21.0;

/// WCAG relative luminance of an sRGB color, in `[0, 1]`.
pub fn relative_luminance(color: Srgb<u8>) -> f64 {
    color.into_format::<f64>().relative_luminance().luma
}

/// WCAG contrast ratio between two colors.
///
/// Symmetric in its arguments and always within `[1, 21]`.
///
/// # Example
///
/// ```
/// use palette::Srgb;
/// use gradecheck::wcag::contrast_ratio;
///
/// let black = Srgb::new(0u8, 0, 0);
/// let white = Srgb::new(255u8, 255, 255);
///
/// assert!((contrast_ratio(black, white) - 21.0).abs() < 1e-9);
/// assert_eq!(contrast_ratio(white, white), 1.0);
/// ```
pub fn contrast_ratio(a: Srgb<u8>, b: Srgb<u8>) -> f64 {
    a.into_format::<f64>()
        .relative_contrast(b.into_format())
        .clamp(MIN_RATIO, MAX_RATIO)
}
