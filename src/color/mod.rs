//! Pure color-space conversions over 8-bit sRGB-like input.
//!
//! All functions are total and stateless. The per-pixel classifiers in
//! [`crate::classify`] and the tone rules in [`crate::skin_tone`] are tuned
//! to these exact formulas, so the conversions intentionally match the
//! textbook coefficients rather than any color-managed pipeline.

pub mod hsl;
pub mod hsv;
pub mod lab;
pub mod ycbcr;

pub use self::hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use self::hsv::{rgb_to_hsv, Hsv};
pub use self::lab::{rgb_to_lab, Lab};
pub use self::ycbcr::{rgb_to_ycbcr, YCbCr};
