//! Per-pixel color predicates and the full-image mask passes built on them.
//!
//! Each pass scans the whole buffer independently and produces a [`Mask`];
//! there is no shared accumulator, so rows are classified in parallel with
//! deterministic output.

pub mod clothing;
pub mod hair;
pub mod skin;

pub use self::clothing::{clothing_mask, is_clothing_pixel};
pub use self::hair::{hair_mask, is_hair_pixel, HAIR_BAND_BOTTOM, HAIR_BAND_TOP};
pub use self::skin::{is_skin_color, skin_mask};
