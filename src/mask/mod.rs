//! Boolean foreground masks and the morphological operations that refine
//! them.
//!
//! A [`Mask`] marks foreground (`true`) vs background (`false`) pixels and
//! always has the dimensions of the buffer it was derived from. It never owns
//! pixel data; it only indexes into a buffer by position.

pub mod morphology;

pub use self::morphology::{dilate, erode, fill_holes, refine, smooth_edges};

use crate::error::{Error, Result};

/// Boolean grid with the dimensions of its source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// All-false mask of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    /// Mask with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: bool) -> Self {
        Self {
            width,
            height,
            bits: vec![value; width * height],
        }
    }

    pub(crate) fn from_bits(width: usize, height: usize, bits: Vec<bool>) -> Self {
        debug_assert_eq!(bits.len(), width * height);
        Self {
            width,
            height,
            bits,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.bits[y * self.width + x] = value;
    }

    #[inline]
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of set pixels.
    pub fn count_true(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Fraction of set pixels in `[0, 1]`.
    pub fn coverage(&self) -> f32 {
        self.count_true() as f32 / self.bits.len() as f32
    }

    /// `true` iff every set pixel of `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &Mask) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .bits
                .iter()
                .zip(&other.bits)
                .all(|(&a, &b)| !a || b)
    }
}

/// Pixel-wise union of all input masks.
///
/// Fails with [`Error::DimensionMismatch`] if any mask disagrees on
/// dimensions, and [`Error::EmptyMaskSet`] when called with no masks.
pub fn combine(masks: &[&Mask]) -> Result<Mask> {
    let first = masks.first().ok_or(Error::EmptyMaskSet)?;
    for mask in &masks[1..] {
        if mask.dimensions() != first.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: first.dimensions(),
                actual: mask.dimensions(),
            });
        }
    }

    let mut bits = first.bits.clone();
    for mask in &masks[1..] {
        for (out, &bit) in bits.iter_mut().zip(&mask.bits) {
            *out |= bit;
        }
    }
    Ok(Mask::from_bits(first.width, first.height, bits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(width: usize, height: usize, set: &[(usize, usize)]) -> Mask {
        let mut m = Mask::new(width, height);
        for &(x, y) in set {
            m.set(x, y, true);
        }
        m
    }

    #[test]
    fn combine_is_pointwise_union() {
        let a = mask_from(3, 2, &[(0, 0), (1, 1)]);
        let b = mask_from(3, 2, &[(2, 0), (1, 1)]);
        let u = combine(&[&a, &b]).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(u.get(x, y), a.get(x, y) || b.get(x, y));
            }
        }
    }

    #[test]
    fn combine_is_commutative_and_associative() {
        let a = mask_from(4, 4, &[(0, 0), (3, 3)]);
        let b = mask_from(4, 4, &[(1, 2)]);
        let c = mask_from(4, 4, &[(2, 1), (0, 0)]);

        let abc = combine(&[&a, &b, &c]).unwrap();
        let cba = combine(&[&c, &b, &a]).unwrap();
        assert_eq!(abc, cba);

        let ab = combine(&[&a, &b]).unwrap();
        let ab_c = combine(&[&ab, &c]).unwrap();
        assert_eq!(abc, ab_c);
    }

    #[test]
    fn combine_rejects_mismatched_dimensions() {
        let a = Mask::new(3, 3);
        let b = Mask::new(4, 3);
        assert_eq!(
            combine(&[&a, &b]),
            Err(Error::DimensionMismatch {
                expected: (3, 3),
                actual: (4, 3),
            })
        );
    }

    #[test]
    fn combine_rejects_empty_input() {
        assert_eq!(combine(&[]), Err(Error::EmptyMaskSet));
    }

    #[test]
    fn coverage_counts_set_fraction() {
        let m = mask_from(2, 2, &[(0, 0)]);
        assert_eq!(m.count_true(), 1);
        assert!((m.coverage() - 0.25).abs() < f32::EPSILON);
    }
}
