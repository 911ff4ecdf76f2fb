use crate::error::{Error, Result};

/// Owned, tightly packed `width * height` RGBA buffer (4 bytes per pixel).
///
/// Pipeline stages take the buffer by value and return a new one, so there is
/// a single owner at any point and no aliasing across stages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Wrap raw RGBA bytes. Fails with [`Error::InvalidImage`] on a zero
    /// dimension or a byte length other than `4 * width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || data.len() != width * height * 4 {
            return Err(Error::InvalidImage { width, height });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a buffer filled with a single RGBA value.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidImage { width, height });
        }
        let mut data = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
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
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&rgba);
    }

    #[inline]
    pub fn set_alpha(&mut self, x: usize, y: usize, alpha: u8) {
        let i = self.offset(x, y);
        self.data[i + 3] = alpha;
    }

    /// Row `y` as a packed RGBA byte slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width * 4;
        &self.data[start..start + self.width * 4]
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            RgbaBuffer::new(0, 4, vec![]),
            Err(Error::InvalidImage {
                width: 0,
                height: 4
            })
        );
        assert!(RgbaBuffer::filled(3, 0, [0; 4]).is_err());
    }

    #[test]
    fn rejects_wrong_byte_length() {
        assert!(RgbaBuffer::new(2, 2, vec![0u8; 15]).is_err());
        assert!(RgbaBuffer::new(2, 2, vec![0u8; 16]).is_ok());
    }

    #[test]
    fn pixel_accessors_round_trip() {
        let mut buf = RgbaBuffer::filled(3, 2, [1, 2, 3, 4]).unwrap();
        assert_eq!(buf.pixel(2, 1), [1, 2, 3, 4]);
        buf.set_pixel(2, 1, [9, 8, 7, 6]);
        assert_eq!(buf.pixel(2, 1), [9, 8, 7, 6]);
        buf.set_alpha(2, 1, 0);
        assert_eq!(buf.pixel(2, 1), [9, 8, 7, 0]);
    }
}
