use portrait_analyzer::RgbaBuffer;

/// Generates a simple front-facing portrait: skin-colored face disc, dark
/// hair block in the upper band, colored clothing block at the bottom, all
/// on a bright flat background.
pub fn portrait_rgba(width: usize, height: usize) -> RgbaBuffer {
    assert!(width >= 48 && height >= 48, "portrait needs room to draw");

    let mut buffer = RgbaBuffer::filled(width, height, [250, 250, 250, 255]).unwrap();

    // Hair: dark block across the upper band.
    let hair_top = height / 12;
    let hair_bottom = height / 4;
    for y in hair_top..hair_bottom {
        for x in width / 4..width * 3 / 4 {
            buffer.set_pixel(x, y, [60, 45, 40, 255]);
        }
    }

    // Face: skin-colored disc just below the hair.
    let cx = width as isize / 2;
    let cy = height as isize * 7 / 16;
    let radius = (width.min(height) as isize) * 3 / 16;
    for y in 0..height as isize {
        for x in 0..width as isize {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= radius * radius {
                buffer.set_pixel(x as usize, y as usize, [220, 180, 150, 255]);
            }
        }
    }

    // Clothing: saturated block along the bottom quarter.
    for y in height * 3 / 4..height {
        for x in width / 8..width * 7 / 8 {
            buffer.set_pixel(x, y, [80, 60, 120, 255]);
        }
    }

    buffer
}

/// Flat single-color image.
pub fn uniform_rgba(width: usize, height: usize, rgba: [u8; 4]) -> RgbaBuffer {
    RgbaBuffer::filled(width, height, rgba).unwrap()
}
