use std::time::Instant;

use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
};
use img2cpp_core::{PackedBitmap, PreviewSession};
use log::info;

const DARK: u32 = 0xFF000000;
const LIGHT: u32 = 0xFFFFFFFF;

/// ARGB pixel buffer the packed frames are drawn into.
pub struct PreviewCanvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PreviewCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![LIGHT; width * height],
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn show(&mut self, bitmap: &PackedBitmap) {
        self.clear(BinaryColor::Off).ok();
        bitmap.draw(self, Point::zero()).ok();
    }
}

impl OriginDimensions for PreviewCanvas {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for PreviewCanvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x < 0 || coord.y < 0 {
                continue;
            }
            let (x, y) = (coord.x as usize, coord.y as usize);
            if x < self.width && y < self.height {
                self.pixels[y * self.width + x] = match color {
                    BinaryColor::On => DARK,
                    BinaryColor::Off => LIGHT,
                };
            }
        }
        Ok(())
    }
}

/// Window looping over the frames of a [`PreviewSession`].
pub struct MinifbPreview {
    window: minifb::Window,
    canvas: PreviewCanvas,
}

impl MinifbPreview {
    pub fn new(width: usize, height: usize) -> Result<Self, minifb::Error> {
        let options = minifb::WindowOptions {
            borderless: false,
            title: true,
            resize: true,
            scale: scale_for(width, height),
            ..minifb::WindowOptions::default()
        };
        let mut window = minifb::Window::new("img2cpp preview", width, height, options)?;
        window.set_target_fps(60);
        Ok(Self {
            window,
            canvas: PreviewCanvas::new(width, height),
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    fn present(&mut self, bitmap: &PackedBitmap) -> Result<(), minifb::Error> {
        self.canvas.show(bitmap);
        self.window.update_with_buffer(
            self.canvas.pixels(),
            self.canvas.width,
            self.canvas.height,
        )
    }

    /// Plays `session` until the window is closed. Space pauses and resumes.
    pub fn run(mut self, mut session: PreviewSession) -> Result<(), minifb::Error> {
        info!(
            "Previewing {} frames, Space to pause, Escape to quit",
            session.frames().len()
        );
        session.start();
        if let Some(frame) = session.current() {
            self.present(&frame.bitmap)?;
        }

        let mut last = Instant::now();
        while self.is_open() {
            if self.window.is_key_pressed(minifb::Key::Space, minifb::KeyRepeat::No) {
                if session.is_running() {
                    session.stop();
                } else {
                    session.start();
                }
            }

            let now = Instant::now();
            let changed = session.advance(now - last);
            last = now;

            match session.current() {
                Some(frame) if changed => self.present(&frame.bitmap)?,
                _ => self.window.update(),
            }
        }
        session.stop();
        Ok(())
    }
}

fn scale_for(width: usize, height: usize) -> minifb::Scale {
    match width.max(height) {
        0..=256 => minifb::Scale::X4,
        257..=512 => minifb::Scale::X2,
        _ => minifb::Scale::X1,
    }
}
