pub mod graphics;

use crate::error::DisplayError;

/// An sRGB colour with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

impl From<Rgb> for wgpu::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        // clear values are linear; the surface format is usually sRGB
        fn linear(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        wgpu::Color {
            r: linear(r),
            g: linear(g),
            b: linear(b),
            a: 1.0,
        }
    }
}

/// Whether a present call actually put a frame on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    Shown,
    /// The surface could not hand out a frame this time; nothing was shown.
    Skipped,
}

/// The drawable surface the display loop clears and presents.
pub trait Canvas {
    /// Sets the colour the whole surface is filled with on the next present.
    fn clear(&mut self, color: Rgb);

    /// Makes the cleared surface visible.
    fn present(&mut self) -> Result<Presented, DisplayError>;

    fn resize(&mut self, width: u32, height: u32);
}
