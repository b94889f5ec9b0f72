//! Drawing surface trait
//!
//! The render tracker only ever fills rectangles and draws text. A
//! surface owns its bus and reports bus faults through its error type.

/// 16-bit RGB565 colour
pub type Rgb565 = u16;

/// Text colours and scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    /// Glyph colour
    pub foreground: Rgb565,
    /// Fill behind the text, if any
    pub background: Option<Rgb565>,
    /// Integer glyph scale (1 = 8x8 pixels)
    pub scale: u8,
}

impl TextStyle {
    /// Scale-1 text without a background fill
    pub const fn new(foreground: Rgb565) -> Self {
        Self {
            foreground,
            background: None,
            scale: 1,
        }
    }

    pub const fn with_background(mut self, background: Rgb565) -> Self {
        self.background = Some(background);
        self
    }

    pub const fn with_scale(mut self, scale: u8) -> Self {
        self.scale = scale;
        self
    }
}

/// Pixel-addressed drawing surface
///
/// Out-of-bounds coordinates are clipped, never reported as errors.
pub trait DrawSurface {
    /// Bus error type
    type Error;

    /// Surface size in pixels (width, height)
    fn size(&self) -> (u16, u16);

    /// Fill a rectangle with a solid colour
    ///
    /// A rectangle whose origin lies off the surface draws nothing; one that
    /// overhangs the edge is clipped.
    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565)
        -> Result<(), Self::Error>;

    /// Draw a line of 8x8 text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: u16, y: u16, style: TextStyle)
        -> Result<(), Self::Error>;

    /// Fill the whole surface
    fn clear(&mut self, color: Rgb565) -> Result<(), Self::Error> {
        let (w, h) = self.size();
        self.fill_rect(0, 0, w, h, color)
    }
}
