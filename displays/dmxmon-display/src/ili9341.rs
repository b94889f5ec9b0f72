//! ILI9341 TFT driver
//!
//! Landscape 320x240, RGB565. There is no frame buffer: every fill is
//! written straight to display RAM through an address window.

use dmxmon_core::traits::{DrawSurface, Rgb565, TextStyle};
use dmxmon_hal::{DisplayBus, OutputPin};
use embedded_hal::delay::DelayNs;

use crate::font::{glyph, GLYPH_SIZE};

/// Landscape width in pixels
pub const WIDTH: u16 = 320;
/// Landscape height in pixels
pub const HEIGHT: u16 = 240;

/// ILI9341 commands
pub mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const GAMSET: u8 = 0x26;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const PASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const PIXSET: u8 = 0x3A;
    pub const FRMCTR1: u8 = 0xB1;
    pub const DISCTRL: u8 = 0xB6;
    pub const PWCTR1: u8 = 0xC0;
    pub const PWCTR2: u8 = 0xC1;
    pub const VMCTR1: u8 = 0xC5;
    pub const VMCTR2: u8 = 0xC7;
    pub const PWCTRA: u8 = 0xCB;
    pub const PWCTRB: u8 = 0xCF;
    pub const PGAMCTRL: u8 = 0xE0;
    pub const NGAMCTRL: u8 = 0xE1;
    pub const DTCTRLA: u8 = 0xE8;
    pub const DTCTRLB: u8 = 0xEA;
    pub const PWRONCTRL: u8 = 0xED;
    pub const EN3G: u8 = 0xF2;
    pub const PUMPCTRL: u8 = 0xF7;
}

/// Register writes between software reset and sleep out
const INIT_SEQUENCE: &[(u8, &[u8])] = &[
    (cmd::PWCTRA, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    (cmd::PWCTRB, &[0x00, 0xC1, 0x30]),
    (cmd::DTCTRLA, &[0x85, 0x00, 0x78]),
    (cmd::DTCTRLB, &[0x00, 0x00]),
    (cmd::PWRONCTRL, &[0x64, 0x03, 0x12, 0x81]),
    (cmd::PUMPCTRL, &[0x20]),
    (cmd::PWCTR1, &[0x23]),
    (cmd::PWCTR2, &[0x10]),
    (cmd::VMCTR1, &[0x3E, 0x28]),
    (cmd::VMCTR2, &[0x86]),
    // Landscape, BGR
    (cmd::MADCTL, &[0x28]),
    // 16 bits per pixel
    (cmd::PIXSET, &[0x55]),
    (cmd::FRMCTR1, &[0x00, 0x18]),
    (cmd::DISCTRL, &[0x08, 0x82, 0x27]),
    (cmd::EN3G, &[0x00]),
    (cmd::GAMSET, &[0x01]),
    (
        cmd::PGAMCTRL,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    (
        cmd::NGAMCTRL,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
];

/// Pixels sent per bus write when streaming a fill
const FILL_CHUNK_PIXELS: usize = 64;

/// ILI9341 drawing surface
pub struct Ili9341<B, RST> {
    bus: B,
    rst: RST,
}

impl<B, RST> Ili9341<B, RST>
where
    B: DisplayBus,
    RST: OutputPin,
{
    /// Create a driver for a landscape 320x240 panel
    ///
    /// The geometry is fixed by the MADCTL value in the init sequence.
    /// Nothing is sent until [`initialize`](Self::initialize).
    pub fn new(bus: B, mut rst: RST) -> Self {
        rst.set_high();
        Self { bus, rst }
    }

    /// Bring the panel up: hardware reset, software reset, register
    /// setup, sleep out and display on
    ///
    /// Call once after power-up.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), B::Error> {
        self.rst.set_low();
        delay.delay_ms(20);
        self.rst.set_high();
        delay.delay_ms(150);

        self.bus.write_command(cmd::SWRESET)?;
        delay.delay_ms(150);

        for &(command, params) in INIT_SEQUENCE {
            self.bus.command(command, params)?;
        }

        self.bus.write_command(cmd::SLPOUT)?;
        delay.delay_ms(150);
        self.bus.write_command(cmd::DISPON)?;
        delay.delay_ms(50);
        Ok(())
    }

    /// Release the bus and reset pin
    pub fn release(self) -> (B, RST) {
        (self.bus, self.rst)
    }

    /// Address a w x h window at (x, y) and start a memory write
    ///
    /// `w` and `h` must be at least 1.
    fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<(), B::Error> {
        let x_end = x + w - 1;
        let y_end = y + h - 1;
        let [xs_hi, xs_lo] = x.to_be_bytes();
        let [xe_hi, xe_lo] = x_end.to_be_bytes();
        self.bus.command(cmd::CASET, &[xs_hi, xs_lo, xe_hi, xe_lo])?;
        let [ys_hi, ys_lo] = y.to_be_bytes();
        let [ye_hi, ye_lo] = y_end.to_be_bytes();
        self.bus.command(cmd::PASET, &[ys_hi, ys_lo, ye_hi, ye_lo])?;
        self.bus.write_command(cmd::RAMWR)
    }

    /// Blit one glyph as 1x1 fills, one per lit pixel
    fn draw_glyph(
        &mut self,
        ch: char,
        x: u32,
        y: u32,
        color: Rgb565,
        scale: u32,
    ) -> Result<(), B::Error> {
        let bitmap = glyph(ch);
        for (row, bits) in bitmap.iter().enumerate() {
            for col in 0..8u32 {
                if bits & (0x80 >> col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let px = x + col * scale + dx;
                        let py = y + row as u32 * scale + dy;
                        if px < WIDTH as u32 && py < HEIGHT as u32 {
                            self.fill_rect(px as u16, py as u16, 1, 1, color)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl<B, RST> DrawSurface for Ili9341<B, RST>
where
    B: DisplayBus,
    RST: OutputPin,
{
    type Error = B::Error;

    fn size(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb565) -> Result<(), B::Error> {
        if x >= WIDTH || y >= HEIGHT {
            return Ok(());
        }
        let w = w.min(WIDTH - x);
        let h = h.min(HEIGHT - y);
        if w == 0 || h == 0 {
            return Ok(());
        }

        self.set_window(x, y, w, h)?;

        let [hi, lo] = color.to_be_bytes();
        let mut chunk = [0u8; FILL_CHUNK_PIXELS * 2];
        for pair in chunk.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        let mut remaining = w as usize * h as usize;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK_PIXELS);
            self.bus.write_data(&chunk[..n * 2])?;
            remaining -= n;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16, style: TextStyle) -> Result<(), B::Error> {
        let scale = style.scale.max(1) as u32;
        let advance = GLYPH_SIZE as u32 * scale;

        if let Some(background) = style.background {
            let text_width = text.chars().count() as u32 * advance;
            let w = text_width.min(u16::MAX as u32) as u16;
            let h = advance.min(u16::MAX as u32) as u16;
            self.fill_rect(x, y, w, h, background)?;
        }

        for (i, ch) in text.chars().enumerate() {
            let char_x = x as u32 + i as u32 * advance;
            if char_x >= WIDTH as u32 {
                break;
            }
            self.draw_glyph(ch, char_x, y as u32, style.foreground, scale)?;
        }
        Ok(())
    }
}
