//! RGB565 colours used on screen

use crate::traits::Rgb565;

pub const BLACK: Rgb565 = 0x0000;
pub const WHITE: Rgb565 = 0xFFFF;
pub const RED: Rgb565 = 0xF800;
pub const GREEN: Rgb565 = 0x07E0;
pub const YELLOW: Rgb565 = 0xFFE0;
pub const CYAN: Rgb565 = 0x07FF;
pub const GRAY: Rgb565 = 0x7BEF;
/// Pale warm white used for the "Data:" label
pub const LABEL: Rgb565 = 0xF79E;
