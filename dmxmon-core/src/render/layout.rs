//! Screen layout (pixels, landscape 320x240)

pub const TITLE: &str = "DMX512 MONITOR";
pub const TITLE_X: u16 = 10;
pub const TITLE_Y: u16 = 10;
pub const TITLE_SCALE: u8 = 2;

pub const STATUS_X: u16 = 10;
pub const STATUS_Y: u16 = 30;
pub const STATUS_W: u16 = 300;
pub const STATUS_H: u16 = 15;
pub const STATUS_LIVE: &str = "STATUS: RECEIVING DATA";
pub const STATUS_WAITING: &str = "STATUS: WAITING FOR DATA";

/// Top of the first fixture row
pub const ROW_TOP: u16 = 48;
/// Vertical distance between fixture rows
pub const ROW_STRIDE: u16 = 42;

pub const LABEL_X: u16 = 10;
pub const ADDRESS_OFFSET: u16 = 13;
pub const DATA_LABEL_OFFSET: u16 = 26;
pub const DATA_LABEL: &str = "Data:";

pub const DATA_X: u16 = 55;
pub const DATA_OFFSET: u16 = 27;
pub const DATA_W: u16 = 230;
pub const DATA_H: u16 = 15;
/// Channel values shown per fixture
pub const DATA_PREVIEW_CHANNELS: usize = 8;

/// Data lines are repainted at least this often
pub const DATA_REFRESH_MS: u32 = 2000;

/// Top of the row for fixture `index`
pub fn row_y(index: usize) -> u16 {
    let offset = (index as u32).saturating_mul(ROW_STRIDE as u32);
    (ROW_TOP as u32)
        .saturating_add(offset)
        .min(u16::MAX as u32) as u16
}
