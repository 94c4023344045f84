mod write;

pub(crate) use write::PackedWriter;

/// 2x2 block of clamped `[r, g, b]` pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RgbBlock {
    pub(crate) px00: [u8; 3],
    pub(crate) px01: [u8; 3],
    pub(crate) px10: [u8; 3],
    pub(crate) px11: [u8; 3],
}

pub(crate) trait RgbSrc {
    fn read(&mut self, x: usize, y: usize) -> RgbBlock;
}
