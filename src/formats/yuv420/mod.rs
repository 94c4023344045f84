mod read_2plane;
mod read_3plane;
mod to_rgb;

pub(crate) use read_2plane::Read2Plane;
pub(crate) use read_3plane::Read3Plane;
pub(crate) use to_rgb::ToRgb;

/// Four luma samples sharing one chroma pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Yuv420Block {
    pub(crate) y00: u8,
    pub(crate) y01: u8,
    pub(crate) y10: u8,
    pub(crate) y11: u8,

    pub(crate) u: u8,
    pub(crate) v: u8,
}

pub(crate) trait Yuv420Src {
    fn read(&mut self, x: usize, y: usize) -> Yuv420Block;
}
