use crate::planes::YuvPlanes;
use crate::{ConvertError, YuvColorInfo, YuvLayout};

/// Validated, immutable view of a YUV 4:2:0 image
///
/// The buffer is borrowed for the lifetime of the frame and never written to.
/// Bytes past [`YuvLayout::buffer_size`] are ignored.
#[derive(Debug, Clone, Copy)]
pub struct YuvFrame<'a> {
    layout: YuvLayout,
    data: &'a [u8],
    width: usize,
    height: usize,

    color: YuvColorInfo,
}

impl<'a> YuvFrame<'a> {
    /// Create a frame using full range BT.601, see [`YuvColorInfo::default`]
    pub fn new(
        layout: YuvLayout,
        data: &'a [u8],
        width: usize,
        height: usize,
    ) -> Result<Self, ConvertError> {
        layout.bounds_check(data, width, height)?;

        Ok(Self {
            layout,
            data,
            width,
            height,
            color: YuvColorInfo::default(),
        })
    }

    pub fn with_color(mut self, color: YuvColorInfo) -> Self {
        self.color = color;
        self
    }

    pub fn layout(&self) -> YuvLayout {
        self.layout
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color(&self) -> YuvColorInfo {
        self.color
    }

    /// Number of pixels, and so the required length of a destination buffer
    pub fn pixel_count(&self) -> usize {
        // Cannot overflow, checked on construction
        self.width * self.height
    }

    pub(crate) fn planes(&self) -> YuvPlanes<'a> {
        YuvPlanes::infer(self.layout, self.data, self.width, self.height)
    }
}
