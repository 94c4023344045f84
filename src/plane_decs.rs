/// Description for a Plane which can be used to implement bounds checks, plane splitting and buffer sizes.
///
/// Not used for the implementation of the format read, only utility functions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlaneDesc {
    pub(crate) width_op: Op,
    pub(crate) height_op: Op,
}

impl PlaneDesc {
    /// Number of bytes in a single row of this plane
    pub(crate) fn row_len(&self, width: usize) -> usize {
        self.width_op.op(width)
    }

    /// Number of rows of this plane
    pub(crate) fn rows(&self, height: usize) -> usize {
        self.height_op.op(height)
    }

    /// Number of bytes of this plane, `None` on overflow
    pub(crate) fn len(&self, width: usize, height: usize) -> Option<usize> {
        self.row_len(width).checked_mul(self.rows(height))
    }
}

/// Plane's number of bytes in relation to width / height
#[derive(Debug, Clone, Copy)]
pub(crate) enum Op {
    Div(usize),
    Identity,
}

impl Op {
    pub(crate) fn op(self, lhs: usize) -> usize {
        match self {
            Op::Div(rhs) => lhs / rhs,
            Op::Identity => lhs,
        }
    }
}

/// Y plane followed by a single plane of interleaved chroma pairs (NV12, NV21)
pub(crate) const SEMI_PLANAR_PLANES: [PlaneDesc; 2] = [
    PlaneDesc {
        width_op: Op::Identity,
        height_op: Op::Identity,
    },
    PlaneDesc {
        width_op: Op::Identity,
        height_op: Op::Div(2),
    },
];

/// Y plane followed by two quarter size chroma planes (I420, YV12)
pub(crate) const PLANAR_PLANES: [PlaneDesc; 3] = [
    PlaneDesc {
        width_op: Op::Identity,
        height_op: Op::Identity,
    },
    PlaneDesc {
        width_op: Op::Div(2),
        height_op: Op::Div(2),
    },
    PlaneDesc {
        width_op: Op::Div(2),
        height_op: Op::Div(2),
    },
];
