pub(crate) trait Image2x2Visitor {
    /// Visit the 2x2 block whose top left pixel is at `x`, `y`
    fn visit(&mut self, x: usize, y: usize);
}

#[inline(never)]
pub(crate) fn visit<R>(width: usize, height: usize, mut visitor: R)
where
    R: Image2x2Visitor,
{
    assert_eq!(width % 2, 0);
    assert_eq!(height % 2, 0);

    // Process 2 rows of pixels for iteration of this loop
    for y in (0..height).step_by(2) {
        for x in (0..width).step_by(2) {
            visitor.visit(x, y);
        }
    }
}
