// File: crates/chart-core/src/types.rs
// Summary: Shared sizes and paddings for rendering.

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Plot area `(left, top, right, bottom)` inside a `width` x `height` surface.
    /// Oversized insets saturate instead of wrapping.
    pub fn plot_rect(&self, width: i32, height: i32) -> (i32, i32, i32, i32) {
        (
            px(self.left),
            px(self.top),
            width.saturating_sub(px(self.right)),
            height.saturating_sub(px(self.bottom)),
        )
    }
}

#[inline]
fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_rect() {
        assert_eq!(Insets::default().plot_rect(WIDTH, HEIGHT), (72, 24, 1000, 584));
    }

    #[test]
    fn oversized_insets_saturate() {
        let insets = Insets::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        let (l, t, r, b) = insets.plot_rect(100, 50);
        assert_eq!((l, t), (i32::MAX, i32::MAX));
        assert_eq!((r, b), (100 - i32::MAX, 50 - i32::MAX));
        assert!(r < 0 && b < 0);
        assert_eq!(insets.plot_rect(-10, -10).2, i32::MIN);
    }
}
