//! Container dimensions the list lays its items out in.

/// Padding insets in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const ZERO: Self = Self::uniform(0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Size and padding of the list container.
///
/// `width` and `height` are the full outer size. Items are placed starting at
/// the left padding edge and are measured to the padded content height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub padding: Insets,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            padding: Insets::ZERO,
        }
    }

    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Width available to items once horizontal padding is removed.
    pub fn render_width(&self) -> i32 {
        self.width - self.padding.left - self.padding.right
    }

    /// Height available to items once vertical padding is removed.
    pub fn render_height(&self) -> i32 {
        self.height - self.padding.top - self.padding.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_size_subtracts_padding() {
        let viewport = Viewport::new(320, 100).with_padding(Insets {
            left: 10,
            top: 4,
            right: 6,
            bottom: 2,
        });
        assert_eq!(viewport.render_width(), 304);
        assert_eq!(viewport.render_height(), 94);
    }
}
