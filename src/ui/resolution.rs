use ratatui::layout::Rect;

#[derive(Clone, Debug)]
pub struct Resolution {
    pub width : u16,
    pub height : u16
}

// Enough to show both checkbox panels and the usage line
pub const MIN_RESOLUTION: Resolution = Resolution::new(60, 16);

impl Resolution {
    pub const fn new(width: u16, height: u16) -> Resolution {
        Resolution { width, height }
    }

    pub const fn from_rect(rect: Rect) -> Resolution {
        Resolution { width: rect.width, height: rect.height }
    }

    pub fn fits_within(&self, other: &Resolution) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}
