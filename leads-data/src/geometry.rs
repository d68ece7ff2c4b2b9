//! Fixed card geometry, in CSS pixels.
//!
//! Every value here matches the background artwork and never depends on
//! what the card displays.

pub const CARD_WIDTH: u32 = 327;
pub const CARD_HEIGHT: u32 = 279;

pub const IMAGE_WIDTH: u32 = 112;
pub const IMAGE_HEIGHT: u32 = 118;
pub const IMAGE_SLOT: Rect = Rect::new(179, 81, IMAGE_WIDTH, Some(IMAGE_HEIGHT));
pub const IMAGE_RADIUS: u32 = 12;

pub const NAME: Rect = Rect::new(40, 120, 120, None);
pub const NAME_FONT_SIZE: u32 = 24;

/// An absolutely positioned box inside the card. Boxes without a height
/// grow with their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: Option<u32>,
}

impl Rect {
    pub const fn new(left: u32, top: u32, width: u32, height: Option<u32>) -> Self {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    pub fn style(&self) -> String {
        let mut style = format!(
            "position: absolute; left: {}px; top: {}px; width: {}px;",
            self.left, self.top, self.width
        );
        if let Some(height) = self.height {
            style.push_str(&format!(" height: {}px;", height));
        }
        style
    }
}

pub fn card_style() -> String {
    format!(
        "position: relative; width: {}px; height: {}px;",
        CARD_WIDTH, CARD_HEIGHT
    )
}

pub fn background_style() -> &'static str {
    "position: absolute; top: 0; left: 0; width: 100%; height: 100%; \
     user-select: none; pointer-events: none;"
}

pub fn name_style() -> String {
    format!(
        "{} z-index: 10; text-align: left; line-height: 1; font-size: {}px; color: #000;",
        NAME.style(),
        NAME_FONT_SIZE
    )
}

pub fn slot_style() -> String {
    format!(
        "{} z-index: 10; display: flex; align-items: center; justify-content: center; \
         border-radius: {}px; border: 1px solid #9ca3af; background-color: #d1d5db;",
        IMAGE_SLOT.style(),
        IMAGE_RADIUS
    )
}

pub fn image_style() -> String {
    format!(
        "object-fit: cover; width: 100%; height: 100%; border-radius: {}px;",
        IMAGE_RADIUS
    )
}
