mod image;
mod role_card;

pub use image::*;
pub use role_card::*;
