// 精靈表與精靈裁切
pub mod sheet;
pub mod sprite;

pub use sheet::{pack_argb, SpriteSheet};
pub use sprite::Sprite;
