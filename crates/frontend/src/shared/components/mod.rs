pub mod card_animated;
pub mod charts;
pub mod ui;

pub use card_animated::CardAnimated;
