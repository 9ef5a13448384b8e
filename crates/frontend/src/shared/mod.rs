pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod number_format;
pub mod sync;
