pub mod charts;
pub mod details;
pub mod list;
