pub mod catalog;
pub mod navigation;
