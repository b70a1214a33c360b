pub mod resource;
pub mod catalog_data;
pub mod curriculum;
