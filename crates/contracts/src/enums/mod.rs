pub mod product_category;

pub use product_category::ProductCategory;
