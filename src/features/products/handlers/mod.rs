pub mod product_handler;

pub use product_handler::{__path_create_product, create_product};
