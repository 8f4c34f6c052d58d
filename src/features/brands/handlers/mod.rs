pub mod brand_handler;

pub use brand_handler::{__path_list_brands, list_brands};
