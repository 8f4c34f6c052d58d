pub mod category_handler;

pub use category_handler::{
    __path_create_category, __path_get_hierarchy, create_category, get_hierarchy,
};
