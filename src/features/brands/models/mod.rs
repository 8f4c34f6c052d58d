mod brand;

pub use brand::{Brand, BrandStatus};
