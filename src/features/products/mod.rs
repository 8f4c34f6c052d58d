//! Product management feature.
//!
//! A product hangs off one category at any level of the hierarchy; the
//! category's depth-0 root is resolved at creation time and cached on the row.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/products` | Create product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProductService;
