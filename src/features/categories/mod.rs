//! Hierarchical category management.
//!
//! Categories form a single-parent forest persisted as one adjacency row per
//! non-root category with a cached depth. Creation is transactional (category
//! row plus relationship edge); the full hierarchy is read with one recursive
//! query and assembled in memory.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/categories` | Create root category or subcategory |
//! | GET | `/api/categories` | Full category forest |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
