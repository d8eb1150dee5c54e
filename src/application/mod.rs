//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the two operations the HTTP
//! layer needs:
//!
//! - [`services::resolver::Resolver`] - Slug lookup with access logging
//! - [`services::creator::Creator`] - Validation and persistence of new links

pub mod services;
