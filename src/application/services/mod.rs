//! Business logic services for the application layer.

pub mod creator;
pub mod resolver;

pub use creator::{CreateLink, CreateOutcome, Creator, ShortLink};
pub use resolver::{Resolution, Resolver};
