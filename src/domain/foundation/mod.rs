//! Foundation module - Shared domain primitives.
//!
//! Contains the aspect taxonomy, the aspect-indexed vector type, and the
//! validation errors that form the vocabulary of the career domain.

mod aspect;
mod aspect_vector;
mod errors;

pub use aspect::{Aspect, ASPECT_COUNT};
pub use aspect_vector::AspectVector;
pub use errors::ValidationError;
