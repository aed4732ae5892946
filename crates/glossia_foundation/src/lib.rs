//! Core types for the Glossia multilingual command parser.
//!
//! This crate provides:
//! - [`SemanticRole`] - Language-neutral argument slots of a command
//! - [`RoleValue`] - Classified role values (selector, literal, reference, ...)
//! - [`SemanticNode`] - The canonical parsed representation of one command
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod node;
pub mod role;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use node::SemanticNode;
pub use role::SemanticRole;
pub use value::{Literal, RoleValue, ValueKind};
