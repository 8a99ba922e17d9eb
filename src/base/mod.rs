//! Foundation types for dispatch.
//!
//! This module provides:
//! - [`Type`] - Static, single-inheritance type descriptors
//! - [`Typed`], [`type_of`] - Runtime type identity of an instance
//! - [`derivation`] - The dispatch chain of a type
//!
//! This module has NO dependencies on other modules of the crate.

mod hierarchy;
mod ty;


pub use hierarchy::derivation;
pub use ty::{Ancestors, Type, Typed, type_of};
