//! The traversal engine.
//!
//! Every participating object implements [`Accept`] by calling [`traverse`]
//! with itself, the visitor and a description of the children it owns. Leaves
//! pass [`Children::leaf`]; composites pass one or more [`Descriptor`]s.

mod accept;
mod children;
mod engine;


pub use accept::Accept;
pub use children::{Children, Descriptor};
pub use engine::traverse;
