//! Handler lookup.
//!
//! A visitor supplies handlers for any subset of `(phase, type)` pairs.
//! Registration happens once per visitor type in a [`HandlerTable`]; lookups
//! for pairs that were never registered resolve to a no-op.

mod context;
mod phase;
mod table;
mod visitor;


pub use context::Context;
pub use phase::{HandlerKey, Phase};
pub use table::{Handler, HandlerTable};
pub use visitor::Visitor;
