//! # composite-dispatch
//!
//! Enter/visit/exit dispatch over composite trees of typed objects.
//!
//! Nodes declare a static [`Type`] with an optional parent, and implement
//! [`Accept`] by handing themselves and their child collections to
//! [`traverse`]. Visitors supply handlers for any subset of
//! `(phase, type)` pairs; the engine walks each node's full ancestor chain so a
//! handler for a base type fires for every derived node.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! trace     → Generic tracing visitor, TraceOptions
//!   ↓
//! traverse  → Accept, Descriptor/Children, the traversal engine
//!   ↓
//! dispatch  → Phase, Context, HandlerTable, Visitor
//!   ↓
//! base      → Type, Typed/type_of, derivation
//! ```

// ============================================================================
// MODULES (dependency order: base → dispatch → traverse → trace)
// ============================================================================

/// Foundation types: Type descriptors, type identity, dispatch chains
pub mod base;

/// Handler lookup: phases, contexts, registration tables, the Visitor trait
pub mod dispatch;

/// Traversal engine: accept entry points and child descriptors
pub mod traverse;

/// Generic visitor that traces every handler call
pub mod trace;

mod error;

pub use base::{Type, Typed, derivation, type_of};
pub use dispatch::{Context, Handler, HandlerKey, HandlerTable, Phase, Visitor};
pub use error::{Result, VisitError};
pub use trace::{TraceEvent, TraceOptions, TraceVisitor, provide_trace_visitor};
pub use traverse::{Accept, Children, Descriptor, traverse};
