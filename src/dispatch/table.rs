//! Explicit per-visitor handler registration.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{trace, warn};

use super::{Context, HandlerKey, Phase};
use crate::base::Type;
use crate::error::Result;

/// A handler bound to one `(phase, type)` slot.
///
/// Receives the visitor, the node being traversed and the call context.
pub type Handler<V, N, I> = fn(&mut V, &N, Context<'_, I>) -> Result<()>;

/// Registration table mapping `(phase, type)` to a handler.
///
/// Built once per visitor type, usually into a lazily initialised static:
///
/// ```ignore
/// static HANDLERS: Lazy<HandlerTable<BookLister, dyn Toy, Content>> = Lazy::new(|| {
///     HandlerTable::new().visit(&BOOK, |lister, book, _| {
///         lister.titles.push(book.describe());
///         Ok(())
///     })
/// });
/// ```
pub struct HandlerTable<V: ?Sized, N: ?Sized, I> {
    handlers: FxHashMap<HandlerKey, Handler<V, N, I>>,
}

fn noop<V: ?Sized, N: ?Sized, I>(_: &mut V, _: &N, _: Context<'_, I>) -> Result<()> {
    Ok(())
}

impl<V: ?Sized, N: ?Sized, I> HandlerTable<V, N, I> {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register `handler` for `phase` on `ty`. A second registration for the
    /// same slot replaces the first.
    pub fn on(mut self, phase: Phase, ty: &'static Type, handler: Handler<V, N, I>) -> Self {
        let key = HandlerKey::new(phase, ty);
        if self.handlers.insert(key, handler).is_some() {
            warn!(handler = %key, "handler registered twice, keeping the latest");
        } else {
            trace!(handler = %key, "registered handler");
        }
        self
    }

    pub fn enter(self, ty: &'static Type, handler: Handler<V, N, I>) -> Self {
        self.on(Phase::Enter, ty, handler)
    }

    pub fn visit(self, ty: &'static Type, handler: Handler<V, N, I>) -> Self {
        self.on(Phase::Visit, ty, handler)
    }

    pub fn exit(self, ty: &'static Type, handler: Handler<V, N, I>) -> Self {
        self.on(Phase::Exit, ty, handler)
    }

    pub fn contains(&self, phase: Phase, ty: &Type) -> bool {
        self.handlers.contains_key(&HandlerKey::new(phase, ty))
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Find the handler for `phase` on `ty`, or a no-op when none is registered.
    pub fn lookup(&self, phase: Phase, ty: &Type) -> Handler<V, N, I> {
        self.handlers
            .get(&HandlerKey::new(phase, ty))
            .copied()
            .unwrap_or(noop::<V, N, I>)
    }

    /// Look up and invoke the handler for `phase` on `ty`.
    pub fn dispatch(
        &self,
        visitor: &mut V,
        phase: Phase,
        ty: &Type,
        node: &N,
        context: Context<'_, I>,
    ) -> Result<()> {
        (self.lookup(phase, ty))(visitor, node, context)
    }
}

impl<V: ?Sized, N: ?Sized, I> Default for HandlerTable<V, N, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized, N: ?Sized, I> fmt::Debug for HandlerTable<V, N, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self.handlers.keys().map(ToString::to_string).collect();
        keys.sort();
        f.debug_struct("HandlerTable").field("handlers", &keys).finish()
    }
}
