use super::{Context, Phase};
use crate::base::Type;
use crate::error::Result;

/// A visitor over trees whose nodes are viewed as `N`.
///
/// The engine calls [`Visitor::dispatch`] once for every `(phase, type)` pair
/// in a node's dispatch chain. Implementations decide which pairs do anything;
/// everything else must succeed silently. The trait is object safe so nodes can
/// accept `&mut dyn Visitor<N, Intention = I>`.
///
/// Most visitors forward to a static [`HandlerTable`](super::HandlerTable):
///
/// ```ignore
/// impl Visitor<dyn Toy> for BookLister {
///     type Intention = Content;
///
///     fn dispatch(&mut self, phase: Phase, ty: &'static Type, node: &dyn Toy,
///                 context: Context<'_, Content>) -> Result<()> {
///         HANDLERS.dispatch(self, phase, ty, node, context)
///     }
/// }
/// ```
pub trait Visitor<N: ?Sized> {
    /// Tag type that composites attach to their child collections.
    type Intention;

    fn dispatch(
        &mut self,
        phase: Phase,
        ty: &'static Type,
        node: &N,
        context: Context<'_, Self::Intention>,
    ) -> Result<()>;
}
