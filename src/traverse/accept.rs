use crate::base::Typed;
use crate::error::Result;

/// The accept entry point of a node.
///
/// Leaves and composites alike forward to [`traverse`](super::traverse);
/// the engine recurses into children through this trait.
pub trait Accept<V: ?Sized>: Typed {
    fn accept(&self, visitor: &mut V) -> Result<()>;
}
