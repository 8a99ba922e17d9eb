use super::{Accept, Children};
use crate::base::{Type, derivation, type_of};
use crate::dispatch::{Context, Phase, Visitor};
use crate::error::{Result, VisitError};

/// Run the full enter/visit/nested/exit sequence for `node`.
///
/// For a node with dispatch chain `[Derived, Base]` and one descriptor the
/// handler calls are:
///
/// ```text
/// enter_Base(neutral)  visit_Base(neutral)
/// enter_Derived(neutral)  visit_Derived(neutral)
///   enter_Base(intention)  enter_Derived(intention)
///     ...each child, fully traversed, in order...
///   exit_Derived(intention)  exit_Base(intention)
/// exit_Derived(neutral)  exit_Base(neutral)
/// ```
///
/// Every node gets the neutral pass exactly once, so a visitor that only
/// handles a shared base type sees leaves and composites alike. A visitor that
/// ignores the context sees a composite's enter/exit once more per descriptor.
///
/// Returns the visitor for chaining. Errors from handlers and children
/// propagate at once; calls already made are not undone.
pub fn traverse<'v, 'c, N, V>(
    node: &N,
    visitor: &'v mut V,
    children: impl Into<Children<'c, N, V::Intention>>,
) -> Result<&'v mut V>
where
    N: ?Sized + Accept<V> + 'c,
    V: ?Sized + Visitor<N>,
{
    let children = children.into();
    let chain = derivation(type_of(node));

    for &ty in chain.iter().rev() {
        visitor.dispatch(Phase::Enter, ty, node, Context::Neutral)?;
        visitor.dispatch(Phase::Visit, ty, node, Context::Neutral)?;
    }

    for (index, descriptor) in children.iter().enumerate() {
        let vals = descriptor.vals().ok_or_else(|| {
            VisitError::invalid_descriptor(most_derived(&chain), index, "no children attached")
        })?;
        let context = Context::Intention(&descriptor.intention);

        for &ty in chain.iter().rev() {
            visitor.dispatch(Phase::Enter, ty, node, context)?;
        }
        for &child in vals {
            child.accept(visitor)?;
        }
        for &ty in &chain {
            visitor.dispatch(Phase::Exit, ty, node, context)?;
        }
    }

    for &ty in &chain {
        visitor.dispatch(Phase::Exit, ty, node, Context::Neutral)?;
    }

    Ok(visitor)
}

fn most_derived(chain: &[&'static Type]) -> &'static str {
    chain.first().map(|ty| ty.name()).unwrap_or_default()
}
