//! Dispatch chain resolution.

use super::ty::Type;

/// The ordered chain of `ty` and all its ancestors, most-derived first.
///
/// Given `Grandchild -> Child -> Base`, `derivation(&GRANDCHILD)` yields
/// `[Grandchild, Child, Base]`. Recomputed on each call.
pub fn derivation(ty: &'static Type) -> Vec<&'static Type> {
    let mut chain = vec![ty];
    if let Some(parent) = ty.parent() {
        chain.extend(derivation(parent));
    }
    chain
}
