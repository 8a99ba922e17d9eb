//! Runtime type identity for visitable objects.
//!
//! Every participating object belongs to exactly one [`Type`]. Types form a
//! single-inheritance chain that ends at a type declared with [`Type::root`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use tracing::trace;

/// A named node in a single-inheritance hierarchy.
///
/// Declare types once as `static` items:
///
/// ```
/// use composite::Type;
///
/// static TOY: Type = Type::root("Toy");
/// static BOOK: Type = Type::derived("Book", &TOY);
///
/// assert_eq!(BOOK.parent(), Some(&TOY));
/// assert!(TOY.is_root());
/// ```
///
/// The name doubles as the handler key, so it must be unique within a hierarchy.
/// Equality is identity: two distinct statics are different types even when
/// they share a name.
#[derive(Debug)]
pub struct Type {
    name: &'static str,
    parent: Option<&'static Type>,
}

impl Type {
    /// Declare a most-basal type. Ancestor walks stop here.
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// Declare a type derived from `parent`.
    pub const fn derived(name: &'static str, parent: &'static Type) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<&'static Type> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of steps to the root (0 for a root type).
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }

    /// Iterate over this type and its parents, self first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Check whether `other` is this type or one of its ancestors.
    pub fn is_a(&self, other: &Type) -> bool {
        self.ancestors().any(|ty| ty == other)
    }
}

/// Types are `static` items, so identity is the address, not the name.
impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self, state);
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Iterator returned by [`Type::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a Type>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Type;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.map(|parent| parent as &'a Type);
        Some(current)
    }
}

/// Implemented by every object that takes part in a traversal.
pub trait Typed {
    /// The most-derived type of this instance.
    fn ty(&self) -> &'static Type;
}

/// Resolve the most-derived type of an instance.
pub fn type_of<T: ?Sized + Typed>(instance: &T) -> &'static Type {
    let ty = instance.ty();
    trace!(type_name = ty.name(), "resolved instance type");
    ty
}
