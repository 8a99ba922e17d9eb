//! Child collection descriptors.

/// One collection of children, tagged with the reason it is attached.
///
/// The intention is opaque to the engine: it is only threaded through to
/// handlers as [`Context::Intention`](crate::dispatch::Context::Intention).
#[derive(Debug)]
pub struct Descriptor<'a, N: ?Sized, I> {
    pub intention: I,
    vals: Option<Vec<&'a N>>,
}

impl<'a, N: ?Sized, I> Descriptor<'a, N, I> {
    /// Pair `intention` with an ordered sequence of children.
    pub fn new(intention: I, vals: impl IntoIterator<Item = &'a N>) -> Self {
        Self {
            intention,
            vals: Some(vals.into_iter().collect()),
        }
    }

    /// An intention with no children attached.
    ///
    /// Traversing a composite that hands this to the engine fails with
    /// [`VisitError::InvalidDescriptor`](crate::VisitError::InvalidDescriptor).
    pub fn detached(intention: I) -> Self {
        Self {
            intention,
            vals: None,
        }
    }

    pub fn vals(&self) -> Option<&[&'a N]> {
        self.vals.as_deref()
    }
}

/// All child collections of one node, in traversal order.
///
/// A leaf has none; an empty list is the same thing.
#[derive(Debug)]
pub struct Children<'a, N: ?Sized, I> {
    descriptors: Vec<Descriptor<'a, N, I>>,
}

impl<'a, N: ?Sized, I> Children<'a, N, I> {
    pub fn leaf() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor<'a, N, I>> {
        self.descriptors.iter()
    }
}

impl<N: ?Sized, I> Default for Children<'_, N, I> {
    fn default() -> Self {
        Self::leaf()
    }
}

impl<'a, N: ?Sized, I> From<Descriptor<'a, N, I>> for Children<'a, N, I> {
    fn from(descriptor: Descriptor<'a, N, I>) -> Self {
        Self {
            descriptors: vec![descriptor],
        }
    }
}

impl<'a, N: ?Sized, I> From<Vec<Descriptor<'a, N, I>>> for Children<'a, N, I> {
    fn from(descriptors: Vec<Descriptor<'a, N, I>>) -> Self {
        Self { descriptors }
    }
}

impl<'a, N: ?Sized, I> FromIterator<Descriptor<'a, N, I>> for Children<'a, N, I> {
    fn from_iter<T: IntoIterator<Item = Descriptor<'a, N, I>>>(iter: T) -> Self {
        Self {
            descriptors: iter.into_iter().collect(),
        }
    }
}
