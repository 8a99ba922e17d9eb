use std::fmt;

/// The context value handed to every handler call.
///
/// The mainline pass of each node uses [`Context::Neutral`]; the pass that
/// brackets a child collection carries that collection's intention.
#[derive(Debug)]
pub enum Context<'a, I> {
    Neutral,
    Intention(&'a I),
}

impl<'a, I> Context<'a, I> {
    pub fn is_neutral(&self) -> bool {
        matches!(self, Context::Neutral)
    }

    pub fn intention(&self) -> Option<&'a I> {
        match *self {
            Context::Neutral => None,
            Context::Intention(intention) => Some(intention),
        }
    }
}

impl<I> Clone for Context<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Context<'_, I> {}

impl<I: PartialEq> PartialEq for Context<'_, I> {
    fn eq(&self, other: &Self) -> bool {
        self.intention() == other.intention()
    }
}

impl<I: fmt::Display> fmt::Display for Context<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Neutral => f.write_str("neutral"),
            Context::Intention(intention) => intention.fmt(f),
        }
    }
}
