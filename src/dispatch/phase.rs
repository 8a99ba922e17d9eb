use std::fmt;

use crate::base::Type;

/// The three handler phases, in the order a node sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Enter,
    Visit,
    Exit,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Enter, Phase::Visit, Phase::Exit];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Enter => "enter",
            Phase::Visit => "visit",
            Phase::Exit => "exit",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one handler slot: a phase bound to a type name.
///
/// Renders as the conventional handler name, e.g. `visit_Book`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    pub phase: Phase,
    pub type_name: &'static str,
}

impl HandlerKey {
    pub fn new(phase: Phase, ty: &Type) -> Self {
        Self {
            phase,
            type_name: ty.name(),
        }
    }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.phase, self.type_name)
    }
}
