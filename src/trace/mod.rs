//! A visitor that handles every phase of every type.
//!
//! Useful for inspecting how a tree is walked: each handler call becomes a
//! [`TraceEvent`], emitted through `tracing` and optionally kept in memory.
//! Events are nested by composite depth: the depth grows once a composite's
//! most-derived type has been entered with an intention, and shrinks again
//! before the matching exit.

mod options;


use std::fmt;
use std::marker::PhantomData;

use tracing::{Level, debug, error, info, trace, warn};

use crate::base::{Type, Typed, type_of};
use crate::dispatch::{Context, HandlerKey, Phase, Visitor};
use crate::error::Result;
pub use options::TraceOptions;

/// One handler call observed by a [`TraceVisitor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub phase: Phase,
    pub type_name: &'static str,
    /// Rendered intention, `None` for the neutral pass
    pub context: Option<String>,
    pub depth: usize,
}

impl TraceEvent {
    pub fn key(&self) -> HandlerKey {
        HandlerKey {
            phase: self.phase,
            type_name: self.type_name,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(intention) => write!(f, "{} [{}]", self.key(), intention),
            None => write!(f, "{} [neutral]", self.key()),
        }
    }
}

/// Generic visitor over any node type whose intentions can be displayed.
#[derive(Debug)]
pub struct TraceVisitor<I> {
    options: TraceOptions,
    depth: usize,
    events: Vec<TraceEvent>,
    _intention: PhantomData<fn(&I)>,
}

impl<I> TraceVisitor<I> {
    pub fn new(options: TraceOptions) -> Self {
        Self {
            options,
            depth: 0,
            events: Vec::new(),
            _intention: PhantomData,
        }
    }

    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    /// Current composite nesting depth (0 between traversals).
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Recorded events rendered one per line, indented by depth.
    pub fn lines(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|event| format!("{}{}", self.options.indent(event.depth), event))
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.depth = 0;
    }

    fn emit(&mut self, event: TraceEvent) {
        let line = format!("{}{}", self.options.indent(event.depth), event);
        let level = self.options.level;
        if level == Level::ERROR {
            error!(target: "composite::trace", "{line}");
        } else if level == Level::WARN {
            warn!(target: "composite::trace", "{line}");
        } else if level == Level::INFO {
            info!(target: "composite::trace", "{line}");
        } else if level == Level::DEBUG {
            debug!(target: "composite::trace", "{line}");
        } else {
            trace!(target: "composite::trace", "{line}");
        }
        if self.options.record {
            self.events.push(event);
        }
    }
}

impl<I> Default for TraceVisitor<I> {
    fn default() -> Self {
        Self::new(TraceOptions::default())
    }
}

impl<N, I> Visitor<N> for TraceVisitor<I>
where
    N: ?Sized + Typed,
    I: fmt::Display,
{
    type Intention = I;

    fn dispatch(
        &mut self,
        phase: Phase,
        ty: &'static Type,
        node: &N,
        context: Context<'_, I>,
    ) -> Result<()> {
        let most_derived = type_of(node) == ty;
        let nested = !context.is_neutral() && most_derived;

        if nested && phase == Phase::Exit {
            self.depth = self.depth.saturating_sub(1);
        }
        self.emit(TraceEvent {
            phase,
            type_name: ty.name(),
            context: context.intention().map(ToString::to_string),
            depth: self.depth,
        });
        if nested && phase == Phase::Enter {
            self.depth += 1;
        }
        Ok(())
    }
}

/// A [`TraceVisitor`] with default options.
pub fn provide_trace_visitor<I>() -> TraceVisitor<I> {
    TraceVisitor::default()
}
