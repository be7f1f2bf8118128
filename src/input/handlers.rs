//! Declarative registry of the input handlers wired for the active tool.
//!
//! Switching tools never toggles listeners one by one. The registry is
//! handed the complete set the next state needs and applies only the
//! difference, so a stale or duplicated handler cannot survive a transition.

use super::tool::Tool;
use log::debug;
use std::collections::BTreeSet;

/// Pointer event a handler responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Press,
    Move,
    Release,
}

/// One tool-specific pointer handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handler {
    pub tool: Tool,
    pub event: EventKind,
}

/// Set of handlers, ordered for stable logging and comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerSet(BTreeSet<Handler>);

impl HandlerSet {
    pub fn contains(&self, handler: &Handler) -> bool {
        self.0.contains(handler)
    }

    /// Registered handler for `event`, if any.
    pub fn handler_for(&self, event: EventKind) -> Option<Handler> {
        self.0.iter().copied().find(|h| h.event == event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Handler> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Handler> for HandlerSet {
    fn from_iter<I: IntoIterator<Item = Handler>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Handlers removed and added by one transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerDelta {
    pub removed: Vec<Handler>,
    pub added: Vec<Handler>,
}

/// Currently wired handlers.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    registered: HandlerSet,
}

impl HandlerRegistry {
    pub fn registered(&self) -> &HandlerSet {
        &self.registered
    }

    /// Replaces the registered set with `next`, removing before adding.
    pub fn transition(&mut self, next: HandlerSet) -> HandlerDelta {
        let removed: Vec<Handler> = self.registered.0.difference(&next.0).copied().collect();
        let added: Vec<Handler> = next.0.difference(&self.registered.0).copied().collect();

        for handler in &removed {
            self.registered.0.remove(handler);
        }
        for handler in &added {
            self.registered.0.insert(*handler);
        }

        debug!("Handler delta: -{:?} +{:?}", removed, added);
        debug_assert_eq!(self.registered, next);
        HandlerDelta { removed, added }
    }

    /// Handler that should receive `event`, if one is wired.
    pub fn dispatch_target(&self, event: EventKind) -> Option<Handler> {
        self.registered.handler_for(event)
    }
}
