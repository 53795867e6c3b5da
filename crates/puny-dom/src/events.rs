//! EventTarget
//!
//! Flat per-node listener registry. Dispatch runs the target's own handlers
//! for the event type in registration order; there is no capture or bubbling.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{DomTree, NodeId};

/// Listener callback, receives the tree and the dispatch target
pub type EventHandler = Rc<dyn Fn(&mut DomTree, NodeId)>;

/// Event passed to `dispatch_event`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    event_type: String,
}

impl Event {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }
}

/// Listener registry, keyed by event type
#[derive(Clone, Default)]
pub struct EventTarget {
    listeners: HashMap<String, Vec<EventHandler>>,
}

impl EventTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event_type`; duplicates are kept and all run
    pub fn add_event_listener(&mut self, event_type: &str, handler: EventHandler) {
        self.listeners
            .entry(event_type.to_string())
            .or_default()
            .push(handler);
    }

    /// Remove the first registration of `handler` (by identity).
    ///
    /// Returns whether anything was removed.
    pub fn remove_event_listener(&mut self, event_type: &str, handler: &EventHandler) -> bool {
        let Some(handlers) = self.listeners.get_mut(event_type) else {
            return false;
        };
        match handlers.iter().position(|h| Rc::ptr_eq(h, handler)) {
            Some(index) => {
                handlers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Snapshot of the handlers registered for `event_type`
    pub fn listeners(&self, event_type: &str) -> Vec<EventHandler> {
        self.listeners.get(event_type).cloned().unwrap_or_default()
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.get(event_type).map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event_type, handlers) in &self.listeners {
            map.entry(event_type, &handlers.len());
        }
        map.finish()
    }
}

impl DomTree {
    pub fn add_event_listener(&mut self, target: NodeId, event_type: &str, handler: EventHandler) {
        if let Some(node) = self.get_mut(target) {
            node.listeners.add_event_listener(event_type, handler);
        }
    }

    pub fn remove_event_listener(
        &mut self,
        target: NodeId,
        event_type: &str,
        handler: &EventHandler,
    ) -> bool {
        self.get_mut(target)
            .is_some_and(|node| node.listeners.remove_event_listener(event_type, handler))
    }

    /// Run `target`'s handlers for `event`, synchronously and in order.
    ///
    /// The handler list is snapshotted first: handlers added or removed while
    /// dispatching take effect on the next dispatch.
    pub fn dispatch_event(&mut self, target: NodeId, event: &Event) {
        let handlers = match self.get(target) {
            Some(node) => node.listeners.listeners(event.event_type()),
            None => return,
        };
        tracing::trace!(
            "dispatching {} to {} ({} handlers)",
            event.event_type(),
            target,
            handlers.len()
        );
        for handler in handlers {
            handler(self, target);
        }
    }
}
