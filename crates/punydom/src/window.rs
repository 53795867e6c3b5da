//! Window - the environment's global object
//!
//! Owns the node tree. The document is built on first access; location and
//! navigator come from the settings the window was created with. The window
//! is also an event target: its handlers receive the tree and the window's
//! document.

use puny_dom::{DomTree, Event, EventHandler, EventTarget, NodeId};
use url::Url;

use crate::{Console, Result, Settings};

/// Fallback for `navigator.userAgent` and `navigator.platform`
pub const DEFAULT_NAVIGATOR_VALUE: &str = "PunyDOM";

/// `window.navigator`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    pub user_agent: String,
    pub platform: String,
}

/// Browser-like window over a [`DomTree`]
#[derive(Debug)]
pub struct Window {
    settings: Settings,
    tree: DomTree,
    location: Url,
    console: Console,
    listeners: EventTarget,
}

impl Window {
    /// Create a window; fails if `settings.base_url` is not an absolute URL
    pub fn new(settings: Settings) -> Result<Self> {
        let location = Url::parse(&settings.base_url)?;
        let tree = match settings.query_selector_all.clone() {
            Some(matcher) => DomTree::with_selector_matcher(matcher),
            None => DomTree::new(),
        };
        tracing::debug!("Window created at {}", location);

        Ok(Self {
            settings,
            tree,
            location,
            console: Console::new(),
            listeners: EventTarget::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The window's document, created with its skeleton on first access
    pub fn document(&mut self) -> NodeId {
        match self.tree.document() {
            Some(document) => document,
            None => self.tree.create_document(),
        }
    }

    /// Node tree holding the document and every node created for it
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Current `window.location` (also `document.location`)
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Navigate to `url`; the current location is kept if it does not parse
    pub fn set_location(&mut self, url: &str) -> Result<()> {
        let location = Url::parse(url)?;
        tracing::debug!("Location changed: {} -> {}", self.location, location);
        self.location = location;
        Ok(())
    }

    pub fn navigator(&self) -> Navigator {
        Navigator {
            user_agent: self
                .settings
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_NAVIGATOR_VALUE.to_string()),
            platform: self
                .settings
                .platform
                .clone()
                .unwrap_or_else(|| DEFAULT_NAVIGATOR_VALUE.to_string()),
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn add_event_listener(&mut self, event_type: &str, handler: EventHandler) {
        self.listeners.add_event_listener(event_type, handler);
    }

    pub fn remove_event_listener(&mut self, event_type: &str, handler: &EventHandler) -> bool {
        self.listeners.remove_event_listener(event_type, handler)
    }

    /// Run the window's handlers for `event` in registration order
    pub fn dispatch_event(&mut self, event: &Event) {
        let handlers = self.listeners.listeners(event.event_type());
        let document = self.document();
        tracing::trace!(
            "dispatching {} to window ({} handlers)",
            event.event_type(),
            handlers.len()
        );
        for handler in handlers {
            handler(&mut self.tree, document);
        }
    }

    /// `window.self`
    pub fn self_window(&self) -> &Window {
        self
    }

    /// Always `None`: a window is never nested
    pub fn parent(&self) -> Option<&Window> {
        None
    }

    pub fn top(&self) -> &Window {
        self
    }
}
