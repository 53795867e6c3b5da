//! PunyDOM - a browser-like environment without a browser
//!
//! Wraps the [`puny_dom`] tree in a `Window` with a lazily built document,
//! a location, a navigator and a console, so code written against the DOM
//! can run in tests or on a server.
//!
//! # Example
//! ```rust
//! use punydom::{PunyDom, Settings};
//!
//! let mut dom = PunyDom::new(Settings::default());
//! let window = dom.window().unwrap();
//! let document = window.document();
//!
//! let tree = window.tree_mut();
//! let body = tree.body(document).unwrap();
//! let p = tree.create_element("p");
//! tree.append_child(body, p).unwrap();
//!
//! assert_eq!(tree.inner_html(body), "<p></p>");
//! ```

mod console;
mod settings;
mod window;

pub use console::Console;
pub use settings::{DEFAULT_BASE_URL, Settings};
pub use window::{DEFAULT_NAVIGATOR_VALUE, Navigator, Window};

pub use puny_dom;

/// Environment errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("DOM error: {0}")]
    Dom(#[from] puny_dom::DomError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Entry point: holds the settings and builds the window on first access
#[derive(Debug)]
pub struct PunyDom {
    settings: Settings,
    window: Option<Window>,
}

impl PunyDom {
    pub fn new(settings: Settings) -> Self {
        tracing::debug!("PunyDOM environment for {}", settings.base_url);
        Self {
            settings,
            window: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The environment's window, created on first call
    pub fn window(&mut self) -> Result<&mut Window> {
        let window = match self.window.take() {
            Some(window) => window,
            None => Window::new(self.settings.clone())?,
        };
        Ok(self.window.insert(window))
    }
}

impl Default for PunyDom {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
