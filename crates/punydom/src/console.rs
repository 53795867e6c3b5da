//! Console API
//!
//! `console.log/warn/error` forwarded to `tracing` under the
//! `punydom::console` target. Arguments are joined with single spaces.

use std::fmt::{Display, Write};

/// `window.console`
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }

    pub fn log(&self, args: &[&dyn Display]) {
        tracing::info!(target: "punydom::console", "{}", format_args_list(args));
    }

    pub fn warn(&self, args: &[&dyn Display]) {
        tracing::warn!(target: "punydom::console", "{}", format_args_list(args));
    }

    pub fn error(&self, args: &[&dyn Display]) {
        tracing::error!(target: "punydom::console", "{}", format_args_list(args));
    }
}

/// Join values the way `console.*` prints them
pub(crate) fn format_args_list(args: &[&dyn Display]) -> String {
    let mut output = String::new();
    for (i, value) in args.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        write!(output, "{}", value).ok();
    }
    output
}
