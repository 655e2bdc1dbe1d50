//! Shared utilities for the Bilby selector tool.

/// Share-state codec for turning pane input into a URL query parameter.
pub mod share;
/// Deduplicated warnings with colored terminal output.
pub mod warning;
