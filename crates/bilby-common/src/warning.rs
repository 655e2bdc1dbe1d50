//! Tool warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the app pipeline to report selector characters the grammar
//! skipped (combinators and other stray punctuation).

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Warnings already printed, keyed by component and message.
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about ignored or unsupported input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("selector", "ignored '>' (combinators are not supported)");
/// ```
///
/// # Panics
/// Panics if the warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    if WARNED.lock().unwrap().insert(key) {
        eprintln!("{YELLOW}[Bilby {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when loading fresh pane input)
///
/// # Panics
/// Panics if the warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}
