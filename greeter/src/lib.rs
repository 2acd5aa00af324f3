//! Shared greeting logic for the `greet_*` binaries.
//!
//! Every variant resolves an optional name and prints `Hello <name>`; only
//! the way the name is read from the command line differs.

pub mod logging;

use std::io::{self, Write};

/// Name used when the caller supplies none.
pub const DEFAULT_NAME: &str = "world";

/// Returns the supplied name, or [`DEFAULT_NAME`] when absent.
///
/// An empty string is still a supplied name.
pub fn effective_name(name: Option<&str>) -> &str {
    name.unwrap_or(DEFAULT_NAME)
}

pub fn greeting(name: Option<&str>) -> String {
    format!("Hello {}", effective_name(name))
}

/// Writes the greeting line for `name` to `out`.
pub fn greet<W: Write>(out: &mut W, name: Option<&str>) -> io::Result<()> {
    let line = greeting(name);
    tracing::debug!(name = effective_name(name), "greeting");
    writeln!(out, "{}", line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greet_to_string(name: Option<&str>) -> String {
        let mut out = Vec::new();
        greet(&mut out, name).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn defaults_to_world() {
        assert_eq!(effective_name(None), "world");
        assert_eq!(greet_to_string(None), "Hello world\n");
    }

    #[test]
    fn uses_supplied_name() {
        assert_eq!(greet_to_string(Some("Alice")), "Hello Alice\n");
    }

    #[test]
    fn keeps_name_verbatim() {
        assert_eq!(greeting(Some("Jean Luc")), "Hello Jean Luc");
        assert_eq!(greeting(Some("-x")), "Hello -x");
        assert_eq!(greeting(Some("Zoë")), "Hello Zoë");
    }

    #[test]
    fn empty_name_is_not_replaced() {
        assert_eq!(effective_name(Some("")), "");
        assert_eq!(greet_to_string(Some("")), "Hello \n");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = greet_to_string(Some("Bob"));
        let second = greet_to_string(Some("Bob"));
        assert_eq!(first, second);
    }
}
