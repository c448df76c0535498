//! Terminal status messages.
//!
//! Status output goes to stderr so command results on stdout stay pipeable.
//! Colors are resolved once at startup via [`init_colors`] and applied only
//! when the stream supports them.

use owo_colors::{OwoColorize, Stream, Style};

/// Resolve the global color override from the `--no-color` flag, the
/// `NO_COLOR`/`FORCE_COLOR` conventions, and terminal capabilities.
///
/// Call once at program start, before any status output.
pub fn init_colors(no_color: bool) {
    if no_color || !should_use_colors() {
        owo_colors::set_override(false);
    } else if std::env::var("FORCE_COLOR").is_ok() {
        owo_colors::set_override(true);
    }
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!(
        "{} {}",
        "✓".if_supports_color(Stream::Stderr, |s| s.style(Style::new().green().bold())),
        message
    );
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!(
        "{} {}",
        "ℹ".if_supports_color(Stream::Stderr, |s| s.style(Style::new().blue().bold())),
        message
    );
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        "⚠".if_supports_color(Stream::Stderr, |s| s.style(Style::new().yellow().bold())),
        message.if_supports_color(Stream::Stderr, |m| m.yellow())
    );
}

/// Whether colored output should be enabled.
///
/// # Environment Variables
///
/// - `NO_COLOR`: if set, disables colors
/// - `FORCE_COLOR`: if set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_do_not_panic() {
        success("Success message");
        info("Info message");
        warning("Warning message");
    }

    #[test]
    fn init_colors_with_no_color_does_not_panic() {
        init_colors(true);
        success("still prints");
    }
}
