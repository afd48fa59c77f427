use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Terminal-dependent output choices, fixed once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

const PLAIN: UiPrefs = UiPrefs {
    table_color: false,
    progress: false,
    term_width: None,
};

static PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = PREFS.set(resolve(flags, std::io::stdout().is_terminal()));
}

fn resolve(flags: &GlobalFlags, is_tty: bool) -> UiPrefs {
    let table_color = is_tty
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    // Spinners go to stderr, but stay off for JSON so piped output is clean.
    let progress = is_tty && !flags.quiet && flags.format != OutputFormat::Json;

    // Narrower than 40 columns is treated as unknown.
    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse().ok())
        .filter(|&cols: &usize| cols >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    PREFS.get().copied().unwrap_or(PLAIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            verbose: false,
            config: None,
        }
    }

    #[test]
    fn no_progress_without_tty() {
        let prefs = resolve(&flags(OutputFormat::Table, false), false);
        assert!(!prefs.progress);
        assert!(!prefs.table_color);
    }

    #[test]
    fn json_and_quiet_suppress_progress() {
        assert!(!resolve(&flags(OutputFormat::Json, false), true).progress);
        assert!(!resolve(&flags(OutputFormat::Table, true), true).progress);
        assert!(resolve(&flags(OutputFormat::Raw, false), true).progress);
    }
}
