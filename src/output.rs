//! # Output Configuration
//!
//! Controls how the CLI prints status lines: with emoji when the terminal
//! supports color, with bracketed plain-text markers otherwise.
//!
//! The `--color=always|never|auto` flag wins. In `auto` mode color is off
//! when `NO_COLOR` is set, when `CLICOLOR=0`, when `TERM=dumb`, or when
//! stdout is not a color-capable terminal (unless `CLICOLOR_FORCE` is set).

use std::env;

/// Output configuration for colors, emoji, and verbosity.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emoji should be used.
    pub use_color: bool,
    /// Suppress everything but errors.
    pub quiet: bool,
}

impl OutputConfig {
    /// Build a configuration from the `--color` flag value and the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self {
            use_color,
            quiet: false,
        }
    }

    /// Same configuration, with `quiet` set.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Print a status line prefixed with `emoji` or `plain`, unless quiet.
    pub fn status(&self, emoji_str: &str, plain: &str, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{} {}", emoji(self, emoji_str, plain), message.as_ref());
        }
    }

    /// Print an indented detail line, unless quiet.
    pub fn detail(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("   {}", message.as_ref());
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns `emoji_str` when colors are enabled and `plain` otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}
