//! Terminal output utilities

use console::style;

/// Print a bold step banner to stdout
pub fn print_step(message: &str) {
    println!("{}", style(message).bold());
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print a diagnostic line to stderr, only in verbose mode
pub fn print_verbose(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{} {}", style("::").dim(), message);
    }
}

/// Disable styled output on both streams
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}
