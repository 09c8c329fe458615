//! Cargo-style status lines on stderr: a right-aligned bold label followed by
//! the message, e.g. `   Installed A==1.0 (with C, B)`.

use std::io::Write;

use console::Style;

const LABEL_WIDTH: usize = 12;

fn emit(style: Style, label: &str, message: &str) {
    let _ = writeln!(
        std::io::stderr(),
        "{:>width$} {message}",
        style.bold().apply_to(label),
        width = LABEL_WIDTH,
    );
}

/// A change that was applied (green).
pub fn status(label: &str, message: &str) {
    emit(Style::new().green(), label, message);
}

/// A no-op or purely informational result (cyan).
pub fn status_info(label: &str, message: &str) {
    emit(Style::new().cyan(), label, message);
}

/// Something the user should look at before retrying (yellow).
pub fn status_warn(label: &str, message: &str) {
    emit(Style::new().yellow(), label, message);
}
