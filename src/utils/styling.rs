//! Terminal styling helpers for user-facing messages

use console::Emoji;

pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");

/// Print an info message
pub fn print_info(message: &str) {
    println!("  {} {}", INFO, message);
}
