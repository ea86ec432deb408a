use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;
use terminal_size::{terminal_size, Width};
use unicode_width::UnicodeWidthChar;

/// Sleuth emoji prefix for all dashboard output
const SLEUTH: &str = "🕵️";

const FALLBACK_WIDTH: usize = 80;

fn term_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).clamp(40, 120),
        None => FALLBACK_WIDTH,
    }
}

/// Print a status message (cyan)
pub fn status(message: &str) {
    println!("{} {}", SLEUTH, message.cyan());
}

/// Print an info message (white/default)
pub fn info(message: &str) {
    println!("{} {}", SLEUTH, message);
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{} {}", SLEUTH, message.green());
}

/// Print a warning message (yellow)
pub fn warn(message: &str) {
    println!("{} {}", SLEUTH, message.yellow());
}

/// Print an error message (red)
pub fn error(message: &str) {
    println!("{} {}", SLEUTH, message.red());
}

/// Print the startup banner
pub fn startup_banner() {
    let width = term_width();
    println!();
    println!("{}", "═".repeat(width).bright_cyan());
    println!(
        "{}  {} {}",
        SLEUTH,
        "MARKET SCOUT".bright_cyan().bold(),
        "- commercial intelligence desk".bright_white()
    );
    println!("{}", "═".repeat(width).bright_cyan());
    println!();
}

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!(
        "{}  {}",
        "─".repeat(3).bright_white().dimmed(),
        title.bright_white().bold()
    );
    println!();
}

/// Print a configuration line
pub fn config_item(key: &str, value: &str) {
    println!(
        "{} {} {}",
        SLEUTH,
        format!("{}:", key).bright_white(),
        value.bright_cyan()
    );
}

/// Spinner shown while a provider call is in flight
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Print the executive summary block
pub fn report(summary: &str) {
    section("📄 Executive Summary");
    for line in summary.lines() {
        println!("  {}", line);
    }
    println!();
}

/// Print the raw search data, wrapped to the terminal, as proof of
/// what the model was given
pub fn raw_data_panel(raw_data: &str) {
    let width = term_width();
    section("🔍 Raw Data (Proof)");
    if raw_data.is_empty() {
        println!("  {}", "(no results returned)".dimmed());
        println!();
        return;
    }
    for line in raw_data.lines() {
        for wrapped in wrap_line(line, width.saturating_sub(2)) {
            println!("  {}", wrapped.dimmed());
        }
    }
    println!();
}

/// Greedy wrap by display width so CJK and emoji don't overflow
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            wrapped.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(wrap_line("hello", 10), vec!["hello".to_string()]);
    }

    #[test]
    fn long_lines_split_at_display_width() {
        let wrapped = wrap_line("abcdefghij", 4);
        assert_eq!(wrapped, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wide_characters_count_double() {
        let wrapped = wrap_line("你好世界", 4);
        assert_eq!(wrapped, vec!["你好", "世界"]);
    }

    #[test]
    fn empty_line_stays_a_line() {
        assert_eq!(wrap_line("", 10), vec![String::new()]);
    }
}
