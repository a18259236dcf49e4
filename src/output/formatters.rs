//! Formatting utilities for terminal output

/// Human label for the side a query was asked for
#[must_use]
pub const fn side_label(first_mover_is_caller: bool) -> &'static str {
    if first_mover_is_caller {
        "first mover"
    } else {
        "second mover"
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a count against the largest bucket as a bar
#[must_use]
pub fn count_bar(count: usize, max_count: usize, width: usize) -> String {
    create_progress_bar(count as f64, max_count.max(1) as f64, width)
}
