//! Closed set of visual tones mapped to terminal styles. Pages never build
//! ad-hoc styles; every color choice goes through this lookup.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Primary,
    Accent,
    Success,
    Warning,
    Destructive,
    Muted,
}

pub(crate) fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Primary => Style::default().fg(Color::Cyan),
        Tone::Accent => Style::default().fg(Color::Magenta),
        Tone::Success => Style::default().fg(Color::Green),
        Tone::Warning => Style::default().fg(Color::Yellow),
        Tone::Destructive => Style::default().fg(Color::Red),
        Tone::Muted => Style::default().fg(Color::DarkGray),
    }
}

pub(crate) fn badge_style(tone: Tone) -> Style {
    tone_style(tone).add_modifier(Modifier::BOLD)
}

pub(crate) fn heading_style(tone: Tone) -> Style {
    tone_style(tone).add_modifier(Modifier::BOLD)
}

/// Text progress meter in the "[████░░░░]" style used across the pack's
/// terminal dashboards.
pub(crate) fn meter(used: u64, total: u64, width: usize) -> String {
    let ratio = if total == 0 {
        0.0
    } else {
        (used as f64 / total as f64).clamp(0.0, 1.0)
    };
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_clamps_and_fills() {
        assert_eq!(meter(0, 50, 4), "[░░░░]");
        assert_eq!(meter(50, 50, 4), "[████]");
        assert_eq!(meter(75, 50, 4), "[████]");
        assert_eq!(meter(25, 50, 4), "[██░░]");
    }

    #[test]
    fn meter_with_zero_total_stays_empty() {
        assert_eq!(meter(10, 0, 3), "[░░░]");
    }
}
