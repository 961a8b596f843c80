//! UI extensions for homelab-pilot-core types
//!
//! Ratatui colors and styles for core types, keeping the core free of any
//! terminal dependency.

use homelab_pilot_core::HealthIndicator;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Extension trait for HealthIndicator to provide ratatui colors
pub trait HealthIndicatorExt {
    fn color(&self) -> Color;

    /// Get symbol and color together (common pattern)
    fn symbol_and_color(&self) -> (&'static str, Color);
}

impl HealthIndicatorExt for HealthIndicator {
    fn color(&self) -> Color {
        match self {
            HealthIndicator::Healthy => Color::Green,
            HealthIndicator::Warning => Color::Yellow,
            HealthIndicator::Error => Color::Red,
            HealthIndicator::Pending => Color::DarkGray,
        }
    }

    fn symbol_and_color(&self) -> (&'static str, Color) {
        (self.symbol(), self.color())
    }
}

/// Footer hint such as "[q] quit"
pub fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(label),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_indicator_colors() {
        assert_eq!(HealthIndicator::Healthy.color(), Color::Green);
        assert_eq!(HealthIndicator::Warning.color(), Color::Yellow);
        assert_eq!(HealthIndicator::Error.color(), Color::Red);
        assert_eq!(HealthIndicator::Pending.color(), Color::DarkGray);
    }

    #[test]
    fn test_health_indicator_symbol_and_color() {
        let (symbol, color) = HealthIndicator::Healthy.symbol_and_color();
        assert_eq!(symbol, "●");
        assert_eq!(color, Color::Green);
    }

    #[test]
    fn test_key_hint() {
        let [key, label] = key_hint("[q]", " quit");
        assert_eq!(key.content, "[q]");
        assert_eq!(label.content, " quit");
    }
}
