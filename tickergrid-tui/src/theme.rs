//! Style tokens for the TickerGrid TUI.
//!
//! # Color Palette
//! - **Accent**: electric cyan (focus, active sort column)
//! - **Positive**: neon green (gains)
//! - **Negative**: hot pink (losses)
//! - **Warning**: neon orange (alerts)
//! - **Muted**: steel blue (hints, secondary text)
//!
//! Heatmap tags produced by the core renderer map onto two color ladders,
//! deep red through bright green.

use ratatui::style::{Color, Modifier, Style};

pub fn accent() -> Style {
    Style::default().fg(Color::Rgb(0, 255, 255))
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn negative() -> Style {
    Style::default().fg(Color::Rgb(255, 20, 147))
}

pub fn warning() -> Style {
    Style::default().fg(Color::Rgb(255, 140, 0))
}

pub fn muted() -> Style {
    Style::default().fg(Color::Rgb(100, 149, 237))
}

pub fn text() -> Style {
    Style::default().fg(Color::White)
}

pub fn panel_border(active: bool) -> Style {
    if active { accent() } else { muted() }
}

pub fn panel_title(active: bool) -> Style {
    if active { accent_bold() } else { muted() }
}

/// Map a renderer style tag to a color, if it names one.
pub fn tag_color(tag: &str) -> Option<Color> {
    let color = match tag {
        "positive" => Color::Rgb(0, 255, 128),
        "negative" => Color::Rgb(255, 20, 147),

        // Average-return ladder
        "heat-ret-neg-high" => Color::Rgb(215, 48, 39),
        "heat-ret-neg-med" => Color::Rgb(244, 109, 67),
        "heat-ret-neg-low" => Color::Rgb(170, 170, 170),
        "heat-ret-pos-low" => Color::Rgb(166, 217, 106),
        "heat-ret-pos-med" => Color::Rgb(102, 189, 99),
        "heat-ret-pos-high" => Color::Rgb(26, 152, 80),

        // Win-rate ladder
        "heat-0-40" => Color::Rgb(215, 48, 39),
        "heat-40-45" => Color::Rgb(244, 109, 67),
        "heat-45-50" => Color::Rgb(253, 174, 97),
        "heat-50-55" => Color::Rgb(254, 224, 139),
        "heat-55-60" => Color::Rgb(217, 239, 139),
        "heat-60-65" => Color::Rgb(166, 217, 106),
        "heat-65-70" => Color::Rgb(102, 189, 99),
        "heat-70-100" => Color::Rgb(26, 152, 80),

        _ => return None,
    };
    Some(color)
}

/// Style a cell from its renderer tags: first recognized color tag wins.
pub fn cell_style(tags: &[String]) -> Style {
    for tag in tags {
        if let Some(color) = tag_color(tag) {
            return Style::default().fg(color);
        }
    }
    text()
}

/// Row emphasis for the current calendar day in the seasonal tables.
pub fn today_row() -> Style {
    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_heat_bucket_has_a_color() {
        let tags = [
            "heat-ret-neg-high",
            "heat-ret-neg-med",
            "heat-ret-neg-low",
            "heat-ret-pos-low",
            "heat-ret-pos-med",
            "heat-ret-pos-high",
            "heat-0-40",
            "heat-40-45",
            "heat-45-50",
            "heat-50-55",
            "heat-55-60",
            "heat-60-65",
            "heat-65-70",
            "heat-70-100",
        ];
        for tag in tags {
            assert!(tag_color(tag).is_some(), "no color for {tag}");
        }
    }

    #[test]
    fn unknown_tags_fall_back_to_plain_text() {
        assert!(tag_color("heat-cell").is_none());
        assert_eq!(cell_style(&["heat-cell".to_string()]), text());
    }

    #[test]
    fn sign_tags_map_to_gain_loss_colors() {
        let positive = cell_style(&["positive".to_string()]);
        let negative = cell_style(&["negative".to_string()]);
        assert_eq!(positive.fg, Some(Color::Rgb(0, 255, 128)));
        assert_eq!(negative.fg, Some(Color::Rgb(255, 20, 147)));
    }
}
