//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::message::Direction;

/// Bubble background for messages written by the local user.
pub const SENT_BUBBLE_COLOR: Color = Color::Rgb(0x4D, 0x6D, 0x98);

// =============================================================================
// Shared styles
// =============================================================================

pub fn active_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn inactive_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the top bar title.
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the key hint line.
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Message bubbles
// =============================================================================

/// Bubble body style: background fill plus readable text.
pub fn bubble_style(direction: Direction) -> Style {
    match direction {
        Direction::Sent => Style::default().bg(SENT_BUBBLE_COLOR).fg(Color::White),
        Direction::Received => Style::default().bg(Color::White).fg(Color::Black),
    }
}

/// Bubble outline, drawn in the bubble color over the default background.
pub fn bubble_border_style(direction: Direction) -> Style {
    match direction {
        Direction::Sent => Style::default().fg(SENT_BUBBLE_COLOR),
        Direction::Received => Style::default().fg(Color::White),
    }
}

// =============================================================================
// Input and buttons
// =============================================================================

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn button_enabled_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(SENT_BUBBLE_COLOR)
        .add_modifier(Modifier::BOLD)
}

pub fn button_disabled_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn button_focused_style() -> Style {
    button_enabled_style().add_modifier(Modifier::REVERSED)
}
