//! Message bubble layout.
//!
//! Bubbles are stacked from the bottom of the viewport upwards, newest first,
//! so the latest message always sits right above the input field and
//! scrolling up reveals older ones. Sent bubbles hug the right edge with a
//! square top-right corner; received bubbles hug the left edge with a square
//! top-left corner.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    message::{Direction, Message},
    message_list_state::MessageListState,
};

use super::styles;

/// Border plus one column of padding on each side.
const BUBBLE_CHROME_WIDTH: usize = 4;

/// Visible slice of the conversation plus how far it can scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationLayout {
    /// Lines top to bottom, exactly `height` of them.
    pub lines: Vec<Line<'static>>,
    /// Largest useful scroll offset for this width and height.
    pub max_scroll: usize,
}

/// Lays out the messages for a viewport of `width` x `height` cells,
/// `scroll_offset` lines up from the newest message.
pub fn layout_conversation(
    messages: &MessageListState,
    width: u16,
    height: u16,
    scroll_offset: usize,
    max_bubble_width: u16,
) -> ConversationLayout {
    let height = height as usize;

    // Index 0 is the bottom row of the viewport.
    let mut bottom_up: Vec<Line<'static>> = Vec::new();
    for message in messages.display_order() {
        bottom_up.extend(bubble_lines(message, width, max_bubble_width).into_iter().rev());
    }

    let max_scroll = bottom_up.len().saturating_sub(height);
    let offset = scroll_offset.min(max_scroll);
    let end = (offset + height).min(bottom_up.len());

    let mut lines: Vec<Line<'static>> = bottom_up
        .drain(offset..end)
        .rev()
        .collect();

    let padding = height.saturating_sub(lines.len());
    if padding > 0 {
        let mut padded = vec![Line::default(); padding];
        padded.append(&mut lines);
        lines = padded;
    }

    ConversationLayout { lines, max_scroll }
}

/// Builds the lines of one bubble, top border first.
pub fn bubble_lines(message: &Message, width: u16, max_bubble_width: u16) -> Vec<Line<'static>> {
    let outer_limit = (max_bubble_width as usize)
        .min(width as usize * 3 / 4)
        .max(BUBBLE_CHROME_WIDTH + 1);
    let text_limit = outer_limit - BUBBLE_CHROME_WIDTH;

    let rows = wrap_text(&message.text, text_limit);
    let content_width = rows
        .iter()
        .map(|row| row.width())
        .max()
        .unwrap_or(0)
        .max(1);
    let inner_width = content_width + 2;

    let direction = message.direction;
    let border = styles::bubble_border_style(direction);
    let body = styles::bubble_style(direction);
    let alignment = match direction {
        Direction::Sent => Alignment::Right,
        Direction::Received => Alignment::Left,
    };

    let (top_left, top_right) = match direction {
        Direction::Sent => ("╭", "┐"),
        Direction::Received => ("┌", "╮"),
    };
    let rule = "─".repeat(inner_width);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(
        Line::from(Span::styled(format!("{top_left}{rule}{top_right}"), border))
            .alignment(alignment),
    );

    for row in rows {
        let fill = content_width - row.width();
        lines.push(
            Line::from(vec![
                Span::styled("│", border),
                Span::styled(format!(" {row}{} ", " ".repeat(fill)), body),
                Span::styled("│", border),
            ])
            .alignment(alignment),
        );
    }

    lines.push(Line::from(Span::styled(format!("╰{rule}╯"), border)).alignment(alignment));
    lines
}

/// Greedy word wrap by display width. Words wider than `width` are split.
///
/// Runs of spaces collapse to one and leading/trailing spaces are dropped;
/// this only affects the bubble, the stored text keeps its whitespace.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        rows.push(current);
    }

    rows
}
