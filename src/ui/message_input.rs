//! Message input field and send button rendering.
//!
//! The field wraps its text and grows up to [`MAX_INPUT_ROWS`] rows; past
//! that it scrolls so the cursor row stays visible.

use std::ops::Range;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::message_input_state::MessageInputState;

use super::styles;

/// Placeholder text shown while the input is empty.
const PLACEHOLDER_TEXT: &str = "Digite sua mensagem...";

const SEND_LABEL: &str = "Enviar";

/// Width of the send button including its border.
const SEND_BUTTON_WIDTH: u16 = 8;

/// Text rows the field shows before it starts scrolling.
const MAX_INPUT_ROWS: usize = 5;

/// Input text split into display rows, with the cursor's cell.
#[derive(Debug, PartialEq, Eq)]
struct WrappedInput {
    rows: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
}

impl WrappedInput {
    /// Rows the field needs, counting a cursor parked past a full last row.
    fn row_count(&self) -> usize {
        self.rows.len().max(self.cursor_row + 1)
    }

    /// First row shown when the field is capped at `MAX_INPUT_ROWS`.
    fn first_visible_row(&self) -> usize {
        (self.cursor_row + 1).saturating_sub(MAX_INPUT_ROWS)
    }

    fn visible_rows(&self) -> usize {
        self.row_count().min(MAX_INPUT_ROWS)
    }
}

/// Height of the input area, borders included, for a screen `area_width` wide.
pub fn input_height(input_state: &MessageInputState, area_width: u16) -> u16 {
    let wrapped = wrap_input(input_state, text_width(area_width));
    wrapped.visible_rows() as u16 + 2
}

/// Renders the text field and, to its right, the send button.
pub fn render_message_input(frame: &mut Frame<'_>, area: Rect, input_state: &MessageInputState) {
    let [field_area, button_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_BUTTON_WIDTH)])
        .areas(area);

    let wrapped = wrap_input(input_state, text_width(area.width));
    let first_row = wrapped.first_visible_row();

    let field = Paragraph::new(input_lines(input_state, &wrapped)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::active_border_style()),
    );
    frame.render_widget(field, field_area);

    let button_style = send_button_style(input_state);
    let button = Paragraph::new(Line::from(Span::styled(SEND_LABEL, button_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(button_style),
        );
    frame.render_widget(button, button_area);

    let cursor_x = field_area
        .x
        .saturating_add(1)
        .saturating_add(wrapped.cursor_col.min(u16::MAX as usize) as u16)
        .min(field_area.right().saturating_sub(2));
    let cursor_y = field_area
        .y
        .saturating_add(1)
        .saturating_add((wrapped.cursor_row - first_row).min(u16::MAX as usize) as u16)
        .min(field_area.bottom().saturating_sub(2));
    frame.set_cursor_position((cursor_x, cursor_y));
}

/// The send button is only live while there is something to send.
fn send_button_style(input_state: &MessageInputState) -> Style {
    if input_state.can_submit() {
        styles::button_enabled_style()
    } else {
        styles::button_disabled_style()
    }
}

/// Columns available for text inside the field's borders.
fn text_width(area_width: u16) -> usize {
    usize::from(area_width.saturating_sub(SEND_BUTTON_WIDTH + 2)).max(1)
}

/// Builds the visible lines of the field.
fn input_lines(input_state: &MessageInputState, wrapped: &WrappedInput) -> Vec<Line<'static>> {
    if input_state.is_empty() {
        return vec![Line::from(Span::styled(
            PLACEHOLDER_TEXT,
            styles::input_placeholder_style(),
        ))];
    }

    wrapped
        .rows
        .iter()
        .skip(wrapped.first_visible_row())
        .take(MAX_INPUT_ROWS)
        .map(|row| Line::from(Span::styled(row.clone(), styles::input_text_style())))
        .collect()
}

fn wrap_input(input_state: &MessageInputState, width: usize) -> WrappedInput {
    let chars: Vec<char> = input_state.text().chars().collect();
    let ranges = wrap_ranges(&chars, width);

    let cursor = input_state.cursor_position().min(chars.len());
    let last = ranges.len().saturating_sub(1);
    let row = ranges
        .iter()
        .position(|range| cursor < range.end)
        .unwrap_or(last);
    let start = ranges.get(row).map_or(0, |range| range.start);
    let col: usize = chars[start..cursor]
        .iter()
        .map(|ch| ch.width().unwrap_or(0))
        .sum();

    let (cursor_row, cursor_col) = if col >= width { (row + 1, 0) } else { (row, col) };

    WrappedInput {
        rows: ranges
            .into_iter()
            .map(|range| chars[range].iter().collect())
            .collect(),
        cursor_row,
        cursor_col,
    }
}

/// Splits `chars` into rows at most `width` cells wide.
///
/// Rows break after the last space that fits, or mid-word when one word is
/// wider than a row. Every char, spaces included, lands in exactly one row,
/// so cursor indices map straight onto the result.
fn wrap_ranges(chars: &[char], width: usize) -> Vec<Range<usize>> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;
    // Char index just past the last space in the row, and the width up to it.
    let mut break_after: Option<(usize, usize)> = None;

    for (index, ch) in chars.iter().enumerate() {
        let ch_width = ch.width().unwrap_or(0);

        while used + ch_width > width && index > start {
            let (end, end_used) = break_after.take().unwrap_or((index, used));
            rows.push(start..end);
            start = end;
            used -= end_used;
        }

        used += ch_width;
        if *ch == ' ' {
            break_after = Some((index + 1, used));
        }
    }

    rows.push(start..chars.len());
    rows
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, layout::Position, Terminal};

    use super::*;

    fn typed(text: &str) -> MessageInputState {
        let mut state = MessageInputState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    /// Renders the input at its own height on a 40 column screen.
    fn draw(state: &MessageInputState) -> (Vec<String>, Position) {
        let height = input_height(state, 40);
        let mut terminal =
            Terminal::new(TestBackend::new(40, height)).expect("test terminal must build");
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_message_input(frame, area, state);
            })
            .expect("draw must succeed");

        let buffer = terminal.backend().buffer();
        let rows = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_owned())
                    .collect()
            })
            .collect();
        let cursor = terminal
            .get_cursor_position()
            .expect("cursor position must be readable");
        (rows, cursor)
    }

    #[test]
    fn empty_input_shows_placeholder_on_one_row() {
        let state = MessageInputState::default();

        let (rows, cursor) = draw(&state);

        assert_eq!(rows.len(), 3);
        assert!(rows[1].contains(PLACEHOLDER_TEXT));
        assert!(rows[1].contains(SEND_LABEL));
        assert_eq!(cursor, Position::new(1, 1));
    }

    #[test]
    fn typed_text_replaces_placeholder() {
        let (rows, _) = draw(&typed("Oi"));

        assert!(rows[1].starts_with("│Oi "));
        assert!(!rows.join("\n").contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn long_text_wraps_at_spaces_and_field_grows() {
        let text = format!("{} {}", "a".repeat(25), "b".repeat(10));

        let (rows, cursor) = draw(&typed(&text));

        assert_eq!(rows.len(), 4);
        assert!(rows[1].starts_with(&format!("│{} ", "a".repeat(25))));
        assert!(rows[2].starts_with(&format!("│{} ", "b".repeat(10))));
        assert_eq!(cursor, Position::new(11, 2));
    }

    #[test]
    fn field_stops_growing_and_keeps_the_tail_in_view() {
        let text = format!("{}END", "a".repeat(200));

        let (rows, cursor) = draw(&typed(&text));

        assert_eq!(rows.len(), MAX_INPUT_ROWS + 2);
        assert!(rows[5].starts_with(&format!("│{}END ", "a".repeat(20))));
        assert_eq!(cursor, Position::new(24, 5));
    }

    #[test]
    fn moving_home_scrolls_back_to_the_first_row() {
        let mut state = typed(&format!("{}END", "a".repeat(200)));
        state.move_cursor_home();

        let (rows, cursor) = draw(&state);

        assert_eq!(rows.len(), MAX_INPUT_ROWS + 2);
        assert!(rows[1].starts_with(&format!("│{}│", "a".repeat(30))));
        assert!(!rows.join("\n").contains("END"));
        assert_eq!(cursor, Position::new(1, 1));
    }

    #[test]
    fn cursor_after_a_full_row_opens_the_next_row() {
        let (rows, cursor) = draw(&typed(&"a".repeat(30)));

        assert_eq!(rows.len(), 4);
        assert_eq!(cursor, Position::new(1, 2));
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let (_, cursor) = draw(&typed("日本"));

        assert_eq!(cursor, Position::new(5, 1));
    }

    #[test]
    fn wide_chars_do_not_overflow_a_row() {
        let chars: Vec<char> = "日本語です".chars().collect();

        let ranges = wrap_ranges(&chars, 5);

        assert_eq!(ranges, vec![0..2, 2..4, 4..5]);
    }

    #[test]
    fn send_button_is_disabled_for_empty_input() {
        let state = MessageInputState::default();

        assert_eq!(send_button_style(&state), styles::button_disabled_style());
    }

    #[test]
    fn send_button_is_disabled_for_whitespace_input() {
        let state = typed("   ");

        assert_eq!(send_button_style(&state), styles::button_disabled_style());
    }

    #[test]
    fn send_button_is_enabled_once_text_is_typed() {
        let state = typed("a");

        assert_eq!(send_button_style(&state), styles::button_enabled_style());
    }
}
