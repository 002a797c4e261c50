use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{domain::conversation_state::ConversationState, infra::config::UiConfig};

use super::{
    message_input::{input_height, render_message_input},
    message_rendering::layout_conversation,
    styles,
};

const HINT_TEXT: &str = "Enter: enviar | ↑/↓/PgUp/PgDn: rolar | Ctrl+End: recentes | Ctrl+C: sair";

pub fn render_messages_screen(
    frame: &mut Frame<'_>,
    area: Rect,
    conversation: &mut ConversationState,
    ui: &UiConfig,
) {
    // The input grows with its wrapped text; the list takes what is left.
    let input_rows = input_height(conversation.input(), area.width);
    let [title_area, messages_area, input_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(input_rows),
            Constraint::Length(1),
        ])
        .areas(area);

    let title = Paragraph::new(Line::from(Span::styled(
        conversation.title().to_owned(),
        styles::title_style(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(styles::inactive_border_style()),
    );
    frame.render_widget(title, title_area);

    render_message_list(frame, messages_area, conversation, ui);
    render_message_input(frame, input_area, conversation.input());

    let hint = Paragraph::new(Line::from(Span::styled(HINT_TEXT, styles::hint_style())));
    frame.render_widget(hint, hint_area);
}

fn render_message_list(
    frame: &mut Frame<'_>,
    area: Rect,
    conversation: &mut ConversationState,
    ui: &UiConfig,
) {
    // One column of margin on both sides.
    let inner = Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    };

    let layout = layout_conversation(
        conversation.messages(),
        inner.width,
        inner.height,
        conversation.scroll_offset(),
        ui.bubble_max_width,
    );
    conversation.clamp_scroll(layout.max_scroll);

    frame.render_widget(Paragraph::new(layout.lines), inner);
}
