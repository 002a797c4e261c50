//! Login screen: two credential fields and the Entrar / Cadastrar buttons.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{
    login_form_state::{LoginFocus, LoginFormState},
    message_input_state::MessageInputState,
};

use super::styles;

const APP_TITLE: &str = "OpenChat";
const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 14;
const MASK_CHAR: char = '•';
const HINT_TEXT: &str = "Tab/↑/↓: mover | Enter: selecionar | Ctrl+C: sair";

pub fn render_login_screen(frame: &mut Frame<'_>, area: Rect, form: &LoginFormState) {
    let form_area = centered(area, FORM_WIDTH, FORM_HEIGHT);

    let outer = Block::default()
        .title(Line::from(Span::styled(APP_TITLE, styles::title_style())).centered())
        .borders(Borders::ALL)
        .border_style(styles::inactive_border_style());
    let inner = outer.inner(form_area);
    frame.render_widget(outer, form_area);

    let [username_area, password_area, buttons_area, _, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let focus = form.focus();
    render_field(
        frame,
        username_area,
        "Usuário",
        field_text(form.username(), false),
        focus == LoginFocus::Username,
    );
    render_field(
        frame,
        password_area,
        "Senha",
        field_text(form.password(), true),
        focus == LoginFocus::Password,
    );

    let [login_area, register_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Length(14)])
        .flex(Flex::SpaceAround)
        .areas(buttons_area);
    render_button(frame, login_area, "Entrar", focus == LoginFocus::LoginButton);
    render_button(
        frame,
        register_area,
        "Cadastrar",
        focus == LoginFocus::RegisterButton,
    );

    let hint = Paragraph::new(Line::from(Span::styled(HINT_TEXT, styles::hint_style())))
        .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);

    // Masked text is one cell per char, so the password cursor is the char index.
    let focused_field = match focus {
        LoginFocus::Username => Some((
            username_area,
            form.username().text_before_cursor().width(),
        )),
        LoginFocus::Password => Some((password_area, form.password().cursor_position())),
        LoginFocus::LoginButton | LoginFocus::RegisterButton => None,
    };
    if let Some((field_area, cursor_col)) = focused_field {
        let cursor_x = field_area
            .x
            .saturating_add(1)
            .saturating_add(cursor_col.min(u16::MAX as usize) as u16)
            .min(field_area.right().saturating_sub(2));
        frame.set_cursor_position((cursor_x, field_area.y.saturating_add(1)));
    }
}

fn render_field(frame: &mut Frame<'_>, area: Rect, label: &str, text: String, focused: bool) {
    let border_style = if focused {
        styles::active_border_style()
    } else {
        styles::inactive_border_style()
    };

    let field = Paragraph::new(Line::from(Span::styled(text, styles::input_text_style()))).block(
        Block::default()
            .title(label.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(field, area);
}

fn render_button(frame: &mut Frame<'_>, area: Rect, label: &str, focused: bool) {
    let style = button_style(focused);
    let button = Paragraph::new(Line::from(Span::styled(label.to_owned(), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

fn button_style(focused: bool) -> Style {
    if focused {
        styles::button_focused_style()
    } else {
        styles::button_enabled_style()
    }
}

/// Text shown in a credential field; secrets are masked per character.
fn field_text(field: &MessageInputState, masked: bool) -> String {
    if masked {
        field.text().chars().map(|_| MASK_CHAR).collect()
    } else {
        field.text().to_owned()
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
