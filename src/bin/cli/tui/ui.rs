use ratatui::layout::{Constraint, Direction, Flex, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app_state::TuiState;
use super::{card_widget, status_bar};

pub fn draw(f: &mut Frame, state: &mut TuiState) {
    let size = f.area();

    // Main layout: card + buttons + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(size);

    card_widget::draw(f, outer[0], state);
    draw_buttons(f, outer[1]);
    status_bar::draw(f, outer[2], state);

    if state.show_help {
        draw_help(f, size);
    }
}

fn draw_buttons(f: &mut Frame, area: Rect) {
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let unknown = Paragraph::new("\u{2717}  Didn't know  [n / \u{2190}]")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    let known = Paragraph::new("\u{2713}  Knew it  [y / \u{2192}]")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(unknown, buttons[0]);
    f.render_widget(known, buttons[1]);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let [popup] = Layout::horizontal([Constraint::Length(44)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(10)])
        .flex(Flex::Center)
        .areas(popup);

    let lines = vec![
        Line::from(""),
        Line::from("  Each card flips after a few seconds."),
        Line::from(""),
        Line::from("  y, \u{2192}, Enter   knew it (remove word)"),
        Line::from("  n, \u{2190}, Space   didn't know (keep word)"),
        Line::from("  ?             toggle this help"),
        Line::from("  q, Esc        quit"),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}
