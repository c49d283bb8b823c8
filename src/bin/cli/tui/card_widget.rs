use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use flipcards_lib::CardFace;

use super::app_state::TuiState;

/// Card colors, front and back
const FRONT_BG: Color = Color::Rgb(255, 255, 255);
const BACK_BG: Color = Color::Rgb(145, 194, 175);
const TABLE_BG: Color = Color::Rgb(177, 221, 198);

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let card = state.card();

    let (card_bg, text_fg) = match card.face {
        CardFace::Source => (FRONT_BG, Color::Black),
        CardFace::Translation => (BACK_BG, Color::White),
    };

    let table = Block::default().style(Style::default().bg(TABLE_BG));
    let inner = table.inner(area);
    f.render_widget(table, area);

    let card_area = inner.inner(Margin::new(4, 1));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(card_bg).fg(text_fg));

    // Center the two lines vertically inside the card
    let padding = card_area.height.saturating_sub(2 + 3) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        card.label.clone(),
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        card.text.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, card_area);
}
