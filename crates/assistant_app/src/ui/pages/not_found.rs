use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::style::{heading_style, tone_style, Tone};

pub(crate) fn render(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Muted));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("404", heading_style(Tone::Destructive))),
        Line::from("Oops! Page not found"),
        Line::from(Span::styled(
            "Press Tab to return to the app",
            tone_style(Tone::Muted),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        inner,
    );
}
