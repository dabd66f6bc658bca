use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content;
use crate::ui::style::{badge_style, heading_style, tone_style, Tone};

pub(crate) fn render(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(" Reports History ", heading_style(Tone::Primary)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        "Access and manage all your generated research reports",
        tone_style(Tone::Muted),
    ))];

    for report in &content::REPORT_HISTORY {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(report.question, heading_style(Tone::Primary)),
            Span::raw("  "),
            Span::styled(report.status, badge_style(Tone::Success)),
        ]));
        lines.push(Line::from(report.summary));
        lines.push(Line::from(Span::styled(
            format!(
                "{} documents · {} key points · {} pages · generated {}",
                report.documents,
                report.key_takeaways,
                report.pages,
                content::format_date(report.generated_at)
            ),
            tone_style(Tone::Muted),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
