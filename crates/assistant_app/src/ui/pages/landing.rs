//! Full-screen landing page, drawn without the chrome.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content;
use crate::ui::style::{badge_style, heading_style, tone_style, Tone};

pub(crate) fn render(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_hero(f, rows[0]);
    render_pitch(f, rows[1]);
    render_audiences(f, rows[2]);
    render_footer(f, rows[3]);
}

fn render_hero(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Smart Research Assistant",
            heading_style(Tone::Primary),
        )),
        Line::from(content::LANDING_TAGLINE),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Enter ] ", badge_style(Tone::Accent)),
            Span::raw("Start Researching →"),
        ]),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_pitch(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    render_feature_list(
        f,
        columns[0],
        " Why existing tools fail? ",
        Tone::Destructive,
        &content::LANDING_PROBLEMS,
    );
    render_feature_list(
        f,
        columns[1],
        " What Smart Research Assistant does ",
        Tone::Primary,
        &content::LANDING_SOLUTIONS,
    );
}

fn render_feature_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    tone: Tone,
    features: &[content::LandingFeature],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(tone))
        .title(Span::styled(title.to_string(), heading_style(tone)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for feature in features {
        lines.push(Line::from(Span::styled(
            feature.title,
            heading_style(tone),
        )));
        lines.push(Line::from(feature.blurb));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_audiences(f: &mut Frame, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (audience, cell) in content::LANDING_AUDIENCES.iter().zip(cells.iter()) {
        let lines = vec![
            Line::from(Span::styled(audience.title, heading_style(Tone::Success))),
            Line::from(audience.blurb),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            *cell,
        );
    }
}

fn render_footer(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            content::LANDING_FOOTER,
            tone_style(Tone::Muted),
        )))
        .alignment(Alignment::Center),
        area,
    );
}
