use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
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
            Constraint::Length(8),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    render_information(f, rows[0]);
    render_settings(f, rows[1]);
    render_danger_zone(f, rows[2]);
}

fn render_information(f: &mut Frame, area: Rect) {
    let profile = &content::PROFILE;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(
            " Profile Information ",
            heading_style(Tone::Primary),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("({}) ", profile.initials), badge_style(Tone::Primary)),
            Span::raw(format!("{} {}", profile.first_name, profile.last_name)),
        ]),
        Line::from(Span::styled(
            "Avatar: JPG, PNG or GIF. Max size of 2MB.",
            tone_style(Tone::Muted),
        )),
        Line::from(format!("Email Address: {}", profile.email)),
        Line::from(format!("Organization: {}", profile.organization)),
        Line::from(Span::styled(
            format!("Plan: {}", profile.plan),
            tone_style(Tone::Muted),
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_settings(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(
            " Account Settings ",
            heading_style(Tone::Primary),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for setting in &content::NOTIFICATION_SETTINGS {
        let state = if setting.enabled { "[on] " } else { "[off]" };
        lines.push(Line::from(vec![
            Span::styled(state, badge_style(Tone::Success)),
            Span::raw(format!(" {}", setting.name)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", setting.description),
            tone_style(Tone::Muted),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_danger_zone(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Destructive))
        .title(Span::styled(" Danger Zone ", heading_style(Tone::Destructive)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from("Delete Account"),
            Line::from(Span::styled(
                "Permanently delete your account and all associated data",
                tone_style(Tone::Muted),
            )),
        ]),
        inner,
    );
}
