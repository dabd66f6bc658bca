//! Latest-research overview built entirely from the fixed report payload.

use assistant_core::{Confidence, Report};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content;
use crate::ui::style::{badge_style, heading_style, meter, tone_style, Tone};

const LATEST_QUESTION: &str = "What are the latest trends in renewable energy technology?";
const GENERATED_AT: &str = "2024-01-15T10:30:00Z";

pub(crate) fn render(f: &mut Frame, area: Rect) {
    let report = Report::canned();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    render_usage_row(f, rows[0]);
    render_report(f, rows[1], &report);
    render_live_banner(f, rows[2]);
}

fn render_usage_row(f: &mut Frame, area: Rect) {
    let stats = &content::USAGE_STATS;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(area);

    stat_cell(f, cells[0], "Reports Generated", stats.reports_generated.to_string());
    stat_cell(f, cells[1], "Credits Used", stats.credits_used.to_string());
    stat_cell(f, cells[2], "Credits Remaining", stats.credits_remaining.to_string());
    stat_cell(
        f,
        cells[3],
        "Usage Progress",
        format!(
            "{} {}/{}",
            meter(stats.credits_used as u64, stats.credits_total as u64, 10),
            stats.credits_used,
            stats.credits_total
        ),
    );
}

fn stat_cell(f: &mut Frame, area: Rect, label: &str, value: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Muted));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{label}: "), tone_style(Tone::Muted)),
            Span::styled(value, badge_style(Tone::Primary)),
        ])),
        inner,
    );
}

fn render_report(f: &mut Frame, area: Rect, report: &Report) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    let mut takeaways = vec![
        Line::from(Span::styled("✔ Key Takeaways", heading_style(Tone::Success))),
        Line::from(Span::styled(
            format!("From: \"{LATEST_QUESTION}\""),
            tone_style(Tone::Muted),
        )),
        Line::from(""),
    ];
    for takeaway in &report.key_takeaways {
        takeaways.push(Line::from(format!("• {takeaway}")));
    }
    takeaways.push(Line::from(""));
    takeaways.push(Line::from(Span::styled(
        "✦ Final Summary",
        heading_style(Tone::Accent),
    )));
    takeaways.push(Line::from(report.summary.clone()));
    takeaways.push(Line::from(Span::styled(
        format!("Generated on {}", content::format_date(GENERATED_AT)),
        tone_style(Tone::Muted),
    )));

    let left_block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(" Latest Research ", heading_style(Tone::Primary)));
    let left_inner = left_block.inner(columns[0]);
    f.render_widget(left_block, columns[0]);
    f.render_widget(
        Paragraph::new(takeaways).wrap(Wrap { trim: false }),
        left_inner,
    );

    let mut evidence = vec![Line::from(Span::styled(
        "Supporting evidence for key claims",
        tone_style(Tone::Muted),
    ))];
    for item in &report.evidence {
        evidence.push(Line::from(""));
        evidence.push(Line::from(item.claim.clone()));
        evidence.push(Line::from(Span::styled(
            format!("{} (Page {})", item.source, item.page),
            tone_style(Tone::Muted),
        )));
        let tone = match item.confidence {
            Confidence::High => Tone::Success,
            Confidence::Medium => Tone::Warning,
            Confidence::Low => Tone::Destructive,
        };
        evidence.push(Line::from(Span::styled(
            format!("{} Confidence", item.confidence.label()),
            badge_style(tone),
        )));
    }

    let right_block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(
            " Evidence with Citations ",
            heading_style(Tone::Primary),
        ));
    let right_inner = right_block.inner(columns[1]);
    f.render_widget(right_block, columns[1]);
    f.render_widget(
        Paragraph::new(evidence).wrap(Wrap { trim: false }),
        right_inner,
    );
}

fn render_live_banner(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Accent));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("● ", tone_style(Tone::Accent)),
            Span::raw("New information available for this topic — Refresh Report"),
        ])),
        inner,
    );
}
