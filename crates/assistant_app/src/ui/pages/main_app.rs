//! The upload-and-generate workspace.

use assistant_core::{AppViewModel, GenerationState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content;
use crate::picker;
use crate::shell::{InputMode, ShellState};
use crate::ui::style::{badge_style, heading_style, meter, tone_style, Tone};

pub(crate) fn render(f: &mut Frame, area: Rect, view: &AppViewModel, shell: &ShellState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(area);

    let upload_height = 5 + view.attachments.len().min(6) as u16
        + if shell.mode == InputMode::PathPrompt || shell.notice.is_some() {
            1
        } else {
            0
        };

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(upload_height),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    render_upload_card(f, left[0], view, shell);
    render_question_card(f, left[1], view);
    render_results(f, left[2], view);
    render_usage_card(f, columns[1]);
}

fn render_upload_card(f: &mut Frame, area: Rect, view: &AppViewModel, shell: &ShellState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(" Upload Documents ", heading_style(Tone::Primary)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "Ctrl+O to attach · {} files up to 20MB each",
            picker::ACCEPTED_TYPES
        ),
        tone_style(Tone::Muted),
    ))];

    match shell.mode {
        InputMode::PathPrompt => {
            lines.push(Line::from(vec![
                Span::styled("Path: ", badge_style(Tone::Accent)),
                Span::raw(shell.path_input.clone()),
                Span::styled("▏", tone_style(Tone::Accent)),
            ]));
        }
        InputMode::Browse => {
            if let Some(notice) = &shell.notice {
                lines.push(Line::from(Span::styled(
                    notice.clone(),
                    tone_style(Tone::Warning),
                )));
            }
        }
    }

    if view.attachments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No files uploaded yet",
            tone_style(Tone::Muted),
        )));
    } else {
        lines.push(Line::from(format!(
            "Uploaded Files ({})",
            view.attachments.len()
        )));
        for (index, row) in view.attachments.iter().enumerate() {
            let selected = index == shell.attachment_cursor;
            let marker = if selected { "▸ " } else { "  " };
            let style = if selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{} ({})", row.name, row.size_label),
                style,
            )));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_question_card(f: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(" Research Question ", heading_style(Tone::Primary)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let query_line = if view.query.is_empty() {
        Line::from(Span::styled(
            "What would you like to research? e.g., 'What are the latest trends in renewable energy?'",
            tone_style(Tone::Muted),
        ))
    } else {
        Line::from(vec![
            Span::raw(view.query.clone()),
            Span::styled("▏", tone_style(Tone::Primary)),
        ])
    };

    let action_line = match view.generation {
        GenerationState::Generating => {
            Line::from(Span::styled("⟳ Generating Report...", badge_style(Tone::Accent)))
        }
        _ if view.can_generate => {
            Line::from(Span::styled("[ Enter ] Generate Report", badge_style(Tone::Primary)))
        }
        _ => Line::from(Span::styled(
            "[ Enter ] Generate Report (enter a question first)",
            tone_style(Tone::Muted),
        )),
    };

    f.render_widget(Paragraph::new(vec![query_line, action_line]), inner);
}

fn render_results(f: &mut Frame, area: Rect, view: &AppViewModel) {
    let Some(report) = &view.report else {
        return;
    };

    let mut lines = Vec::new();

    if report.live_update_available {
        lines.push(Line::from(vec![
            Span::styled("● ", tone_style(Tone::Accent)),
            Span::raw("New blog update available → Refresh report "),
            Span::styled("(Ctrl+R)", tone_style(Tone::Muted)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "✔ Key Takeaways",
        heading_style(Tone::Success),
    )));
    for takeaway in &report.key_takeaways {
        lines.push(Line::from(format!("  • {takeaway}")));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Evidence with Citations",
        heading_style(Tone::Primary),
    )));
    for item in &report.evidence {
        lines.push(Line::from(format!("  {}", item.claim)));
        lines.push(Line::from(Span::styled(
            format!("    {} (Page {})", item.source, item.page),
            tone_style(Tone::Muted),
        )));
        let tone = match item.confidence {
            assistant_core::Confidence::High => Tone::Success,
            assistant_core::Confidence::Medium => Tone::Warning,
            assistant_core::Confidence::Low => Tone::Destructive,
        };
        lines.push(Line::from(Span::styled(
            format!("    {} Confidence", item.confidence.label()),
            badge_style(tone),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "✦ Final Summary",
        heading_style(Tone::Accent),
    )));
    lines.push(Line::from(report.summary.clone()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Accent))
        .title(Span::styled(" Results ", heading_style(Tone::Accent)));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_usage_card(f: &mut Frame, area: Rect) {
    let stats = &content::USAGE_STATS;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(" Usage Statistics ", heading_style(Tone::Primary)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("Questions Asked  ", tone_style(Tone::Muted)),
            Span::styled(
                stats.questions_asked.to_string(),
                badge_style(Tone::Primary),
            ),
        ]),
        Line::from(vec![
            Span::styled("Reports Generated ", tone_style(Tone::Muted)),
            Span::styled(
                stats.reports_generated.to_string(),
                badge_style(Tone::Accent),
            ),
        ]),
        Line::from(""),
        Line::from(format!(
            "Credits Used {}/{}",
            stats.credits_used, stats.credits_total
        )),
        Line::from(Span::styled(
            meter(stats.credits_used as u64, stats.credits_total as u64, 20),
            tone_style(Tone::Primary),
        )),
        Line::from(Span::styled(
            format!("{} credits remaining", stats.credits_remaining),
            tone_style(Tone::Muted),
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
