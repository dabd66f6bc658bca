//! The shared sidebar + header wrapper applied to every page except the
//! landing page.

use assistant_core::{AppViewModel, GenerationState, Page, NAV_PAGES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::style::{badge_style, heading_style, tone_style, Tone};
use crate::content;
use crate::shell::{InputMode, ShellState};

const SIDEBAR_WIDTH: u16 = 26;

/// Draws the chrome and returns the content area the page renders into.
pub(crate) fn draw(f: &mut Frame, view: &AppViewModel, shell: &ShellState) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(f.area());

    render_sidebar(f, columns[0], view.page);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    render_header(f, rows[0], view.page);
    render_footer(f, rows[2], view, shell);

    rows[1]
}

fn render_sidebar(f: &mut Frame, area: Rect, active: Page) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(tone_style(Tone::Muted));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled("◆ Research AI", heading_style(Tone::Primary))),
        Line::from(Span::styled("  Smart Assistant", tone_style(Tone::Muted))),
        Line::from(""),
        Line::from(Span::styled("Navigation", tone_style(Tone::Muted))),
    ];

    for page in NAV_PAGES {
        let marker = if page == active { "▸ " } else { "  " };
        let style = if page == active {
            badge_style(Tone::Primary)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", page.title()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Quick Actions",
        tone_style(Tone::Muted),
    )));
    lines.push(Line::from("  New Research"));
    lines.push(Line::from("  AI Assistant"));

    // User footer pinned to the bottom of the sidebar.
    let fixed_top = lines.len() as u16;
    f.render_widget(Paragraph::new(lines), inner);

    if inner.height > fixed_top + 2 {
        let footer_area = Rect {
            x: inner.x,
            y: inner.y + inner.height - 2,
            width: inner.width,
            height: 2,
        };
        let user = Paragraph::new(vec![
            Line::from(Span::styled(
                format!(
                    "({}) {} {}",
                    content::PROFILE.initials,
                    content::PROFILE.first_name,
                    content::PROFILE.last_name
                ),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(content::PROFILE.plan, tone_style(Tone::Muted))),
        ]);
        f.render_widget(user, footer_area);
    }
}

fn render_header(f: &mut Frame, area: Rect, page: Page) {
    let title = Line::from(vec![
        Span::styled("━━ ", heading_style(Tone::Primary)),
        Span::styled(page.title(), heading_style(Tone::Primary)),
        Span::styled(" ━━", heading_style(Tone::Primary)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn render_footer(f: &mut Frame, area: Rect, view: &AppViewModel, shell: &ShellState) {
    let hint = match (view.page, shell.mode) {
        (_, InputMode::PathPrompt) => "Enter confirm path · Esc cancel",
        (Page::MainApp, InputMode::Browse) => match view.generation {
            GenerationState::Completed => {
                "type to edit · Enter generate · Ctrl+O attach · Ctrl+D remove · Ctrl+R refresh · Tab next page"
            }
            _ => "type to edit · Enter generate · Ctrl+O attach · Ctrl+D remove · Tab next page",
        },
        _ => "Tab next page · Shift+Tab previous · Esc landing · q quit",
    };

    let footer = Paragraph::new(Line::from(Span::styled(hint, tone_style(Tone::Muted))))
        .block(Block::default());
    f.render_widget(footer, area);
}
