use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content;
use crate::ui::style::{badge_style, heading_style, meter, tone_style, Tone};

pub(crate) fn render(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(8)])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(rows[0]);

    render_overview(f, top[0]);
    render_activity(f, top[1]);
    render_plans(f, rows[1]);
}

fn render_overview(f: &mut Frame, area: Rect) {
    let billing = &content::BILLING;
    let stats = &content::USAGE_STATS;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(" Current Plan ", heading_style(Tone::Primary)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("♕ ", badge_style(Tone::Warning)),
            Span::styled(billing.current_plan, badge_style(Tone::Primary)),
            Span::styled(
                format!("  {}/month", billing.monthly_spend),
                tone_style(Tone::Muted),
            ),
        ]),
        Line::from(format!(
            "Credits Used {}/{}",
            stats.credits_used, stats.credits_total
        )),
        Line::from(Span::styled(
            meter(stats.credits_used as u64, stats.credits_total as u64, 20),
            tone_style(Tone::Primary),
        )),
        Line::from(Span::styled(
            format!("Billing cycle: {}", billing.billing_cycle),
            tone_style(Tone::Muted),
        )),
        Line::from(Span::styled(
            format!(
                "Current period: {} – {}",
                content::format_date(billing.current_period_start),
                content::format_date(billing.next_billing_date)
            ),
            tone_style(Tone::Muted),
        )),
        Line::from(format!(
            "Next billing date: {} ({})",
            content::format_date(billing.next_billing_date),
            billing.monthly_spend
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_activity(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(" Recent Activity ", heading_style(Tone::Primary)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "Credits remaining: {} · resets {}",
            content::USAGE_STATS.credits_remaining,
            content::format_date(content::BILLING.next_billing_date)
        ),
        tone_style(Tone::Muted),
    ))];

    for event in &content::USAGE_HISTORY {
        lines.push(Line::from(vec![
            Span::raw(format!("{} — {} ", event.action, event.topic)),
            Span::styled(
                format!(
                    "(-{} credit, {})",
                    event.credits_used,
                    content::format_date(event.date)
                ),
                tone_style(Tone::Muted),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_plans(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(tone_style(Tone::Primary))
        .title(Span::styled(" Available Plans ", heading_style(Tone::Primary)));
    let outer = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(outer);

    for (plan, cell) in content::PLANS.iter().zip(cells.iter()) {
        let tone = if plan.current { Tone::Primary } else { Tone::Muted };
        let title = if plan.current {
            format!(" {} (Current Plan) ", plan.name)
        } else {
            format!(" {} ", plan.name)
        };
        let plan_block = Block::default()
            .borders(Borders::ALL)
            .border_style(tone_style(tone))
            .title(Span::styled(title, heading_style(tone)));
        let inner = plan_block.inner(*cell);
        f.render_widget(plan_block, *cell);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{}/month", plan.monthly_price),
                badge_style(Tone::Primary),
            )),
            Line::from(Span::styled(
                format!("{} credits included", plan.credits),
                tone_style(Tone::Muted),
            )),
        ];
        for feature in plan.features {
            lines.push(Line::from(format!("• {feature}")));
        }

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
