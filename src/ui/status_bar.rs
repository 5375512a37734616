use ratatui::{prelude::*, widgets::Paragraph};

use super::theme;
use crate::app::{App, NotificationKind};
use crate::models::TestStatus;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let bar = if let Some(notification) = app.notifier.current() {
        let (icon, color) = match notification.kind {
            NotificationKind::Info => ("ℹ", theme::BLUE),
            NotificationKind::Error => ("✗", theme::RED),
        };
        Line::from(Span::styled(
            format!(" {} {}", icon, notification.message),
            Style::default().fg(color),
        ))
    } else {
        let mut spans = vec![
            Span::styled(" [enter]", Style::default().fg(theme::YELLOW)),
            Span::raw(" select/toggle  "),
            Span::styled("[L]", Style::default().fg(theme::YELLOW)),
            Span::raw(" expand all  "),
            Span::styled("[p/f/s]", Style::default().fg(theme::YELLOW)),
            Span::raw(" filter  "),
            Span::styled("[a]", Style::default().fg(theme::YELLOW)),
            Span::raw(" all  "),
            Span::styled("[e]", Style::default().fg(theme::YELLOW)),
            Span::raw(" edit  "),
            Span::styled("[q]", Style::default().fg(theme::YELLOW)),
            Span::raw(" quit"),
        ];

        if !app.filter.is_all() {
            spans.push(Span::styled(
                format!("  filter: {}", app.filter.describe()),
                Style::default().fg(theme::YELLOW),
            ));
        }

        let summary = &app.summary;
        spans.push(Span::styled(
            format!("  {} tests", summary.total),
            Style::default().fg(theme::SUBTEXT0),
        ));
        spans.push(Span::styled(
            format!("  {} ", TestStatus::Passed.glyph()),
            Style::default().fg(theme::GREEN),
        ));
        spans.push(Span::styled(
            format!("{}", summary.passed),
            Style::default().fg(theme::GREEN),
        ));
        spans.push(Span::styled(
            format!("  {} ", TestStatus::Failed.glyph()),
            Style::default().fg(theme::RED),
        ));
        spans.push(Span::styled(
            format!("{}", summary.failed),
            Style::default().fg(theme::RED),
        ));
        spans.push(Span::styled(
            format!("  {} ", TestStatus::Skipped.glyph()),
            Style::default().fg(theme::TEAL),
        ));
        spans.push(Span::styled(
            format!("{}", summary.skipped),
            Style::default().fg(theme::TEAL),
        ));
        spans.push(Span::styled(
            format!("  {:.1}s", summary.duration),
            Style::default().fg(theme::MAUVE),
        ));

        Line::from(spans)
    };

    let paragraph = Paragraph::new(bar).style(Style::default().bg(theme::SURFACE0));
    frame.render_widget(paragraph, area);
}
