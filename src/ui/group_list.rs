use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use super::theme;
use crate::app::{App, Panel};

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.active_panel == Panel::Groups;
    let border_style = if focused {
        Style::default().fg(theme::BLUE)
    } else {
        Style::default().fg(theme::SURFACE2)
    };

    let title = match &app.title {
        Some(name) => format!(" Groups — {} ", name),
        None => " Groups ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_height = block.inner(area).height as usize;
    app.group_viewport_height = inner_height;

    let groups = app.report.groups();
    let end = (app.group_scroll_offset + inner_height).min(groups.len());
    let items: Vec<ListItem> = groups[app.group_scroll_offset..end]
        .iter()
        .enumerate()
        .map(|(view_i, group)| {
            let absolute_i = view_i + app.group_scroll_offset;
            let selected = app.selection.selected() == Some(absolute_i);
            let under_cursor = absolute_i == app.group_cursor && focused;

            let marker = if selected { "▶ " } else { "  " };
            let name_style = if under_cursor {
                Style::default().bg(theme::SURFACE1).fg(theme::TEXT)
            } else if selected {
                Style::default().fg(theme::TEXT).bold()
            } else {
                Style::default().fg(theme::SUBTEXT0)
            };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(theme::BLUE)),
                Span::styled(group.display_name(absolute_i), name_style),
            ];
            if !group.failure_indicator.is_empty() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    group.failure_indicator.clone(),
                    Style::default().fg(theme::RED),
                ));
            }
            if !group.skipped_indicator.is_empty() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    group.skipped_indicator.clone(),
                    Style::default().fg(theme::YELLOW),
                ));
            }
            spans.push(Span::styled(
                format!(" ({})", group.test_results.len()),
                Style::default().fg(theme::OVERLAY0),
            ));

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
