use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use super::theme;
use crate::{
    app::{App, CaseRow, Panel},
    models::TestStatus,
};

pub fn draw(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.active_panel == Panel::Cases;
    let border_style = if focused {
        Style::default().fg(theme::BLUE)
    } else {
        Style::default().fg(theme::SURFACE2)
    };

    let block = Block::default()
        .title(" Cases ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_height = block.inner(area).height as usize;
    app.case_viewport_height = inner_height;

    if app.selection.selected().is_none() {
        let hint = List::new(vec![ListItem::new(Line::from(Span::styled(
            "Select a test group",
            Style::default().fg(theme::OVERLAY0),
        )))])
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let end = (app.case_scroll_offset + inner_height).min(app.rows.len());
    let items: Vec<ListItem> = app.rows[app.case_scroll_offset..end]
        .iter()
        .enumerate()
        .map(|(view_i, row)| {
            let absolute_i = view_i + app.case_scroll_offset;
            let under_cursor = absolute_i == app.row_cursor && focused;
            render_row(app, row, under_cursor)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn render_row(app: &App, row: &CaseRow, under_cursor: bool) -> ListItem<'static> {
    let Some((group_index, case_index)) = row.indices() else {
        let CaseRow::Placeholder { message } = row else {
            unreachable!()
        };
        return ListItem::new(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme::OVERLAY0).italic(),
        )));
    };

    let Some(case) = app.report.case(group_index, case_index) else {
        return ListItem::new(Line::from(""));
    };
    let status = case.status();

    let name_style = if under_cursor {
        Style::default().bg(theme::SURFACE1).fg(theme::TEXT)
    } else {
        Style::default().fg(theme::TEXT)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{:<4}", status.label()),
            Style::default().fg(status.color()),
        ),
        Span::styled(
            format!(" {} ", status.glyph()),
            Style::default().fg(status.color()),
        ),
        Span::styled(case.name.clone(), name_style),
        Span::styled(
            format!("  {:.2}s ⏱", case.elapsed_time),
            Style::default().fg(theme::SUBTEXT0),
        ),
    ])];

    if let Some(panel) = row.detail() {
        let console_style = match panel.status {
            TestStatus::Passed => Style::default().fg(theme::TEXT),
            TestStatus::Skipped => Style::default().fg(theme::OVERLAY0),
            TestStatus::Failed => Style::default().fg(theme::RED),
        };
        for output_line in panel.console.lines() {
            lines.push(Line::from(Span::styled(
                format!("    {}", output_line),
                console_style,
            )));
        }

        if !panel.screenshots.is_empty() {
            lines.push(Line::from(Span::styled(
                "    Screenshots:",
                Style::default().fg(theme::SUBTEXT0).bold(),
            )));
            for screenshot in &panel.screenshots {
                lines.push(Line::from(Span::styled(
                    format!("      {}", screenshot),
                    Style::default().fg(theme::BLUE).underlined(),
                )));
            }
        }
        lines.push(Line::from(vec![
            Span::styled("    Package: ", Style::default().fg(theme::SUBTEXT0).bold()),
            Span::styled(panel.package.clone(), Style::default().fg(theme::SUBTEXT0)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    Source:  ", Style::default().fg(theme::SUBTEXT0).bold()),
            Span::styled(panel.location.clone(), Style::default().fg(theme::SUBTEXT0)),
        ]));
    }

    ListItem::new(lines)
}
