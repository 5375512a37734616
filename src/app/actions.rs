use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::{App, Panel, selection},
    models::TestStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrevious,
    NavigateUp,
    NavigateDown,
    ScrollUp,
    ScrollDown,
    JumpToStart,
    JumpToEnd,
    /// Enter: select the group under the cursor, or toggle the row under it.
    Activate,
    /// Select the group under the cursor and expand every visible row.
    SelectExpandAll,
    CollapseAll,
    ToggleStatusFilter(TestStatus),
    ShowAllStatuses,
    OpenInEditor,
}

pub fn trigger_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') => Some(Action::ScrollUp),
            KeyCode::Char('d') => Some(Action::ScrollDown),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrevious),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::NavigateDown),
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::JumpToStart),
        KeyCode::Char('G') | KeyCode::End => Some(Action::JumpToEnd),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char('L') => Some(Action::SelectExpandAll),
        KeyCode::Char('H') => Some(Action::CollapseAll),
        KeyCode::Char('p') => Some(Action::ToggleStatusFilter(TestStatus::Passed)),
        KeyCode::Char('f') => Some(Action::ToggleStatusFilter(TestStatus::Failed)),
        KeyCode::Char('s') => Some(Action::ToggleStatusFilter(TestStatus::Skipped)),
        KeyCode::Char('a') => Some(Action::ShowAllStatuses),
        KeyCode::Char('e') => Some(Action::OpenInEditor),
        _ => None,
    }
}

/// Process a keyboard action against the app state.
pub fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,

        Action::FocusNext | Action::FocusPrevious => {
            app.active_panel = match app.active_panel {
                Panel::Groups => Panel::Cases,
                Panel::Cases => Panel::Groups,
            };
        }

        Action::NavigateUp => navigate(app, |cursor, _| cursor.saturating_sub(1)),

        Action::NavigateDown => navigate(app, |cursor, max| (cursor + 1).min(max)),

        Action::ScrollUp => {
            let half = half_page(app);
            navigate(app, move |cursor, _| cursor.saturating_sub(half));
        }

        Action::ScrollDown => {
            let half = half_page(app);
            navigate(app, move |cursor, max| (cursor + half).min(max));
        }

        Action::JumpToStart => navigate(app, |_, _| 0),

        Action::JumpToEnd => navigate(app, |_, max| max),

        Action::Activate => match app.active_panel {
            Panel::Groups => {
                let cursor = app.group_cursor;
                selection::select_group(app, cursor, false);
            }
            Panel::Cases => {
                let cursor = app.row_cursor;
                selection::toggle_row(app, cursor);
            }
        },

        Action::SelectExpandAll => match app.active_panel {
            Panel::Groups => {
                let cursor = app.group_cursor;
                selection::select_group(app, cursor, true);
            }
            // Re-run the selection with the bulk flag for the active group.
            Panel::Cases => {
                if let Some(group_index) = app.selection.selected() {
                    selection::select_group(app, group_index, true);
                }
            }
        },

        Action::CollapseAll => {
            for row_index in 0..app.rows.len() {
                if app.rows[row_index].is_expanded() {
                    selection::toggle_row(app, row_index);
                }
            }
        }

        Action::ToggleStatusFilter(status) => {
            let statuses = app.filter.toggled(status);
            selection::apply_filter(app, &statuses);
        }

        Action::ShowAllStatuses => {
            selection::apply_filter(
                app,
                &[TestStatus::Passed, TestStatus::Failed, TestStatus::Skipped],
            );
        }

        Action::OpenInEditor => {
            let Some((file, location)) = app
                .case_under_cursor()
                .map(|case| (case.file_name.clone(), case.location))
            else {
                return;
            };
            if file.trim().is_empty() {
                app.notifier.info("no source location recorded for this case");
                return;
            }
            let (line, col) = match location {
                Some(pos) => (Some(pos.line), Some(pos.col)),
                None => (None, None),
            };
            app.pending_editor = Some((file, line, col));
        }
    }
}

fn half_page(app: &App) -> usize {
    let height = match app.active_panel {
        Panel::Groups => app.group_viewport_height,
        Panel::Cases => app.case_viewport_height,
    };
    (height / 2).max(1)
}

fn navigate(app: &mut App, step: impl Fn(usize, usize) -> usize) {
    match app.active_panel {
        Panel::Groups => {
            let max = app.report.groups().len().saturating_sub(1);
            app.group_cursor = step(app.group_cursor, max);
            app.adjust_group_scroll();
        }
        Panel::Cases => {
            let max = app.rows.len().saturating_sub(1);
            app.row_cursor = step(app.row_cursor, max);
            app.adjust_case_scroll();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Report, StatusFilter, TestCase, TestGroup};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_app() -> App {
        let cases = vec![
            TestCase {
                name: "One".to_string(),
                passed: true,
                ..Default::default()
            },
            TestCase {
                name: "Two".to_string(),
                ..Default::default()
            },
        ];
        let report = Report::from_groups(vec![
            TestGroup {
                test_results: cases,
                ..Default::default()
            },
            TestGroup::default(),
        ]);
        App::new(report, StatusFilter::all(), None)
    }

    #[test]
    fn keymap_covers_core_actions() {
        assert_eq!(trigger_action(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(trigger_action(key(KeyCode::Enter)), Some(Action::Activate));
        assert_eq!(
            trigger_action(key(KeyCode::Char('L'))),
            Some(Action::SelectExpandAll)
        );
        assert_eq!(
            trigger_action(key(KeyCode::Char('f'))),
            Some(Action::ToggleStatusFilter(TestStatus::Failed))
        );
        assert_eq!(
            trigger_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(trigger_action(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn enter_on_group_panel_selects_group_under_cursor() {
        let mut app = sample_app();
        handle_action(&mut app, Action::Activate);
        assert_eq!(app.selection.selected(), Some(0));
        assert_eq!(app.rows.len(), 2);
    }

    #[test]
    fn enter_on_case_panel_toggles_row_under_cursor() {
        let mut app = sample_app();
        handle_action(&mut app, Action::Activate);
        app.active_panel = Panel::Cases;
        app.row_cursor = 1;

        handle_action(&mut app, Action::Activate);
        assert!(app.rows[1].is_expanded());

        handle_action(&mut app, Action::Activate);
        assert!(!app.rows[1].is_expanded());
    }

    #[test]
    fn bulk_key_in_case_panel_reselects_active_group() {
        let mut app = sample_app();
        handle_action(&mut app, Action::Activate);
        app.active_panel = Panel::Cases;

        handle_action(&mut app, Action::SelectExpandAll);
        assert!(app.rows.iter().all(|r| r.is_expanded()));

        handle_action(&mut app, Action::CollapseAll);
        assert!(app.rows.iter().all(|r| !r.is_expanded()));
    }

    #[test]
    fn filter_toggle_goes_through_apply_filter() {
        let mut app = sample_app();
        handle_action(&mut app, Action::ToggleStatusFilter(TestStatus::Passed));

        // PASS removed, first group reselected, only the failing case left.
        assert_eq!(app.filter.describe(), "FAIL/SKIP");
        assert_eq!(app.selection.selected(), Some(0));
        let indices: Vec<_> = app.rows.iter().filter_map(|r| r.indices()).collect();
        assert_eq!(indices, vec![(0, 1)]);
    }

    #[test]
    fn navigation_clamps_to_bounds() {
        let mut app = sample_app();
        handle_action(&mut app, Action::NavigateUp);
        assert_eq!(app.group_cursor, 0);

        handle_action(&mut app, Action::NavigateDown);
        handle_action(&mut app, Action::NavigateDown);
        handle_action(&mut app, Action::NavigateDown);
        assert_eq!(app.group_cursor, 1);
    }

    #[test]
    fn editor_request_requires_a_recorded_file() {
        let mut app = sample_app();
        handle_action(&mut app, Action::Activate);
        app.active_panel = Panel::Cases;

        handle_action(&mut app, Action::OpenInEditor);
        assert!(app.pending_editor.is_none());
        assert!(app.notifier.current().is_some());
    }
}
