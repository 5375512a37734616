use crate::{
    app::{App, Panel},
    models::{TestCase, TestStatus},
};

/// Which group currently populates the case list. A single instance lives on
/// the [`App`] and is mutated only through the selection entry points below.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Drop the selected marker from the previous group, if any.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn select(&mut self, group_index: usize) {
        self.selected = Some(group_index);
    }
}

/// The expansion of a case row, built from report data on first toggle and
/// dropped on collapse. Its presence on the row IS the expanded state.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    /// All captured output lines, concatenated with no separator.
    pub console: String,
    pub screenshots: Vec<String>,
    pub package: String,
    /// "file:line:col", bare file name, or "n/a".
    pub location: String,
    pub status: TestStatus,
}

impl DetailPanel {
    fn build(case: &TestCase) -> Self {
        let location = if case.file_name.trim().is_empty() {
            "n/a".to_string()
        } else {
            match case.location {
                Some(pos) => format!("{}:{}:{}", case.file_name, pos.line, pos.col),
                None => case.file_name.clone(),
            }
        };
        Self {
            console: case.console_text(),
            screenshots: case.screenshots.clone(),
            package: case.package.clone(),
            location,
            status: case.status(),
        }
    }
}

/// One entry of the rebuilt case list. Case rows address their test through
/// the report's index pair; the placeholder deliberately carries none and is
/// therefore untouchable by the toggle.
#[derive(Debug)]
pub enum CaseRow {
    Case {
        group_index: usize,
        case_index: usize,
        detail: Option<DetailPanel>,
    },
    Placeholder {
        message: String,
    },
}

impl CaseRow {
    pub fn indices(&self) -> Option<(usize, usize)> {
        match self {
            CaseRow::Case {
                group_index,
                case_index,
                ..
            } => Some((*group_index, *case_index)),
            CaseRow::Placeholder { .. } => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailPanel> {
        match self {
            CaseRow::Case { detail, .. } => detail.as_ref(),
            CaseRow::Placeholder { .. } => None,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.detail().is_some()
    }
}

/// Select a group and rebuild the case list for it.
///
/// Out-of-range indices are silent no-ops preserving prior state. With
/// `bulk` set, every rebuilt row is expanded through [`toggle_row`]; without
/// it, a single surviving row is auto-expanded through the same path.
pub fn select_group(app: &mut App, group_index: usize, bulk: bool) {
    let Some(group) = app.report.group(group_index) else {
        return;
    };

    app.selection.clear();
    app.selection.select(group_index);

    let mut rows: Vec<CaseRow> = group
        .test_results
        .iter()
        .enumerate()
        .filter(|(_, case)| app.filter.allows(case.status()))
        .map(|(case_index, _)| CaseRow::Case {
            group_index,
            case_index,
            detail: None,
        })
        .collect();

    if rows.is_empty() {
        rows.push(CaseRow::Placeholder {
            message: format!("No {} test cases to display", app.filter.describe()),
        });
    }

    let case_count = rows.iter().filter(|row| row.indices().is_some()).count();

    // The new list wholly replaces the old one; stale expansion state on the
    // previous group's rows goes with it.
    app.rows = rows;
    app.row_cursor = 0;
    app.case_scroll_offset = 0;

    if bulk {
        for row_index in 0..app.rows.len() {
            toggle_row(app, row_index);
        }
    } else if case_count == 1 {
        toggle_row(app, 0);
    }
}

/// Expand or collapse one case row. The single toggle implementation behind
/// direct activation, bulk expansion, and single-result auto-expansion.
///
/// Rows without an index pair (the placeholder) and index pairs that don't
/// resolve in the report are silent no-ops.
pub fn toggle_row(app: &mut App, row_index: usize) {
    let (group_index, case_index, expanded) = match app.rows.get(row_index) {
        Some(CaseRow::Case {
            group_index,
            case_index,
            detail,
        }) => (*group_index, *case_index, detail.is_some()),
        _ => return,
    };

    if expanded {
        if let Some(CaseRow::Case { detail, .. }) = app.rows.get_mut(row_index) {
            *detail = None;
        }
        return;
    }

    let Some(case) = app.report.case(group_index, case_index) else {
        return;
    };
    let panel = DetailPanel::build(case);
    if let Some(CaseRow::Case { detail, .. }) = app.rows.get_mut(row_index) {
        *detail = Some(panel);
    }
}

/// Replace the visible-status set and force a reselection of the first
/// group, so the new filter takes effect immediately.
pub fn apply_filter(app: &mut App, statuses: &[TestStatus]) {
    app.filter.set(statuses);
    if app.report.group(0).is_some() {
        app.group_cursor = 0;
        app.group_scroll_offset = 0;
    }
    select_group(app, 0, false);
}

/// Startup deep link: resolve a case by name, select its group, expand its
/// row, and move focus to it. A miss is fail-soft via the notifier.
pub fn open_case_link(app: &mut App, name: &str) {
    let Some((group_index, case_index)) = app.report.find_case(name) else {
        app.notifier
            .error(format!("test case '{}' not found in report", name));
        return;
    };

    select_group(app, group_index, false);
    app.group_cursor = group_index;

    let Some(row_index) = app
        .rows
        .iter()
        .position(|row| row.indices() == Some((group_index, case_index)))
    else {
        app.notifier
            .error(format!("test case '{}' is hidden by the current filter", name));
        return;
    };

    // Single-case groups arrive already expanded via select_group.
    if !app.rows[row_index].is_expanded() {
        toggle_row(app, row_index);
    }
    app.row_cursor = row_index;
    app.active_panel = Panel::Cases;
    app.adjust_case_scroll();
}
