use crate::models::{Report, RunSummary, StatusFilter, TestCase};

pub mod actions;
pub mod notifier;
pub mod selection;

pub use actions::{Action, handle_action, trigger_action};
pub use notifier::{NotificationKind, Notifier};
pub use selection::{CaseRow, SelectionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Groups,
    Cases,
}

pub struct App {
    /// The loaded report; never mutated after startup.
    pub report: Report,
    pub summary: RunSummary,
    pub title: Option<String>,
    pub filter: StatusFilter,
    pub selection: SelectionState,
    /// Case rows for the selected group, rebuilt wholesale on selection.
    pub rows: Vec<CaseRow>,
    pub active_panel: Panel,
    pub group_cursor: usize,
    pub row_cursor: usize,
    pub group_scroll_offset: usize,
    pub case_scroll_offset: usize,
    pub group_viewport_height: usize,
    pub case_viewport_height: usize,
    /// (file, line, col) to open once the main loop gets control back.
    pub pending_editor: Option<(String, Option<u32>, Option<u32>)>,
    pub should_quit: bool,
    pub notifier: Notifier,
}

impl App {
    pub fn new(report: Report, filter: StatusFilter, title: Option<String>) -> Self {
        let summary = report.summary();
        Self {
            report,
            summary,
            title,
            filter,
            selection: SelectionState::new(),
            rows: Vec::new(),
            active_panel: Panel::Groups,
            group_cursor: 0,
            row_cursor: 0,
            group_scroll_offset: 0,
            case_scroll_offset: 0,
            group_viewport_height: 0,
            case_viewport_height: 0,
            pending_editor: None,
            should_quit: false,
            notifier: Notifier::new(),
        }
    }

    /// The case behind the row under the case-list cursor, if any.
    pub fn case_under_cursor(&self) -> Option<&TestCase> {
        let (group_index, case_index) = self.rows.get(self.row_cursor)?.indices()?;
        self.report.case(group_index, case_index)
    }

    pub fn adjust_group_scroll(&mut self) {
        if self.group_viewport_height == 0 {
            return;
        }
        if self.group_cursor < self.group_scroll_offset {
            self.group_scroll_offset = self.group_cursor;
        } else if self.group_cursor >= self.group_scroll_offset + self.group_viewport_height {
            self.group_scroll_offset = self.group_cursor - self.group_viewport_height + 1;
        }
    }

    pub fn adjust_case_scroll(&mut self) {
        if self.case_viewport_height == 0 {
            return;
        }
        if self.row_cursor < self.case_scroll_offset {
            self.case_scroll_offset = self.row_cursor;
        } else if self.row_cursor >= self.case_scroll_offset + self.case_viewport_height {
            self.case_scroll_offset = self.row_cursor - self.case_viewport_height + 1;
        }
    }
}
