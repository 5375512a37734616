use ratatui::style::Color;

use crate::ui::theme;

/// Outcome of a single test case, derived on demand from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

impl TestStatus {
    /// Derive the status from the raw report flags.
    /// `passed` wins over `skipped`; neither means the case failed.
    pub fn of(passed: bool, skipped: bool) -> Self {
        if passed {
            TestStatus::Passed
        } else if skipped {
            TestStatus::Skipped
        } else {
            TestStatus::Failed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Passed => "PASS",
            TestStatus::Failed => "FAIL",
            TestStatus::Skipped => "SKIP",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            TestStatus::Passed => "✔",
            TestStatus::Failed => "✘",
            TestStatus::Skipped => "–",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TestStatus::Passed => theme::GREEN,
            TestStatus::Failed => theme::RED,
            TestStatus::Skipped => theme::OVERLAY0,
        }
    }

    /// Parse a status keyword as it appears in filter arguments and config
    /// files. Case-insensitive.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "PASS" => Some(TestStatus::Passed),
            "FAIL" => Some(TestStatus::Failed),
            "SKIP" => Some(TestStatus::Skipped),
            _ => None,
        }
    }
}
