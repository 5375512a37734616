use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::status::TestStatus;

/// One executed test as recorded by the report producer. Field names follow
/// the producer's JSON output, so a report file deserializes as-is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestCase {
    #[serde(rename = "TestName")]
    pub name: String,
    #[serde(rename = "Package", default)]
    pub package: String,
    #[serde(rename = "ElapsedTime", default)]
    pub elapsed_time: f64,
    #[serde(rename = "Output", default)]
    pub output: Vec<String>,
    #[serde(rename = "Screenshots", default)]
    pub screenshots: Vec<String>,
    #[serde(rename = "Passed", default)]
    pub passed: bool,
    #[serde(rename = "Skipped", default)]
    pub skipped: bool,
    /// Empty when the producer could not resolve the source file.
    #[serde(rename = "TestFileName", default)]
    pub file_name: String,
    #[serde(rename = "TestFunctionDetail", default)]
    pub location: Option<SourcePos>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SourcePos {
    #[serde(rename = "Line")]
    pub line: u32,
    #[serde(rename = "Col")]
    pub col: u32,
}

impl TestCase {
    pub fn status(&self) -> TestStatus {
        TestStatus::of(self.passed, self.skipped)
    }

    /// Full captured console output: the recorded lines carry their own
    /// newlines, so they are concatenated without a separator.
    pub fn console_text(&self) -> String {
        self.output.concat()
    }
}

/// A named collection of test cases plus the two opaque indicator strings
/// shown in the group summary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestGroup {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "FailureIndicator", default)]
    pub failure_indicator: String,
    #[serde(rename = "SkippedIndicator", default)]
    pub skipped_indicator: String,
    #[serde(rename = "TestResults", default)]
    pub test_results: Vec<TestCase>,
}

impl TestGroup {
    /// Display name, falling back to the first case's package for reports
    /// whose producer does not name groups.
    pub fn display_name(&self, index: usize) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        match self.test_results.first() {
            Some(case) if !case.package.is_empty() => case.package.clone(),
            _ => format!("group {}", index),
        }
    }
}

/// Totals across the whole report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Sum of per-case elapsed time, in seconds.
    pub duration: f64,
}

/// The immutable report loaded once at startup. Groups and cases keep the
/// producer's order; all addressing goes through bounds-checked index pairs.
#[derive(Debug, Clone, Default)]
pub struct Report {
    groups: Vec<TestGroup>,
}

impl Report {
    pub fn from_groups(groups: Vec<TestGroup>) -> Self {
        Self { groups }
    }

    /// Load a report file: a JSON array of groups.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report file {}", path.display()))?;
        let groups: Vec<TestGroup> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse report file {}", path.display()))?;
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[TestGroup] {
        &self.groups
    }

    pub fn group(&self, group_index: usize) -> Option<&TestGroup> {
        self.groups.get(group_index)
    }

    pub fn case(&self, group_index: usize, case_index: usize) -> Option<&TestCase> {
        self.groups.get(group_index)?.test_results.get(case_index)
    }

    /// Resolve a case by name, scanning groups and cases in report order.
    /// First match wins; names are expected to be unique report-wide.
    pub fn find_case(&self, name: &str) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(g, group)| {
            group
                .test_results
                .iter()
                .position(|case| case.name == name)
                .map(|c| (g, c))
        })
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for case in self.groups.iter().flat_map(|g| &g.test_results) {
            summary.total += 1;
            summary.duration += case.elapsed_time;
            match case.status() {
                TestStatus::Passed => summary.passed += 1,
                TestStatus::Failed => summary.failed += 1,
                TestStatus::Skipped => summary.skipped += 1,
            }
        }
        summary
    }
}
