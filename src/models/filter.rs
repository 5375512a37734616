use super::status::TestStatus;

const ALL: [TestStatus; 3] = [TestStatus::Passed, TestStatus::Failed, TestStatus::Skipped];

/// The set of statuses currently eligible for display. An empty set means
/// "show all"; that rule is part of the contract, not an accident.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusFilter {
    visible: Vec<TestStatus>,
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl StatusFilter {
    pub fn all() -> Self {
        Self {
            visible: ALL.to_vec(),
        }
    }

    /// Replace the visible set. Duplicates are dropped and the canonical
    /// PASS/FAIL/SKIP order is restored so `describe` stays stable.
    pub fn set(&mut self, statuses: &[TestStatus]) {
        self.visible = ALL
            .into_iter()
            .filter(|s| statuses.contains(s))
            .collect();
    }

    pub fn allows(&self, status: TestStatus) -> bool {
        self.visible.is_empty() || self.visible.contains(&status)
    }

    /// Statuses that would survive `allows`, with the empty-set rule applied.
    pub fn effective(&self) -> Vec<TestStatus> {
        if self.visible.is_empty() {
            ALL.to_vec()
        } else {
            self.visible.clone()
        }
    }

    pub fn is_all(&self) -> bool {
        self.effective().len() == ALL.len()
    }

    /// The visible set with one status toggled, for per-status filter keys.
    pub fn toggled(&self, status: TestStatus) -> Vec<TestStatus> {
        let mut statuses = self.effective();
        match statuses.iter().position(|&s| s == status) {
            Some(i) => {
                statuses.remove(i);
            }
            None => statuses.push(status),
        }
        statuses
    }

    /// Human-readable form of the visible set, e.g. "FAIL/SKIP".
    pub fn describe(&self) -> String {
        self.effective()
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Build a filter from status keywords, ignoring ones that don't parse.
    pub fn from_keywords(keywords: &[String]) -> Self {
        let statuses: Vec<TestStatus> =
            keywords.iter().filter_map(|k| TestStatus::parse(k)).collect();
        let mut filter = Self::all();
        filter.set(&statuses);
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_everything() {
        let filter = StatusFilter::default();
        assert!(filter.allows(TestStatus::Passed));
        assert!(filter.allows(TestStatus::Failed));
        assert!(filter.allows(TestStatus::Skipped));
        assert_eq!(filter.describe(), "PASS/FAIL/SKIP");
    }

    #[test]
    fn set_restricts_visibility() {
        let mut filter = StatusFilter::all();
        filter.set(&[TestStatus::Failed]);
        assert!(!filter.allows(TestStatus::Passed));
        assert!(filter.allows(TestStatus::Failed));
        assert!(!filter.allows(TestStatus::Skipped));
        assert_eq!(filter.describe(), "FAIL");
    }

    #[test]
    fn empty_set_means_show_all() {
        let mut filter = StatusFilter::all();
        filter.set(&[]);
        assert!(filter.allows(TestStatus::Passed));
        assert!(filter.allows(TestStatus::Failed));
        assert!(filter.allows(TestStatus::Skipped));
    }

    #[test]
    fn set_restores_canonical_order() {
        let mut filter = StatusFilter::all();
        filter.set(&[TestStatus::Skipped, TestStatus::Passed]);
        assert_eq!(filter.describe(), "PASS/SKIP");
    }

    #[test]
    fn toggled_flips_one_status() {
        let filter = StatusFilter::all();
        let without_pass = filter.toggled(TestStatus::Passed);
        assert!(!without_pass.contains(&TestStatus::Passed));
        assert_eq!(without_pass.len(), 2);

        let mut narrowed = StatusFilter::all();
        narrowed.set(&without_pass);
        let restored = narrowed.toggled(TestStatus::Passed);
        assert!(restored.contains(&TestStatus::Passed));
        assert_eq!(restored.len(), 3);
    }

    #[test]
    fn from_keywords_ignores_unknown_words() {
        let filter = StatusFilter::from_keywords(&[
            "FAIL".to_string(),
            "banana".to_string(),
            "skip".to_string(),
        ]);
        assert_eq!(filter.describe(), "FAIL/SKIP");
    }
}
