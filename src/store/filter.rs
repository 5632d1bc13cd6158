//! Search filter for entry listings

use crate::schemas::Entry;

/// Which entries a listing returns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-insensitive substring over building, section, mtr, works,
    /// responsible and creator. Blank means no text filter.
    pub query: Option<String>,

    pub an_approved: Option<bool>,
    pub gip_approved: Option<bool>,
    pub done: Option<bool>,

    /// `Some(true)` keeps entries with a paid date
    pub paid: Option<bool>,

    /// Maximum number of entries returned
    pub limit: Option<usize>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Whether a single entry passes every condition of the filter
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(q) = self.normalized_query() {
            let haystacks = [
                &entry.building,
                &entry.section,
                &entry.mtr,
                &entry.works,
                &entry.responsible,
                &entry.created_by,
            ];
            if !haystacks.iter().any(|h| h.to_lowercase().contains(&q)) {
                return false;
            }
        }
        if self.an_approved.is_some_and(|want| entry.an.approved != want) {
            return false;
        }
        if self.gip_approved.is_some_and(|want| entry.gip.approved != want) {
            return false;
        }
        if self.done.is_some_and(|want| entry.done != want) {
            return false;
        }
        if self.paid.is_some_and(|want| entry.is_paid() != want) {
            return false;
        }
        true
    }

    /// Filter an already newest-first sequence and apply the limit
    pub fn apply(&self, entries: impl IntoIterator<Item = Entry>) -> Vec<Entry> {
        let matching = entries.into_iter().filter(|e| self.matches(e));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{ApprovalKind, EntryDraft};
    use chrono::Utc;

    fn make_entry(building: &str, works: &str) -> Entry {
        Entry::new(
            EntryDraft {
                building: building.to_string(),
                section: "Электрика".to_string(),
                mtr: "cable-5x2.5".to_string(),
                quantity: 10,
                works: works.to_string(),
                responsible: "Petrov".to_string(),
                ..Default::default()
            },
            "alice",
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = EntryFilter::new();
        assert!(filter.matches(&make_entry("A1", "")));
        assert!(EntryFilter::new().with_query("   ").matches(&make_entry("A1", "")));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let entry = make_entry("Block A1", "Installed CABLE run");
        assert!(EntryFilter::new().with_query("block a1").matches(&entry));
        assert!(EntryFilter::new().with_query("cable run").matches(&entry));
        assert!(EntryFilter::new().with_query("ЭЛЕКТР").matches(&entry));
        assert!(EntryFilter::new().with_query("ALICE").matches(&entry));
        assert!(!EntryFilter::new().with_query("plumbing").matches(&entry));
    }

    #[test]
    fn test_flag_filters() {
        let draft = make_entry("A1", "");
        let approved = draft.clone().with_approval(ApprovalKind::An, "ivan", Utc::now());

        let filter = EntryFilter {
            an_approved: Some(true),
            ..Default::default()
        };
        assert!(!filter.matches(&draft));
        assert!(filter.matches(&approved));

        let filter = EntryFilter {
            gip_approved: Some(false),
            done: Some(false),
            paid: Some(false),
            ..Default::default()
        };
        assert!(filter.matches(&draft));
        assert!(filter.matches(&approved));
    }

    #[test]
    fn test_apply_limit_keeps_order() {
        let entries = vec![make_entry("A3", ""), make_entry("A2", ""), make_entry("A1", "")];
        let result = EntryFilter::new().with_limit(2).apply(entries);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].building, "A3");
        assert_eq!(result[1].building, "A2");
    }
}
