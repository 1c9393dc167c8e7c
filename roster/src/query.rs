use types::Status;

/// Minimum-experience choices offered by the filter dialog, in years.
pub const EXPERIENCE_THRESHOLDS: [u32; 4] = [1, 3, 5, 10];

/// Structured filter selection. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub department: Option<String>,
    pub status: Option<Status>,
    pub min_experience: Option<u32>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// How many of the three filters constrain the result.
    pub fn active_count(&self) -> usize {
        [
            self.department.is_some(),
            self.status.is_some(),
            self.min_experience.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Search text plus filters. Every setter is a single state transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub filters: Filters,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn set_department(&mut self, department: Option<String>) {
        self.filters.department = department;
    }

    pub fn set_status(&mut self, status: Option<Status>) {
        self.filters.status = status;
    }

    pub fn set_min_experience(&mut self, years: Option<u32>) {
        self.filters.min_experience = years;
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
    }

    /// Reset all three filters at once. The search text is kept.
    pub fn clear_filters(&mut self) {
        self.filters = Filters::default();
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.filters.is_empty()
    }
}

fn is_wildcard(value: &str) -> bool {
    matches!(value.trim(), "" | "all" | "any")
}

/// Interpret a department select value.
pub fn parse_department_choice(value: &str) -> Option<String> {
    (!is_wildcard(value)).then(|| value.to_string())
}

/// Interpret a status select value. Unknown values mean "no constraint".
pub fn parse_status_choice(value: &str) -> Option<Status> {
    if is_wildcard(value) {
        return None;
    }
    match value.parse() {
        Ok(status) => Some(status),
        Err(e) => {
            tracing::debug!("ignoring status filter: {}", e);
            None
        }
    }
}

/// Interpret a minimum-experience select value.
pub fn parse_experience_choice(value: &str) -> Option<u32> {
    if is_wildcard(value) {
        return None;
    }
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_filters_resets_all_three_and_keeps_search() {
        let mut q = QueryState::new();
        q.set_search("math");
        q.set_department(Some("Mathematics".into()));
        q.set_status(Some(Status::OnLeave));
        q.set_min_experience(Some(5));
        assert_eq!(q.active_filter_count(), 3);

        q.clear_filters();
        assert_eq!(q.filters, Filters::default());
        assert_eq!(q.search, "math");
        assert!(!q.is_unconstrained());
    }

    #[test]
    fn select_values_map_wildcards_to_none() {
        assert_eq!(parse_department_choice("all"), None);
        assert_eq!(parse_department_choice(""), None);
        assert_eq!(parse_department_choice("Art"), Some("Art".into()));

        assert_eq!(parse_status_choice("all"), None);
        assert_eq!(parse_status_choice("on-leave"), Some(Status::OnLeave));
        assert_eq!(parse_status_choice("sabbatical"), None);

        assert_eq!(parse_experience_choice("any"), None);
        assert_eq!(parse_experience_choice("3"), Some(3));
        assert_eq!(parse_experience_choice("lots"), None);
    }
}
