//! Pure derivations over the record store: the visible subset for a query and
//! the headline statistics.

use std::collections::{BTreeSet, HashSet};

use types::{Status, Teacher};

use crate::query::{Filters, QueryState};

/// The four predicates of a query, with the search text folded once.
pub struct Matcher<'q> {
    needle: String,
    filters: &'q Filters,
}

impl<'q> Matcher<'q> {
    pub fn new(query: &'q QueryState) -> Self {
        Self {
            needle: query.search.to_lowercase(),
            filters: &query.filters,
        }
    }

    /// Case-insensitive substring match on name, email or department.
    pub fn matches_search(&self, teacher: &Teacher) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&teacher.name, &teacher.email, &teacher.department]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    pub fn matches_department(&self, teacher: &Teacher) -> bool {
        self.filters
            .department
            .as_ref()
            .is_none_or(|department| teacher.department == *department)
    }

    pub fn matches_status(&self, teacher: &Teacher) -> bool {
        self.filters
            .status
            .is_none_or(|status| teacher.status == status)
    }

    pub fn matches_experience(&self, teacher: &Teacher) -> bool {
        self.filters
            .min_experience
            .is_none_or(|years| teacher.experience >= years)
    }

    pub fn matches(&self, teacher: &Teacher) -> bool {
        self.matches_search(teacher)
            && self.matches_department(teacher)
            && self.matches_status(teacher)
            && self.matches_experience(teacher)
    }
}

/// Teachers passing every predicate of `query`, in store order.
pub fn visible<'a>(records: &'a [Teacher], query: &QueryState) -> Vec<&'a Teacher> {
    let matcher = Matcher::new(query);
    records.iter().filter(|t| matcher.matches(t)).collect()
}

/// What the dashboard should show for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visible<T> {
    /// There are no teachers at all.
    StoreEmpty,
    /// There are teachers, but the query excludes all of them.
    NoMatches,
    Matches(Vec<T>),
}

impl<T> Visible<T> {
    pub fn teachers(&self) -> &[T] {
        match self {
            Visible::Matches(teachers) => teachers,
            Visible::StoreEmpty | Visible::NoMatches => &[],
        }
    }
}

impl Visible<&Teacher> {
    pub fn cloned(self) -> Visible<Teacher> {
        match self {
            Visible::StoreEmpty => Visible::StoreEmpty,
            Visible::NoMatches => Visible::NoMatches,
            Visible::Matches(teachers) => {
                Visible::Matches(teachers.into_iter().cloned().collect())
            }
        }
    }
}

pub fn outcome<'a>(records: &'a [Teacher], query: &QueryState) -> Visible<&'a Teacher> {
    if records.is_empty() {
        return Visible::StoreEmpty;
    }
    let matches = visible(records, query);
    if matches.is_empty() {
        Visible::NoMatches
    } else {
        Visible::Matches(matches)
    }
}

/// Aggregates over the whole store, independent of any query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub departments: usize,
    /// Mean years of experience, rounded half up. Zero for an empty store.
    pub avg_experience: u32,
}

impl Stats {
    /// Share of active teachers as a rounded percentage. Zero for an empty store.
    pub fn active_percent(&self) -> u32 {
        rounded_ratio(self.active as u64 * 100, self.total as u64)
    }
}

pub fn stats(records: &[Teacher]) -> Stats {
    let total = records.len();
    let active = records.iter().filter(|t| t.is_active()).count();
    let departments = records
        .iter()
        .map(|t| t.department.as_str())
        .collect::<HashSet<_>>()
        .len();
    let years: u64 = records.iter().map(|t| u64::from(t.experience)).sum();

    Stats {
        total,
        active,
        departments,
        avg_experience: rounded_ratio(years, total as u64),
    }
}

fn rounded_ratio(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Distinct departments present in the store, sorted.
pub fn department_options(records: &[Teacher]) -> Vec<&str> {
    records
        .iter()
        .map(|t| t.department.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct statuses present in the store, sorted.
pub fn status_options(records: &[Teacher]) -> Vec<Status> {
    records
        .iter()
        .map(|t| t.status)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{TeacherDraft, TeacherId};

    fn teacher(name: &str, department: &str, status: Status, experience: u32) -> Teacher {
        Teacher::from_draft(
            TeacherId::new(),
            TeacherDraft {
                name: name.into(),
                email: format!("{}@school.edu", name.to_lowercase().replace(' ', ".")),
                department: department.into(),
                status,
                experience,
                subjects: vec!["General".into()],
                ..Default::default()
            },
        )
    }

    #[test]
    fn status_filter_keeps_only_matching() {
        let records = [
            teacher("Ada", "Science", Status::Active, 5),
            teacher("Bob", "Math", Status::Inactive, 2),
        ];
        let mut q = QueryState::new();
        q.set_status(Some(Status::Active));

        assert_eq!(visible(&records, &q), [&records[0]]);
    }

    #[test]
    fn experience_bound_excludes_below_threshold() {
        let records = [teacher("Bob", "Math", Status::Active, 2)];
        let mut q = QueryState::new();
        q.set_department(Some("Math".into()));
        q.set_min_experience(Some(3));

        assert_eq!(outcome(&records, &q), Visible::NoMatches);
        assert_eq!(outcome(&[], &q), Visible::StoreEmpty);
    }

    #[test]
    fn experience_bound_is_inclusive() {
        let records = [teacher("Bob", "Math", Status::Active, 3)];
        let mut q = QueryState::new();
        q.set_min_experience(Some(3));
        assert_eq!(visible(&records, &q).len(), 1);
    }

    #[test]
    fn search_is_case_insensitive_over_name_email_department() {
        let records = [
            teacher("Sarah Johnson", "Mathematics", Status::Active, 8),
            teacher("Michael Chen", "Science", Status::Active, 12),
            teacher("Emily Davis", "English", Status::OnLeave, 3),
        ];
        let mut q = QueryState::new();

        q.set_search("SARAH");
        assert_eq!(visible(&records, &q), [&records[0]]);

        q.set_search("michael.chen@");
        assert_eq!(visible(&records, &q), [&records[1]]);

        q.set_search("engl");
        assert_eq!(visible(&records, &q), [&records[2]]);

        q.set_search("physics");
        assert!(visible(&records, &q).is_empty());
    }

    #[test]
    fn search_does_not_look_at_subjects_or_phone() {
        let mut t = teacher("Ada", "Science", Status::Active, 1);
        t.phone = "555-0100".into();
        t.subjects = vec!["Chemistry".into()];
        let records = [t];

        let mut q = QueryState::new();
        q.set_search("chem");
        assert!(visible(&records, &q).is_empty());
        q.set_search("555");
        assert!(visible(&records, &q).is_empty());
    }

    #[test]
    fn department_filter_is_exact() {
        let records = [teacher("Ada", "Computer Science", Status::Active, 1)];
        let mut q = QueryState::new();
        q.set_department(Some("Science".into()));
        assert!(visible(&records, &q).is_empty());
    }

    #[test]
    fn stats_of_empty_store_are_zero() {
        assert_eq!(stats(&[]), Stats::default());
        assert_eq!(stats(&[]).active_percent(), 0);
    }

    #[test]
    fn stats_count_and_round() {
        let records = [
            teacher("A", "Science", Status::Active, 5),
            teacher("B", "Math", Status::Inactive, 2),
            teacher("C", "Math", Status::Active, 2),
        ];
        let s = stats(&records);
        assert_eq!(s.total, 3);
        assert_eq!(s.active, 2);
        assert_eq!(s.departments, 2);
        // 9 / 3
        assert_eq!(s.avg_experience, 3);
        // 66.67
        assert_eq!(s.active_percent(), 67);
    }

    #[test]
    fn average_rounds_half_up() {
        let records = [
            teacher("A", "Art", Status::Active, 1),
            teacher("B", "Art", Status::Active, 2),
        ];
        assert_eq!(stats(&records).avg_experience, 2);
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let records = [
            teacher("A", "Science", Status::OnLeave, 1),
            teacher("B", "Art", Status::Active, 1),
            teacher("C", "Science", Status::Active, 1),
        ];
        assert_eq!(department_options(&records), ["Art", "Science"]);
        assert_eq!(status_options(&records), [Status::Active, Status::OnLeave]);
    }
}
