use serde::{Deserialize, Serialize};

/// The departments a teacher may be assigned to.
///
/// The core never checks records against this list; forms do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Departments(Vec<String>);

impl Departments {
    pub const STANDARD: [&'static str; 8] = [
        "Mathematics",
        "Science",
        "English",
        "History",
        "Computer Science",
        "Physical Education",
        "Art",
        "Music",
    ];

    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut list: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !name.trim().is_empty() && !list.contains(&name) {
                list.push(name);
            }
        }
        Self(list)
    }

    pub fn contains(&self, department: &str) -> bool {
        self.0.iter().any(|d| d == department)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Departments {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Departments> for Vec<String> {
    fn from(departments: Departments) -> Self {
        departments.0
    }
}

impl Default for Departments {
    fn default() -> Self {
        Self::new(Self::STANDARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drops_blanks_and_duplicates() {
        let d = Departments::new(["Art", "", "Art", "  ", "Music"]);
        assert_eq!(d.iter().collect::<Vec<_>>(), ["Art", "Music"]);
    }

    #[test]
    fn deserializing_applies_the_same_cleanup() {
        let d: Departments = serde_json::from_str(r#"["Art","Art","Music"]"#).unwrap();
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn membership_is_exact() {
        let d = Departments::default();
        assert!(d.contains("Computer Science"));
        assert!(!d.contains("computer science"));
        assert_eq!(d.len(), 8);
    }
}
