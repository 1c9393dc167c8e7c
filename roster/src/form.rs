//! Field buffer and validation for the add/edit teacher dialogs.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use types::{Departments, Status, Teacher, TeacherDraft};

/// Subjects offered by the subject picker.
pub const SUBJECT_CATALOG: [&str; 27] = [
    "Algebra",
    "Geometry",
    "Calculus",
    "Statistics",
    "Physics",
    "Chemistry",
    "Biology",
    "Earth Science",
    "Literature",
    "Grammar",
    "Creative Writing",
    "World History",
    "American History",
    "Geography",
    "Programming",
    "Web Development",
    "Database Design",
    "Basketball",
    "Soccer",
    "Swimming",
    "Track & Field",
    "Drawing",
    "Painting",
    "Sculpture",
    "Band",
    "Choir",
    "Piano",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Address,
    Department,
    Experience,
    Subjects,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::Department => "department",
            Field::Experience => "experience",
            Field::Subjects => "subjects",
        };
        f.write_str(name)
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }
}

/// The raw contents of the add/edit dialog.
///
/// Text stays as typed until [`TeacherForm::validate`] turns it into a
/// [`TeacherDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub department: String,
    pub status: Status,
    pub experience: String,
    pub subjects: Vec<String>,
    pub bio: String,
    pub avatar: String,
}

impl Default for TeacherForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            department: String::new(),
            status: Status::Active,
            experience: "0".into(),
            subjects: Vec::new(),
            bio: String::new(),
            avatar: String::new(),
        }
    }
}

impl From<&Teacher> for TeacherForm {
    fn from(teacher: &Teacher) -> Self {
        Self {
            name: teacher.name.clone(),
            email: teacher.email.clone(),
            phone: teacher.phone.clone(),
            address: teacher.address.clone(),
            department: teacher.department.clone(),
            status: teacher.status,
            experience: teacher.experience.to_string(),
            subjects: teacher.subjects.clone(),
            bio: teacher.bio.clone().unwrap_or_default(),
            avatar: teacher.avatar.clone().unwrap_or_default(),
        }
    }
}

impl TeacherForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every field, reporting all failures at once.
    pub fn validate(&self, departments: &Departments) -> Result<TeacherDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = required(&self.name, Field::Name, "Name is required", &mut errors);
        let email = required(&self.email, Field::Email, "Email is required", &mut errors);
        if !email.is_empty() && !looks_like_email(&email) {
            errors.insert(Field::Email, "Email is invalid");
        }
        let phone = required(&self.phone, Field::Phone, "Phone is required", &mut errors);
        let address = required(&self.address, Field::Address, "Address is required", &mut errors);

        let department = self.department.trim();
        if department.is_empty() {
            errors.insert(Field::Department, "Department is required");
        } else if !departments.contains(department) {
            errors.insert(Field::Department, "Unknown department");
        }

        let experience = match parse_experience(&self.experience) {
            Ok(years) => years,
            Err(message) => {
                errors.insert(Field::Experience, message);
                0
            }
        };

        if self.subjects.is_empty() {
            errors.insert(Field::Subjects, "At least one subject is required");
        }

        if !errors.is_empty() {
            tracing::debug!(failed = errors.len(), "teacher form rejected");
            return Err(errors);
        }

        Ok(TeacherDraft {
            name,
            email,
            phone,
            address,
            department: department.to_string(),
            status: self.status,
            experience,
            subjects: self.subjects.clone(),
            bio: optional(&self.bio),
            avatar: optional(&self.avatar),
        })
    }

    /// Append a subject unless it is blank or already chosen.
    pub fn add_subject(&mut self, subject: &str) -> bool {
        let subject = subject.trim();
        if subject.is_empty() || self.subjects.iter().any(|s| s == subject) {
            return false;
        }
        self.subjects.push(subject.to_string());
        true
    }

    pub fn remove_subject(&mut self, subject: &str) {
        self.subjects.retain(|s| s != subject);
    }

    /// Catalog subjects not yet chosen, in catalog order.
    pub fn available_subjects(&self) -> impl Iterator<Item = &'static str> + '_ {
        SUBJECT_CATALOG
            .into_iter()
            .filter(|subject| !self.subjects.iter().any(|s| s == subject))
    }
}

/// The configured allow-list plus every department already held by `records`.
///
/// Existing teachers stay editable when the configured list omits their
/// department.
pub fn allowed_departments(configured: &Departments, records: &[Teacher]) -> Departments {
    Departments::new(
        configured
            .iter()
            .chain(records.iter().map(|t| t.department.as_str())),
    )
}

fn required(value: &str, field: Field, message: &'static str, errors: &mut FieldErrors) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, message);
    }
    value.to_string()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_experience(value: &str) -> Result<u32, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    match value.parse::<u32>() {
        Ok(years) => Ok(years),
        Err(_) if value.parse::<i64>().is_ok() => Err("Experience must be positive"),
        Err(_) => Err("Experience must be a whole number of years"),
    }
}

/// Unanchored, so surrounding text is tolerated.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid email regex"));

fn looks_like_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TeacherForm {
        TeacherForm {
            name: " Sarah Johnson ".into(),
            email: "sarah.johnson@school.edu".into(),
            phone: "+1 (555) 123-4567".into(),
            address: "123 Oak Street".into(),
            department: "Mathematics".into(),
            experience: "8".into(),
            subjects: vec!["Algebra".into()],
            ..TeacherForm::new()
        }
    }

    #[test]
    fn valid_form_produces_trimmed_draft() {
        let draft = filled().validate(&Departments::default()).unwrap();
        assert_eq!(draft.name, "Sarah Johnson");
        assert_eq!(draft.experience, 8);
        assert_eq!(draft.bio, None);
        assert_eq!(draft.status, Status::Active);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = TeacherForm::new()
            .validate(&Departments::default())
            .unwrap_err();

        for field in [
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::Address,
            Field::Department,
            Field::Subjects,
        ] {
            assert!(errors.contains(field), "missing error for {field}");
        }
        assert!(!errors.contains(Field::Experience));
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("x y@b.c"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a @b.c"));

        let mut form = filled();
        form.email = "not-an-email".into();
        let errors = form.validate(&Departments::default()).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Email is invalid"));
    }

    #[test]
    fn experience_must_be_non_negative_integer() {
        let mut form = filled();
        form.experience = "-2".into();
        let errors = form.validate(&Departments::default()).unwrap_err();
        assert_eq!(errors.get(Field::Experience), Some("Experience must be positive"));

        form.experience = "ten".into();
        assert!(form.validate(&Departments::default()).is_err());

        form.experience = "".into();
        assert_eq!(form.validate(&Departments::default()).unwrap().experience, 0);
    }

    #[test]
    fn department_must_be_allowed() {
        let mut form = filled();
        form.department = "Alchemy".into();
        let errors = form.validate(&Departments::default()).unwrap_err();
        assert_eq!(errors.get(Field::Department), Some("Unknown department"));

        let custom = Departments::new(["Alchemy"]);
        assert!(form.validate(&custom).is_ok());
    }

    #[test]
    fn subjects_are_unique_and_leave_the_catalog() {
        let mut form = TeacherForm::new();
        assert!(form.add_subject("Physics"));
        assert!(!form.add_subject(" Physics "));
        assert!(!form.add_subject("   "));
        assert!(!form.available_subjects().any(|s| s == "Physics"));

        form.remove_subject("Physics");
        assert!(form.subjects.is_empty());
        assert_eq!(form.available_subjects().count(), SUBJECT_CATALOG.len());
    }

    #[test]
    fn seeded_teachers_stay_editable_under_custom_departments() {
        let configured = Departments::new(["Art", "Music"]);
        let records: Vec<Teacher> = crate::sample_teachers()
            .into_iter()
            .map(|draft| Teacher::from_draft(types::TeacherId::new(), draft))
            .collect();
        let allowed = allowed_departments(&configured, &records);

        assert!(allowed.contains("Art"));
        assert!(allowed.contains("Mathematics"));
        for teacher in &records {
            let mut form = TeacherForm::from(teacher);
            form.phone = "+1 (555) 000-0000".into();
            let draft = form.validate(&allowed).unwrap_or_else(|errors| {
                panic!("{} rejected: {:?}", teacher.name, errors)
            });
            assert_eq!(draft.department, teacher.department);
        }

        // New entries are still held to the list.
        let mut form = TeacherForm::from(&records[0]);
        form.department = "Alchemy".into();
        assert!(form.validate(&allowed).is_err());
    }

    #[test]
    fn editing_prefills_from_teacher() {
        let draft = filled().validate(&Departments::default()).unwrap();
        let teacher = Teacher::from_draft(types::TeacherId::new(), draft.clone());
        let form = TeacherForm::from(&teacher);
        assert_eq!(form.validate(&Departments::default()).unwrap(), draft);
    }
}
