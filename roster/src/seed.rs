use types::{Status, TeacherDraft};

struct Sample {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    address: &'static str,
    department: &'static str,
    status: Status,
    experience: u32,
    subjects: &'static [&'static str],
    bio: Option<&'static str>,
}

const SAMPLES: &[Sample] = &[
    Sample {
        name: "Sarah Johnson",
        email: "sarah.johnson@school.edu",
        phone: "+1 (555) 123-4567",
        address: "123 Oak Street, Springfield, IL",
        department: "Mathematics",
        status: Status::Active,
        experience: 8,
        subjects: &["Algebra", "Calculus", "Statistics"],
        bio: Some("Passionate about making mathematics accessible to every student."),
    },
    Sample {
        name: "Michael Chen",
        email: "michael.chen@school.edu",
        phone: "+1 (555) 234-5678",
        address: "456 Pine Avenue, Springfield, IL",
        department: "Science",
        status: Status::Active,
        experience: 12,
        subjects: &["Physics", "Chemistry"],
        bio: Some("Former research chemist who runs the after-school robotics club."),
    },
    Sample {
        name: "Emily Rodriguez",
        email: "emily.rodriguez@school.edu",
        phone: "+1 (555) 345-6789",
        address: "789 Maple Drive, Springfield, IL",
        department: "English",
        status: Status::OnLeave,
        experience: 5,
        subjects: &["Literature", "Creative Writing"],
        bio: None,
    },
    Sample {
        name: "David Thompson",
        email: "david.thompson@school.edu",
        phone: "+1 (555) 456-7890",
        address: "321 Elm Court, Springfield, IL",
        department: "History",
        status: Status::Active,
        experience: 15,
        subjects: &["World History", "American History", "Geography"],
        bio: Some("Leads the annual model United Nations trip."),
    },
    Sample {
        name: "Lisa Park",
        email: "lisa.park@school.edu",
        phone: "+1 (555) 567-8901",
        address: "654 Birch Lane, Springfield, IL",
        department: "Computer Science",
        status: Status::Active,
        experience: 6,
        subjects: &["Programming", "Web Development", "Database Design"],
        bio: None,
    },
    Sample {
        name: "James Wilson",
        email: "james.wilson@school.edu",
        phone: "+1 (555) 678-9012",
        address: "987 Cedar Road, Springfield, IL",
        department: "Physical Education",
        status: Status::Inactive,
        experience: 3,
        subjects: &["Basketball", "Track & Field"],
        bio: None,
    },
    Sample {
        name: "Olivia Martinez",
        email: "olivia.martinez@school.edu",
        phone: "+1 (555) 789-0123",
        address: "147 Willow Way, Springfield, IL",
        department: "Art",
        status: Status::Active,
        experience: 9,
        subjects: &["Drawing", "Painting", "Sculpture"],
        bio: Some("Exhibits locally and curates the spring student gallery."),
    },
    Sample {
        name: "Robert Brown",
        email: "robert.brown@school.edu",
        phone: "+1 (555) 890-1234",
        address: "258 Spruce Street, Springfield, IL",
        department: "Music",
        status: Status::Active,
        experience: 1,
        subjects: &["Band", "Piano"],
        bio: None,
    },
];

/// The staff every session starts with.
pub fn sample_teachers() -> Vec<TeacherDraft> {
    SAMPLES
        .iter()
        .map(|s| TeacherDraft {
            name: s.name.into(),
            email: s.email.into(),
            phone: s.phone.into(),
            address: s.address.into(),
            department: s.department.into(),
            status: s.status,
            experience: s.experience,
            subjects: s.subjects.iter().map(|subject| subject.to_string()).collect(),
            bio: s.bio.map(String::from),
            avatar: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{SUBJECT_CATALOG, TeacherForm};
    use types::{Departments, Teacher, TeacherId};

    #[test]
    fn samples_pass_form_validation() {
        let departments = Departments::default();
        for draft in sample_teachers() {
            let teacher = Teacher::from_draft(TeacherId::new(), draft.clone());
            let form = TeacherForm::from(&teacher);
            assert_eq!(form.validate(&departments), Ok(draft));
        }
    }

    #[test]
    fn sample_subjects_come_from_the_catalog() {
        for draft in sample_teachers() {
            for subject in &draft.subjects {
                assert!(SUBJECT_CATALOG.contains(&subject.as_str()), "{subject}");
            }
        }
    }
}
