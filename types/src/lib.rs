mod department;
mod error;
mod teacher;
pub mod theme;

pub use department::Departments;
pub use error::{Error, Result};
pub use teacher::{Status, Teacher, TeacherDraft, TeacherId};

// FIXME: We can do this better I think.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
