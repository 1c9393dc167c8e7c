mod components;

mod dashboard;
pub use dashboard::Dashboard;

mod filters;
mod form;
mod profile;
mod skeleton;
mod teachers;

mod theme;
pub use theme::ThemeSettings;
