use dioxus::prelude::*;
use types::{Status, Teacher};

pub fn status_class(status: Status) -> &'static str {
    match status {
        Status::Active => "badge badge-active",
        Status::Inactive => "badge badge-inactive",
        Status::OnLeave => "badge badge-on-leave",
    }
}

#[component]
pub fn StatusBadge(status: Status) -> Element {
    rsx! {
        span { class: status_class(status), "{status.label()}" }
    }
}

/// Avatar image, or the teacher's initials when there is none.
#[component]
pub fn Avatar(teacher: Teacher, #[props(default)] large: bool) -> Element {
    let class = if large { "avatar avatar-lg" } else { "avatar" };

    rsx! {
        div { class,
            if let Some(src) = teacher.avatar.as_ref() {
                img { src: "{src}", alt: "{teacher.name}" }
            } else {
                span { class: "avatar-initials", "{teacher.initials()}" }
            }
        }
    }
}

/// The first `limit` subjects, then a "+N" badge for the rest.
#[component]
pub fn SubjectBadges(
    subjects: Vec<String>,
    #[props(default = 2)] limit: usize,
    #[props(default)] suffix: Option<String>,
) -> Element {
    let hidden = subjects.len().saturating_sub(limit);
    let suffix = suffix.unwrap_or_default();

    rsx! {
        div { class: "subject-list",
            for subject in subjects.iter().take(limit) {
                span { key: "{subject}", class: "badge badge-outline", "{subject}" }
            }
            if hidden > 0 {
                span { class: "badge badge-outline", "+{hidden}{suffix}" }
            }
        }
    }
}

#[component]
pub fn FieldError(message: Option<&'static str>) -> Element {
    match message {
        Some(message) => rsx! { p { class: "form-error", "{message}" } },
        None => rsx! {},
    }
}

/// A labelled text input with an inline validation message.
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    value: String,
    error: Option<&'static str>,
    oninput: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: &'static str,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: id, "{label}" }
            input {
                id,
                class: if error.is_some() { "form-input form-input-error" } else { "form-input" },
                r#type: input_type,
                placeholder,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
            FieldError { message: error }
        }
    }
}

#[component]
pub fn SearchIcon() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn GridIcon() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { x: "3", y: "3", width: "7", height: "7" }
            rect { x: "14", y: "3", width: "7", height: "7" }
            rect { x: "14", y: "14", width: "7", height: "7" }
            rect { x: "3", y: "14", width: "7", height: "7" }
        }
    }
}

#[component]
pub fn ListIcon() -> Element {
    rsx! {
        svg {
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "8", y1: "6", x2: "21", y2: "6" }
            line { x1: "8", y1: "12", x2: "21", y2: "12" }
            line { x1: "8", y1: "18", x2: "21", y2: "18" }
            line { x1: "3", y1: "6", x2: "3.01", y2: "6" }
            line { x1: "3", y1: "12", x2: "3.01", y2: "12" }
            line { x1: "3", y1: "18", x2: "3.01", y2: "18" }
        }
    }
}
