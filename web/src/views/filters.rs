use crate::use_roster;
use dioxus::prelude::*;
use roster::derive::{department_options, status_options};
use roster::query::{
    EXPERIENCE_THRESHOLDS, parse_department_choice, parse_experience_choice, parse_status_choice,
};

/// Department, status and minimum-experience filters.
///
/// Selections apply to the shared query as soon as they change.
#[component]
pub fn FilterModal(on_close: EventHandler<()>) -> Element {
    let roster = use_roster();
    let store = roster.store;
    let mut query = roster.query;

    let departments = use_memo(move || {
        department_options(store.read().records())
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    });
    let statuses = use_memo(move || status_options(store.read().records()));

    let filters = query.read().filters.clone();
    let department_value = filters.department.clone().unwrap_or_else(|| "all".into());
    let status_value = filters.status.map(|s| s.as_str()).unwrap_or("all");
    let experience_value = filters
        .min_experience
        .map(|years| years.to_string())
        .unwrap_or_else(|| "any".into());

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Filter Teachers" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "filter-department", "Department" }
                        select {
                            id: "filter-department",
                            class: "form-input",
                            value: "{department_value}",
                            onchange: move |e| {
                                query.write().set_department(parse_department_choice(&e.value()))
                            },
                            option { value: "all", "All Departments" }
                            for department in departments() {
                                option {
                                    key: "{department}",
                                    value: "{department}",
                                    selected: department_value == department,
                                    "{department}"
                                }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "filter-status", "Status" }
                        select {
                            id: "filter-status",
                            class: "form-input",
                            value: status_value,
                            onchange: move |e| query.write().set_status(parse_status_choice(&e.value())),
                            option { value: "all", "All Statuses" }
                            for status in statuses() {
                                option {
                                    key: "{status.as_str()}",
                                    value: status.as_str(),
                                    selected: status_value == status.as_str(),
                                    "{status.label()}"
                                }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "filter-experience", "Minimum Experience" }
                        select {
                            id: "filter-experience",
                            class: "form-input",
                            value: "{experience_value}",
                            onchange: move |e| {
                                query.write().set_min_experience(parse_experience_choice(&e.value()))
                            },
                            option { value: "any", "Any Experience" }
                            for years in EXPERIENCE_THRESHOLDS {
                                option {
                                    key: "{years}",
                                    value: "{years}",
                                    selected: experience_value == years.to_string(),
                                    "{years}+ years"
                                }
                            }
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| query.write().clear_filters(),
                        "Clear Filters"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_close.call(()),
                        "Apply Filters"
                    }
                }
            }
        }
    }
}
