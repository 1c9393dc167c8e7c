use crate::views::components::{GridIcon, ListIcon, SearchIcon};
use crate::views::filters::FilterModal;
use crate::views::form::TeacherFormModal;
use crate::views::profile::ProfileModal;
use crate::views::skeleton::DashboardSkeleton;
use crate::views::teachers::{DeleteConfirmModal, TeacherGrid, TeacherTable};
use crate::{Route, use_roster};
use dioxus::prelude::*;
use roster::{Visible, outcome, stats};
use types::{Teacher, TeacherDraft, TeacherId};

/// Cards or table. Both render the same visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[component]
pub fn Dashboard(teacher_id: ReadSignal<Option<TeacherId>>) -> Element {
    let roster = use_roster();
    let mut store = roster.store;
    let mut query = roster.query;

    let mut view_mode = use_signal(ViewMode::default);
    let mut show_add_form = use_signal(|| false);
    let mut show_filters = use_signal(|| false);
    let mut editing = use_signal(|| None::<Teacher>);
    let mut confirm_delete = use_signal(|| None::<Teacher>);

    let totals = use_memo(move || stats(store.read().records()));
    let listing = use_memo(move || outcome(store.read().records(), &query.read()).cloned());

    let profile = use_memo(move || {
        teacher_id().and_then(|id| store.read().get(id).cloned())
    });

    if !*roster.ready.read() {
        return rsx! { DashboardSkeleton {} };
    }

    let stats = totals();
    let active_filters = query.read().active_filter_count();

    rsx! {
        div { class: "dashboard",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Teacher Management" }
                    p { class: "page-subtitle", "Manage your educational staff efficiently" }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_add_form.set(true),
                        "+ Add Teacher"
                    }
                }
            }

            div { class: "stats-grid",
                StatCard {
                    title: "Total Teachers",
                    value: stats.total.to_string(),
                    caption: "Currently on staff".to_string(),
                }
                StatCard {
                    title: "Active Teachers",
                    value: stats.active.to_string(),
                    caption: format!("{}% of total", stats.active_percent()),
                }
                StatCard {
                    title: "Departments",
                    value: stats.departments.to_string(),
                    caption: "Across all faculties".to_string(),
                }
                StatCard {
                    title: "Avg Experience",
                    value: format!("{} years", stats.avg_experience),
                    caption: "Institutional average".to_string(),
                }
            }

            div { class: "toolbar",
                div { class: "search-box",
                    span { class: "search-icon", SearchIcon {} }
                    input {
                        class: "form-input search-input",
                        r#type: "search",
                        placeholder: "Search teachers...",
                        value: "{query.read().search}",
                        oninput: move |e| query.write().set_search(e.value()),
                    }
                }
                div { class: "toolbar-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| show_filters.set(true),
                        "Filters"
                        if active_filters > 0 {
                            span { class: "badge badge-count", "{active_filters}" }
                        }
                    }
                    div { class: "view-toggle",
                        button {
                            class: if view_mode() == ViewMode::Grid { "btn btn-toggle active" } else { "btn btn-toggle" },
                            title: "Card view",
                            onclick: move |_| view_mode.set(ViewMode::Grid),
                            GridIcon {}
                        }
                        button {
                            class: if view_mode() == ViewMode::List { "btn btn-toggle active" } else { "btn btn-toggle" },
                            title: "Table view",
                            onclick: move |_| view_mode.set(ViewMode::List),
                            ListIcon {}
                        }
                    }
                }
            }

            {match listing() {
                Visible::StoreEmpty => rsx! {
                    EmptyState {
                        title: "No teachers yet",
                        hint: "Add your first teacher to get started",
                    }
                },
                Visible::NoMatches => rsx! {
                    EmptyState {
                        title: "No teachers found",
                        hint: "Try adjusting your search or filters",
                    }
                },
                Visible::Matches(teachers) => {
                    let on_view = move |id: TeacherId| {
                        navigator().push(Route::profile(id));
                    };
                    let on_edit = move |teacher: Teacher| editing.set(Some(teacher));
                    let on_delete = move |teacher: Teacher| confirm_delete.set(Some(teacher));

                    match view_mode() {
                        ViewMode::Grid => rsx! {
                            TeacherGrid { teachers, on_view, on_edit, on_delete }
                        },
                        ViewMode::List => rsx! {
                            TeacherTable { teachers, on_view, on_edit, on_delete }
                        },
                    }
                }
            }}
        }

        if *show_add_form.read() {
            TeacherFormModal {
                departments: roster.departments.read().clone(),
                on_close: move |_| show_add_form.set(false),
                on_submit: move |draft: TeacherDraft| {
                    store.write().add(draft);
                    show_add_form.set(false);
                },
            }
        }

        if let Some(teacher) = editing() {
            TeacherFormModal {
                initial: teacher.clone(),
                departments: roster.departments.read().clone(),
                on_close: move |_| editing.set(None),
                on_submit: move |draft: TeacherDraft| {
                    store.write().update(teacher.id, draft);
                    editing.set(None);
                },
            }
        }

        if let Some(teacher) = confirm_delete() {
            DeleteConfirmModal {
                teacher_name: teacher.name.clone(),
                on_close: move |_| confirm_delete.set(None),
                on_confirm: move |_| {
                    store.write().remove(teacher.id);
                    confirm_delete.set(None);
                    if teacher_id() == Some(teacher.id) {
                        navigator().replace(Route::home());
                    }
                },
            }
        }

        if *show_filters.read() {
            FilterModal { on_close: move |_| show_filters.set(false) }
        }

        if let Some(teacher) = profile() {
            ProfileModal {
                teacher,
                on_close: move |_| {
                    navigator().replace(Route::home());
                },
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, value: String, caption: String) -> Element {
    rsx! {
        div { class: "card stat-card",
            div { class: "stat-card-title", "{title}" }
            div { class: "stat-card-value", "{value}" }
            p { class: "stat-card-caption", "{caption}" }
        }
    }
}

#[component]
fn EmptyState(title: &'static str, hint: &'static str) -> Element {
    rsx! {
        div { class: "card empty-state",
            h3 { class: "empty-state-title", "{title}" }
            p { class: "text-muted", "{hint}" }
        }
    }
}
