use dioxus::prelude::*;

/// Placeholder layout shown until the session's store is ready.
#[component]
pub fn DashboardSkeleton() -> Element {
    rsx! {
        div { class: "dashboard",
            div { class: "page-header",
                div { class: "page-header-content",
                    div { class: "skeleton skeleton-title" }
                    div { class: "skeleton skeleton-text" }
                }
                div { class: "skeleton skeleton-button" }
            }
            div { class: "stats-grid",
                for i in 0..4 {
                    div { key: "{i}", class: "card stat-card",
                        div { class: "skeleton skeleton-text" }
                        div { class: "skeleton skeleton-value" }
                        div { class: "skeleton skeleton-text" }
                    }
                }
            }
            div { class: "toolbar",
                div { class: "skeleton skeleton-search" }
            }
            div { class: "teacher-grid",
                for i in 0..6 {
                    div { key: "{i}", class: "card teacher-card",
                        div { class: "teacher-card-identity",
                            div { class: "skeleton skeleton-avatar" }
                            div {
                                div { class: "skeleton skeleton-text" }
                                div { class: "skeleton skeleton-text-sm" }
                            }
                        }
                        div { class: "skeleton skeleton-text" }
                        div { class: "skeleton skeleton-text" }
                    }
                }
            }
        }
    }
}
