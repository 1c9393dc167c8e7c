use dioxus::prelude::*;

mod preferences;
mod views;

use preferences::PreferenceBridge;
use roster::form::allowed_departments;
use roster::prefs::AppearanceState;
use roster::{Config, QueryState, RecordStore};
use types::theme::Appearance;
use types::{Departments, TeacherId};
use views::{Dashboard, ThemeSettings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/teachers/:teacher_id")]
        TeacherProfile { teacher_id: TeacherId },
}

impl Route {
    pub fn home() -> Self {
        Route::Home {}
    }

    /// Ids are minted per session, so profile links only resolve until reload.
    pub fn profile(teacher_id: TeacherId) -> Self {
        Route::TeacherProfile { teacher_id }
    }
}

#[component]
fn Home() -> Element {
    rsx! { Dashboard { teacher_id: None } }
}

#[component]
fn TeacherProfile(teacher_id: TeacherId) -> Element {
    rsx! { Dashboard { teacher_id: Some(teacher_id) } }
}

fn main() {
    #[cfg(feature = "desktop")]
    {
        roster::init_tracing();
        dioxus::launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "EduManage" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

/// The session's teacher data and query, shared through context.
///
/// Everything the dashboard shows is derived from these two signals.
#[derive(Clone, Copy)]
pub struct Roster {
    pub store: Signal<RecordStore>,
    pub query: Signal<QueryState>,
    pub departments: Signal<Departments>,
    /// Set once the session's store has been built.
    pub ready: Signal<bool>,
}

pub fn use_roster() -> Roster {
    use_context::<Roster>()
}

/// Appearance selection plus where to persist it.
#[derive(Clone, Copy)]
pub struct Theme {
    pub appearance: Signal<AppearanceState>,
    bridge: Signal<PreferenceBridge>,
    errors: ErrorState,
}

impl Theme {
    pub fn current(&self) -> Appearance {
        self.appearance.read().current()
    }

    pub fn set(&mut self, appearance: Appearance) {
        if !self.appearance.write().pick(appearance) {
            return;
        }

        let bridge = self.bridge.peek().clone();
        let mut error_state = self.errors;
        spawn(async move {
            if let Err(e) = bridge.save(appearance).await {
                tracing::error!("failed to save appearance: {}", e);
                error_state.set(format!("Could not save theme preference: {}", e));
            }
        });
    }
}

pub fn use_theme() -> Theme {
    use_context::<Theme>()
}

/// Structured error information for display
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorInfo {
    pub message: String,
    pub details: Option<String>,
}

impl From<&types::Error> for ErrorInfo {
    fn from(err: &types::Error) -> Self {
        // anyhow's Debug output puts the cause chain and backtrace after the
        // first line.
        match err.message.split_once('\n') {
            Some((message, details)) => Self {
                message: message.to_string(),
                details: Some(details.trim().to_string()).filter(|d| !d.is_empty()),
            },
            None => Self {
                message: err.message.clone(),
                details: None,
            },
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set_info(&mut self, error: ErrorInfo) {
        self.0.set(Some(error));
    }

    pub fn set(&mut self, error: impl Into<String>) {
        self.0.set(Some(ErrorInfo {
            message: error.into(),
            details: None,
        }));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_error();
    let error = error_state.0.read();

    if let Some(err) = error.as_ref() {
        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-content",
                    div { class: "error-banner-header",
                        span { class: "error-banner-message", "{err.message}" }
                        button {
                            class: "error-banner-close",
                            onclick: move |_| error_state.clear(),
                            "×"
                        }
                    }
                    if let Some(details) = &err.details {
                        pre { class: "error-details", "{details}" }
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[cfg(feature = "desktop")]
fn load_config(error_state: &mut ErrorState) -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            error_state.set_info(ErrorInfo::from(&e));
            Config::default()
        }
    }
}

#[cfg(not(feature = "desktop"))]
fn load_config(_error_state: &mut ErrorState) -> Config {
    Config::default()
}

#[component]
fn AppLayout() -> Element {
    let mut error_state = use_context_provider(|| ErrorState(Signal::new(None)));
    let config = use_hook(|| load_config(&mut error_state));

    let mut roster = use_context_provider(|| Roster {
        store: Signal::new(RecordStore::new()),
        query: Signal::new(QueryState::new()),
        departments: Signal::new(config.departments.clone()),
        ready: Signal::new(false),
    });

    let bridge = use_hook(|| PreferenceBridge::new(&config));
    let mut theme = use_context_provider(|| Theme {
        appearance: Signal::new(AppearanceState::default()),
        bridge: Signal::new(bridge),
        errors: error_state,
    });

    // Build the session's store once, after the skeleton has rendered
    let seed = config.seed_sample_data;
    use_effect(move || {
        if seed {
            let store = RecordStore::seeded();
            let allowed = allowed_departments(&roster.departments.peek(), store.records());
            roster.departments.set(allowed);
            roster.store.set(store);
        }
        roster.ready.set(true);
    });

    // Restore the saved appearance
    use_effect(move || {
        let bridge = theme.bridge.peek().clone();
        spawn(async move {
            let appearance = bridge.load().await;
            theme.appearance.write().restore(appearance);
        });
    });

    let appearance = theme.current();
    let color = appearance.color;
    let mut show_settings = use_signal(|| false);

    rsx! {
        div {
            class: "app-layout",
            "data-theme": appearance.mode.as_str(),
            style: "--primary: {color.primary()}; --secondary: {color.secondary()};",
            header { class: "app-header",
                Link { to: Route::home(), class: "app-logo",
                    span { class: "app-logo-mark", "🎓" }
                    span { "EduManage" }
                }
                button {
                    class: "btn btn-icon",
                    title: "Theme settings",
                    onclick: move |_| show_settings.set(true),
                    "⚙"
                }
            }
            if *show_settings.read() {
                ThemeSettings { on_close: move |_| show_settings.set(false) }
            }
            main { class: "main-content",
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}
