use crate::use_theme;
use dioxus::prelude::*;
use types::theme::{Appearance, ColorTheme, ThemeMode};

/// Side sheet for picking light/dark mode and the accent palette.
#[component]
pub fn ThemeSettings(on_close: EventHandler<()>) -> Element {
    let mut theme = use_theme();
    let current = theme.current();

    rsx! {
        div { class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            aside { class: "sheet",
                onclick: move |e| e.stop_propagation(),
                div { class: "sheet-header",
                    h2 { class: "sheet-title", "Theme Settings" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "sheet-body",
                    section { class: "sheet-section",
                        h3 { class: "sheet-section-title", "Mode" }
                        div { class: "radio-group",
                            for mode in ThemeMode::ALL {
                                label { key: "{mode.as_str()}", class: "radio-label",
                                    input {
                                        r#type: "radio",
                                        name: "theme-mode",
                                        value: mode.as_str(),
                                        checked: current.mode == mode,
                                        onchange: move |_| theme.set(Appearance { mode, ..current }),
                                    }
                                    span { "{mode.label()}" }
                                }
                            }
                        }
                    }
                    section { class: "sheet-section",
                        h3 { class: "sheet-section-title", "Color" }
                        div { class: "color-grid",
                            for color in ColorTheme::ALL {
                                button {
                                    key: "{color.as_str()}",
                                    class: if current.color == color { "color-option active" } else { "color-option" },
                                    title: color.label(),
                                    onclick: move |_| theme.set(Appearance { color, ..current }),
                                    span { class: "color-swatch",
                                        span {
                                            class: "color-swatch-half",
                                            style: "background: {color.primary()}",
                                        }
                                        span {
                                            class: "color-swatch-half",
                                            style: "background: {color.secondary()}",
                                        }
                                    }
                                    span { class: "color-option-label", "{color.label()}" }
                                }
                            }
                        }
                    }
                }
                div { class: "sheet-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| theme.set(Appearance::default()),
                        "Reset to Default"
                    }
                }
            }
        }
    }
}
