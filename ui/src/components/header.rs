use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::prefs::UiPrefs;
use crate::prefs::DEFAULT_SITE_TITLE;
use crate::route::AppRoute;
use dioxus::prelude::*;

/// Top bar shown above every route.
///
/// `is_logged` is rendered as-is into `data-logged` and picks the label of the
/// sign-in control. The title comes from `UiPrefs` when one is in context.
#[component]
pub fn Header(is_logged: bool, on_session_toggle: Option<EventHandler<MouseEvent>>) -> Element {
    let site_title = try_use_context::<UiPrefs>()
        .map(|prefs| prefs.site_title)
        .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string());

    let (session_label, button_type) = if is_logged {
        ("Sign out", ButtonType::Secondary)
    } else {
        ("Sign in", ButtonType::Primary)
    };

    let home_href = AppRoute::Home.path();
    let explore_href = AppRoute::Explore.path();

    rsx! {
        header {
            class: "app-header",
            "data-logged": "{is_logged}",
            nav {
                ul {
                    li {
                        a {
                            href: "{home_href}",
                            strong { "{site_title}" }
                        }
                    }
                }
                ul {
                    li {
                        a { href: "{home_href}", "Home" }
                    }
                    li {
                        a { href: "{explore_href}", "Explore" }
                    }
                    li {
                        Button {
                            button_type,
                            outline: is_logged,
                            on_click: move |evt| {
                                if let Some(handler) = &on_session_toggle {
                                    handler.call(evt);
                                }
                            },
                            "{session_label}"
                        }
                    }
                }
            }
        }
    }
}
