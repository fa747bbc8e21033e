// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod components;
pub mod prefs;
pub mod route;
pub mod screens;
pub mod session;

use prefs::UiPrefs;
use route::AppRoute;
use screens::home::Home;
use session::Session;

/// URL synchronisation only. The router splits and decodes the path; which
/// view to show is decided by [`AppRoute::from_segments`].
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Shell { segments: Vec<String> },
}

impl Route {
    fn app_route(&self) -> AppRoute {
        match self {
            Route::Root {} => AppRoute::from_segments::<&str>(&[]),
            Route::Shell { segments } => AppRoute::from_segments(segments),
        }
    }
}

#[component]
fn Root() -> Element {
    let route = Route::Root {}.app_route();
    rsx! {
        SessionHome { route }
    }
}

#[component]
fn Shell(segments: Vec<String>) -> Element {
    let route = Route::Shell { segments }.app_route();
    rsx! {
        SessionHome { route }
    }
}

/// Feeds the session flag into [`Home`] and wires the header's sign-in control
/// back to it.
#[component]
fn SessionHome(route: AppRoute) -> Element {
    let mut session = use_context::<Session>();

    rsx! {
        Home {
            is_logged: session.is_logged(),
            route,
            on_session_toggle: move |_| session.toggle(),
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    // launchers hand over the prefs they loaded; fall back to the environment.
    let prefs = use_hook(|| try_consume_context::<UiPrefs>().unwrap_or_else(UiPrefs::from_env));
    let signed_in = use_signal(|| prefs.signed_in);

    use_context_provider(|| prefs.clone());
    use_context_provider(|| Session::new(signed_in));

    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-header {
        padding: 0 1rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .app-header button {
        padding: 0.25rem 0.75rem;
        margin: 0;
    }

    .app-home main.container {
        padding-top: 1rem;
    }
"#;

    rsx! {
        document::Title { "{prefs.site_title}" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        Router::<Route> {}
    }
}
