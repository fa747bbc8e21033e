use crate::components::empty_state::EmptyState;
use crate::route::AppRoute;
use dioxus::prelude::*;

/// Rendered for any path the route table does not match.
#[component]
pub fn NotFound(path: String) -> Element {
    let home_href = AppRoute::Home.path();

    rsx! {
        section {
            id: "not-found",
            EmptyState {
                title: "Page not found",
                description: format!("Nothing lives at {path}."),
                primary_action: rsx! {
                    a { href: "{home_href}", "Back to your feed" }
                },
            }
        }
    }
}
