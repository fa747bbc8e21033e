use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::route::AppRoute;
use dioxus::prelude::*;

/// Landing feed at `/`.
#[component]
pub fn NewHome() -> Element {
    let explore_href = AppRoute::Explore.path();

    rsx! {
        section {
            id: "new-home",
            Card {
                h3 { "Your feed" }
                EmptyState {
                    title: "Nothing here yet",
                    description: "Posts from people you follow will show up here.",
                    icon: rsx! { "📷" },
                    primary_action: rsx! {
                        a { href: "{explore_href}", role: "button", "Find people to follow" }
                    },
                }
            }
        }
    }
}
