use crate::components::pico::Card;
use crate::route::Username;
use dioxus::prelude::*;

/// Public profile page for `username`.
#[component]
pub fn Profile(username: Username) -> Element {
    rsx! {
        section {
            id: "profile",
            "data-username": "{username}",
            Card {
                h3 { "@{username}" }
                p { "Photos shared by {username} will appear here." }
            }
        }
    }
}
