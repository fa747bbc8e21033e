use crate::components::pico::Card;
use dioxus::prelude::*;

#[component]
pub fn Explore() -> Element {
    rsx! {
        section {
            id: "explore",
            Card {
                h3 { "Explore" }
                p { "Discover photos and people from across the community." }
            }
        }
    }
}
