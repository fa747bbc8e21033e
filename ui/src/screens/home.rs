use crate::components::header::Header;
use crate::components::pico::Container;
use crate::route::AppRoute;
use crate::screens::explore::Explore;
use crate::screens::new_home::NewHome;
use crate::screens::not_found::NotFound;
use crate::screens::profile::Profile;
use dioxus::prelude::*;

/// The app shell: a header plus the one view for `route`.
///
/// `is_logged` goes to the header untouched. `route` comes from
/// [`AppRoute::resolve`] or [`AppRoute::from_segments`], so exactly one child
/// view is rendered per URL.
#[component]
pub fn Home(
    is_logged: bool,
    route: AppRoute,
    on_session_toggle: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        div {
            class: "app-home",
            Header { is_logged, on_session_toggle }
            Container {
                match route {
                    AppRoute::Home => rsx! { NewHome {} },
                    AppRoute::Explore => rsx! { Explore {} },
                    AppRoute::Profile { username } => rsx! { Profile { username } },
                    AppRoute::NotFound { path } => rsx! { NotFound { path } },
                }
            }
        }
    }
}
