use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use ui::prefs::UiPrefs;

fn main() {

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let prefs = UiPrefs::load();
    let level = prefs.as_ref().map(|p| p.log_level).unwrap_or_default();
    dioxus_logger::init(level.into()).expect("failed to init logger");

    let prefs = prefs.unwrap_or_else(|e| {
        warn!("falling back to environment prefs: {e}");
        UiPrefs::from_env()
    });

    dioxus::LaunchBuilder::new().with_context(prefs).launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
