use dioxus::prelude::*;

use crate::{
    domain::AppState,
    infra::catalog::load_catalog,
    ui::{pages::HomePage, shell::Shell},
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

#[component]
pub fn App() -> Element {
    // The catalog is bundled; a decode failure means a broken build, so we
    // log it and fall back to an empty catalog instead of crashing the UI.
    let state = use_signal(|| match load_catalog() {
        Ok(stalls) => {
            println!("Loaded {} stalls from the bundled catalog.", stalls.len());
            AppState::with_catalog(stalls)
        }
        Err(err) => {
            eprintln!("Failed to load stall catalog: {err}");
            AppState::default()
        }
    });
    use_context_provider(|| state.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}
