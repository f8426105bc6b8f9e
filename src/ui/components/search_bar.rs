use dioxus::prelude::*;

use crate::ui::theme;

/// Location input plus submit button.
///
/// The Enter key and the button both route through `on_submit`; the caller's
/// handler owns validation, so the two entry points behave identically.
#[component]
pub fn SearchBar(query: Signal<String>, on_submit: EventHandler<()>) -> Element {
    let mut query = query;

    rsx! {
        div { class: "mx-auto flex max-w-md flex-col gap-4 sm:flex-row",
            input {
                class: theme::INPUT,
                r#type: "text",
                placeholder: "Enter your location (e.g., Los Angeles, CA)",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        on_submit.call(());
                    }
                },
            }
            button {
                class: theme::BTN_PRIMARY,
                onclick: move |_| on_submit.call(()),
                "📍 Search"
            }
        }
    }
}
