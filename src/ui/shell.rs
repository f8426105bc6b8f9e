use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: theme::PAGE_BG,
            header { class: theme::HEADER,
                div { class: "mx-auto max-w-7xl px-4 py-4 sm:px-6 lg:px-8",
                    div { class: "flex items-center justify-between",
                        div { class: "flex items-center gap-2",
                            span { class: "text-3xl text-red-600", "▶" }
                            h1 { class: "text-2xl font-bold text-gray-900", "{APP_NAME}" }
                        }
                        p { class: "hidden text-sm text-gray-600 sm:block",
                            "Discover food stalls recommended by YouTube food bloggers"
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8",
                {children}
            }
            footer { class: "mt-16 border-t border-gray-200 bg-white",
                div { class: "mx-auto max-w-7xl px-4 py-8 text-center sm:px-6 lg:px-8",
                    p { class: "text-gray-600",
                        "© 2025 {APP_NAME}. Discover food through the eyes of YouTube food bloggers."
                    }
                    p { class: "mt-1 text-xs text-gray-400", "{version_label()}" }
                }
            }
        }
    }
}
