use dioxus::prelude::*;

use crate::{
    domain::{rank_stalls, search, AppState},
    ui::components::{search_bar::SearchBar, stall_card::StallCard},
};

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let location_input = use_signal(String::new);

    let stalls = state.with(|st| st.stalls.clone());
    // Re-ranked on every render pass; the catalog is static and small.
    let ranked = rank_stalls(&stalls);

    let searched = state.with(|st| st.searched);
    let results = state.with(|st| st.results.clone());
    let result_count = results.len();
    let location_display = location_input().trim().to_string();

    // Button click and Enter key both land here; `search` owns the
    // trim/emptiness check, so the two entry points cannot diverge.
    let on_submit = {
        let mut state = state.clone();
        let ranked = ranked.clone();
        let location_input = location_input.clone();
        move |_| {
            let outcome = search(&location_input(), &ranked);
            state.with_mut(|st| st.apply_search(outcome));
        }
    };

    rsx! {
        section { class: "mb-12 text-center",
            h2 { class: "mb-4 text-4xl font-bold text-gray-900", "Find Food Stalls Near You" }
            p { class: "mx-auto mb-8 max-w-2xl text-xl text-gray-600",
                "Enter your location and discover amazing food stalls recommended by your favorite YouTube food bloggers"
            }
            SearchBar { query: location_input, on_submit: on_submit }
        }

        if searched {
            section { class: "space-y-8",
                div { class: "text-center",
                    h3 { class: "mb-2 text-2xl font-bold text-gray-900",
                        "Food Stalls Near {location_display}"
                    }
                    p { class: "text-gray-600",
                        "Found {result_count} recommended food stalls • Sorted by popularity"
                    }
                }
                div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                    for stall in results {
                        StallCard { key: "{stall.id}", stall: stall.clone() }
                    }
                }
            }
        } else {
            section { class: "py-12 text-center",
                span { class: "mb-4 block text-6xl", "▶" }
                h3 { class: "mb-2 text-lg font-medium text-gray-900",
                    "Ready to discover amazing food?"
                }
                p { class: "text-gray-600",
                    "Enter your location above to find food stalls recommended by YouTube food bloggers"
                }
            }
        }
    }
}
