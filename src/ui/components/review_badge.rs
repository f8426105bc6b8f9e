use dioxus::prelude::*;

/// Recommendation-count pill pinned to the top-right corner of the card image.
#[component]
pub fn ReviewBadge(count: usize) -> Element {
    let noun = if count == 1 { "review" } else { "reviews" };

    rsx! {
        span {
            class: "absolute right-2 top-2 inline-flex items-center gap-1 rounded-full bg-red-600 px-2 py-0.5 text-xs font-medium text-white",
            "👥 {count} {noun}"
        }
    }
}
