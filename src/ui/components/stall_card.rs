use dioxus::prelude::*;

use crate::{
    domain::{Recommendation, Stall},
    ui::{components::review_badge::ReviewBadge, theme},
    util::assets,
};

/// Recommendations shown on the card before collapsing into "+N more reviews".
const FEATURED_REVIEWS: usize = 2;

#[component]
pub fn StallCard(stall: Stall) -> Element {
    let image_src = stall
        .primary_image()
        .map(assets::stall_image_src)
        .unwrap_or_else(|| assets::PLACEHOLDER_IMAGE_URL.to_string());

    let review_count = stall.review_count();
    let hidden_reviews = review_count.saturating_sub(FEATURED_REVIEWS);
    let dishes = stall.dishes_offered.clone();
    let featured: Vec<Recommendation> = stall
        .youtube_recommendations
        .iter()
        .take(FEATURED_REVIEWS)
        .cloned()
        .collect();

    rsx! {
        article { class: theme::CARD,
            div { class: "relative",
                img {
                    class: "h-48 w-full object-cover",
                    src: "{image_src}",
                    alt: "{stall.name}",
                }
                ReviewBadge { count: review_count }
            }

            div { class: "space-y-4 p-4",
                header {
                    div { class: "flex items-center justify-between",
                        h4 { class: "text-lg font-semibold text-gray-900", "{stall.name}" }
                        span { class: "text-sm text-yellow-500", "⭐ Popular" }
                    }
                    p { class: "mt-1 text-sm text-gray-600", "📍 {stall.location.address}" }
                }

                section {
                    h5 { class: theme::LABEL, "Signature Dishes:" }
                    div { class: "flex flex-wrap gap-1",
                        for dish in dishes {
                            span { class: theme::BADGE_SECONDARY, "{dish}" }
                        }
                    }
                }

                section {
                    h5 { class: theme::LABEL, "Featured By:" }
                    div { class: "space-y-2",
                        for rec in featured {
                            div { class: theme::REVIEW_PANEL,
                                div { class: "mb-1 flex items-center justify-between",
                                    span { class: "font-medium text-red-600", "{rec.blogger_name}" }
                                    a {
                                        class: "text-blue-600 hover:text-blue-800",
                                        href: "{rec.video_url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "▶"
                                    }
                                }
                                p { class: "line-clamp-2 text-gray-600", "{rec.summary}" }
                            }
                        }
                        if hidden_reviews > 0 {
                            p { class: "text-xs text-gray-500", "+{hidden_reviews} more reviews" }
                        }
                    }
                }
            }
        }
    }
}
