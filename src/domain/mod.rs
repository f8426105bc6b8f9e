//! Domain logic for stall ranking and search lives here.

pub mod app_state;
pub mod entities;
pub mod ranking;

pub use app_state::AppState;
#[allow(unused_imports)]
pub use entities::{Recommendation, Stall, StallLocation};
#[allow(unused_imports)]
pub use ranking::{rank_stalls, search, SearchOutcome};

#[cfg(test)]
pub mod test_support {
    use super::entities::{Recommendation, Stall, StallLocation};

    /// A stall with `recs` recommendations; enough shape for ranking tests.
    pub fn stall(id: u32, recs: usize) -> Stall {
        Stall {
            id,
            name: format!("Stall {id}"),
            location: StallLocation {
                address: format!("{id} Test Street"),
                lat: None,
                lng: None,
            },
            dishes_offered: vec!["Tacos".to_string()],
            images: vec![format!("stall_{id}.jpg")],
            youtube_recommendations: (0..recs)
                .map(|n| Recommendation {
                    blogger_name: format!("Blogger {n}"),
                    video_url: format!("https://youtube.com/watch?v={id}-{n}"),
                    summary: "Great food.".to_string(),
                })
                .collect(),
        }
    }
}
