use serde::{Deserialize, Serialize};

/// A food stall from the bundled catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stall {
    pub id: u32,
    pub name: String,
    pub location: StallLocation,
    pub dishes_offered: Vec<String>,
    /// Image file names, resolved against the embedded `assets/images/` folder.
    pub images: Vec<String>,
    pub youtube_recommendations: Vec<Recommendation>,
}

impl Stall {
    /// Number of blogger recommendations; the catalog's popularity sort key.
    pub fn review_count(&self) -> usize {
        self.youtube_recommendations.len()
    }

    /// The image shown on the stall card, if the catalog lists any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Where the stall is. Coordinates are carried by the data shape but nothing
/// reads them yet; search does not interpret the entered location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StallLocation {
    pub address: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// A single blogger's endorsement of a stall.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub blogger_name: String,
    pub video_url: String,
    pub summary: String,
}
