//! The bundled stall catalog, the app's only data source.
//!
//! The catalog ships inside the binary as `assets/data/food_stalls.json` and
//! is decoded once at startup. There is no write path.

use thiserror::Error;

use crate::domain::Stall;
use crate::util::assets;

/// Decodes the embedded catalog into stall records, in source order.
pub fn load_catalog() -> Result<Vec<Stall>, CatalogError> {
    let stalls: Vec<Stall> = serde_json::from_str(assets::food_stalls_json())?;
    Ok(stalls)
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to decode bundled stall catalog: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_decodes_and_is_non_empty() {
        let stalls = load_catalog().expect("bundled catalog must decode");
        assert!(!stalls.is_empty());
    }

    #[test]
    fn catalog_ids_are_unique() {
        let stalls = load_catalog().unwrap();
        let mut ids: Vec<u32> = stalls.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), stalls.len());
    }

    #[test]
    fn every_stall_has_an_address_and_a_dish() {
        for stall in load_catalog().unwrap() {
            assert!(!stall.location.address.trim().is_empty(), "stall {}", stall.id);
            assert!(!stall.dishes_offered.is_empty(), "stall {}", stall.id);
        }
    }
}
