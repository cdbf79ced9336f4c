//! Catalog contents and wire types.

use serde::{Deserialize, Serialize};

const COLORS: [&str; 6] = ["Yellow", "Red", "Orange", "Green", "Blue", "Indigo"];
const BRAND_IDS: [u64; 6] = [231, 232, 233, 234, 235, 236];
const BRANDS: [&str; 6] = [
    "Boston Whaler",
    "Chaparral",
    "Grady-White",
    "Lund",
    "MasterCraft",
    "Sea Ray",
];

/// Boat id the boat catalog always reports as missing.
pub const MISSING_BOAT: u64 = 2;
/// Brand id the brand catalog always reports as missing.
pub const MISSING_BRAND: u64 = 234;

const FIRST_BRAND: u64 = 231;

/// Boat catalog entry; `brand` is a brand catalog id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoatListing {
    pub id: u64,
    pub color: String,
    pub brand: u64,
}

/// Brand catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandListing {
    pub id: u64,
    pub name: String,
}

/// Path segment to id. Digits only.
pub fn parse_id(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

pub fn boat(id: u64) -> Option<BoatListing> {
    if id == MISSING_BOAT {
        return None;
    }
    let slot = (id % COLORS.len() as u64) as usize;
    Some(BoatListing {
        id,
        color: COLORS[slot].to_string(),
        brand: BRAND_IDS[slot],
    })
}

pub fn brand(id: u64) -> Option<BrandListing> {
    if id == MISSING_BRAND {
        return None;
    }
    let offset = id.checked_sub(FIRST_BRAND)?;
    let slot = (offset % BRANDS.len() as u64) as usize;
    Some(BrandListing {
        id,
        name: BRANDS[slot].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("1e3"), None);
        assert_eq!(parse_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_boat_listing() {
        let listing = boat(1).unwrap();
        assert_eq!(listing.color, "Red");
        assert_eq!(listing.brand, 232);
        assert!(boat(MISSING_BOAT).is_none());
        // 3 points at the missing brand.
        assert_eq!(boat(3).unwrap().brand, MISSING_BRAND);
    }

    #[test]
    fn test_brand_listing() {
        assert_eq!(brand(232).unwrap().name, "Chaparral");
        assert_eq!(brand(237).unwrap().name, "Boston Whaler");
        assert!(brand(MISSING_BRAND).is_none());
        assert!(brand(7).is_none());
    }
}
