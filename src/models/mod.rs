use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// WiFi quality tier of a co-living space
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WifiRating {
    Excellent,
    Good,
    Average,
    Poor,
    Unknown,
}

impl WifiRating {
    /// Resolve a raw quality string to a tier. Anything unrecognized is Unknown.
    pub fn from_quality(value: &str) -> Self {
        match value {
            "excellent" => Self::Excellent,
            "good" => Self::Good,
            "average" => Self::Average,
            "poor" => Self::Poor,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
            Self::Unknown => "Unknown",
        }
    }
}

/// Map position of a listing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Core co-living listing data model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub region: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price_from: Option<f64>,
    pub price_to: Option<f64>,
    pub currency: String,
    pub price_unit: String,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub amenities: Vec<String>,
    pub wifi_quality: Option<String>,
    pub description: String,
    pub image_url: Option<String>,
    pub source: String,
    pub photos: Vec<String>,
}

impl Listing {
    /// Map position, if the listing carries usable coordinates.
    /// A 0 in either axis means the source had no real position.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat != 0.0 && lng != 0.0 => Some(Coordinate {
                latitude: lat,
                longitude: lng,
            }),
            _ => None,
        }
    }

    /// Human-readable price line. Amounts are shown as whole units.
    pub fn price_display(&self) -> String {
        let Some(from) = self.price_from else {
            return "Contact for pricing".to_string();
        };
        let symbol = if self.currency == "USD" { "$" } else { "€" };
        match self.price_to {
            Some(to) if to != from => format!(
                "{}{}–{}{}/{}",
                symbol, from as i64, symbol, to as i64, self.price_unit
            ),
            _ => format!("From {}{}/{}", symbol, from as i64, self.price_unit),
        }
    }

    /// Derived wifi tier. Total: missing or unrecognized quality is Unknown.
    pub fn wifi_rating(&self) -> WifiRating {
        self.wifi_quality
            .as_deref()
            .map(WifiRating::from_quality)
            .unwrap_or(WifiRating::Unknown)
    }
}

// A listing's id is its identity; two records with the same id are the
// same space regardless of other field differences.
impl PartialEq for Listing {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Listing {}

impl Hash for Listing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
