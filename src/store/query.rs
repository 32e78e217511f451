use std::collections::HashSet;

use crate::models::{Listing, WifiRating};

/// Active filter and search state for browsing listings
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Free-text search; blank means no text filter
    pub search_text: String,
    /// Country to restrict results to
    pub region: Option<String>,
    /// WiFi tier a listing must have (exact tier, not a floor)
    pub wifi_quality: Option<WifiRating>,
    /// Highest acceptable starting price; unpriced listings always pass
    pub max_price: Option<f64>,
    /// Amenities a listing must all carry
    pub amenities: HashSet<String>,
}

impl FilterCriteria {
    /// Whether any filter beyond the search text is set.
    pub fn is_active(&self) -> bool {
        self.region.is_some()
            || self.wifi_quality.is_some()
            || self.max_price.is_some()
            || !self.amenities.is_empty()
    }

    /// Reset every filter, including the search text.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Derive the listings matching `criteria`, ordered by rating descending.
///
/// Pure function of its inputs: identical collection and criteria always
/// produce the identical sequence. All predicates are AND-combined. The
/// sort treats a missing rating as 0 and is stable, so equally rated
/// listings keep their collection order.
pub fn filter_listings<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    let query = criteria.search_text.trim().to_lowercase();

    let mut matches: Vec<&Listing> = listings
        .iter()
        .filter(|listing| {
            if !query.is_empty() {
                let hit = listing.name.to_lowercase().contains(&query)
                    || listing.city.to_lowercase().contains(&query)
                    || listing.country.to_lowercase().contains(&query)
                    || listing.description.to_lowercase().contains(&query);
                if !hit {
                    return false;
                }
            }

            if let Some(region) = criteria.region.as_deref() {
                if !region.is_empty() && listing.country != region {
                    return false;
                }
            }

            if let Some(wifi) = criteria.wifi_quality {
                if listing.wifi_rating() != wifi {
                    return false;
                }
            }

            if let Some(max) = criteria.max_price {
                if let Some(price) = listing.price_from {
                    if price > max {
                        return false;
                    }
                }
            }

            if !criteria.amenities.is_empty() {
                let available: HashSet<&str> =
                    listing.amenities.iter().map(String::as_str).collect();
                if !criteria
                    .amenities
                    .iter()
                    .all(|a| available.contains(a.as_str()))
                {
                    return false;
                }
            }

            true
        })
        .collect();

    matches.sort_by(|a, b| {
        b.rating
            .unwrap_or(0.0)
            .total_cmp(&a.rating.unwrap_or(0.0))
    });
    matches
}
