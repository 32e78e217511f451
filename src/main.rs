mod models;
mod store;

use store::{Favorites, ListingStore};
use tracing::{info, warn, Level};

const DATA_FILE: &str = "data/colivings.json";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏝 Coliving Finder");
    info!("==================");
    info!("");

    let mut store = ListingStore::new();
    match store.load(DATA_FILE) {
        Ok(count) => info!("Browsing {} co-living spaces", count),
        Err(err) => warn!("Could not load listings, continuing empty: {}", err),
    }

    // Optional free-text query from the command line
    let query: String = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !query.is_empty() {
        info!("Searching for \"{}\"", query);
        store.criteria.search_text = query;
    }

    info!(
        "Regions: {} | Amenities: {}",
        store.regions().len(),
        store.all_amenities().len()
    );

    let favorites = Favorites::open(store::favorites::STORAGE_FILE);
    if !favorites.is_empty() {
        let saved = store.saved_listings(favorites.ids());
        info!("❤️ {} saved spaces", saved.len());
    }
    info!("");

    let results = store.filtered();
    info!("✅ {} matching spaces\n", results.len());

    for (i, listing) in results.iter().enumerate() {
        println!("{}. {} — {}, {}", i + 1, listing.name, listing.city, listing.country);
        println!("   {}", listing.price_display());
        if let Some(rating) = listing.rating {
            println!(
                "   Rated {:.1} ({} reviews)",
                rating,
                listing.review_count.unwrap_or(0)
            );
        }
        println!("   WiFi: {}", listing.wifi_rating().label());
        if !listing.amenities.is_empty() {
            println!("   Amenities: {}", listing.amenities.join(", "));
        }
        if let Some(coordinate) = listing.coordinate() {
            println!(
                "   Position: {:.4}, {:.4}",
                coordinate.latitude, coordinate.longitude
            );
        }
        if let Some(website) = &listing.website {
            println!("   Website: {}", website);
        }
        println!();
    }

    Ok(())
}
