// Refresh Reviews
// Pulls the current Google reviews for the configured place and prints them
// as JSON, ready to replace the bundled fallback list.

use web::config::SiteConfig;
use web::services::google_places::fetch_place_reviews;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_filename("../.env")
        .or_else(|_| dotenvy::dotenv())
        .ok();

    let place_id = std::env::args().nth(1);
    let config = SiteConfig::from_env()?;

    match place_id.as_deref() {
        Some(id) => println!("🔍 Fetching reviews for place {}...\n", id),
        None => println!("🔍 Searching for \"{}\"...\n", config.google_places_query),
    }

    let place = fetch_place_reviews(&config, place_id.as_deref()).await?;
    println!("✅ Found: {}", place.info.name);
    if let (Some(rating), Some(total)) = (place.info.overall_rating, place.info.total_ratings) {
        println!("⭐ Rating: {} ({} total reviews)", rating, total);
    }
    println!("📦 Fetched {} reviews\n", place.reviews.len());

    let valid = place.reviews.iter().filter(|r| r.has_valid_rating()).count();
    if valid < place.reviews.len() {
        eprintln!("⚠️  {} reviews have ratings outside 1-5", place.reviews.len() - valid);
    }

    println!("{}", serde_json::to_string_pretty(&place.reviews)?);
    Ok(())
}
