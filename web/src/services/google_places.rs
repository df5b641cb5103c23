// Google Places (legacy web service) client used for the reviews carousel.
// Looks the business up by text, then pulls the `reviews` field of its details.

use serde::Deserialize;
use shared_types::reviews::PlaceInfo;
use shared_types::Review;
use thiserror::Error;

use crate::config::ConfigError;
#[cfg(feature = "ssr")]
use crate::config::{require, SiteConfig};

pub const FIND_PLACE_URL: &str =
    "https://maps.googleapis.com/maps/api/place/findplacefromtext/json";
pub const PLACE_DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
pub const REVIEW_SOURCE: &str = "Google Review";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[cfg(feature = "ssr")]
    #[error("request to Google Places failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Google Places returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Google Places status {0}")]
    Status(String),
    #[error("no place matched {0:?}")]
    PlaceNotFound(String),
}

#[derive(Debug, Deserialize)]
pub struct FindPlaceResponse {
    #[serde(default)]
    pub candidates: Vec<PlaceCandidate>,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    pub name: Option<String>,
    pub rating: Option<f32>,
    pub user_ratings_total: Option<u32>,
}

impl PlaceCandidate {
    pub fn info(&self) -> PlaceInfo {
        PlaceInfo {
            name: self.name.clone().unwrap_or_default(),
            overall_rating: self.rating,
            total_ratings: self.user_ratings_total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub result: Option<PlaceDetails>,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub rating: Option<f32>,
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub reviews: Vec<GoogleReview>,
}

impl PlaceDetails {
    pub fn info(&self) -> PlaceInfo {
        PlaceInfo {
            name: self.name.clone().unwrap_or_default(),
            overall_rating: self.rating,
            total_ratings: self.user_ratings_total,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleReview {
    pub author_name: String,
    pub rating: u8,
    #[serde(default)]
    pub text: String,
    /// Epoch seconds.
    pub time: i64,
    pub profile_photo_url: Option<String>,
    pub relative_time_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceReviews {
    pub info: PlaceInfo,
    pub reviews: Vec<Review>,
}

/// Placeholder avatar for reviewers without a profile photo.
pub fn avatar_url(author_name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=0298dd&color=fff",
        urlencoding::encode(author_name)
    )
}

pub fn convert_review(review: GoogleReview) -> Review {
    let profile_photo_url = review
        .profile_photo_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| avatar_url(&review.author_name));

    Review {
        author_name: review.author_name,
        rating: review.rating,
        text: review.text,
        time: review.time.saturating_mul(1000),
        profile_photo_url,
        relative_time_description: review.relative_time_description,
        source: Some(REVIEW_SOURCE.to_string()),
    }
}

/// "OK" and "ZERO_RESULTS" are the only non-error statuses the legacy API sends.
fn check_status(status: &str) -> Result<(), FetchError> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(FetchError::Status(other.to_string())),
    }
}

pub fn first_candidate(response: FindPlaceResponse, query: &str) -> Result<PlaceCandidate, FetchError> {
    check_status(&response.status)?;
    response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::PlaceNotFound(query.to_string()))
}

pub fn parse_details(response: PlaceDetailsResponse) -> Result<PlaceReviews, FetchError> {
    check_status(&response.status)?;
    Ok(match response.result {
        Some(details) => PlaceReviews {
            info: details.info(),
            reviews: details.reviews.into_iter().map(convert_review).collect(),
        },
        None => PlaceReviews {
            info: PlaceInfo {
                name: String::new(),
                overall_rating: None,
                total_ratings: None,
            },
            reviews: Vec::new(),
        },
    })
}

#[cfg(feature = "ssr")]
async fn get_json<T: serde::de::DeserializeOwned>(
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, FetchError> {
    let response = super::http_client().get(url).query(query).send().await?;
    if !response.status().is_success() {
        let (status, message) = super::error_body(response).await;
        return Err(FetchError::Api { status, message });
    }
    Ok(response.json().await?)
}

/// Live reviews for `place_id`, or for the first match of the configured
/// text query when no id is given.
#[cfg(feature = "ssr")]
pub async fn fetch_place_reviews(
    config: &SiteConfig,
    place_id: Option<&str>,
) -> Result<PlaceReviews, FetchError> {
    let api_key = require(&config.google_places_api_key, "GOOGLE_PLACES_API_KEY")?;

    let place_id = match place_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => id.to_string(),
        None => {
            let query = config.google_places_query.as_str();
            let found: FindPlaceResponse = get_json(
                FIND_PLACE_URL,
                &[
                    ("input", query),
                    ("inputtype", "textquery"),
                    ("fields", "place_id"),
                    ("key", api_key),
                ],
            )
            .await?;
            first_candidate(found, query)?.place_id
        }
    };
    tracing::debug!(place_id = %place_id, "fetching place reviews");

    let details: PlaceDetailsResponse = get_json(
        PLACE_DETAILS_URL,
        &[
            ("place_id", place_id.as_str()),
            ("fields", "name,rating,user_ratings_total,reviews"),
            ("key", api_key),
        ],
    )
    .await?;
    parse_details(details)
}
