//! Client reviews, the static fallback list, and the carousel index.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author_name: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub text: String,
    /// Epoch milliseconds.
    pub time: i64,
    pub profile_photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_time_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Review {
    pub fn has_valid_rating(&self) -> bool {
        (1..=5).contains(&self.rating)
    }

    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }

    pub fn initial(&self) -> char {
        self.author_name.chars().next().unwrap_or('?')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInfo {
    pub name: String,
    pub overall_rating: Option<f32>,
    pub total_ratings: Option<u32>,
}

/// Body returned by the reviews endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub success: bool,
    pub reviews: Vec<Review>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_info: Option<PlaceInfo>,
    pub total: usize,
    #[serde(default)]
    pub fallback: bool,
}

/// Where the reviews on screen came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewSource {
    Live(Vec<Review>),
    Fallback(Vec<Review>),
}

impl ReviewSource {
    /// The reviews policy: any fetch error, or an empty live list, is
    /// answered with the static list.
    pub fn from_result<E>(result: Result<Vec<Review>, E>) -> Self {
        match result {
            Ok(reviews) => {
                let reviews: Vec<Review> = reviews.into_iter().filter(Review::has_valid_rating).collect();
                if reviews.is_empty() {
                    Self::Fallback(fallback_reviews())
                } else {
                    Self::Live(reviews)
                }
            }
            Err(_) => Self::Fallback(fallback_reviews()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn reviews(&self) -> &[Review] {
        match self {
            Self::Live(reviews) | Self::Fallback(reviews) => reviews,
        }
    }

    pub fn into_response(self, place_info: Option<PlaceInfo>) -> ReviewsResponse {
        let fallback = self.is_fallback();
        let reviews = match self {
            Self::Live(reviews) | Self::Fallback(reviews) => reviews,
        };
        ReviewsResponse {
            success: true,
            total: reviews.len(),
            reviews,
            place_info: if fallback { None } else { place_info },
            fallback,
        }
    }
}

struct StaticReview {
    author_name: &'static str,
    text: &'static str,
    time: i64,
    profile_photo_url: &'static str,
    relative_time_description: &'static str,
}

static STATIC_REVIEWS: &[StaticReview] = &[
    StaticReview {
        author_name: "LaToya L",
        text: "I can't lie I was so nervous not having met the Dj or knowing his work prior to or wedding. As a bride you want everything PERFECT. Words can not describe how amazing DJ Bigg Slim was for our wedding. He felt our energy and gave what needed to be given!!! We tried to not let the party end!!!\n\nTHANK YOU!!!!!! -Mrs.Alexander",
        time: 1752848518000,
        profile_photo_url: "https://lh3.googleusercontent.com/a-/ALV-UjXYyPnwES9yRmhDOnvMSiASUBITbdbROVINSZ82Z9_EcBc_jH2p=s128-c0x00000000-cc-rp-mo",
        relative_time_description: "3 months ago",
    },
    StaticReview {
        author_name: "Rhiana Barrows",
        text: "DJ Big Slim was so fun and kept the vibes high allll night! He introduced everyone I wanted and made everyone feel special! I highly recommend him for your wedding or any fun event that you want to have good music at!",
        time: 1761571149000,
        profile_photo_url: "https://lh3.googleusercontent.com/a-/ALV-UjUn03bvgj_Yu0Rv55iP_uhWeZXI6A9FkfSu7vXnp3fFQKSreL5G=s128-c0x00000000-cc-rp-mo",
        relative_time_description: "a week ago",
    },
    StaticReview {
        author_name: "Christina St. Fleur",
        text: "The Best Sound Team in St. Lucia!\n\nWorking with DJ Big Slim and his team was an absolute dream! Sound was one of the most important aspects of our wedding, especially for a Haitian wedding where music and energy are everything, and they delivered flawlessly.\n\nIf you want a worry-free, unforgettable, and next-level sound experience, this is hands down the best sound company on the island!",
        time: 1753975216000,
        profile_photo_url: "https://lh3.googleusercontent.com/a-/ALV-UjXcY3E5KaAYOtlluJQupkY47nHZq3VFdgjVy-kiItT5_ZPMgCMEqg=s128-c0x00000000-cc-rp-mo-ba2",
        relative_time_description: "3 months ago",
    },
    StaticReview {
        author_name: "Sarah Newell",
        text: "DJ Bigg Slim was EVERYTHING!\nWe had the absolute best time at our wedding at the Royalton Saint Lucia, and a huge part of that was thanks to DJ Bigg Slim. He MADE the night! From start to finish, the energy was incredible and our friends and family were on the dance floor the entire time.\n\nThank you!!\nSarah & Chris",
        time: 1744933767000,
        profile_photo_url: "https://lh3.googleusercontent.com/a-/ALV-UjULVWHMcGcGlYtlray4pMUN4eeabdF1JkeJsN33SLk4Dus3IB7T=s128-c0x00000000-cc-rp-mo",
        relative_time_description: "6 months ago",
    },
    StaticReview {
        author_name: "Lauren Copper",
        text: "DJ Bigg Slim.\nOur wedding DJ at the Royalton Resort!\nDown to earth, attentive to the tracks chosen, noticed where we missed tracks and ensured it was picked up before we began.\nA vibe it was, all evening!\n\nMr & Mrs Powell",
        time: 1748345379000,
        profile_photo_url: "https://lh3.googleusercontent.com/a-/ALV-UjWN_EwtGNRtRe52IajossjLJw5z7Mu28VEaOlA8Fg_DowYFZ14x=s128-c0x00000000-cc-rp-mo",
        relative_time_description: "5 months ago",
    },
];

/// The bundled review list shown whenever live reviews are unavailable.
pub fn fallback_reviews() -> Vec<Review> {
    STATIC_REVIEWS
        .iter()
        .map(|r| Review {
            author_name: r.author_name.to_string(),
            rating: 5,
            text: r.text.to_string(),
            time: r.time,
            profile_photo_url: r.profile_photo_url.to_string(),
            relative_time_description: Some(r.relative_time_description.to_string()),
            source: Some("Google Review".to_string()),
        })
        .collect()
}

/// Index into a wrapping carousel of `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            author_name: "Dana".to_string(),
            rating,
            text: "Great night".to_string(),
            time: 1_700_000_000_000,
            profile_photo_url: String::new(),
            relative_time_description: None,
            source: None,
        }
    }

    #[test]
    fn test_fallback_list_is_well_formed() {
        let reviews = fallback_reviews();
        assert_eq!(reviews.len(), 5);
        assert!(reviews.iter().all(Review::has_valid_rating));
        assert!(reviews.iter().all(|r| !r.text.is_empty() && r.time > 0));
    }

    #[test]
    fn test_error_falls_back() {
        let source = ReviewSource::from_result::<&str>(Err("timeout"));
        assert!(source.is_fallback());
        assert_eq!(source.reviews(), fallback_reviews().as_slice());
    }

    #[test]
    fn test_empty_or_invalid_live_list_falls_back() {
        assert!(ReviewSource::from_result::<()>(Ok(vec![])).is_fallback());
        assert!(ReviewSource::from_result::<()>(Ok(vec![review(0), review(9)])).is_fallback());
    }

    #[test]
    fn test_live_list_drops_bad_ratings() {
        let source = ReviewSource::from_result::<()>(Ok(vec![review(4), review(0), review(5)]));
        assert!(!source.is_fallback());
        assert_eq!(source.reviews().len(), 2);
    }

    #[test]
    fn test_into_response() {
        let info = PlaceInfo {
            name: "DJ".to_string(),
            overall_rating: Some(4.9),
            total_ratings: Some(40),
        };
        let live = ReviewSource::Live(vec![review(5)]).into_response(Some(info.clone()));
        assert_eq!(live.total, 1);
        assert!(!live.fallback);
        assert_eq!(live.place_info, Some(info.clone()));

        let fallback = ReviewSource::Fallback(fallback_reviews()).into_response(Some(info));
        assert!(fallback.fallback);
        assert!(fallback.place_info.is_none());
        assert_eq!(fallback.total, 5);
    }

    #[test]
    fn test_review_json_keys() {
        let json = serde_json::to_value(review(5)).unwrap();
        assert_eq!(json["author_name"], "Dana");
        assert_eq!(json["profile_photo_url"], "");
        assert!(json.get("relative_time_description").is_none());
    }

    #[test]
    fn test_stars() {
        assert_eq!(review(3).stars(), "★★★");
        assert_eq!(review(5).initial(), 'D');
    }

    #[test]
    fn test_carousel_wraps() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.go_to(1);
        assert_eq!(carousel.current(), 1);
        carousel.go_to(7);
        assert_eq!(carousel.current(), 1);

        let mut empty = Carousel::new(0);
        empty.next();
        empty.previous();
        assert_eq!(empty.current(), 0);
    }
}
