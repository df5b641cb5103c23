use std::time::Duration;

use leptos::prelude::*;
use shared_types::{Carousel, Review, ReviewSource};

use crate::components::loading::LoadingView;
use crate::server::google_places_reviews;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(8);

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let initial = review.initial().to_string();
    let has_photo = !review.profile_photo_url.is_empty();

    view! {
        <article class="review-card">
            <div class="review-header">
                {if has_photo {
                    view! {
                        <img
                            class="review-avatar"
                            src=review.profile_photo_url.clone()
                            alt=review.author_name.clone()
                            loading="lazy"
                        />
                    }
                        .into_any()
                } else {
                    view! { <div class="review-avatar review-avatar--initial">{initial}</div> }.into_any()
                }}
                <div>
                    <h4 class="review-author">{review.author_name.clone()}</h4>
                    <div class="review-stars" aria-label=format!("{} out of 5 stars", review.rating)>
                        {review.stars()}
                    </div>
                    {review
                        .relative_time_description
                        .clone()
                        .map(|when| view! { <span class="review-date">{when}</span> })}
                </div>
            </div>
            <p class="review-text">{review.text.clone()}</p>
            {review.source.clone().map(|source| view! { <span class="review-source">{source}</span> })}
        </article>
    }
}

/// Rotating strip of client reviews. Live Google reviews when available,
/// the bundled list otherwise; autoplays on the client only.
#[component]
pub fn ReviewsCarousel() -> impl IntoView {
    let fetched = Resource::new(|| (), |_| google_places_reviews(None));
    let reviews = move || {
        fetched
            .get()
            .map(|result| ReviewSource::from_result(result.map(|response| response.reviews)))
    };
    let carousel = RwSignal::new(Carousel::default());
    // bumped on manual navigation so autoplay waits a full interval again
    let interaction = RwSignal::new(0u32);

    Effect::new(move |_| {
        if let Some(source) = reviews() {
            carousel.set(Carousel::new(source.reviews().len()));
        }
    });

    Effect::new(move |_| {
        interaction.track();
        let handle =
            set_interval_with_handle(move || carousel.update(|c| c.next()), AUTOPLAY_INTERVAL).ok();
        on_cleanup(move || {
            if let Some(handle) = handle {
                handle.clear();
            }
        });
    });

    let navigate = move |step: fn(&mut Carousel)| {
        carousel.update(step);
        interaction.update(|n| *n = n.wrapping_add(1));
    };

    view! {
        <section class="reviews-section" id="reviews">
            <h2 class="section-title">"What Our Clients Say"</h2>
            <Suspense fallback=move || view! { <LoadingView message="Loading reviews..."/> }>
                {move || {
                    reviews()
                        .map(|source| {
                            let slides = source.reviews().to_vec();
                            let count = slides.len();
                            view! {
                                <div class="reviews-carousel">
                                    <button
                                        type="button"
                                        class="carousel-btn prev"
                                        aria-label="Previous review"
                                        on:click=move |_| navigate(Carousel::previous)
                                    >
                                        "‹"
                                    </button>
                                    <div class="reviews-track">
                                        {slides
                                            .into_iter()
                                            .enumerate()
                                            .map(|(index, review)| {
                                                view! {
                                                    <div class=move || {
                                                        if carousel.with(|c| c.current() == index) {
                                                            "review-slide active"
                                                        } else {
                                                            "review-slide"
                                                        }
                                                    }>
                                                        <ReviewCard review=review/>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <button
                                        type="button"
                                        class="carousel-btn next"
                                        aria-label="Next review"
                                        on:click=move |_| navigate(Carousel::next)
                                    >
                                        "›"
                                    </button>
                                </div>
                                <div class="carousel-dots">
                                    {(0..count)
                                        .map(|index| {
                                            view! {
                                                <button
                                                    type="button"
                                                    class=move || {
                                                        if carousel.with(|c| c.current() == index) { "dot active" } else { "dot" }
                                                    }
                                                    aria-label=format!("Show review {}", index + 1)
                                                    on:click=move |_| {
                                                        carousel.update(|c| c.go_to(index));
                                                        interaction.update(|n| *n = n.wrapping_add(1));
                                                    }
                                                ></button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
