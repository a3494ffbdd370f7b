//! Screenshot carousel for project detail pages.

#[cfg(test)]
#[path = "screenshot_carousel_test.rs"]
mod screenshot_carousel_test;

use leptos::prelude::*;

use crate::data::projects::Screenshot;

/// Next slide index with wraparound.
fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Previous slide index with wraparound.
fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Cycling screenshot gallery. All slides stay mounted; the current one is
/// picked out with a class so switching never re-decodes images.
#[component]
pub fn ScreenshotCarousel(screenshots: Vec<Screenshot>) -> impl IntoView {
    let index = RwSignal::new(0usize);
    let len = screenshots.len();

    let on_prev = move |_| index.update(|i| *i = prev_index(*i, len));
    let on_next = move |_| index.update(|i| *i = next_index(*i, len));

    view! {
        <div class="carousel">
            <div class="carousel__frame">
                {screenshots
                    .iter()
                    .enumerate()
                    .map(|(i, shot)| {
                        view! {
                            <figure
                                class="carousel__slide"
                                class:carousel__slide--current=move || index.get() == i
                            >
                                <img src=shot.src.clone() alt=shot.alt.clone() loading="lazy" />
                                <figcaption class="carousel__caption">
                                    {shot.caption.clone()}
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}

                {(len > 1)
                    .then(|| {
                        view! {
                            <button
                                class="carousel__arrow carousel__arrow--prev"
                                aria-label="Previous screenshot"
                                on:click=on_prev
                            >
                                "‹"
                            </button>
                            <button
                                class="carousel__arrow carousel__arrow--next"
                                aria-label="Next screenshot"
                                on:click=on_next
                            >
                                "›"
                            </button>
                        }
                    })}
            </div>

            {(len > 1)
                .then(|| {
                    view! {
                        <div class="carousel__dots">
                            {(0..len)
                                .map(|i| {
                                    view! {
                                        <button
                                            class="carousel__dot"
                                            class:carousel__dot--current=move || index.get() == i
                                            aria-label=format!("Go to screenshot {}", i + 1)
                                            on:click=move |_| index.set(i)
                                        ></button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}
        </div>
    }
}
