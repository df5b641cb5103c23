use chrono::NaiveDate;
use leptos::prelude::*;
use shared_types::calendar::WEEKDAY_LABELS;
use shared_types::{CalendarState, GridCell};

use crate::server::get_calendar_availability;

/// Month grid for picking an event date. Availability is fetched once and
/// merged into `state`; until then every future day shows as open.
#[component]
pub fn BookingCalendar(state: RwSignal<CalendarState>, today: NaiveDate) -> impl IntoView {
    let availability = Resource::new(|| (), |_| get_calendar_availability());

    Effect::new(move |_| {
        if let Some(Ok(loaded)) = availability.get() {
            state.update(|s| s.set_availability(loaded));
        }
    });

    let grid = Memo::new(move |_| state.with(|s| s.render(today)));

    view! {
        <div class="booking-calendar">
            <div class="calendar-header">
                <button
                    type="button"
                    id="prevMonth"
                    class="calendar-nav"
                    aria-label="Previous month"
                    on:click=move |_| state.update(|s| s.previous_month())
                >
                    "‹"
                </button>
                <h3 id="currentMonth">{move || state.with(|s| s.viewed().title())}</h3>
                <button
                    type="button"
                    id="nextMonth"
                    class="calendar-nav"
                    aria-label="Next month"
                    on:click=move |_| state.update(|s| s.next_month())
                >
                    "›"
                </button>
            </div>

            <div class="calendar-weekdays">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="calendar-weekday">{*label}</div> })
                    .collect_view()}
            </div>

            <div class="calendar-grid" id="calendarGrid">
                {move || {
                    grid.get()
                        .cells
                        .into_iter()
                        .map(|cell| match cell {
                            GridCell::Blank => view! { <div class="calendar-day empty"></div> }.into_any(),
                            GridCell::Day(day) => {
                                let date = day.date;
                                let selectable = day.is_selectable();
                                view! {
                                    <div
                                        class=day.css_class()
                                        on:click=move |_| {
                                            if selectable {
                                                state.update(|s| {
                                                    if let Err(e) = s.select(date, today) {
                                                        leptos::logging::warn!("date not selectable: {}", e);
                                                    }
                                                });
                                            }
                                        }
                                    >
                                        {day.day()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="calendar-legend">
                <span class="legend-item"><span class="legend-dot available"></span>"Available"</span>
                <span class="legend-item"><span class="legend-dot limited"></span>"Limited"</span>
                <span class="legend-item"><span class="legend-dot booked"></span>"Booked"</span>
            </div>

            <div class="form-group">
                <label for="selectedDate">"Selected Date *"</label>
                <input
                    type="text"
                    id="selectedDate"
                    readonly
                    placeholder="Select a date from the calendar"
                    prop:value=move || state.with(|s| s.selected_label().unwrap_or_default())
                />
            </div>
        </div>
    }
}
