use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use leptos_router::components::A;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/weddings", "Weddings"),
    ("/saint-lucia", "Saint Lucia"),
    ("/private-events", "Private Events"),
    ("/minnesota", "Minnesota"),
    ("/equipment-rentals", "Equipment Rentals"),
];

/// Whether the menu stays open after a click anywhere on the page.
fn menu_open_after_click(open: bool, inside_nav: bool) -> bool {
    open && inside_nav
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let close_menu = move |_| menu_open.set(false);
    let nav_ref = NodeRef::<leptos::html::Nav>::new();

    let outside_click = window_event_listener(leptos::ev::click, move |ev| {
        let target = ev
            .target()
            .and_then(|target| target.dyn_into::<leptos::web_sys::Node>().ok());
        let inside_nav = nav_ref
            .get_untracked()
            .is_some_and(|nav| nav.contains(target.as_ref()));
        let open = menu_open.get_untracked();
        if open != menu_open_after_click(open, inside_nav) {
            menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    view! {
        <nav class="navbar" node_ref=nav_ref>
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo" on:click=close_menu>
                        "DJ Bigg Slim Events"
                    </A>
                </div>

                <button
                    type="button"
                    class=move || if menu_open.get() { "hamburger active" } else { "hamburger" }
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>

                <div class=move || if menu_open.get() { "navbar__links active" } else { "navbar__links" }>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <A href=*href attr:class="navbar__link" on:click=close_menu>
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                    <a href="/#contact" class="navbar__link navbar__link--cta" on:click=close_menu>
                        "Book Now"
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__container">
                <p class="footer__brand">"DJ Bigg Slim Events"</p>
                <p>"Wedding & event DJ services in Saint Lucia and Minnesota."</p>
                <p class="footer__contact">
                    <a href="tel:+16122390394">"1-612-239-0394"</a>
                </p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_click_closes_menu() {
        assert!(!menu_open_after_click(true, false));
        assert!(menu_open_after_click(true, true));
        assert!(!menu_open_after_click(false, false));
        assert!(!menu_open_after_click(false, true));
    }
}
