use leptos::prelude::*;
use shared_types::pricing::format_usd;
use shared_types::{PricingConfig, ServiceType};

use crate::components::contact_form::scroll_to_contact;
use crate::components::{ChoiceField, ContactForm};

fn package_features(id: &str) -> &'static [&'static str] {
    match id {
        "industry" => &[
            "Up to 5 hours of DJ and MC service",
            "Professional sound system",
            "Wireless microphones for toasts",
            "Planning consultation",
        ],
        "ceremony" => &[
            "Everything in Industry Standard",
            "Ceremony sound and microphones",
            "Cocktail hour music",
            "Custom entrance and first dance edits",
        ],
        "ultimate" => &[
            "Everything in Ceremony Support",
            "Dance floor lighting and uplights",
            "Cold sparks for the first dance",
            "Extended coverage",
        ],
        _ => &[],
    }
}

#[component]
pub fn WeddingsPage() -> impl IntoView {
    let packages = PricingConfig::default().packages;
    let package_interest = RwSignal::new(String::new());

    let choice = ChoiceField {
        key: "packageInterest",
        label: "Package Interest",
        options: packages
            .iter()
            .map(|p| (p.id.clone(), format!("{} ({})", p.name, format_usd(p.price))))
            .chain(std::iter::once(("undecided".to_string(), "Not sure yet".to_string())))
            .collect(),
        selected: package_interest,
    };

    view! {
        <div class="page weddings-page">
            <section class="page-hero">
                <h1>"Wedding DJ Packages"</h1>
                <p>"All-inclusive pricing. No hidden fees."</p>
            </section>

            <section class="packages">
                <div class="packages-grid">
                    {packages
                        .into_iter()
                        .map(|package| {
                            let id = package.id.clone();
                            let popular = package.id == "ceremony";
                            view! {
                                <div class=if popular { "package-card popular" } else { "package-card" }>
                                    {popular.then(|| view! { <span class="package-badge">"Most Popular"</span> })}
                                    <h3 class="package-name">{package.name}</h3>
                                    <p class="package-price">{format_usd(package.price)}</p>
                                    <ul class="package-features">
                                        {package_features(&package.id)
                                            .iter()
                                            .map(|feature| view! { <li>{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                    <button
                                        type="button"
                                        class="package-cta"
                                        on:click=move |_| {
                                            package_interest.set(id.clone());
                                            scroll_to_contact();
                                        }
                                    >
                                        "Choose This Package"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <ContactForm
                service_type=ServiceType::Wedding
                title="Tell Us About Your Wedding"
                choice=choice
            />
        </div>
    }
}
