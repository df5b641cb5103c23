use leptos::prelude::*;
use shared_types::pricing::{format_usd, AddonPrice};
use shared_types::{PricingCalculator, PricingDisplay, PricingSelection};

fn addon_price_label(price: AddonPrice) -> String {
    match price {
        AddonPrice::Fixed(amount) => format!("+{}", format_usd(amount)),
        AddonPrice::QuoteRequired => "Quote".to_string(),
    }
}

/// Package and standalone radios, add-on checkboxes, and the running totals.
/// Choosing a package clears the standalone option and vice versa.
#[component]
pub fn PricingCalculatorView(
    calculator: StoredValue<PricingCalculator>,
    selection: RwSignal<PricingSelection>,
) -> impl IntoView {
    let config = calculator.with_value(|c| c.config().clone());
    let display = Memo::new(move |_| {
        selection.with(|s| calculator.with_value(|c| c.display(s)).unwrap_or_default())
    });

    let packages = config
        .packages
        .into_iter()
        .map(|option| {
            let id = option.id.clone();
            let checked_id = option.id.clone();
            view! {
                <label class="package-option">
                    <input
                        type="radio"
                        name="package"
                        value=option.id.clone()
                        prop:checked=move || selection.with(|s| s.package() == Some(checked_id.as_str()))
                        on:change=move |_| selection.update(|s| s.select_package(id.clone()))
                    />
                    <span class="option-name">{option.name}</span>
                    <span class="option-price">{format_usd(option.price)}</span>
                </label>
            }
        })
        .collect_view();

    let standalone = config
        .standalone
        .into_iter()
        .map(|option| {
            let id = option.id.clone();
            let checked_id = option.id.clone();
            view! {
                <label class="package-option standalone-option">
                    <input
                        type="radio"
                        name="standalone"
                        value=option.id.clone()
                        prop:checked=move || selection.with(|s| s.standalone() == Some(checked_id.as_str()))
                        on:change=move |_| selection.update(|s| s.select_standalone(id.clone()))
                    />
                    <span class="option-name">{option.name}</span>
                    <span class="option-price">{format_usd(option.price)}</span>
                </label>
            }
        })
        .collect_view();

    let addons = config
        .addons
        .into_iter()
        .map(|addon| {
            let id = addon.id.clone();
            let checked_id = addon.id.clone();
            view! {
                <label class="addon-option">
                    <input
                        type="checkbox"
                        name="addons"
                        value=addon.id.clone()
                        prop:checked=move || selection.with(|s| s.has_addon(&checked_id))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            selection.update(|s| s.set_addon(&id, checked));
                        }
                    />
                    <span class="option-name">{addon.name}</span>
                    <span class="option-price">{addon_price_label(addon.price)}</span>
                </label>
            }
        })
        .collect_view();

    let line = move |f: fn(&PricingDisplay) -> String| move || display.with(f);

    view! {
        <div class="pricing-calculator">
            <fieldset class="pricing-group">
                <legend>"Choose a Package"</legend>
                {packages}
            </fieldset>
            <fieldset class="pricing-group">
                <legend>"Or DJ Services Only"</legend>
                {standalone}
            </fieldset>
            <fieldset class="pricing-group">
                <legend>"Add-ons"</legend>
                {addons}
            </fieldset>

            <div class="pricing-summary">
                <div class="total-line">
                    <span>{move || display.with(|d| d.base_label)}</span>
                    <span id="packageTotal">{line(|d| d.package_total.clone())}</span>
                </div>
                <div class="total-line">
                    <span>"Add-ons:"</span>
                    <span id="addonsTotal">{line(|d| d.addons_total.clone())}</span>
                </div>
                <div class="total-line final-total">
                    <span>"Total:"</span>
                    <span id="finalTotal">{line(|d| d.final_total.clone())}</span>
                </div>
            </div>
        </div>
    }
}
