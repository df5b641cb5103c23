//! Package / add-on pricing.
//!
//! [`PricingConfig`] is the one price table for the whole site: the client
//! calculator, the booking endpoint and the payment-intent amount all read
//! it. Prices are whole US dollars.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const QUOTE_SUFFIX: &str = " + Quote";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("unknown package {0:?}")]
    UnknownPackage(String),
    #[error("unknown standalone option {0:?}")]
    UnknownStandalone(String),
    #[error("unknown add-on {0:?}")]
    UnknownAddon(String),
    #[error("a package and a standalone option cannot both be selected")]
    ConflictingBase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddonPrice {
    Fixed(u32),
    QuoteRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageOption {
    pub id: String,
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonOption {
    pub id: String,
    pub name: String,
    pub price: AddonPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub packages: Vec<PackageOption>,
    /// Fixed-price alternatives to a package.
    pub standalone: Vec<PackageOption>,
    pub addons: Vec<AddonOption>,
}

fn option(id: &str, name: &str, price: u32) -> PackageOption {
    PackageOption {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

fn addon(id: &str, name: &str, price: AddonPrice) -> AddonOption {
    AddonOption {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            packages: vec![
                option("industry", "Industry Standard", 2499),
                option("ceremony", "Ceremony Support", 3199),
                option("ultimate", "Ultimate Party", 4499),
            ],
            standalone: vec![option("dj-only", "DJ Services Only", 1599)],
            addons: vec![
                addon("ceremony-audio", "Ceremony Audio", AddonPrice::Fixed(349)),
                addon("cold-sparks", "Cold Sparks", AddonPrice::Fixed(299)),
                addon("wireless-uplights", "Wireless Uplights", AddonPrice::Fixed(299)),
                addon("extra-hour", "Extra Hour", AddonPrice::Fixed(300)),
                addon("dancefloor-lighting", "Dance Floor Lighting", AddonPrice::Fixed(399)),
                addon("large-crowd-sound", "Large Crowd Sound System", AddonPrice::QuoteRequired),
            ],
        }
    }
}

impl PricingConfig {
    pub fn package(&self, id: &str) -> Option<&PackageOption> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn standalone_option(&self, id: &str) -> Option<&PackageOption> {
        self.standalone.iter().find(|p| p.id == id)
    }

    pub fn addon(&self, id: &str) -> Option<&AddonOption> {
        self.addons.iter().find(|a| a.id == id)
    }
}

/// What the base of the order is. Being an enum, a package and a
/// standalone option can never both be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum BaseSelection {
    #[default]
    None,
    Package(String),
    Standalone(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSelection {
    pub base: BaseSelection,
    pub addons: BTreeSet<String>,
}

impl PricingSelection {
    /// Builds a selection from raw form values, as the booking endpoint
    /// receives them.
    pub fn from_form<I>(
        package: Option<&str>,
        standalone: Option<&str>,
        addons: I,
    ) -> Result<Self, PricingError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let package = package.filter(|s| !s.is_empty());
        let standalone = standalone.filter(|s| !s.is_empty());
        let base = match (package, standalone) {
            (Some(_), Some(_)) => return Err(PricingError::ConflictingBase),
            (Some(id), None) => BaseSelection::Package(id.to_string()),
            (None, Some(id)) => BaseSelection::Standalone(id.to_string()),
            (None, None) => BaseSelection::None,
        };
        Ok(Self {
            base,
            addons: addons.into_iter().map(Into::into).collect(),
        })
    }

    /// Selecting a package clears any standalone selection.
    pub fn select_package(&mut self, id: impl Into<String>) {
        self.base = BaseSelection::Package(id.into());
    }

    /// Selecting a standalone option clears any package selection.
    pub fn select_standalone(&mut self, id: impl Into<String>) {
        self.base = BaseSelection::Standalone(id.into());
    }

    pub fn clear_base(&mut self) {
        self.base = BaseSelection::None;
    }

    pub fn set_addon(&mut self, id: &str, checked: bool) {
        if checked {
            self.addons.insert(id.to_string());
        } else {
            self.addons.remove(id);
        }
    }

    pub fn has_addon(&self, id: &str) -> bool {
        self.addons.contains(id)
    }

    pub fn package(&self) -> Option<&str> {
        match &self.base {
            BaseSelection::Package(id) => Some(id),
            _ => None,
        }
    }

    pub fn standalone(&self) -> Option<&str> {
        match &self.base {
            BaseSelection::Standalone(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub base_price: u32,
    pub addons_price: u32,
    pub quote_required: bool,
    pub standalone: bool,
}

impl PriceQuote {
    pub fn total(&self) -> u32 {
        self.base_price + self.addons_price
    }
}

/// The three totals shown under the pricing form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingDisplay {
    pub base_label: &'static str,
    pub package_total: String,
    pub addons_total: String,
    pub final_total: String,
}

impl From<&PriceQuote> for PricingDisplay {
    fn from(quote: &PriceQuote) -> Self {
        let suffix = if quote.quote_required { QUOTE_SUFFIX } else { "" };
        Self {
            base_label: if quote.standalone {
                "DJ Services:"
            } else {
                "Package Total:"
            },
            package_total: format_usd(quote.base_price),
            addons_total: format!("{}{}", format_usd(quote.addons_price), suffix),
            final_total: format!("{}{}", format_usd(quote.total()), suffix),
        }
    }
}

impl Default for PricingDisplay {
    fn default() -> Self {
        Self::from(&PriceQuote {
            base_price: 0,
            addons_price: 0,
            quote_required: false,
            standalone: false,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingCalculator {
    config: PricingConfig,
}

impl PricingCalculator {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn quote(&self, selection: &PricingSelection) -> Result<PriceQuote, PricingError> {
        let (base_price, standalone) = match &selection.base {
            BaseSelection::None => (0, false),
            BaseSelection::Package(id) => {
                let package = self
                    .config
                    .package(id)
                    .ok_or_else(|| PricingError::UnknownPackage(id.clone()))?;
                (package.price, false)
            }
            BaseSelection::Standalone(id) => {
                let option = self
                    .config
                    .standalone_option(id)
                    .ok_or_else(|| PricingError::UnknownStandalone(id.clone()))?;
                (option.price, true)
            }
        };

        let mut addons_price = 0;
        let mut quote_required = false;
        for id in &selection.addons {
            let addon = self
                .config
                .addon(id)
                .ok_or_else(|| PricingError::UnknownAddon(id.clone()))?;
            match addon.price {
                AddonPrice::Fixed(price) => addons_price += price,
                AddonPrice::QuoteRequired => quote_required = true,
            }
        }

        Ok(PriceQuote {
            base_price,
            addons_price,
            quote_required,
            standalone,
        })
    }

    pub fn display(&self, selection: &PricingSelection) -> Result<PricingDisplay, PricingError> {
        self.quote(selection).map(|quote| PricingDisplay::from(&quote))
    }
}

/// Formats whole dollars with thousands separators: `3498` -> `"$3,498"`.
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> PricingCalculator {
        PricingCalculator::new(PricingConfig::default())
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(1000), "$1,000");
        assert_eq!(format_usd(3498), "$3,498");
        assert_eq!(format_usd(123456), "$123,456");
        assert_eq!(format_usd(1234567), "$1,234,567");
    }

    #[test]
    fn test_ceremony_with_cold_sparks() {
        let mut selection = PricingSelection::default();
        selection.select_package("ceremony");
        selection.set_addon("cold-sparks", true);
        let display = calculator().display(&selection).unwrap();
        assert_eq!(display.base_label, "Package Total:");
        assert_eq!(display.package_total, "$3,199");
        assert_eq!(display.addons_total, "$299");
        assert_eq!(display.final_total, "$3,498");
    }

    #[test]
    fn test_no_selection_is_zero() {
        let display = calculator().display(&PricingSelection::default()).unwrap();
        assert_eq!(display, PricingDisplay::default());
        assert_eq!(display.final_total, "$0");
    }

    #[test]
    fn test_standalone_then_package_clears_standalone() {
        let mut selection = PricingSelection::default();
        selection.select_standalone("dj-only");
        assert_eq!(calculator().display(&selection).unwrap().base_label, "DJ Services:");
        selection.select_package("industry");
        assert_eq!(selection.standalone(), None);
        assert_eq!(selection.package(), Some("industry"));
        let display = calculator().display(&selection).unwrap();
        assert_eq!(display.package_total, "$2,499");
        assert_eq!(display.final_total, "$2,499");
    }

    #[test]
    fn test_mutual_exclusion_over_sequences() {
        let mut selection = PricingSelection::default();
        let steps: [(bool, &str); 6] = [
            (true, "ultimate"),
            (false, "dj-only"),
            (false, "dj-only"),
            (true, "industry"),
            (true, "ceremony"),
            (false, "dj-only"),
        ];
        for (is_package, id) in steps {
            if is_package {
                selection.select_package(id);
                assert_eq!(selection.package(), Some(id));
                assert_eq!(selection.standalone(), None);
            } else {
                selection.select_standalone(id);
                assert_eq!(selection.standalone(), Some(id));
                assert_eq!(selection.package(), None);
            }
        }
    }

    #[test]
    fn test_final_equals_base_plus_addons_for_every_combination() {
        let calc = calculator();
        let config = calc.config().clone();
        let mut bases = vec![BaseSelection::None];
        bases.extend(config.packages.iter().map(|p| BaseSelection::Package(p.id.clone())));
        bases.extend(config.standalone.iter().map(|p| BaseSelection::Standalone(p.id.clone())));

        let addon_count = config.addons.len();
        for base in &bases {
            for mask in 0u32..(1 << addon_count) {
                let mut selection = PricingSelection {
                    base: base.clone(),
                    ..Default::default()
                };
                let mut expected_addons = 0;
                let mut expected_quote = false;
                for (i, addon) in config.addons.iter().enumerate() {
                    if mask & (1 << i) != 0 {
                        selection.set_addon(&addon.id, true);
                        match addon.price {
                            AddonPrice::Fixed(p) => expected_addons += p,
                            AddonPrice::QuoteRequired => expected_quote = true,
                        }
                    }
                }
                let quote = calc.quote(&selection).unwrap();
                let expected_base = match base {
                    BaseSelection::None => 0,
                    BaseSelection::Package(id) => config.package(id).unwrap().price,
                    BaseSelection::Standalone(id) => config.standalone_option(id).unwrap().price,
                };
                assert_eq!(quote.base_price, expected_base);
                assert_eq!(quote.addons_price, expected_addons);
                assert_eq!(quote.total(), expected_base + expected_addons);
                assert_eq!(quote.quote_required, expected_quote);

                let display = PricingDisplay::from(&quote);
                assert_eq!(display.final_total.ends_with(QUOTE_SUFFIX), expected_quote);
            }
        }
    }

    #[test]
    fn test_quote_addon_adds_suffix_and_no_amount() {
        let mut selection = PricingSelection::default();
        selection.set_addon("large-crowd-sound", true);
        let display = calculator().display(&selection).unwrap();
        assert_eq!(display.addons_total, "$0 + Quote");
        assert_eq!(display.final_total, "$0 + Quote");

        selection.select_package("ultimate");
        selection.set_addon("extra-hour", true);
        let display = calculator().display(&selection).unwrap();
        assert_eq!(display.addons_total, "$300 + Quote");
        assert_eq!(display.final_total, "$4,799 + Quote");

        selection.set_addon("large-crowd-sound", false);
        assert_eq!(calculator().display(&selection).unwrap().final_total, "$4,799");
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        let mut selection = PricingSelection::default();
        selection.select_package("platinum");
        assert_eq!(
            calculator().quote(&selection),
            Err(PricingError::UnknownPackage("platinum".to_string()))
        );
        selection.clear_base();
        selection.set_addon("fog-machine", true);
        assert_eq!(
            calculator().quote(&selection),
            Err(PricingError::UnknownAddon("fog-machine".to_string()))
        );
    }

    #[test]
    fn test_from_form() {
        let selection =
            PricingSelection::from_form(Some("ceremony"), Some(""), ["cold-sparks", "extra-hour"]).unwrap();
        assert_eq!(selection.package(), Some("ceremony"));
        let quote = calculator().quote(&selection).unwrap();
        assert_eq!(quote.total(), 3199 + 299 + 300);

        assert_eq!(
            PricingSelection::from_form(Some("ceremony"), Some("dj-only"), Vec::<String>::new()),
            Err(PricingError::ConflictingBase)
        );
    }
}
