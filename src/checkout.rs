//! Checkout Pricing
//!
//! Quantity, extras and promo code over a single package.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{CommandError, CommandResult};
use crate::models::{CheckoutPackage, Extra, OrderSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutState {
    pub quantity: u32,
    /// Extra ids in the order they were picked
    pub selected_extras: Vec<u32>,
    pub promo_applied: bool,
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self { quantity: 1, selected_extras: Vec::new(), promo_applied: false }
    }
}

/// Price breakdown shown in the order summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub extras_total: f64,
    pub service_fee: f64,
    pub discount: f64,
    pub total: f64,
}

impl CheckoutState {
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.set_quantity(self.quantity.saturating_sub(1));
    }

    pub fn is_selected(&self, extra_id: u32) -> bool {
        self.selected_extras.contains(&extra_id)
    }

    pub fn toggle_extra(&mut self, extra_id: u32) {
        if self.is_selected(extra_id) {
            self.selected_extras.retain(|id| *id != extra_id);
        } else {
            self.selected_extras.push(extra_id);
        }
    }

    /// Match the code case-insensitively against the configured promo
    pub fn apply_promo_code(&mut self, code: &str, config: &AppConfig) -> CommandResult<()> {
        let code = code.trim();
        if !code.is_empty() && code.eq_ignore_ascii_case(&config.promo_code) {
            self.promo_applied = true;
            Ok(())
        } else {
            Err(CommandError::InvalidPromoCode(code.to_string()))
        }
    }

    fn chosen_extras<'a>(&self, extras: &'a [Extra]) -> Vec<&'a Extra> {
        self.selected_extras
            .iter()
            .filter_map(|id| extras.iter().find(|e| e.id == *id))
            .collect()
    }

    pub fn breakdown(&self, package: &CheckoutPackage, extras: &[Extra], config: &AppConfig) -> PriceBreakdown {
        let subtotal = package.price * f64::from(self.quantity);
        let extras_total: f64 = self.chosen_extras(extras).iter().map(|e| e.price).sum();
        let discount = if self.promo_applied { config.promo_discount } else { 0.0 };
        PriceBreakdown {
            subtotal,
            extras_total,
            service_fee: config.service_fee,
            discount,
            total: subtotal + extras_total + config.service_fee - discount,
        }
    }

    /// Freeze the checkout into the summary handed to payment
    pub fn summary(&self, package: &CheckoutPackage, extras: &[Extra], config: &AppConfig) -> OrderSummary {
        let price = self.breakdown(package, extras, config);
        let chosen = self.chosen_extras(extras);
        OrderSummary {
            gig_title: package.gig_title.clone(),
            seller_name: package.seller_name.clone(),
            package_name: package.package_name.clone(),
            quantity: self.quantity,
            package_price: package.price,
            extras: chosen.iter().map(|e| (*e).clone()).collect(),
            service_fee: price.service_fee,
            discount: price.discount,
            total: price.total,
            delivery_time: chosen
                .iter()
                .find_map(|e| e.delivery_override.clone())
                .unwrap_or_else(|| package.delivery_time.clone()),
            revisions: package.revisions + chosen.iter().map(|e| e.extra_revisions).sum::<u32>(),
        }
    }
}
