//! Currency Display Helpers
//!
//! Display-only formatting for quote amounts. Composition math stays in
//! plain f64; rounding (half-up, per-currency decimal places) is applied
//! only here, when an amount is rendered.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Supported quote currencies
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Idr,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Idr => "IDR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Idr => "Rp",
        }
    }

    /// Decimal places shown for this currency (IDR has no minor unit)
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::Usd => 2,
            Currency::Idr => 0,
        }
    }

    /// Render an amount with symbol and per-currency precision
    /// (half-up rounding)
    pub fn format_amount(&self, amount: f64) -> String {
        let places = self.decimal_places();
        let rounded = Decimal::from_f64(amount)
            .unwrap_or_default()
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        format!(
            "{}{:.prec$}",
            self.symbol(),
            rounded,
            prec = places as usize
        )
    }
}
