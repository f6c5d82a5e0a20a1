/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::NANO_PER_HUNDREDTH;
use crate::presentation::serialization::{i64_as_string, string_or_i32, string_or_i64};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Fixed-point price as transported by the API
///
/// The value is `units + nano / 1e9`. Both parts carry the sign of the value.
/// Fields omitted by the gateway default to zero.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Quotation {
    /// Whole units
    #[serde(
        default,
        deserialize_with = "string_or_i64",
        serialize_with = "i64_as_string"
    )]
    pub units: i64,
    /// Fractional part in billionths
    #[serde(default, deserialize_with = "string_or_i32")]
    pub nano: i32,
}

impl Quotation {
    /// Creates a quotation from its two parts
    #[must_use]
    pub const fn new(units: i64, nano: i32) -> Self {
        Self { units, nano }
    }

    /// `true` when both parts are zero, which the API uses for "no trades"
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nano == 0
    }

    /// Converts to a float, truncating the fraction toward zero to hundredths
    ///
    /// `100 + 0.999999999` becomes `100.99`, never `101.00`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let hundredths =
            i128::from(self.units) * 100 + i128::from(i64::from(self.nano) / NANO_PER_HUNDREDTH);
        hundredths as f64 / 100.0
    }
}

impl From<Quotation> for f64 {
    fn from(value: Quotation) -> Self {
        value.to_f64()
    }
}

impl From<&Quotation> for f64 {
    fn from(value: &Quotation) -> Self {
        value.to_f64()
    }
}
