/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{BBG_PREFIX, TCS_PREFIX};
use crate::model::responses::InstrumentShort;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Issuing system of a FIGI, recognised by its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FigiSystem {
    /// Bloomberg-issued identifier (`BBG...`)
    Bbg,
    /// Broker-issued identifier (`TCS...`)
    Tcs,
}

impl FigiSystem {
    /// Classifies an identifier by prefix; prefixes are case-sensitive
    #[must_use]
    pub fn of(id: &str) -> Option<Self> {
        [FigiSystem::Bbg, FigiSystem::Tcs]
            .into_iter()
            .find(|system| id.starts_with(system.prefix()))
    }

    /// The prefix that marks this system
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            FigiSystem::Bbg => BBG_PREFIX,
            FigiSystem::Tcs => TCS_PREFIX,
        }
    }
}

/// A user supplied instrument reference: either a FIGI or a ticker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentRef {
    /// Already resolved identifier
    Figi(String),
    /// Ticker symbol that needs a search to resolve
    Ticker(String),
}

impl InstrumentRef {
    /// Classifies `value`: anything with a known FIGI prefix is a FIGI
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match FigiSystem::of(value) {
            Some(_) => InstrumentRef::Figi(value.to_string()),
            None => InstrumentRef::Ticker(value.to_string()),
        }
    }

    /// Whether resolution can be skipped
    #[must_use]
    pub fn is_figi(&self) -> bool {
        matches!(self, InstrumentRef::Figi(_))
    }

    /// The raw identifier or ticker
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            InstrumentRef::Figi(s) | InstrumentRef::Ticker(s) => s,
        }
    }
}

impl From<&str> for InstrumentRef {
    fn from(value: &str) -> Self {
        InstrumentRef::parse(value)
    }
}

impl fmt::Display for InstrumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the FIGI for `ticker` out of search results
///
/// Only exact, case-insensitive ticker matches count. The first BBG match in
/// search order wins; otherwise the first TCS match. Matches with any other
/// prefix are ignored.
#[must_use]
pub fn pick_preferred_figi<'a>(
    instruments: &'a [InstrumentShort],
    ticker: &str,
) -> Option<&'a str> {
    let wanted = ticker.to_uppercase();
    let mut first_tcs: Option<&'a str> = None;

    for instrument in instruments {
        if instrument.ticker.to_uppercase() != wanted {
            continue;
        }
        match FigiSystem::of(&instrument.figi) {
            Some(FigiSystem::Bbg) => return Some(instrument.figi.as_str()),
            Some(FigiSystem::Tcs) if first_tcs.is_none() => {
                first_tcs = Some(instrument.figi.as_str());
            }
            _ => {}
        }
    }

    first_tcs
}
