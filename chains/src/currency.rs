// Address generation for Bitcoin-family currencies.
//
// SPDX-License-Identifier: Apache-2.0
//
// Written in 2020-2024 by
//     Dr Maxim Orlovsky <orlovsky@lnp-bp.org>
//
// Copyright (C) 2020-2024 LNP/BP Standards Association. All rights reserved.
// Copyright (C) 2020-2024 Dr Maxim Orlovsky. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::str::FromStr;

use crate::params::{CurrencyProfile, BCH_PROFILE, BTC_PROFILE, DASH_PROFILE, LTC_PROFILE};

/// Bitcoin-family currency.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
#[display(lowercase)]
pub enum Currency {
    /// Bitcoin
    Btc,

    /// Litecoin
    Ltc,

    /// Bitcoin Cash
    Bch,

    /// Dash
    Dash,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Btc, Currency::Bch, Currency::Ltc, Currency::Dash];

    pub fn profile(self) -> &'static CurrencyProfile {
        match self {
            Currency::Btc => &BTC_PROFILE,
            Currency::Ltc => &LTC_PROFILE,
            Currency::Bch => &BCH_PROFILE,
            Currency::Dash => &DASH_PROFILE,
        }
    }

    /// Resolves a currency code case-insensitively. Codes of currencies which
    /// are not Bitcoin-family resolve to Bitcoin.
    pub fn resolve(code: &str) -> Self {
        Currency::from_str(code).unwrap_or_else(|err| {
            warn!("{err}; falling back to btc network parameters");
            Currency::Btc
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display("unknown Bitcoin-family currency '{0}'")]
pub struct UnknownCurrency(pub String);

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "btc" => Currency::Btc,
            "ltc" => Currency::Ltc,
            "bch" => Currency::Bch,
            "dash" => Currency::Dash,
            _ => return Err(UnknownCurrency(s.to_owned())),
        })
    }
}

/// Detects whether addresses for the currency code are Bitcoin-style
/// addresses handled by this library.
pub fn is_bitcoin_style(code: &str) -> bool { Currency::from_str(code).is_ok() }

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn case_insensitive() {
        assert_eq!(Currency::from_str("BCH"), Ok(Currency::Bch));
        assert_eq!(Currency::from_str("Dash"), Ok(Currency::Dash));
        assert_eq!(Currency::Ltc.to_string(), "ltc");
    }

    #[test]
    fn unknown_resolves_to_btc() {
        assert_eq!(Currency::from_str("eth"), Err(UnknownCurrency(s!("eth"))));
        assert_eq!(Currency::resolve("eth"), Currency::Btc);
        assert_eq!(Currency::resolve("LTC"), Currency::Ltc);
    }

    #[test]
    fn bitcoin_style() {
        for code in ["btc", "BCH", "ltc", "dash"] {
            assert!(is_bitcoin_style(code));
        }
        for code in ["eth", "xrp", "xlm", "fil", "usdc"] {
            assert!(!is_bitcoin_style(code));
        }
    }

    #[test]
    fn profiles_match_currency() {
        for currency in Currency::ALL {
            assert_eq!(currency.profile().currency, currency);
        }
    }
}
