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

//! Address types and their resolution against currency capabilities.

use std::str::FromStr;

use crate::Currency;

/// Address format produced for a public key.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(crate = "serde_crate"))]
pub enum AddressType {
    /// Pay-to-public key hash (P2PKH), Base58Check-encoded.
    #[display("legacy")]
    #[cfg_attr(feature = "serde", serde(rename = "legacy"))]
    Legacy,

    /// Witness v0 public key hash nested in P2SH (P2SH-P2WPKH).
    #[display("segwit")]
    #[cfg_attr(feature = "serde", serde(rename = "segwit"))]
    SegwitWrapped,

    /// Bech32-encoded witness v0 public key hash (P2WPKH).
    #[default]
    #[display("native")]
    #[cfg_attr(feature = "serde", serde(rename = "native"))]
    NativeSegwit,

    /// Bitcoin Cash CashAddr-encoded public key hash.
    #[display("cashaddr")]
    #[cfg_attr(feature = "serde", serde(rename = "cashaddr"))]
    CashAddr,
}

impl AddressType {
    /// Stable label used as a key in generated address sets.
    pub const fn label(self) -> &'static str {
        match self {
            AddressType::Legacy => "legacy",
            AddressType::SegwitWrapped => "segwit",
            AddressType::NativeSegwit => "native",
            AddressType::CashAddr => "cashaddr",
        }
    }

    /// Parses address type, defaulting to [`AddressType::NativeSegwit`] for
    /// unrecognized strings.
    pub fn parse_or_default(s: &str) -> Self {
        AddressType::from_str(s).unwrap_or(AddressType::NativeSegwit)
    }

    /// Effective address type for the currency; see [`resolve`].
    pub fn resolve_for(self, currency: Currency) -> Self { resolve(currency, self) }
}

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(
    "unrecognized address type '{0}'; must be one of `legacy`, `segwit`, `native-segwit` or \
     `cashaddr`"
)]
pub struct AddressTypeParseError(pub String);

impl FromStr for AddressType {
    type Err = AddressTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "legacy" | "p2pkh" => AddressType::Legacy,
            "segwit" | "p2sh-segwit" | "p2sh-p2wpkh" => AddressType::SegwitWrapped,
            "native" | "native-segwit" | "nativesegwit" | "p2wpkh" => AddressType::NativeSegwit,
            "cashaddr" => AddressType::CashAddr,
            _ => return Err(AddressTypeParseError(s.to_owned())),
        })
    }
}

/// Maps a requested address type onto the one the currency is able to
/// produce.
///
/// Dash has no native SegWit and falls back to legacy addresses; Bitcoin Cash
/// has no SegWit at all, so anything but legacy becomes CashAddr. Other
/// currencies get the requested type unchanged.
pub fn resolve(currency: Currency, requested: AddressType) -> AddressType {
    match (currency, requested) {
        (Currency::Dash, AddressType::NativeSegwit) => AddressType::Legacy,
        (Currency::Bch, AddressType::Legacy | AddressType::CashAddr) => requested,
        (Currency::Bch, _) => AddressType::CashAddr,
        (Currency::Btc | Currency::Ltc | Currency::Dash, _) => requested,
    }
}

/// Address string together with its effective type.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "camelCase")
)]
#[display("{address_type}:{address}")]
pub struct AddressResult {
    pub address: String,
    pub address_type: AddressType,
}
