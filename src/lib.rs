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

//! Generation of addresses for Bitcoin-family currencies: Bitcoin, Litecoin,
//! Bitcoin Cash and Dash.
//!
//! For a currency and a network the [`Generator`] produces a set of
//! addresses, one for each address type supported by the currency, taking a
//! fresh public key from a [`KeySource`] for every address. Results of
//! repeated generation are collated into per-network, per-type address lists
//! ready for serialization.
//!
//! ```
//! # #[cfg(feature = "rand")] {
//! let collated = coinaddr::generate("ltc", "mainnet", 2).unwrap();
//! let legacy = collated.addresses("mainnet", coinaddr::AddressType::Legacy);
//! assert_eq!(legacy.len(), 2);
//! assert!(legacy.iter().all(|addr| addr.starts_with('L')));
//! # }
//! ```

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate log;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde_crate as serde;

mod keys;
mod set;
mod collate;
mod batch;
mod generator;

pub use batch::{Batch, BatchResult, DEFAULT_NETWORKS};
pub use chains::{
    derive, derive_for, is_bitcoin_style, lookup, lookup_str, params, resolve, AddressResult,
    AddressType, AddressTypeParseError, Currency, CurrencyProfile, DeriveError, Network,
    NetworkParams, UnknownCurrency, UnknownNetwork,
};
pub use codecs::{base58, cashaddr, hash160, segwit, KeyHash};
pub use collate::{collate, CollatedAddressSet};
pub use generator::{Error, Generator};
#[cfg(feature = "rand")]
pub use keys::RandomKeys;
pub use keys::{FnKeys, KeySource};
pub use secp256k1;
pub use set::AddressSet;

/// Generates one address set for the currency code and network name using
/// random keys.
#[cfg(feature = "rand")]
pub fn generate_set(
    code: &str,
    network: &str,
) -> Result<AddressSet, Error<std::convert::Infallible>> {
    Generator::random().generate_set_str(code, network)
}

/// Generates `count` address sets for the currency code and network name
/// using random keys, and collates them.
#[cfg(feature = "rand")]
pub fn generate(
    code: &str,
    network: &str,
    count: usize,
) -> Result<CollatedAddressSet, Error<std::convert::Infallible>> {
    Generator::random().generate(code, network, count)
}
