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

//! Network parameters of Bitcoin-family chains and derivation of addresses
//! from public keys.

#[macro_use]
extern crate amplify;
#[macro_use]
extern crate log;
#[cfg(feature = "serde")]
#[macro_use]
extern crate serde_crate as serde;

mod network;
mod currency;
pub mod params;
mod address;
mod derive;

pub use address::{resolve, AddressResult, AddressType, AddressTypeParseError};
pub use currency::{is_bitcoin_style, Currency, UnknownCurrency};
pub use derive::{derive, derive_for, witness_v0_script, DeriveError};
pub use network::{Network, UnknownNetwork};
pub use params::{lookup, lookup_str, CurrencyProfile, NetworkParams};
