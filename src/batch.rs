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

use amplify::Wrapper;
use chains::Currency;
use indexmap::IndexMap;

use crate::CollatedAddressSet;

pub const DEFAULT_NETWORKS: [&str; 3] = ["mainnet", "testnet", "devnet"];

/// Request for generating addresses for several currencies and networks.
///
/// Currency codes and network names are kept as given: they become keys of
/// the produced [`BatchResult`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", default, rename_all = "camelCase")
)]
pub struct Batch {
    pub currencies: Vec<String>,
    pub networks: Vec<String>,
    /// Number of address sets generated per currency and network.
    pub size: usize,
}

impl Default for Batch {
    fn default() -> Self {
        Batch {
            currencies: Currency::ALL.iter().map(Currency::to_string).collect(),
            networks: DEFAULT_NETWORKS.iter().map(|s| s.to_string()).collect(),
            size: 1,
        }
    }
}

impl Batch {
    pub fn new(
        currencies: impl IntoIterator<Item = impl ToString>,
        networks: impl IntoIterator<Item = impl ToString>,
        size: usize,
    ) -> Self {
        Batch {
            currencies: currencies.into_iter().map(|c| c.to_string()).collect(),
            networks: networks.into_iter().map(|n| n.to_string()).collect(),
            size,
        }
    }
}

/// Collated addresses per currency code, in the order of the request.
#[derive(Wrapper, Clone, Eq, PartialEq, Debug, Default, From)]
#[wrapper(Deref)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct BatchResult(#[from] IndexMap<String, CollatedAddressSet>);

impl BatchResult {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, code: String, collated: CollatedAddressSet) {
        self.0.insert(code, collated);
    }

    pub fn into_map(self) -> IndexMap<String, CollatedAddressSet> { self.into_inner() }
}
