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
use chains::AddressType;
use indexmap::IndexMap;

use crate::AddressSet;

/// Addresses from repeated generation requests, grouped per network and per
/// address type. Each sequence keeps the order of the requests.
#[derive(Wrapper, Clone, Eq, PartialEq, Debug, Default, From)]
#[wrapper(Deref)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct CollatedAddressSet(#[from] IndexMap<String, IndexMap<AddressType, Vec<String>>>);

impl CollatedAddressSet {
    pub fn new() -> Self { Self::default() }

    /// Registers network even if no address sets were produced for it.
    pub fn add_network(&mut self, network: impl Into<String>) {
        self.0.entry(network.into()).or_default();
    }

    /// Appends addresses from the set to the per-type sequences of the
    /// network, creating the sequences on first sight.
    pub fn push(&mut self, network: impl Into<String>, set: AddressSet) {
        let per_type = self.0.entry(network.into()).or_default();
        for (address_type, address) in set {
            per_type.entry(address_type).or_default().push(address);
        }
    }

    /// Addresses of the given type generated for the network.
    pub fn addresses(&self, network: &str, address_type: AddressType) -> &[String] {
        self.0
            .get(network)
            .and_then(|per_type| per_type.get(&address_type))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Folds per-network lists of address sets into a [`CollatedAddressSet`].
/// Neither networks nor addresses are reordered or deduplicated.
///
/// A network label met more than once keeps a single entry: addresses of the
/// later sets are appended after the earlier ones rather than replacing them.
pub fn collate<N, I>(per_network: I) -> CollatedAddressSet
where
    N: Into<String>,
    I: IntoIterator<Item = (N, Vec<AddressSet>)>,
{
    let mut collated = CollatedAddressSet::new();
    for (network, sets) in per_network {
        let network = network.into();
        // repeated labels merge into the existing entry
        collated.add_network(network.clone());
        for set in sets {
            collated.push(network.clone(), set);
        }
    }
    collated
}
