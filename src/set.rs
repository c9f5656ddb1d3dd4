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

/// Addresses of a single generation request, one per address type, in the
/// order they were generated.
#[derive(Wrapper, Clone, Eq, PartialEq, Debug, Default, From)]
#[wrapper(Deref)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct AddressSet(#[from] IndexMap<AddressType, String>);

impl AddressSet {
    pub fn new() -> Self { Self::default() }

    /// Adds address of the given type, returning the previously stored
    /// address of that type, if any.
    pub fn insert(&mut self, address_type: AddressType, address: String) -> Option<String> {
        self.0.insert(address_type, address)
    }

    pub fn address(&self, address_type: AddressType) -> Option<&str> {
        self.0.get(&address_type).map(String::as_str)
    }

    pub fn address_types(&self) -> impl Iterator<Item = AddressType> + '_ {
        self.0.keys().copied()
    }

    /// Labels of the address types present in the set, in generation order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.address_types().map(AddressType::label).collect()
    }
}

impl FromIterator<(AddressType, String)> for AddressSet {
    fn from_iter<T: IntoIterator<Item = (AddressType, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AddressSet {
    type Item = (AddressType, String);
    type IntoIter = indexmap::map::IntoIter<AddressType, String>;

    fn into_iter(self) -> Self::IntoIter { self.into_inner().into_iter() }
}
