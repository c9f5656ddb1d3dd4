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

/// Network for which addresses are generated.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
#[display(lowercase)]
pub enum Network {
    /// Main production network
    Mainnet,

    /// Test network; every network other than mainnet (testnet, devnet,
    /// regtest and alike) uses its parameters.
    Testnet,
}

impl Network {
    /// Detects whether the network is a kind of test network.
    pub fn is_testnet(self) -> bool { self != Self::Mainnet }

    /// Resolves a network name, treating every name other than `mainnet` and
    /// `testnet` as a test network.
    pub fn resolve(name: &str) -> Self {
        Network::from_str(name).unwrap_or_else(|err| {
            debug!("{err}; using testnet parameters");
            Network::Testnet
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display("unknown network '{0}'")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "mainnet" => Network::Mainnet,
            "testnet" => Network::Testnet,
            _ => return Err(UnknownNetwork(s.to_owned())),
        })
    }
}
