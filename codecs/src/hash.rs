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

use amplify::{Bytes20, Wrapper};
use bitcoin_hashes::{hash160, sha256d, Hash};

/// HASH160 digest (RIPEMD-160 of SHA-256) of a public key or a script.
#[derive(Wrapper, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Debug, Display, From)]
#[wrapper(RangeOps, Hex, FromStr)]
#[display(LowerHex)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", transparent)
)]
pub struct KeyHash(
    #[from]
    #[from([u8; 20])]
    Bytes20,
);

impl AsRef<[u8]> for KeyHash {
    fn as_ref(&self) -> &[u8] { self.0.as_ref() }
}

impl From<KeyHash> for [u8; 20] {
    fn from(value: KeyHash) -> Self { value.0.into_inner() }
}

impl KeyHash {
    pub fn to_byte_array(self) -> [u8; 20] { self.0.into_inner() }
}

/// Computes HASH160: SHA-256 followed by RIPEMD-160.
pub fn hash160(data: impl AsRef<[u8]>) -> KeyHash {
    KeyHash::from(hash160::Hash::hash(data.as_ref()).to_byte_array())
}

/// First four bytes of the double SHA-256 hash, used as Base58Check checksum.
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let hash = sha256d::Hash::hash(data).to_byte_array();
    [hash[0], hash[1], hash[2], hash[3]]
}
