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

use codecs::{base58, cashaddr, hash160, segwit, CashAddrError, KeyHash, PayloadKind, SegwitError};
use secp256k1::PublicKey;

use crate::{params, AddressResult, AddressType, Currency, Network, NetworkParams};

/// Errors deriving addresses. Any of them indicates inconsistency between the
/// address type resolution and the network parameter table, not a problem
/// with the input key.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum DeriveError {
    /// network parameters with P2PKH version {1:#04x} can't be used for {0} addresses.
    UnsupportedNetworkParams(AddressType, u8),

    #[display(inner)]
    #[from]
    Base58(base58::Error),

    #[display(inner)]
    #[from]
    Segwit(SegwitError),

    #[display(inner)]
    #[from]
    CashAddr(CashAddrError),
}

/// Witness v0 program `OP_0 PUSH20 <key hash>`, used as a P2SH redeem script
/// for wrapped SegWit addresses.
pub fn witness_v0_script(key_hash: KeyHash) -> [u8; 22] {
    let mut script = [0u8; 22];
    script[0] = 0x00;
    script[1] = 0x14;
    script[2..].copy_from_slice(key_hash.as_ref());
    script
}

/// Derives an address of the given type from a compressed public key.
pub fn derive(
    public_key: &PublicKey,
    params: &NetworkParams,
    address_type: AddressType,
) -> Result<String, DeriveError> {
    let key_hash = hash160(public_key.serialize());
    Ok(match address_type {
        AddressType::Legacy => base58::encode_check_versioned(params.pubkey_hash, key_hash.as_ref()),
        AddressType::SegwitWrapped => {
            let script_hash = hash160(witness_v0_script(key_hash));
            base58::encode_check_versioned(params.script_hash, script_hash.as_ref())
        }
        AddressType::NativeSegwit => {
            let hrp = params
                .bech32_hrp
                .ok_or(DeriveError::UnsupportedNetworkParams(address_type, params.pubkey_hash))?;
            segwit::encode_v0(hrp, key_hash.as_ref())?
        }
        AddressType::CashAddr => {
            let prefix = params
                .cashaddr_prefix
                .ok_or(DeriveError::UnsupportedNetworkParams(address_type, params.pubkey_hash))?;
            // payload is taken from the decoded legacy address
            let legacy = derive(public_key, params, AddressType::Legacy)?;
            let (_, payload) = base58::decode_check_versioned(&legacy)?;
            cashaddr::encode(prefix, PayloadKind::P2pkh, &payload)?
        }
    })
}

/// Resolves the requested address type for the currency and derives the
/// address using the currency parameters for the network.
pub fn derive_for(
    currency: Currency,
    network: Network,
    requested: AddressType,
    public_key: &PublicKey,
) -> Result<AddressResult, DeriveError> {
    let address_type = requested.resolve_for(currency);
    let address = derive(public_key, params::lookup(currency, network), address_type)?;
    trace!("derived {currency} {network} {address_type} address {address}");
    Ok(AddressResult {
        address,
        address_type,
    })
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use secp256k1::{SecretKey, SECP256K1};

    use super::*;
    use crate::params::*;

    // secp256k1 generator point, i.e. public key of the secret key 1
    const G: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn g() -> PublicKey { PublicKey::from_str(G).unwrap() }

    #[test]
    fn bitcoin_vectors() {
        assert_eq!(
            derive(&g(), &BITCOIN, AddressType::Legacy).unwrap(),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
        assert_eq!(
            derive(&g(), &BITCOIN, AddressType::SegwitWrapped).unwrap(),
            "3JvL6Ymt8MVWiCNHC7oWU6nLeHNJKLZGLN"
        );
        assert_eq!(
            derive(&g(), &BITCOIN, AddressType::NativeSegwit).unwrap(),
            "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4"
        );
        assert_eq!(
            derive(&g(), &BITCOIN_TESTNET, AddressType::Legacy).unwrap(),
            "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r"
        );
        assert_eq!(
            derive(&g(), &BITCOIN_TESTNET, AddressType::SegwitWrapped).unwrap(),
            "2NAUYAHhujozruyzpsFRP63mbrdaU5wnEpN"
        );
    }

    #[test]
    fn litecoin_vectors() {
        assert_eq!(
            derive(&g(), &LITECOIN, AddressType::Legacy).unwrap(),
            "LVuDpNCSSj6pQ7t9Pv6d6sUkLKoqDEVUnJ"
        );
        assert_eq!(
            derive(&g(), &LITECOIN, AddressType::SegwitWrapped).unwrap(),
            "MR8UQSBr5ULwWheBHznrHk2jxyxkHQu8vB"
        );
        assert_eq!(
            derive(&g(), &LITECOIN, AddressType::NativeSegwit).unwrap(),
            "ltc1qw508d6qejxtdg4y5r3zarvary0c5xw7kgmn4n9"
        );
    }

    #[test]
    fn dash_vectors() {
        assert_eq!(
            derive(&g(), &DASH, AddressType::Legacy).unwrap(),
            "XmN7PQYWKn5MJFna5fRYgP6mxT2F7xpekE"
        );
        assert_eq!(
            derive(&g(), &DASH_TESTNET, AddressType::Legacy).unwrap(),
            "yWziQMcwmKjRdzi7eWjwiQX8EjWcd6dSg6"
        );
    }

    #[test]
    fn cashaddr_vectors() {
        assert_eq!(
            derive(&g(), &BITCOIN_CASH, AddressType::CashAddr).unwrap(),
            "bitcoincash:qp63uahgrxged4z5jswyt5dn5v3lzsem6cy4spdc2h"
        );
        assert_eq!(
            derive(&g(), &BITCOIN_CASH_TESTNET, AddressType::CashAddr).unwrap(),
            "bchtest:qp63uahgrxged4z5jswyt5dn5v3lzsem6cq85x00dt"
        );
    }

    #[test]
    fn invariant_violations() {
        assert_eq!(
            derive(&g(), &DASH, AddressType::NativeSegwit),
            Err(DeriveError::UnsupportedNetworkParams(AddressType::NativeSegwit, 0x4c))
        );
        assert_eq!(
            derive(&g(), &BITCOIN, AddressType::CashAddr),
            Err(DeriveError::UnsupportedNetworkParams(AddressType::CashAddr, 0x00))
        );
    }

    #[test]
    fn resolved_derivation() {
        let res = derive_for(Currency::Dash, Network::Mainnet, AddressType::NativeSegwit, &g())
            .unwrap();
        assert_eq!(res.address_type, AddressType::Legacy);
        assert_eq!(res.address, "XmN7PQYWKn5MJFna5fRYgP6mxT2F7xpekE");

        let res = derive_for(Currency::Bch, Network::Testnet, AddressType::SegwitWrapped, &g())
            .unwrap();
        assert_eq!(res.address_type, AddressType::CashAddr);
        assert!(res.address.starts_with("bchtest:q"));
    }

    #[test]
    fn idempotent() {
        let pk = PublicKey::from_secret_key(SECP256K1, &SecretKey::from_slice(&[0x42; 32]).unwrap());
        for currency in Currency::ALL {
            for ty in currency.profile().address_types {
                let params = lookup(currency, Network::Mainnet);
                assert_eq!(derive(&pk, params, *ty), derive(&pk, params, *ty));
            }
        }
    }
}
