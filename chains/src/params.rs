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

//! Canonical table of network parameters for the supported chains.

use crate::{AddressType, Currency, Network};

/// Version bytes and prefixes used by a chain on a given network.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NetworkParams {
    /// Base58Check version of P2PKH addresses.
    pub pubkey_hash: u8,
    /// Base58Check version of P2SH addresses.
    pub script_hash: u8,
    /// Base58Check version of WIF-encoded private keys.
    pub wif: u8,
    /// BIP-32 extended public key version.
    pub bip32_public: u32,
    /// BIP-32 extended private key version.
    pub bip32_private: u32,
    pub message_prefix: &'static str,
    /// Bech32 human-readable part; `None` for chains without SegWit.
    pub bech32_hrp: Option<&'static str>,
    /// CashAddr prefix; present only for Bitcoin Cash.
    pub cashaddr_prefix: Option<&'static str>,
}

const BITCOIN_MESSAGE_PREFIX: &str = "\x18Bitcoin Signed Message:\n";

pub const BITCOIN: NetworkParams = NetworkParams {
    pubkey_hash: 0x00,
    script_hash: 0x05,
    wif: 0x80,
    bip32_public: 0x0488b21e,
    bip32_private: 0x0488ade4,
    message_prefix: BITCOIN_MESSAGE_PREFIX,
    bech32_hrp: Some("bc"),
    cashaddr_prefix: None,
};

pub const BITCOIN_TESTNET: NetworkParams = NetworkParams {
    pubkey_hash: 0x6f,
    script_hash: 0xc4,
    wif: 0xef,
    bip32_public: 0x043587cf,
    bip32_private: 0x04358394,
    message_prefix: BITCOIN_MESSAGE_PREFIX,
    bech32_hrp: Some("tb"),
    cashaddr_prefix: None,
};

pub const LITECOIN: NetworkParams = NetworkParams {
    pubkey_hash: 0x30,
    script_hash: 0x32,
    wif: 0xb0,
    bip32_public: 0x019da462,
    bip32_private: 0x019d9cfe,
    message_prefix: "\x19Litecoin Signed Message:\n",
    bech32_hrp: Some("ltc"),
    cashaddr_prefix: None,
};

// Litecoin testnet addresses are generated with Bitcoin testnet parameters.
pub const LITECOIN_TESTNET: NetworkParams = BITCOIN_TESTNET;

pub const BITCOIN_CASH: NetworkParams = NetworkParams {
    pubkey_hash: 0x00,
    script_hash: 0x05,
    wif: 0x80,
    bip32_public: 0x0488b21e,
    bip32_private: 0x0488ade4,
    message_prefix: BITCOIN_MESSAGE_PREFIX,
    bech32_hrp: None,
    cashaddr_prefix: Some("bitcoincash"),
};

pub const BITCOIN_CASH_TESTNET: NetworkParams = NetworkParams {
    pubkey_hash: 0x6f,
    script_hash: 0xc4,
    wif: 0xef,
    cashaddr_prefix: Some("bchtest"),
    ..BITCOIN_CASH
};

pub const DASH: NetworkParams = NetworkParams {
    pubkey_hash: 0x4c,
    script_hash: 0x10,
    wif: 0xcc,
    bip32_public: 0x0488b21e,
    bip32_private: 0x0488ade4,
    message_prefix: "\x19DarkCoin Signed Message:\n",
    bech32_hrp: None,
    cashaddr_prefix: None,
};

pub const DASH_TESTNET: NetworkParams = NetworkParams {
    pubkey_hash: 0x8c,
    script_hash: 0x13,
    wif: 0xef,
    ..DASH
};

/// Currency together with the address types it supports and its per-network
/// parameters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CurrencyProfile {
    pub currency: Currency,
    /// Address types generated for the currency, in generation order.
    pub address_types: &'static [AddressType],
    pub mainnet: NetworkParams,
    pub testnet: Option<NetworkParams>,
}

impl CurrencyProfile {
    /// Parameters for the network. Currencies without a test network entry
    /// use their mainnet parameters.
    pub fn params(&self, network: Network) -> &NetworkParams {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Testnet => self.testnet.as_ref().unwrap_or(&self.mainnet),
        }
    }

    pub fn supports(&self, address_type: AddressType) -> bool {
        self.address_types.contains(&address_type)
    }
}

const SEGWIT_TYPES: &[AddressType] =
    &[AddressType::Legacy, AddressType::SegwitWrapped, AddressType::NativeSegwit];

pub static BTC_PROFILE: CurrencyProfile = CurrencyProfile {
    currency: Currency::Btc,
    address_types: SEGWIT_TYPES,
    mainnet: BITCOIN,
    testnet: Some(BITCOIN_TESTNET),
};

pub static LTC_PROFILE: CurrencyProfile = CurrencyProfile {
    currency: Currency::Ltc,
    address_types: SEGWIT_TYPES,
    mainnet: LITECOIN,
    testnet: Some(LITECOIN_TESTNET),
};

pub static BCH_PROFILE: CurrencyProfile = CurrencyProfile {
    currency: Currency::Bch,
    address_types: &[AddressType::Legacy, AddressType::CashAddr],
    mainnet: BITCOIN_CASH,
    testnet: Some(BITCOIN_CASH_TESTNET),
};

pub static DASH_PROFILE: CurrencyProfile = CurrencyProfile {
    currency: Currency::Dash,
    address_types: &[AddressType::Legacy],
    mainnet: DASH,
    testnet: Some(DASH_TESTNET),
};

/// Looks up parameters of a currency on a network. Never fails.
pub fn lookup(currency: Currency, network: Network) -> &'static NetworkParams {
    currency.profile().params(network)
}

/// Looks up parameters by currency code and network name. Unknown currencies
/// resolve to Bitcoin, unknown networks to the test network.
pub fn lookup_str(code: &str, network: &str) -> &'static NetworkParams {
    lookup(Currency::resolve(code), Network::resolve(network))
}

#[cfg(test)]
mod test {
    use super::*;

    fn versions(params: &NetworkParams) -> (u8, u8, u8, Option<&str>) {
        (params.pubkey_hash, params.script_hash, params.wif, params.bech32_hrp)
    }

    #[test]
    fn table_values() {
        use Currency::*;
        use Network::*;

        assert_eq!(versions(lookup(Btc, Mainnet)), (0x00, 0x05, 0x80, Some("bc")));
        assert_eq!(versions(lookup(Btc, Testnet)), (0x6f, 0xc4, 0xef, Some("tb")));
        assert_eq!(versions(lookup(Ltc, Mainnet)), (0x30, 0x32, 0xb0, Some("ltc")));
        assert_eq!(versions(lookup(Ltc, Testnet)), (0x6f, 0xc4, 0xef, Some("tb")));
        assert_eq!(versions(lookup(Bch, Mainnet)), (0x00, 0x05, 0x80, None));
        assert_eq!(versions(lookup(Bch, Testnet)), (0x6f, 0xc4, 0xef, None));
        assert_eq!(versions(lookup(Dash, Mainnet)), (0x4c, 0x10, 0xcc, None));
        assert_eq!(versions(lookup(Dash, Testnet)), (0x8c, 0x13, 0xef, None));

        assert_eq!(lookup(Bch, Mainnet).cashaddr_prefix, Some("bitcoincash"));
        assert_eq!(lookup(Bch, Testnet).cashaddr_prefix, Some("bchtest"));
        assert_eq!(lookup(Ltc, Mainnet).bip32_public, 0x019da462);
        assert_eq!(lookup(Ltc, Mainnet).bip32_private, 0x019d9cfe);
        assert_eq!(lookup(Dash, Testnet).message_prefix, "\x19DarkCoin Signed Message:\n");
        assert_eq!(lookup(Bch, Testnet).bip32_public, 0x0488b21e);
    }

    #[test]
    fn string_fallbacks() {
        assert_eq!(lookup_str("LTC", "mainnet"), &LITECOIN);
        assert_eq!(lookup_str("doge", "mainnet"), &BITCOIN);
        assert_eq!(lookup_str("dash", "devnet"), &DASH_TESTNET);
        assert_eq!(lookup_str("xyz", "regtest"), &BITCOIN_TESTNET);
    }

    #[test]
    fn missing_testnet_uses_mainnet() {
        let profile = CurrencyProfile {
            testnet: None,
            ..DASH_PROFILE
        };
        assert_eq!(profile.params(Network::Testnet), &DASH);
    }

    #[test]
    fn supported_types() {
        assert!(BCH_PROFILE.supports(AddressType::CashAddr));
        assert!(!BCH_PROFILE.supports(AddressType::SegwitWrapped));
        assert!(!DASH_PROFILE.supports(AddressType::NativeSegwit));
        assert!(LTC_PROFILE.supports(AddressType::NativeSegwit));
    }
}
