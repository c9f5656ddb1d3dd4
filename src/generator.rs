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

use chains::{Currency, DeriveError, Network};

use crate::{collate, AddressSet, Batch, BatchResult, CollatedAddressSet, KeySource};

/// Errors generating addresses.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum Error<E: std::error::Error> {
    /// unable to obtain public key: {0}
    KeySource(E),

    /// address derivation failure: {0}
    #[from]
    Derive(DeriveError),
}

/// Generates address sets for Bitcoin-family currencies, taking a fresh
/// public key from the key source for every produced address.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Generator<K: KeySource> {
    keys: K,
}

impl<K: KeySource> Generator<K> {
    pub fn with(keys: K) -> Self { Generator { keys } }

    pub fn key_source(&self) -> &K { &self.keys }

    /// Generates one address of each type the currency supports. Each address
    /// is derived from its own key.
    pub fn generate_set(
        &self,
        currency: Currency,
        network: Network,
    ) -> Result<AddressSet, Error<K::Error>> {
        let profile = currency.profile();
        let mut set = AddressSet::new();
        for requested in profile.address_types {
            let public_key = self.keys.next_public_key().map_err(Error::KeySource)?;
            let res = chains::derive_for(currency, network, *requested, &public_key)?;
            set.insert(res.address_type, res.address);
        }
        debug!("generated {currency} {network} address set with types {:?}", set.labels());
        Ok(set)
    }

    /// Generates address set for a currency code and network name, applying
    /// currency and network fallbacks.
    pub fn generate_set_str(
        &self,
        code: &str,
        network: &str,
    ) -> Result<AddressSet, Error<K::Error>> {
        self.generate_set(Currency::resolve(code), Network::resolve(network))
    }

    /// Runs `count` set generations for a currency code on a network and
    /// collates the results under the network name as it was given.
    pub fn generate(
        &self,
        code: &str,
        network: &str,
        count: usize,
    ) -> Result<CollatedAddressSet, Error<K::Error>> {
        let sets = self.generate_sets(Currency::resolve(code), Network::resolve(network), count)?;
        Ok(collate([(network, sets)]))
    }

    fn generate_sets(
        &self,
        currency: Currency,
        network: Network,
        count: usize,
    ) -> Result<Vec<AddressSet>, Error<K::Error>> {
        (0..count).map(|_| self.generate_set(currency, network)).collect()
    }

    /// Generates addresses for every Bitcoin-family currency of the batch on
    /// each of its networks. Other currencies are skipped.
    pub fn run_batch(&self, batch: &Batch) -> Result<BatchResult, Error<K::Error>> {
        let mut result = BatchResult::new();
        for code in &batch.currencies {
            if !chains::is_bitcoin_style(code) {
                warn!("{code} addresses are not generated by the Bitcoin-family generator");
                continue;
            }
            let currency = Currency::resolve(code);
            let mut collated = CollatedAddressSet::new();
            for network in &batch.networks {
                collated.add_network(network.as_str());
                for set in self.generate_sets(currency, Network::resolve(network), batch.size)? {
                    collated.push(network.as_str(), set);
                }
            }
            result.insert(code.clone(), collated);
        }
        Ok(result)
    }
}

#[cfg(feature = "parallel")]
impl<K> Generator<K>
where
    K: KeySource + Sync,
    K::Error: Send,
{
    /// Parallel version of [`Generator::generate`]. Set generations run on the
    /// rayon thread pool; results are collated in call order.
    pub fn par_generate(
        &self,
        code: &str,
        network: &str,
        count: usize,
    ) -> Result<CollatedAddressSet, Error<K::Error>> {
        use rayon::prelude::*;

        let currency = Currency::resolve(code);
        let net = Network::resolve(network);
        let sets = (0..count)
            .into_par_iter()
            .map(|_| self.generate_set(currency, net))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(collate([(network, sets)]))
    }
}

#[cfg(feature = "rand")]
impl Generator<crate::RandomKeys> {
    pub fn random() -> Self { Generator::with(crate::RandomKeys) }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;
    use std::convert::Infallible;

    use chains::AddressType;
    use secp256k1::{PublicKey, SecretKey, SECP256K1};

    use super::*;

    /// Deterministic keys derived from secret keys 1, 2, 3...
    struct SequentialKeys(Cell<u8>);

    impl KeySource for SequentialKeys {
        type Error = Infallible;

        fn next_public_key(&self) -> Result<PublicKey, Infallible> {
            let next = self.0.get() + 1;
            self.0.set(next);
            let mut secret = [0u8; 32];
            secret[31] = next;
            let sk = SecretKey::from_slice(&secret).expect("valid secret key");
            Ok(PublicKey::from_secret_key(SECP256K1, &sk))
        }
    }

    fn generator() -> Generator<SequentialKeys> { Generator::with(SequentialKeys(Cell::new(0))) }

    #[test]
    fn set_membership() {
        let gen = generator();
        assert_eq!(gen.generate_set(Currency::Bch, Network::Mainnet).unwrap().labels(), [
            "legacy", "cashaddr"
        ]);
        assert_eq!(gen.generate_set(Currency::Dash, Network::Testnet).unwrap().labels(), [
            "legacy"
        ]);
        assert_eq!(gen.generate_set(Currency::Ltc, Network::Mainnet).unwrap().labels(), [
            "legacy", "segwit", "native"
        ]);
        assert_eq!(gen.generate_set(Currency::Btc, Network::Testnet).unwrap().labels(), [
            "legacy", "segwit", "native"
        ]);
    }

    #[test]
    fn fresh_key_per_type() {
        let gen = generator();
        let set = gen.generate_set(Currency::Btc, Network::Mainnet).unwrap();
        // secret key 1 is used for the legacy address only
        assert_eq!(set.address(AddressType::Legacy), Some("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"));
        assert_ne!(
            set.address(AddressType::NativeSegwit),
            Some("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4")
        );
        assert_eq!(gen.key_source().0.get(), 3);
    }

    #[test]
    fn string_fallbacks() {
        let gen = generator();
        let set = gen.generate_set_str("eth", "devnet").unwrap();
        assert!(set.address(AddressType::Legacy).unwrap().starts_with(['m', 'n']));
        assert!(set.address(AddressType::NativeSegwit).unwrap().starts_with("tb1"));
    }

    #[test]
    fn generate_collates_under_given_network() {
        let gen = generator();
        let collated = gen.generate("ltc", "devnet", 3).unwrap();
        assert_eq!(collated.keys().collect::<Vec<_>>(), ["devnet"]);
        for ty in [AddressType::Legacy, AddressType::SegwitWrapped, AddressType::NativeSegwit] {
            assert_eq!(collated.addresses("devnet", ty).len(), 3);
        }
        assert_eq!(gen.key_source().0.get(), 9);
    }

    #[test]
    fn key_source_errors_propagate() {
        #[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
        #[display("hardware wallet disconnected")]
        struct Disconnected;

        let gen = Generator::with(crate::FnKeys(|| Err::<PublicKey, _>(Disconnected)));
        let err = gen.generate_set(Currency::Dash, Network::Mainnet).unwrap_err();
        assert_eq!(err, Error::KeySource(Disconnected));
        assert_eq!(err.to_string(), "unable to obtain public key: hardware wallet disconnected");
    }

    #[test]
    fn batch_skips_other_currencies() {
        let gen = generator();
        let batch = Batch {
            currencies: vec![s!("eth"), s!("bch"), s!("dash")],
            networks: vec![s!("mainnet"), s!("testnet")],
            size: 2,
        };
        let result = gen.run_batch(&batch).unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), ["bch", "dash"]);
        assert_eq!(result["bch"].addresses("testnet", AddressType::CashAddr).len(), 2);
        assert!(result["bch"].addresses("mainnet", AddressType::CashAddr)[0]
            .starts_with("bitcoincash:"));
        assert_eq!(result["dash"].addresses("mainnet", AddressType::Legacy).len(), 2);
        // (2 bch + 1 dash) types * 2 networks * 2 calls
        assert_eq!(gen.key_source().0.get(), 12);
    }

    #[test]
    fn derive_errors_convert() {
        let derive_err = DeriveError::UnsupportedNetworkParams(AddressType::CashAddr, 0x00);
        let err: Error<Infallible> = derive_err.clone().into();
        assert_eq!(err, Error::Derive(derive_err));
        assert!(err.to_string().starts_with("address derivation failure: "));
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn batch_codes_are_case_insensitive() {
        let gen = generator();
        let batch = Batch::new(["LTC", "Xrp", "Dash"], ["mainnet"], 1);
        let result = gen.run_batch(&batch).unwrap();
        assert_eq!(result.keys().collect::<Vec<_>>(), ["LTC", "Dash"]);
        assert!(result["LTC"].addresses("mainnet", AddressType::Legacy)[0].starts_with('L'));
        assert!(result["Dash"].addresses("mainnet", AddressType::Legacy)[0].starts_with('X'));
    }
}
