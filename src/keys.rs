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

//! Sources of public keys used for address generation.
//!
//! Address generation never touches private key material: a key source hands
//! out public keys only, and it is up to the source what happens with the
//! matching secret keys.

use std::error::Error;

use secp256k1::PublicKey;

/// Provider of fresh public keys. Each call must return a key independent
/// from the previously returned ones.
pub trait KeySource {
    type Error: Error;

    fn next_public_key(&self) -> Result<PublicKey, Self::Error>;
}

impl<K: KeySource + ?Sized> KeySource for &K {
    type Error = K::Error;

    fn next_public_key(&self) -> Result<PublicKey, Self::Error> { (**self).next_public_key() }
}

/// Key source generating random secp256k1 key pairs with the thread-local
/// random number generator. Secret keys are dropped right after generation.
#[cfg(feature = "rand")]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RandomKeys;

#[cfg(feature = "rand")]
impl KeySource for RandomKeys {
    type Error = std::convert::Infallible;

    fn next_public_key(&self) -> Result<PublicKey, Self::Error> {
        let (_, public_key) = secp256k1::generate_keypair(&mut rand::thread_rng());
        Ok(public_key)
    }
}

/// Adapter turning a closure into a key source, for plugging external key
/// generators.
#[derive(Copy, Clone)]
pub struct FnKeys<F>(pub F);

impl<F, E> KeySource for FnKeys<F>
where
    F: Fn() -> Result<PublicKey, E>,
    E: Error,
{
    type Error = E;

    fn next_public_key(&self) -> Result<PublicKey, E> { (self.0)() }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
    #[display("no more keys")]
    struct Exhausted;

    #[test]
    fn closure_errors_propagate() {
        let keys = FnKeys(|| Err::<PublicKey, _>(Exhausted));
        assert_eq!(keys.next_public_key().unwrap_err().to_string(), "no more keys");
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_keys_are_fresh() {
        let first = RandomKeys.next_public_key().unwrap();
        let second = RandomKeys.next_public_key().unwrap();
        assert_ne!(first, second);
        assert_eq!(first.serialize().len(), 33);
    }
}
