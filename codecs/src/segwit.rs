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

//! Bech32 encoding of SegWit witness programs (BIP-173, BIP-350).

use bech32::{u5, FromBase32, ToBase32, Variant};

/// Errors encoding or decoding SegWit addresses.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum SegwitError {
    /// wrong Bech32 encoding of address data - {0}
    #[from]
    Bech32(bech32::Error),

    /// segwit address has an invalid witness version {0}.
    InvalidWitnessVersion(u8),

    /// witness program of version {0} has an invalid length of {1} bytes.
    InvalidProgramLength(u8, usize),

    /// address has an invalid Bech32 variant {0:?} for its witness version.
    InvalidBech32Variant(Variant),

    /// segwit address contains no witness version.
    NoWitnessVersion,
}

/// Witness program decoded from a SegWit address.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WitnessProgram {
    pub hrp: String,
    pub version: u8,
    pub program: Vec<u8>,
}

fn check_program(version: u8, program: &[u8]) -> Result<(), SegwitError> {
    if version > 16 {
        return Err(SegwitError::InvalidWitnessVersion(version));
    }
    match (version, program.len()) {
        (0, 20 | 32) => Ok(()),
        (0, len) => Err(SegwitError::InvalidProgramLength(0, len)),
        (_, 2..=40) => Ok(()),
        (ver, len) => Err(SegwitError::InvalidProgramLength(ver, len)),
    }
}

fn variant_for(version: u8) -> Variant {
    match version {
        0 => Variant::Bech32,
        _ => Variant::Bech32m,
    }
}

/// Encodes witness program of the given version into a lower-case SegWit
/// address with the human-readable part `hrp`.
pub fn encode(hrp: &str, version: u8, program: &[u8]) -> Result<String, SegwitError> {
    check_program(version, program)?;
    let ver = u5::try_from_u8(version)?;
    let mut data = Vec::with_capacity(1 + (program.len() * 8 + 4) / 5);
    data.push(ver);
    data.extend(program.to_base32());
    Ok(bech32::encode(hrp, data, variant_for(version))?)
}

/// Encodes a witness version 0 program (P2WPKH or P2WSH) into a Bech32
/// address.
pub fn encode_v0(hrp: &str, program: &[u8]) -> Result<String, SegwitError> {
    encode(hrp, 0, program)
}

/// Decodes a SegWit address and validates its witness program.
pub fn decode(s: &str) -> Result<WitnessProgram, SegwitError> {
    let (hrp, data, variant) = bech32::decode(s)?;
    let (ver, p5) = data.split_first().ok_or(SegwitError::NoWitnessVersion)?;
    let version = ver.to_u8();
    let program = Vec::<u8>::from_base32(p5)?;
    check_program(version, &program)?;
    if variant != variant_for(version) {
        return Err(SegwitError::InvalidBech32Variant(variant));
    }
    Ok(WitnessProgram {
        hrp,
        version,
        program,
    })
}
