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

//! CashAddr encoding used by Bitcoin Cash.
//!
//! An address consists of a network prefix, a `:` separator and a base32
//! payload. The payload carries a version byte (payload type and hash size),
//! the hash itself and a 40-bit BCH checksum computed over both the prefix
//! and the payload.

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const CHECKSUM_LEN: usize = 8;

/// Errors encoding or decoding CashAddr strings.
#[derive(Clone, Eq, PartialEq, Debug, Display, Error, From)]
#[display(doc_comments)]
pub enum CashAddrError {
    /// invalid CashAddr prefix '{0}'.
    InvalidPrefix(String),

    /// CashAddr string has no prefix and no default prefix was provided.
    NoPrefix,

    /// CashAddr string mixes upper- and lower-case characters.
    MixedCase,

    /// invalid character '{0}' in CashAddr payload.
    InvalidChar(char),

    /// CashAddr checksum mismatch.
    BadChecksum,

    /// CashAddr payload is too short.
    TooShort,

    /// hash of {0} bytes can't be encoded into CashAddr payload.
    InvalidHashLength(usize),

    /// unknown CashAddr version byte {0:#04x}.
    UnknownVersion(u8),

    /// invalid base32 data in CashAddr payload - {0}
    #[from]
    Base32(bech32::Error),
}

/// Type of the hash carried by a CashAddr payload.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
pub enum PayloadKind {
    /// Pay-to-public key hash
    #[display("P2PKH")]
    P2pkh,

    /// Pay-to-script hash
    #[display("P2SH")]
    P2sh,
}

impl PayloadKind {
    const fn type_bits(self) -> u8 {
        match self {
            PayloadKind::P2pkh => 0,
            PayloadKind::P2sh => 1,
        }
    }
}

/// Decoded CashAddr address.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CashAddr {
    pub prefix: String,
    pub kind: PayloadKind,
    pub hash: Vec<u8>,
}

fn polymod(values: impl IntoIterator<Item = u8>) -> u64 {
    const GENERATORS: [u64; 5] =
        [0x98f2bc8e61, 0x79b76d99e2, 0xf33e5fb3c4, 0xae2eabe2a8, 0x1e4f43e470];

    let mut chk = 1u64;
    for value in values {
        let top = chk >> 35;
        chk = ((chk & 0x07_ffff_ffff) << 5) ^ value as u64;
        for (i, gen) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk ^ 1
}

// Lower five bits of each prefix character followed by a zero separator.
fn prefix_data(prefix: &str) -> impl Iterator<Item = u8> + '_ {
    prefix.bytes().map(|b| b & 0x1f).chain([0u8])
}

fn check_prefix(prefix: &str) -> Result<(), CashAddrError> {
    if prefix.is_empty()
        || !prefix.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    {
        return Err(CashAddrError::InvalidPrefix(prefix.to_owned()));
    }
    Ok(())
}

fn size_bits(len: usize) -> Result<u8, CashAddrError> {
    Ok(match len {
        20 => 0,
        24 => 1,
        28 => 2,
        32 => 3,
        40 => 4,
        48 => 5,
        56 => 6,
        64 => 7,
        other => return Err(CashAddrError::InvalidHashLength(other)),
    })
}

/// Encodes a hash of the given payload type into a lower-case CashAddr string
/// with an embedded `prefix:`.
pub fn encode(prefix: &str, kind: PayloadKind, hash: &[u8]) -> Result<String, CashAddrError> {
    check_prefix(prefix)?;
    let version = (kind.type_bits() << 3) | size_bits(hash.len())?;

    let mut payload = Vec::with_capacity(hash.len() + 1);
    payload.push(version);
    payload.extend_from_slice(hash);
    let data = bech32::convert_bits(payload.as_slice(), 8, 5, true)?;

    let checksum = polymod(
        prefix_data(prefix)
            .chain(data.iter().copied())
            .chain([0u8; CHECKSUM_LEN]),
    );

    let mut s = String::with_capacity(prefix.len() + 1 + data.len() + CHECKSUM_LEN);
    s.push_str(prefix);
    s.push(':');
    s.extend(data.iter().map(|d| CHARSET[*d as usize] as char));
    s.extend(
        (0..CHECKSUM_LEN)
            .map(|i| ((checksum >> (5 * (CHECKSUM_LEN - 1 - i))) & 0x1f) as usize)
            .map(|d| CHARSET[d] as char),
    );
    Ok(s)
}

/// Decodes a CashAddr string. Strings without an embedded prefix are decoded
/// using `default_prefix`.
pub fn decode(s: &str, default_prefix: Option<&str>) -> Result<CashAddr, CashAddrError> {
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(CashAddrError::MixedCase);
    }
    let s = s.to_lowercase();

    let (prefix, payload) = match s.rsplit_once(':') {
        Some((prefix, payload)) => (prefix.to_owned(), payload),
        None => (default_prefix.ok_or(CashAddrError::NoPrefix)?.to_lowercase(), s.as_str()),
    };
    check_prefix(&prefix)?;

    let data = payload
        .chars()
        .map(|c| {
            CHARSET
                .iter()
                .position(|d| *d as char == c)
                .map(|pos| pos as u8)
                .ok_or(CashAddrError::InvalidChar(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    if data.len() <= CHECKSUM_LEN {
        return Err(CashAddrError::TooShort);
    }
    if polymod(prefix_data(&prefix).chain(data.iter().copied())) != 0 {
        return Err(CashAddrError::BadChecksum);
    }

    let bytes = bech32::convert_bits(&data[..data.len() - CHECKSUM_LEN], 5, 8, false)?;
    let (version, hash) = bytes.split_first().ok_or(CashAddrError::TooShort)?;
    if version & 0x80 != 0 {
        return Err(CashAddrError::UnknownVersion(*version));
    }
    let kind = match version >> 3 {
        0 => PayloadKind::P2pkh,
        1 => PayloadKind::P2sh,
        _ => return Err(CashAddrError::UnknownVersion(*version)),
    };
    if size_bits(hash.len())? != version & 0x07 {
        return Err(CashAddrError::InvalidHashLength(hash.len()));
    }

    Ok(CashAddr {
        prefix,
        kind,
        hash: hash.to_vec(),
    })
}

#[cfg(test)]
mod test {
    use amplify::hex::FromHex;

    use super::*;

    fn hash() -> Vec<u8> {
        Vec::<u8>::from_hex("f5bf48b397dae70be82b3cca4793f8eb2b6cdac9").unwrap()
    }

    #[test]
    fn reference_vectors() {
        assert_eq!(
            encode("bitcoincash", PayloadKind::P2pkh, &hash()).unwrap(),
            "bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2"
        );
        assert_eq!(
            encode("bitcoincash", PayloadKind::P2sh, &hash()).unwrap(),
            "bitcoincash:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyguug74nh"
        );
        assert_eq!(
            encode("bchtest", PayloadKind::P2pkh, &hash()).unwrap(),
            "bchtest:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eymt9qmp0k"
        );
    }

    #[test]
    fn longer_hashes() {
        let hash = Vec::<u8>::from_hex("7adbf6c17084bc86c1706827b41a56f5ca32865925e946ea").unwrap();
        let addr = encode("bitcoincash", PayloadKind::P2pkh, &hash).unwrap();
        assert_eq!(addr, "bitcoincash:q9adhakpwzztepkpwp5z0dq62m6u5v5xtyj7j3h2ws4mr9g0");
        let decoded = decode(&addr, None).unwrap();
        assert_eq!(decoded.hash, hash);
        assert_eq!(
            encode("bchtest", PayloadKind::P2sh, &self::hash()).unwrap(),
            "bchtest:pr6m7j9njldwwzlg9v7v53unlr4jkmx6eyvwc0uz5t"
        );
    }

    #[test]
    fn decode_back() {
        let addr = decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2", None).unwrap();
        assert_eq!(addr.prefix, "bitcoincash");
        assert_eq!(addr.kind, PayloadKind::P2pkh);
        assert_eq!(addr.hash, hash());
    }

    #[test]
    fn decode_without_prefix() {
        let addr = decode("QR6M7J9NJLDWWZLG9V7V53UNLR4JKMX6EYLEP8EKG2", Some("bitcoincash")).unwrap();
        assert_eq!(addr.hash, hash());
        assert_eq!(
            decode("qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2", None),
            Err(CashAddrError::NoPrefix)
        );
    }

    #[test]
    fn prefix_is_checksummed() {
        assert_eq!(
            decode("bchtest:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekg2", None),
            Err(CashAddrError::BadChecksum)
        );
        assert_eq!(
            decode("bitcoincash:qr6m7j9njldwwzlg9v7v53unlr4jkmx6eylep8ekG2", None),
            Err(CashAddrError::MixedCase)
        );
    }

    #[test]
    fn bad_input() {
        assert_eq!(
            encode("bitcoincash", PayloadKind::P2pkh, &[0u8; 19]),
            Err(CashAddrError::InvalidHashLength(19))
        );
        assert_eq!(
            encode("Bitcoin Cash", PayloadKind::P2pkh, &hash()),
            Err(CashAddrError::InvalidPrefix(s!("Bitcoin Cash")))
        );
    }
}
