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

//! Base58 and Base58Check encodings used by legacy (P2PKH and P2SH) addresses.

use std::iter;

use crate::hash;

const BASE58_CHARS: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE58_DIGITS: [i8; 128] = {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < BASE58_CHARS.len() {
        table[BASE58_CHARS[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Errors decoding Base58 and Base58Check strings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Error)]
#[display(doc_comments)]
pub enum Error {
    /// invalid character '{0}' in Base58 string.
    BadChar(char),

    /// Base58Check checksum mismatch (expected {0:#010x}, found {1:#010x}).
    BadChecksum(u32, u32),

    /// invalid length of Base58 data ({0} bytes).
    InvalidLength(usize),

    /// Base58Check data of {0} bytes is too short to contain a checksum.
    TooShort(usize),
}

/// Encodes data as a Base58 string, keeping leading zero bytes as `1`s.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|b| **b == 0).count();
    // little-endian base58 digits
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for byte in &data[zeros..] {
        let mut carry = *byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }
    iter::repeat('1')
        .take(zeros)
        .chain(digits.iter().rev().map(|d| BASE58_CHARS[*d as usize] as char))
        .collect()
}

/// Decodes a Base58 string into raw bytes.
pub fn decode(s: &str) -> Result<Vec<u8>, Error> {
    // little-endian bytes
    let mut scratch: Vec<u8> = Vec::with_capacity(s.len() * 733 / 1000 + 1);
    for c in s.chars() {
        let digit = match c.is_ascii() {
            true => BASE58_DIGITS[c as usize],
            false => -1,
        };
        if digit < 0 {
            return Err(Error::BadChar(c));
        }
        let mut carry = digit as u32;
        for byte in scratch.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            scratch.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    let zeros = s.bytes().take_while(|b| *b == b'1').count();
    let mut data = vec![0u8; zeros];
    data.extend(scratch.into_iter().rev());
    Ok(data)
}

/// Encodes data as Base58Check: the data followed by the first four bytes of
/// its double SHA-256 hash.
pub fn encode_check(data: &[u8]) -> String {
    let mut buf = Vec::with_capacity(data.len() + 4);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&hash::checksum(data));
    encode(&buf)
}

/// Decodes a Base58Check string, verifying and stripping the checksum.
pub fn decode_check(s: &str) -> Result<Vec<u8>, Error> {
    let mut data = decode(s)?;
    if data.len() < 4 {
        return Err(Error::TooShort(data.len()));
    }
    let split = data.len() - 4;
    let expected = hash::checksum(&data[..split]);
    if expected != data[split..] {
        let mut found = [0u8; 4];
        found.copy_from_slice(&data[split..]);
        return Err(Error::BadChecksum(u32::from_be_bytes(expected), u32::from_be_bytes(found)));
    }
    data.truncate(split);
    Ok(data)
}

/// Base58Check encoding of a version byte followed by the payload.
pub fn encode_check_versioned(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 1);
    data.push(version);
    data.extend_from_slice(payload);
    encode_check(&data)
}

/// Decodes a Base58Check string into its version byte and payload.
pub fn decode_check_versioned(s: &str) -> Result<(u8, Vec<u8>), Error> {
    let mut data = decode_check(s)?;
    if data.is_empty() {
        return Err(Error::InvalidLength(0));
    }
    let version = data.remove(0);
    Ok((version, data))
}
