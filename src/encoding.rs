/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! CloudFront-safe base64.
//!
//! CloudFront requires standard-alphabet base64 with the three characters
//! that collide with URL and cookie-header delimiters remapped:
//! `+` becomes `-`, `=` becomes `_`, and `/` becomes `~`. The edge decodes
//! with the inverse table, so any other substitution produces artifacts it
//! cannot parse. Note this is not the RFC 4648 URL-safe alphabet.

/// Encodes bytes as CloudFront-safe base64.
///
/// Total over all byte inputs. Reversible by applying the inverse
/// substitution (`-` to `+`, `_` to `=`, `~` to `/`) and then standard
/// base64 decoding.
pub(crate) fn encode(data: &[u8]) -> String {
    base64_simd::STANDARD
        .encode_to_string(data)
        .replace('+', "-")
        .replace('=', "_")
        .replace('/', "~")
}

#[cfg(test)]
pub(crate) fn decode(encoded: &str) -> Vec<u8> {
    let standard = encoded
        .replace('-', "+")
        .replace('_', "=")
        .replace('~', "/");
    base64_simd::STANDARD
        .decode_to_vec(standard)
        .expect("inverse substitution yields valid standard base64")
}
