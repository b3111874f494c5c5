/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Assembly of signed artifacts from policy and signature bytes.

use crate::encoding;
use crate::error::SigningError;
use crate::policy::{Policy, Resource};
use std::borrow::Cow;
use std::fmt;

const COOKIE_POLICY: &str = "CloudFront-Policy";
const COOKIE_SIGNATURE: &str = "CloudFront-Signature";
const COOKIE_KEY_PAIR_ID: &str = "CloudFront-Key-Pair-Id";

/// A signed CloudFront URL.
///
/// Holds both the assembled URL string and the ordered query parameters that
/// were appended to it, so the HTTP collaborator can consume either form.
#[derive(Debug, Clone)]
pub struct SignedUrl {
    url: String,
    params: Vec<(&'static str, String)>,
}

impl SignedUrl {
    /// Returns the complete signed URL as a string.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Returns the signing query parameters in the order they appear in the
    /// URL.
    pub fn query_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

impl fmt::Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

impl AsRef<str> for SignedUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "http-1x")]
#[cfg_attr(docsrs, doc(cfg(feature = "http-1x")))]
impl TryFrom<&SignedUrl> for http::Request<()> {
    type Error = http::Error;

    fn try_from(signed_url: &SignedUrl) -> Result<Self, Self::Error> {
        http::Request::builder().uri(signed_url.as_str()).body(())
    }
}

/// Signed cookies for CloudFront.
///
/// Always exactly three cookies: policy, signature, and key pair id. Unlike
/// signed URLs, the cookie protocol has no canned shorthand, so the policy
/// cookie is present even when the policy is canned-equivalent.
#[derive(Debug, Clone)]
pub struct SignedCookies {
    cookies: Vec<(Cow<'static, str>, String)>,
}

impl SignedCookies {
    /// Returns all cookies as name-value pairs.
    pub fn cookies(&self) -> &[(Cow<'static, str>, String)] {
        &self.cookies
    }

    /// Gets a specific cookie value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns an iterator over cookies.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookies.iter().map(|(n, v)| (n.as_ref(), v.as_str()))
    }

    /// Renders the cookies as a single `Cookie` header value.
    pub fn header_value(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.cookies {
            if !out.is_empty() {
                out.push_str("; ");
            }
            out.push_str(name);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

/// Assembles a signed URL from a policy and its signature.
///
/// `resource` is the target the query parameters are appended to; for a
/// pattern it is the literal prefix before the first wildcard. A canned
/// request requires an exact resource and carries the expiry as a raw
/// `Expires` parameter; a custom request carries the full encoded policy.
pub(crate) fn assemble_url(
    key_id: &str,
    resource: &Resource,
    policy: &Policy,
    policy_json: &str,
    signature: &[u8],
    canned: bool,
) -> Result<SignedUrl, SigningError> {
    if key_id.is_empty() {
        return Err(SigningError::assembly("key_pair_id must not be empty"));
    }
    if canned && !resource.is_exact() {
        return Err(SigningError::assembly(
            "a canned URL requires an exact resource, not a pattern",
        ));
    }

    let signature_b64 = encoding::encode(signature);
    let params: Vec<(&'static str, String)> = if canned {
        vec![
            ("Expires", policy.expires_epoch().to_string()),
            ("Signature", signature_b64),
            ("Key-Pair-Id", key_id.to_string()),
        ]
    } else {
        vec![
            ("Policy", encoding::encode(policy_json.as_bytes())),
            ("Signature", signature_b64),
            ("Key-Pair-Id", key_id.to_string()),
        ]
    };

    let target = resource.literal_prefix();
    let separator = if target.contains('?') { '&' } else { '?' };

    let mut url = String::from(target);
    url.push(separator);
    for (i, (name, value)) in params.iter().enumerate() {
        if i > 0 {
            url.push('&');
        }
        url.push_str(name);
        url.push('=');
        url.push_str(value);
    }

    Ok(SignedUrl { url, params })
}

/// Assembles the cookie triplet from a policy and its signature.
pub(crate) fn assemble_cookies(
    key_id: &str,
    policy_json: &str,
    signature: &[u8],
) -> Result<SignedCookies, SigningError> {
    if key_id.is_empty() {
        return Err(SigningError::assembly("key_pair_id must not be empty"));
    }

    let cookies = vec![
        (
            Cow::Borrowed(COOKIE_POLICY),
            encoding::encode(policy_json.as_bytes()),
        ),
        (Cow::Borrowed(COOKIE_SIGNATURE), encoding::encode(signature)),
        (Cow::Borrowed(COOKIE_KEY_PAIR_ID), key_id.to_string()),
    ];

    Ok(SignedCookies { cookies })
}
