/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_cfg))]
/* End of automatically managed default lints */
//! Presigned URL and signed cookie generation for CloudFront.
//!
//! Given a resource URL (or wildcard pattern), an expiry, and optionally a
//! start time and a source-IP restriction, this crate produces the artifacts
//! a CloudFront distribution needs to grant time-limited access: a signed
//! query-string URL, or the policy/signature/key-pair-id cookie triplet.
//!
//! Policies are serialized deterministically, signed with RSA PKCS#1 v1.5
//! over a SHA-1 digest (the digest CloudFront verifies against), and encoded
//! with CloudFront's base64 variant. The crate performs no I/O of its own:
//! the private key is injected by the caller and the returned artifacts are
//! handed to whatever HTTP client performs the request.
//!
//! # Signing a URL
//!
//! ```no_run
//! use aws_smithy_types::DateTime;
//! use cloudfront_presign::{sign_url, SigningKey, SigningRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pem = std::fs::read("private_key.pem")?;
//! let key = SigningKey::from_pem(&pem)?;
//!
//! let request = SigningRequest::builder()
//!     .resource_url("https://d111111abcdef8.cloudfront.net/image.jpg")
//!     .key_pair_id("K2JCJMDEHXQW5F")
//!     .signing_key(key)
//!     .expires_at(DateTime::from_secs(1767290400))
//!     .build()?;
//!
//! let signed = sign_url(request)?;
//! println!("{signed}");
//! # Ok(()) }
//! ```
//!
//! # Signing cookies
//!
//! ```no_run
//! use cloudfront_presign::{sign_cookies, SigningKey, SigningRequest};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pem = std::fs::read("private_key.pem")?;
//! let key = SigningKey::from_pem(&pem)?;
//!
//! let request = SigningRequest::builder()
//!     .resource_url("https://d111111abcdef8.cloudfront.net/private/*")
//!     .resource_pattern("https://d111111abcdef8.cloudfront.net/private/*")
//!     .key_pair_id("K2JCJMDEHXQW5F")
//!     .signing_key(key)
//!     .expires_in(Duration::from_secs(3600))
//!     .build()?;
//!
//! let cookies = sign_cookies(request)?;
//! for (name, value) in cookies.iter() {
//!     println!("{name}={value}");
//! }
//! # Ok(()) }
//! ```

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

/// Error types for CloudFront signing operations.
pub mod error;

mod artifact;
mod encoding;
mod key;
mod policy;
mod request;

pub use artifact::{SignedCookies, SignedUrl};
pub use key::SigningKey;
pub use policy::{Policy, PolicyBuilder, Resource, Validity};
pub use request::{SigningRequest, SigningRequestBuilder};

use error::SigningError;

/// Signs a CloudFront URL with a canned or custom policy.
pub fn sign_url(request: SigningRequest) -> Result<SignedUrl, SigningError> {
    request.sign_url()
}

/// Generates signed cookies with a canned or custom policy.
pub fn sign_cookies(request: SigningRequest) -> Result<SignedCookies, SigningError> {
    request.sign_cookies()
}
