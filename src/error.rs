/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// Classifies a [`SigningError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The time bounds of a policy are malformed or inconsistent.
    InvalidValidity,
    /// The private key is unreadable, encrypted, or not an RSA key.
    InvalidKey,
    /// The signature primitive rejected the input.
    SigningFailure,
    /// The requested artifact cannot be assembled from the given inputs.
    Assembly,
    /// Reserved. The safe encoder is total over all byte inputs, so this
    /// kind is never produced.
    Encoding,
}

/// Error type for CloudFront signing operations.
#[derive(Debug)]
pub struct SigningError {
    kind: ErrorKind,
    source: Option<Box<dyn StdError + Send + Sync>>,
    message: Option<Cow<'static, str>>,
}

impl SigningError {
    pub(crate) fn new(
        kind: ErrorKind,
        source: Option<Box<dyn StdError + Send + Sync>>,
        message: Option<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            source,
            message,
        }
    }

    pub(crate) fn invalid_validity(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InvalidValidity, None, Some(message.into()))
    }

    pub(crate) fn invalid_key(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::new(ErrorKind::InvalidKey, Some(source.into()), None)
    }

    pub(crate) fn signing_failure(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self::new(ErrorKind::SigningFailure, Some(source.into()), None)
    }

    pub(crate) fn assembly(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Assembly, None, Some(message.into()))
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for SigningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidValidity => write!(f, "invalid validity")?,
            ErrorKind::InvalidKey => write!(f, "invalid private key")?,
            ErrorKind::SigningFailure => write!(f, "signing operation failed")?,
            ErrorKind::Assembly => write!(f, "artifact assembly failed")?,
            ErrorKind::Encoding => write!(f, "encoding failed")?,
        }
        if let Some(ref msg) = self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

impl StdError for SigningError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_validity_display() {
        let err = SigningError::invalid_validity("starts_at must be before expires_at");
        assert_eq!(
            err.to_string(),
            "invalid validity: starts_at must be before expires_at"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidValidity);
        assert!(err.source().is_none());
    }

    #[test]
    fn invalid_key_display() {
        let err = SigningError::invalid_key("bad PEM");
        assert_eq!(err.to_string(), "invalid private key");
        assert_eq!(err.kind(), ErrorKind::InvalidKey);
        assert!(err.source().is_some());
    }

    #[test]
    fn assembly_display() {
        let err = SigningError::assembly("key_pair_id must not be empty");
        assert_eq!(
            err.to_string(),
            "artifact assembly failed: key_pair_id must not be empty"
        );
        assert_eq!(err.kind(), ErrorKind::Assembly);
    }

    #[test]
    fn signing_failure_display() {
        let err = SigningError::signing_failure("RSA error");
        assert_eq!(err.to_string(), "signing operation failed");
        assert_eq!(err.kind(), ErrorKind::SigningFailure);
        assert!(err.source().is_some());
    }
}
