/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Canonical CloudFront policy documents.
//!
//! A policy is serialized as a single-statement JSON document with fields in
//! fixed order and no insignificant whitespace. The signature covers these
//! exact bytes, so two calls with identical inputs must produce byte-identical
//! output. [`JsonObjectWriter`] emits tokens in call order, which makes the
//! determinism structural.
//!
//! [`JsonObjectWriter`]: aws_smithy_json::serialize::JsonObjectWriter

use crate::error::SigningError;
use aws_smithy_types::{DateTime, Number};

/// The resource a policy grants access to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A single exact URL.
    Exact(String),
    /// A URL pattern. `*` matches any character sequence and `?` matches a
    /// single character. Wildcard syntax is passed through unvalidated.
    Pattern(String),
}

impl Resource {
    /// Returns the URL or pattern as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Resource::Exact(url) => url,
            Resource::Pattern(pattern) => pattern,
        }
    }

    /// Returns true for [`Resource::Exact`].
    pub fn is_exact(&self) -> bool {
        matches!(self, Resource::Exact(_))
    }

    /// The literal text before the first wildcard. For an exact resource
    /// this is the whole URL.
    pub(crate) fn literal_prefix(&self) -> &str {
        match self {
            Resource::Exact(url) => url,
            Resource::Pattern(pattern) => {
                let end = pattern
                    .find(['*', '?'])
                    .unwrap_or(pattern.len());
                &pattern[..end]
            }
        }
    }
}

/// Time and network bounds on a policy.
#[derive(Debug, Clone)]
pub struct Validity {
    expires_at: DateTime,
    starts_at: Option<DateTime>,
    source_ip: Option<String>,
}

impl Validity {
    /// Creates validity bounds that expire at the given time.
    pub fn new(expires_at: DateTime) -> Self {
        Self {
            expires_at,
            starts_at: None,
            source_ip: None,
        }
    }

    /// Adds a not-before bound. Must be earlier than the expiry.
    pub fn starts_at(mut self, time: DateTime) -> Self {
        self.starts_at = Some(time);
        self
    }

    /// Restricts access to a source-IP range in CIDR notation.
    pub fn source_ip(mut self, cidr: impl Into<String>) -> Self {
        self.source_ip = Some(cidr.into());
        self
    }

    /// Returns the expiry time.
    pub fn expires_at(&self) -> DateTime {
        self.expires_at
    }
}

/// An immutable authorization statement, built once per signing request.
///
/// Policies are never reused across requests since the expiry is relative to
/// the wall clock at signing time.
#[derive(Debug, Clone)]
pub struct Policy {
    resource: Resource,
    expires_at: i64,
    starts_at: Option<i64>,
    source_ip: Option<String>,
}

impl Policy {
    /// Creates a builder for a policy over the given resource.
    pub fn builder(resource: Resource) -> PolicyBuilder {
        PolicyBuilder {
            resource,
            validity: None,
        }
    }

    /// Returns the resource this policy grants access to.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Returns the expiry as integer epoch seconds.
    pub fn expires_epoch(&self) -> i64 {
        self.expires_at
    }

    /// True when this policy is expressible as a canned statement: an exact
    /// resource bounded only by an expiry. Canned URLs carry the expiry as a
    /// raw query parameter instead of a serialized policy document.
    pub fn is_canned(&self) -> bool {
        self.resource.is_exact() && self.starts_at.is_none() && self.source_ip.is_none()
    }

    /// Serializes the policy to its canonical wire form.
    ///
    /// Field order is fixed: `Resource`, then `DateLessThan`, then
    /// `DateGreaterThan` and `IpAddress` only when present. No whitespace.
    pub fn to_json(&self) -> String {
        let mut out = String::new();
        let mut root = aws_smithy_json::serialize::JsonObjectWriter::new(&mut out);

        let mut statement_array = root.key("Statement").start_array();
        let mut statement = statement_array.value().start_object();

        statement.key("Resource").string(self.resource.as_str());

        let mut condition = statement.key("Condition").start_object();

        let mut date_less = condition.key("DateLessThan").start_object();
        date_less
            .key("AWS:EpochTime")
            .number(Number::PosInt(self.expires_at as u64));
        date_less.finish();

        if let Some(starts) = self.starts_at {
            let mut date_greater = condition.key("DateGreaterThan").start_object();
            date_greater
                .key("AWS:EpochTime")
                .number(Number::PosInt(starts as u64));
            date_greater.finish();
        }

        if let Some(ref ip) = self.source_ip {
            let mut ip_addr = condition.key("IpAddress").start_object();
            ip_addr.key("AWS:SourceIp").string(ip);
            ip_addr.finish();
        }

        condition.finish();
        statement.finish();
        statement_array.finish();
        root.finish();

        out
    }
}

/// Builder for [`Policy`].
#[derive(Debug)]
pub struct PolicyBuilder {
    resource: Resource,
    validity: Option<Validity>,
}

impl PolicyBuilder {
    /// Sets the validity bounds.
    pub fn validity(mut self, validity: Validity) -> Self {
        self.validity = Some(validity);
        self
    }

    /// Validates the bounds and builds the policy.
    pub fn build(self) -> Result<Policy, SigningError> {
        let validity = self
            .validity
            .ok_or_else(|| SigningError::invalid_validity("expires_at is required"))?;

        let expires_at = validity.expires_at.secs();
        if expires_at < 0 {
            return Err(SigningError::invalid_validity(
                "expires_at must be a non-negative epoch time",
            ));
        }

        let starts_at = validity.starts_at.map(|dt| dt.secs());
        if let Some(starts) = starts_at {
            if starts < 0 {
                return Err(SigningError::invalid_validity(
                    "starts_at must be a non-negative epoch time",
                ));
            }
            if expires_at <= starts {
                return Err(SigningError::invalid_validity(
                    "starts_at must be before expires_at",
                ));
            }
        }

        Ok(Policy {
            resource: self.resource,
            expires_at,
            starts_at,
            source_ip: validity.source_ip,
        })
    }
}
