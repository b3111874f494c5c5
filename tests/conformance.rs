/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Table-driven conformance cases with precomputed wire values. RSA PKCS#1
//! v1.5 signing is deterministic, so exact signature strings are asserted.

use aws_smithy_types::DateTime;
use cloudfront_presign::{sign_cookies, sign_url, SigningKey, SigningRequest};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct TestCase {
    id: String,
    #[allow(dead_code)]
    documentation: String,
    input: TestInput,
    expected: TestExpected,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestInput {
    resource_url: String,
    resource_url_pattern: Option<String>,
    key_pair_id: String,
    private_key_file: String,
    expiration_date: i64,
    active_date: Option<i64>,
    ip_range: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestExpected {
    query_params: Option<HashMap<String, String>>,
    cookies: Option<HashMap<String, String>>,
    policy_json: Option<String>,
    error: Option<bool>,
    error_contains: Option<Vec<String>>,
}

fn load_test_cases() -> Vec<TestCase> {
    serde_json::from_str(include_str!("test-cases.json")).expect("valid test cases")
}

fn cloudfront_b64_decode(encoded: &str) -> Vec<u8> {
    let standard = encoded
        .replace('-', "+")
        .replace('_', "=")
        .replace('~', "/");
    base64_simd::STANDARD
        .decode_to_vec(standard)
        .expect("valid CloudFront base64")
}

#[test]
fn conformance_cases() {
    for test_case in load_test_cases() {
        let key_path = format!("tests/{}", test_case.input.private_key_file);
        let key_bytes = std::fs::read(&key_path)
            .unwrap_or_else(|_| panic!("failed to read key file: {key_path}"));
        let signing_key = SigningKey::from_pem(&key_bytes)
            .unwrap_or_else(|e| panic!("failed to parse key for case {}: {e}", test_case.id));

        let mut builder = SigningRequest::builder()
            .resource_url(&test_case.input.resource_url)
            .key_pair_id(&test_case.input.key_pair_id)
            .signing_key(signing_key)
            .expires_at(DateTime::from_secs(test_case.input.expiration_date));

        if let Some(pattern) = &test_case.input.resource_url_pattern {
            builder = builder.resource_pattern(pattern);
        }
        if let Some(active) = test_case.input.active_date {
            builder = builder.starts_at(DateTime::from_secs(active));
        }
        if let Some(ip) = &test_case.input.ip_range {
            builder = builder.source_ip(ip);
        }

        let request = builder
            .build()
            .unwrap_or_else(|e| panic!("failed to build request for case {}: {e}", test_case.id));

        if test_case.expected.error == Some(true) {
            let err = sign_url(request).expect_err("case expected an error");
            if let Some(error_contains) = &test_case.expected.error_contains {
                let message = err.to_string();
                for expected in error_contains {
                    assert!(
                        message.contains(expected),
                        "case {}: error message {message:?} does not contain {expected:?}",
                        test_case.id
                    );
                }
            }
            continue;
        }

        if let Some(expected_cookies) = &test_case.expected.cookies {
            let cookies = sign_cookies(request.clone())
                .unwrap_or_else(|e| panic!("case {}: signing failed: {e}", test_case.id));
            for (name, expected_value) in expected_cookies {
                assert_eq!(
                    cookies.get(name),
                    Some(expected_value.as_str()),
                    "case {}: cookie {name} mismatch",
                    test_case.id
                );
            }

            if let Some(expected_policy) = &test_case.expected.policy_json {
                let decoded = cloudfront_b64_decode(cookies.get("CloudFront-Policy").unwrap());
                assert_eq!(
                    String::from_utf8(decoded).unwrap(),
                    *expected_policy,
                    "case {}: decoded policy mismatch",
                    test_case.id
                );
            }
        }

        if let Some(expected_params) = &test_case.expected.query_params {
            let signed = sign_url(request)
                .unwrap_or_else(|e| panic!("case {}: signing failed: {e}", test_case.id));
            let params: HashMap<String, String> = signed
                .query_params()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect();

            for (name, expected_value) in expected_params {
                assert_eq!(
                    params.get(name),
                    Some(expected_value),
                    "case {}: query param {name} mismatch",
                    test_case.id
                );
            }

            if let Some(expected_policy) = &test_case.expected.policy_json {
                let decoded = cloudfront_b64_decode(&params["Policy"]);
                assert_eq!(
                    String::from_utf8(decoded).unwrap(),
                    *expected_policy,
                    "case {}: decoded policy mismatch",
                    test_case.id
                );
            }
        }
    }
}
