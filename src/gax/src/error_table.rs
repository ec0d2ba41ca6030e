// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Classifies service errors.
//!
//! Services report errors using an HTTP status and an error code. Server
//! errors (5xx) are transient, and the request may succeed if retried. Client
//! errors (4xx) are not retried, with one exception: errors indicating the
//! caller is sending requests too fast, these are "throttling" errors. Some
//! errors indicate the local clock is too far from the service clock, and the
//! request signature is no longer valid.
//!
//! The [ErrorTable] holds the codes for throttling and clock skew errors. All the
//! clients share the same default table, applications can override it using
//! [ClientBuilder::with_error_table].
//!
//! # Example
//! ```
//! # use nimbus_gax::error_table::ErrorTable;
//! let table = ErrorTable::default().with_throttling_code("EC2ThrottledException");
//! let class = table.classify(400, "EC2ThrottledException");
//! assert!(class.retryable);
//! assert!(class.throttling);
//! ```
//!
//! [ClientBuilder::with_error_table]: crate::client_builder::ClientBuilder::with_error_table

use std::collections::HashSet;

const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
];

const CLOCK_SKEW_CODES: &[&str] = &[
    "RequestTimeTooSkewed",
    "RequestExpired",
    "InvalidSignatureException",
    "SignatureDoesNotMatch",
    "AuthFailure",
    "RequestInTheFuture",
];

/// The classification of a single service error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Classification {
    /// The request may succeed if retried.
    pub retryable: bool,
    /// The caller exceeded some rate or quota.
    pub throttling: bool,
    /// The signature was rejected because the local clock is skewed.
    pub clock_skew: bool,
}

/// A table of error codes, used to classify service errors.
#[derive(Clone, Debug)]
pub struct ErrorTable {
    throttling: HashSet<String>,
    clock_skew: HashSet<String>,
}

impl ErrorTable {
    /// Creates a table without any error codes.
    ///
    /// With an empty table only the HTTP status determines if an error is
    /// retryable: 5xx errors are retryable, and 429 is a throttling error.
    pub fn empty() -> Self {
        Self {
            throttling: HashSet::new(),
            clock_skew: HashSet::new(),
        }
    }

    /// Treat `code` as a throttling error.
    pub fn with_throttling_code<T: Into<String>>(mut self, code: T) -> Self {
        self.throttling.insert(code.into());
        self
    }

    /// Treat `code` as a signature rejected due to clock skew.
    pub fn with_clock_skew_code<T: Into<String>>(mut self, code: T) -> Self {
        self.clock_skew.insert(code.into());
        self
    }

    /// Classifies an error given its HTTP status and error code.
    ///
    /// Only server errors and throttling errors are retryable. Any other
    /// client error is final, whatever its code.
    pub fn classify(&self, http_status: u16, error_code: &str) -> Classification {
        let throttling = http_status == 429 || self.throttling.contains(error_code);
        let retryable = (500..600).contains(&http_status) || throttling;
        Classification {
            retryable,
            throttling,
            clock_skew: self.clock_skew.contains(error_code),
        }
    }
}

impl std::default::Default for ErrorTable {
    /// Returns the table used by all clients unless configured otherwise.
    fn default() -> Self {
        fn to_set(codes: &[&str]) -> HashSet<String> {
            codes.iter().map(|c| c.to_string()).collect()
        }
        Self {
            throttling: to_set(THROTTLING_CODES),
            clock_skew: to_set(CLOCK_SKEW_CODES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(500, "InternalFailure", true, false)]
    #[test_case(503, "", true, false)]
    #[test_case(502, "BadGateway", true, false)]
    #[test_case(400, "ThrottlingException", true, true)]
    #[test_case(503, "SlowDown", true, true)]
    #[test_case(429, "", true, true)]
    #[test_case(400, "RequestTimeout", false, false)]
    #[test_case(408, "RequestTimeoutException", false, false)]
    #[test_case(500, "RequestTimeout", true, false)]
    #[test_case(400, "ValidationException", false, false)]
    #[test_case(404, "NoSuchBucket", false, false)]
    #[test_case(403, "AccessDenied", false, false)]
    fn default_table(status: u16, code: &str, retryable: bool, throttling: bool) {
        let got = ErrorTable::default().classify(status, code);
        assert_eq!(got.retryable, retryable, "{got:?}");
        assert_eq!(got.throttling, throttling, "{got:?}");
        assert!(!got.clock_skew, "{got:?}");
    }

    #[test_case("RequestTimeTooSkewed")]
    #[test_case("InvalidSignatureException")]
    #[test_case("SignatureDoesNotMatch")]
    fn clock_skew(code: &str) {
        let got = ErrorTable::default().classify(403, code);
        assert!(got.clock_skew, "{got:?}");
        assert!(!got.retryable, "{got:?}");
    }

    #[test]
    fn empty() {
        let table = ErrorTable::empty();
        let got = table.classify(400, "ThrottlingException");
        assert_eq!(got, Classification::default());
        let got = table.classify(429, "");
        assert!(got.throttling && got.retryable, "{got:?}");
    }

    #[test]
    fn custom() {
        let table = ErrorTable::empty()
            .with_throttling_code("Busy")
            .with_clock_skew_code("BadClock");
        assert!(table.classify(400, "Busy").throttling);
        assert!(table.classify(400, "Busy").retryable);
        assert!(!table.classify(400, "TryLater").retryable);
        assert!(table.classify(503, "TryLater").retryable);
        assert!(!table.classify(503, "TryLater").throttling);
        assert!(table.classify(400, "BadClock").clock_skew);
    }
}
