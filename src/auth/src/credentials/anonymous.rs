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

//! Credentials that leave requests unsigned.
//!
//! Use them for public buckets, and for local emulators that do not check
//! signatures.
//!
//! # Example
//! ```
//! # use nimbus_auth::credentials::anonymous::Builder;
//! let credentials = Builder::new().build();
//! ```

use crate::Result;
use crate::credentials::{Credentials, CredentialsProvider, SignableRequest};
use http::HeaderMap;

/// Creates anonymous [Credentials].
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder;

impl Builder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(self) -> Credentials {
        Credentials::from(Unsigned)
    }
}

#[derive(Debug)]
struct Unsigned;

impl CredentialsProvider for Unsigned {
    async fn headers(&self, _: SignableRequest<'_>) -> Result<HeaderMap> {
        Ok(HeaderMap::default())
    }
}
