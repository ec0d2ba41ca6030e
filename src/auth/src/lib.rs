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

//! Nimbus Client Libraries for Rust - Authentication Components
//!
//! This crate contains the types and functions used to authenticate requests
//! sent to Nimbus services. The service clients consume an implementation of
//! [credentials::Credentials], and use these credentials to sign each request
//! before it is sent.
//!
//! Most applications use the default credentials, which are loaded from the
//! environment. Applications can also provide a static access key, or use
//! anonymous credentials to access public resources.

pub mod build_errors;

/// Types and functions to work with Nimbus credentials.
pub mod credentials;

/// The request signing algorithm.
pub mod signing;

/// A `Result` alias where the `Err` case is
/// `nimbus_gax::error::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, gax::error::CredentialsError>;
