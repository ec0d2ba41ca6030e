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

//! Nimbus APIs helpers.
//!
//! This crate contains the types and functions shared by all the Nimbus
//! client libraries for Rust: the error types, the retry, backoff, and
//! throttling policies, the client and request configuration, and the worker
//! pool used to run requests in the background.
//!
//! Most applications only use the types in this crate to configure clients,
//! or to interrogate the errors returned by them.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
/// It holds exactly one of the operation result or the error explaining why
/// the operation failed.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// The table used to classify service errors as retryable or throttling.
pub mod error_table;

pub mod backoff_policy;
pub mod client_builder;
pub mod executor;
pub mod exponential_backoff;
pub mod options;
pub mod response;
pub mod retry_policy;
pub mod retry_result;
pub mod retry_throttler;

#[doc(hidden)]
pub mod retry_loop_internal;

