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

//! Nimbus Client Libraries for Rust - Logs
//!
//! This crate contains the client for the Nimbus Logs service. Use it to
//! create log groups and log streams, upload log events, search them, and
//! manage the metric filters, subscription filters, destinations, and export
//! tasks attached to log groups.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use nimbus_logs::client::Logs;
//! use nimbus_logs::model::CreateLogGroupRequest;
//! let client = Logs::builder().with_region("eu-west-1").build().await?;
//! client
//!     .create_log_group(CreateLogGroupRequest::new().set_log_group_name("my-app"))
//!     .send()
//!     .await?;
//! # anyhow::Result::<()>::Ok(()) });
//! ```

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod model;
