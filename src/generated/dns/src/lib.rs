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

//! Nimbus Client Libraries for Rust - DNS
//!
//! This crate contains a client for the health check operations of the
//! Nimbus DNS service. The service has a single global endpoint, the region
//! configured in the client does not change the endpoint.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use nimbus_dns::client::Dns;
//! use nimbus_dns::model::GetHealthCheckStatusRequest;
//! let client = Dns::builder().build().await?;
//! let response = client
//!     .get_health_check_status(GetHealthCheckStatusRequest::new().set_health_check_id("abc-123"))
//!     .send()
//!     .await?;
//! println!("{response:?}");
//! # anyhow::Result::<()>::Ok(()) });
//! ```

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod model;
