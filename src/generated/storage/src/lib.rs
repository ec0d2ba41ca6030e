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

//! Nimbus Client Libraries for Rust - Storage
//!
//! This crate contains a client for the bucket management operations in the
//! Nimbus Storage service. Use it to check that a bucket exists, and to read,
//! replace, or remove the lifecycle rules of a bucket.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use nimbus_storage::client::Storage;
//! use nimbus_storage::model::HeadBucketRequest;
//! let client = Storage::builder().with_region("eu-west-1").build().await?;
//! client
//!     .head_bucket(HeadBucketRequest::new().set_bucket("my-bucket"))
//!     .send()
//!     .await?;
//! # anyhow::Result::<()>::Ok(()) });
//! ```

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod model;
