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

//! Nimbus Client Libraries for Rust - Pipeline
//!
//! This crate contains the client for the Nimbus Pipeline service, a
//! continuous delivery service. Use it to query the state of a pipeline, its
//! stages, and the latest execution of each action.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use nimbus_pipeline::client::Pipeline;
//! use nimbus_pipeline::model::GetPipelineStateRequest;
//! let client = Pipeline::builder().build().await?;
//! let state = client
//!     .get_pipeline_state(GetPipelineStateRequest::new().set_name("deploy"))
//!     .send()
//!     .await?;
//! println!("version {:?}", state.pipeline_version);
//! # anyhow::Result::<()>::Ok(()) });
//! ```

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod model;
