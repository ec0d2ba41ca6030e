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

//! Nimbus Client Libraries for Rust - Shapes of services without a client
//!
//! This crate contains model shapes of Nimbus services that do not have a
//! generated client yet. Applications that call these services through
//! other means can use the shapes to encode and decode the documents.
//!
//! # Example
//! ```
//! use nimbus_shapes::iot::TopicRuleListItem;
//! let item: TopicRuleListItem = serde_json::from_str(r#"{"ruleName": "alerts"}"#)?;
//! assert_eq!(item.rule_name.as_deref(), Some("alerts"));
//! # anyhow::Result::<()>::Ok(())
//! ```

pub use gax::Result;
pub use gax::error::Error;

pub mod cache;
pub mod clusters;
pub mod iot;
