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

//! Errors returned by the client libraries.
//!
//! The client libraries distinguish between errors detected while trying to
//! send a request (e.g. cannot open a connection), errors trying to receive a
//! response (e.g. the connection is dropped before the full response), and
//! errors returned by the service itself. All of them are reported using the
//! [Error] type.
//!
//! # Examples
//!
//! ```
//! use nimbus_gax::error::Error;
//! fn handle_error(e: Error) {
//!     if let Some(service) = e.service_error() {
//!         println!("the service rejected the request: {}", service.error_code());
//!     } else if e.is_transport() {
//!         println!("could not reach the service: {e}");
//!     }
//! }
//! ```

mod core_error;
mod credentials;
mod service_error;
pub use core_error::*;
pub use credentials::*;
pub use service_error::*;
