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


//! Request builders for each operation in [Storage][crate::client::Storage].

use crate::client::Storage;
use crate::model;

/// The request builder for [Storage::get_bucket_lifecycle_configuration][crate::client::Storage::get_bucket_lifecycle_configuration].
pub type GetBucketLifecycleConfiguration = gaxi::request_builder::RequestBuilder<
    Storage,
    model::GetBucketLifecycleConfigurationRequest,
    model::GetBucketLifecycleConfigurationResponse,
>;

/// The request builder for [Storage::put_bucket_lifecycle_configuration][crate::client::Storage::put_bucket_lifecycle_configuration].
pub type PutBucketLifecycleConfiguration = gaxi::request_builder::RequestBuilder<
    Storage,
    model::PutBucketLifecycleConfigurationRequest,
    (),
>;

/// The request builder for [Storage::delete_bucket_lifecycle][crate::client::Storage::delete_bucket_lifecycle].
pub type DeleteBucketLifecycle =
    gaxi::request_builder::RequestBuilder<Storage, model::DeleteBucketLifecycleRequest, ()>;

/// The request builder for [Storage::head_bucket][crate::client::Storage::head_bucket].
pub type HeadBucket =
    gaxi::request_builder::RequestBuilder<Storage, model::HeadBucketRequest, ()>;
