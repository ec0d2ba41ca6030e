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

//! Contains the [Storage] client and related types.

use crate::builder;
use crate::model;
use gaxi::dispatcher::Dispatcher;
use gaxi::document::Document;
use gaxi::envelope::HttpMethod;
use gaxi::operation::Operation;
use gaxi::request_builder::RequestBuilder;
use gaxi::service::{Protocol, ServiceInfo};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo {
    signing_name: "storage",
    endpoint_prefix: "storage",
    protocol: Protocol::RestXml,
    global_endpoint: None,
    signing_region: None,
};

/// Implements a client for the Nimbus Storage service.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use nimbus_storage::client::Storage;
/// let client = Storage::builder().build().await?;
/// // use `client` to make requests to the Storage service.
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Storage` use the `with_*` methods in the type returned by
/// [builder()][Storage::builder]. The default configuration should work for most
/// applications. Common configuration changes include:
///
/// * [with_region()]: by default the client uses the region in the
///   `NIMBUS_REGION` environment variable, or `us-east-1`.
/// * [with_credentials()]: by default the client reads credentials from the
///   environment.
///
/// # Pooling and Cloning
///
/// `Storage` holds a connection pool and a worker pool internally, it is advised
/// to create one and then reuse it. You do not need to wrap `Storage` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_region()]: ClientBuilder::with_region
/// [with_credentials()]: ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct Storage {
    inner: Arc<Dispatcher>,
}

/// A builder for [Storage].
///
/// ```no_run
/// # tokio_test::block_on(async {
/// # use nimbus_storage::client::Storage;
/// let client = Storage::builder()
///     .with_region("eu-west-1")
///     .with_tracing()
///     .build()
///     .await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, auth::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::Storage;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Storage;
        type Credentials = auth::credentials::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::build(config).await
        }
    }
}

impl Storage {
    /// Returns a builder for [Storage].
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    /// Creates a client with the default configuration.
    pub async fn new() -> gax::client_builder::Result<Self> {
        Self::builder().build().await
    }

    async fn build(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = Dispatcher::new(config, SERVICE).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    fn request<Req, Res>(
        &self,
        operation: Operation<Req, Res>,
        request: Req,
    ) -> RequestBuilder<Self, Req, Res>
    where
        Req: Default + Send + Sync + 'static,
        Res: Send + 'static,
    {
        RequestBuilder::new(self.clone(), self.inner.clone(), operation).with_request(request)
    }

    /// Returns the lifecycle rules of a bucket.
    ///
    /// Fails with a `NoSuchLifecycleConfiguration` service error if the bucket has
    /// no lifecycle configuration.
    ///
    /// # Example
    /// ```no_run
    /// # use nimbus_storage::client::Storage;
    /// # use nimbus_storage::model::GetBucketLifecycleConfigurationRequest;
    /// async fn sample(client: &Storage) -> nimbus_storage::Result<()> {
    ///     let request = GetBucketLifecycleConfigurationRequest::new().set_bucket("my-bucket");
    ///     let response = client.get_bucket_lifecycle_configuration(request).send().await?;
    ///     for rule in response.rules {
    ///         println!("{:?} {:?}", rule.id, rule.status);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_bucket_lifecycle_configuration(
        &self,
        request: model::GetBucketLifecycleConfigurationRequest,
    ) -> builder::GetBucketLifecycleConfiguration {
        let operation = Operation::rest_xml(
            "GetBucketLifecycleConfiguration",
            HttpMethod::Get,
            "/{Bucket}?lifecycle",
        )
        .with_path_params(|r: &model::GetBucketLifecycleConfigurationRequest| {
            vec![("Bucket", r.bucket.clone())]
        });
        self.request(operation, request)
    }

    /// Replaces the lifecycle rules of a bucket.
    ///
    /// # Example
    /// ```no_run
    /// # use nimbus_storage::client::Storage;
    /// # use nimbus_storage::model::*;
    /// async fn sample(client: &Storage) -> nimbus_storage::Result<()> {
    ///     let rule = LifecycleRule::new()
    ///         .set_id("expire-logs")
    ///         .set_prefix("logs/")
    ///         .set_status(ExpirationStatus::Enabled)
    ///         .set_expiration(LifecycleExpiration::new().set_days(30));
    ///     let request = PutBucketLifecycleConfigurationRequest::new()
    ///         .set_bucket("my-bucket")
    ///         .set_lifecycle_configuration(BucketLifecycleConfiguration::new().set_rules([rule]));
    ///     client.put_bucket_lifecycle_configuration(request).send().await
    /// }
    /// ```
    pub fn put_bucket_lifecycle_configuration(
        &self,
        request: model::PutBucketLifecycleConfigurationRequest,
    ) -> builder::PutBucketLifecycleConfiguration {
        let operation = Operation::rest_xml(
            "PutBucketLifecycleConfiguration",
            HttpMethod::Put,
            "/{Bucket}?lifecycle",
        )
        .with_path_params(|r: &model::PutBucketLifecycleConfigurationRequest| {
            vec![("Bucket", r.bucket.clone())]
        })
        .with_encode(|r| {
            Ok(r.lifecycle_configuration
                .as_ref()
                .map(|c| Document::from_xml("LifecycleConfiguration", c)))
        });
        self.request(operation, request)
    }

    /// Removes all the lifecycle rules of a bucket.
    pub fn delete_bucket_lifecycle(
        &self,
        request: model::DeleteBucketLifecycleRequest,
    ) -> builder::DeleteBucketLifecycle {
        let operation = Operation::rest_xml(
            "DeleteBucketLifecycle",
            HttpMethod::Delete,
            "/{Bucket}?lifecycle",
        )
        .with_path_params(|r: &model::DeleteBucketLifecycleRequest| {
            vec![("Bucket", r.bucket.clone())]
        });
        self.request(operation, request)
    }

    /// Checks if a bucket exists, and the caller has permission to access it.
    ///
    /// The response has no body. Errors are reported by the status code alone, for
    /// example, a missing bucket is a `NotFound` service error with status 404.
    pub fn head_bucket(&self, request: model::HeadBucketRequest) -> builder::HeadBucket {
        let operation = Operation::rest_xml("HeadBucket", HttpMethod::Head, "/{Bucket}")
            .with_path_params(|r: &model::HeadBucketRequest| vec![("Bucket", r.bucket.clone())]);
        self.request(operation, request)
    }
}
