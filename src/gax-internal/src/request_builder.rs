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

//! The request builder shared by all the service clients.
//!
//! Each client method returns a [RequestBuilder]. Applications set the request
//! and any per-request options, and then pick one of the execution modes:
//!
//! * [send][RequestBuilder::send] and
//!   [send_with_response][RequestBuilder::send_with_response] run the request
//!   on the caller's task.
//! * [spawn][RequestBuilder::spawn] runs the request on the client's worker
//!   pool and returns a handle to its outcome.
//! * [send_with_callback][RequestBuilder::send_with_callback] runs the request
//!   on the client's worker pool and invokes a callback with the outcome.

use crate::dispatcher::Dispatcher;
use crate::operation::Operation;
use gax::Result;
use gax::executor::PendingOutcome;
use gax::options::RequestOptions;
use gax::response::Response;
use std::sync::Arc;

/// Configures and executes a single operation.
#[derive(Clone, Debug)]
pub struct RequestBuilder<C, Req, Res> {
    client: C,
    dispatcher: Arc<Dispatcher>,
    operation: Operation<Req, Res>,
    request: Req,
    options: RequestOptions,
}

impl<C, Req, Res> RequestBuilder<C, Req, Res>
where
    C: Clone + Send + Sync + 'static,
    Req: Default + Send + Sync + 'static,
    Res: Send + 'static,
{
    pub fn new(client: C, dispatcher: Arc<Dispatcher>, operation: Operation<Req, Res>) -> Self {
        Self {
            client,
            dispatcher,
            operation,
            request: Req::default(),
            options: RequestOptions::default(),
        }
    }

    /// Sets the full request, replacing any prior values.
    pub fn with_request<V: Into<Req>>(mut self, v: V) -> Self {
        self.request = v.into();
        self
    }

    /// Sets all the request options, replacing any prior values.
    pub fn with_options<V: Into<RequestOptions>>(mut self, v: V) -> Self {
        self.options = v.into();
        self
    }

    /// The request sent by this builder.
    pub fn request(&self) -> &Req {
        &self.request
    }

    /// Sends the request and returns the decoded result.
    pub async fn send(self) -> Result<Res> {
        self.send_with_response().await.map(Response::into_body)
    }

    /// Sends the request and returns the decoded result with its metadata.
    pub async fn send_with_response(self) -> Result<Response<Res>> {
        self.dispatcher
            .execute(self.operation, &self.request, self.options)
            .await
    }

    /// Sends the request on the client's worker pool.
    ///
    /// The returned handle can be awaited, or waited on from synchronous code.
    pub fn spawn(self) -> PendingOutcome<Res> {
        let dispatcher = self.dispatcher.clone();
        gax::executor::spawn(dispatcher.executor(), self.send())
    }

    /// Sends the request on the client's worker pool and calls `callback` with
    /// the outcome.
    ///
    /// The callback runs exactly once, on a worker pool thread. It receives
    /// the client, the original request, the outcome, and `context`.
    pub fn send_with_callback<Ctx, F>(self, context: Ctx, callback: F)
    where
        Ctx: Send + 'static,
        F: FnOnce(&C, &Req, Result<Res>, Ctx) + Send + 'static,
    {
        let Self {
            client,
            dispatcher,
            operation,
            request,
            options,
        } = self;
        let worker = dispatcher.clone();
        worker.executor().submit(Box::pin(async move {
            let outcome = dispatcher
                .execute(operation, &request, options)
                .await
                .map(Response::into_body);
            callback(&client, &request, outcome, context);
        }));
    }
}

impl<C, Req, Res> gax::options::internal::RequestBuilder for RequestBuilder<C, Req, Res> {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}
