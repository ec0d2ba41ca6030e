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

//! Run requests in the background.
//!
//! Each client method can run its request in three ways:
//!
//! * `send()` runs the request on the caller's task.
//! * `spawn()` runs the request on the client's worker pool, and returns a
//!   [PendingOutcome]. The caller retrieves the result later, either
//!   awaiting the handle or blocking on [PendingOutcome::wait].
//! * `send_with_callback()` runs the request on the client's worker pool, and
//!   calls a function with the result. The function runs on a worker pool
//!   thread, never on the calling thread.
//!
//! By default each client creates its own [WorkerPool]. Applications can
//! share a pool between clients using [ClientBuilder::with_worker_pool].
//!
//! [ClientBuilder::with_worker_pool]: crate::client_builder::ClientBuilder::with_worker_pool
//!
//! # Example
//! ```
//! # use nimbus_gax::executor::*;
//! let pool = WorkerPool::builder().with_threads(2).build()?;
//! let pending = spawn(&pool, async { Ok::<_, nimbus_gax::error::Error>(42) });
//! assert_eq!(pending.wait()?, 42);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::Result;
use crate::error::Error;
use futures::future::BoxFuture;
use pin_project::pin_project;
use std::future::Future;
use std::cell::Cell;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// The number of threads in the default worker pool.
pub const DEFAULT_WORKER_THREADS: usize = 4;

const THREAD_NAME: &str = "nimbus-worker";

static NEXT_POOL_ID: AtomicUsize = AtomicUsize::new(1);

thread_local! {
    // The id of the pool owning the current thread, zero for other threads.
    static CURRENT_POOL: Cell<usize> = const { Cell::new(0) };
}

/// Runs background work for a client.
///
/// Implementations must run each task to completion, on a thread other than
/// the one calling [submit][Executor::submit].
pub trait Executor: Send + Sync + std::fmt::Debug {
    /// Runs `task` in the background.
    fn submit(&self, task: BoxFuture<'static, ()>);
}

/// A helper type to use a [WorkerPool] in client options.
///
/// Only dedicated pools convert into this type. A handle to an arbitrary
/// runtime could run the work on the thread that submitted it.
#[derive(Clone, Debug)]
pub struct ExecutorArg(Arc<dyn Executor>);

impl From<WorkerPool> for ExecutorArg {
    fn from(value: WorkerPool) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<WorkerPool>> for ExecutorArg {
    fn from(value: Arc<WorkerPool>) -> Self {
        Self(value)
    }
}

impl From<ExecutorArg> for Arc<dyn Executor> {
    fn from(value: ExecutorArg) -> Arc<dyn Executor> {
        value.0
    }
}

/// A fixed-size pool of threads dedicated to running requests.
///
/// The pool owns a multi-threaded tokio runtime. Dropping the pool stops the
/// runtime without waiting for pending tasks, this is safe even from
/// asynchronous contexts. Tasks still pending at that point are discarded,
/// and their [PendingOutcome] completes with an error.
#[derive(Debug)]
pub struct WorkerPool {
    runtime: Option<tokio::runtime::Runtime>,
    threads: usize,
    id: usize,
}

impl WorkerPool {
    /// Creates a pool with [DEFAULT_WORKER_THREADS] threads.
    pub fn new() -> std::io::Result<Self> {
        Self::builder().build()
    }

    /// Returns a builder to configure a new pool.
    pub fn builder() -> WorkerPoolBuilder {
        WorkerPoolBuilder::default()
    }

    /// The number of threads in this pool.
    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl Executor for WorkerPool {
    fn submit(&self, task: BoxFuture<'static, ()>) {
        let Some(runtime) = &self.runtime else {
            return;
        };
        if CURRENT_POOL.get() != self.id {
            runtime.spawn(task);
            return;
        }
        // A pool thread would pick up its own task. Blocking threads never
        // include the submitting thread.
        let handle = runtime.handle().clone();
        runtime.spawn_blocking(move || handle.block_on(task));
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// Configures a [WorkerPool].
#[derive(Clone, Debug)]
pub struct WorkerPoolBuilder {
    threads: usize,
    thread_name: String,
}

impl Default for WorkerPoolBuilder {
    fn default() -> Self {
        Self {
            threads: DEFAULT_WORKER_THREADS,
            thread_name: THREAD_NAME.to_string(),
        }
    }
}

impl WorkerPoolBuilder {
    /// Sets the number of threads, values below one are treated as one.
    pub fn with_threads(mut self, v: usize) -> Self {
        self.threads = v.max(1);
        self
    }

    /// Sets the name of the pool threads.
    pub fn with_thread_name<V: Into<String>>(mut self, v: V) -> Self {
        self.thread_name = v.into();
        self
    }

    /// Starts the pool threads.
    pub fn build(self) -> std::io::Result<WorkerPool> {
        let id = NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.threads)
            .thread_name(self.thread_name)
            .on_thread_start(move || CURRENT_POOL.set(id))
            .enable_all()
            .build()?;
        Ok(WorkerPool {
            runtime: Some(runtime),
            threads: self.threads,
            id,
        })
    }
}

/// The eventual outcome of a request running in the background.
///
/// The handle is a [Future], applications in an asynchronous context can
/// `.await` it. Synchronous applications can call [wait][Self::wait].
/// Dropping the handle does not cancel the request.
#[pin_project]
#[derive(Debug)]
pub struct PendingOutcome<T> {
    #[pin]
    receiver: oneshot::Receiver<Result<T>>,
}

impl<T> PendingOutcome<T> {
    /// Blocks the current thread until the request completes.
    ///
    /// Do not call this function from an asynchronous context, use `.await`
    /// instead.
    pub fn wait(self) -> Result<T> {
        futures::executor::block_on(self)
    }
}

impl<T> Future for PendingOutcome<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        match this.receiver.poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // The task was discarded before completing, typically because the
            // worker pool shut down.
            Poll::Ready(Err(e)) => Poll::Ready(Err(Error::other(e))),
        }
    }
}

/// Runs `future` on `executor`, returning a handle to its outcome.
pub fn spawn<T, F>(executor: &dyn Executor, future: F) -> PendingOutcome<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T>> + Send + 'static,
{
    let (sender, receiver) = oneshot::channel();
    executor.submit(Box::pin(async move {
        // The receiver may be gone, the application discarded the handle.
        let _ = sender.send(future.await);
    }));
    PendingOutcome { receiver }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::error::Error as _;
    use std::sync::Mutex;

    #[test]
    fn traits() {
        assert_impl_all!(WorkerPool: Executor, Send, Sync);
        assert_impl_all!(PendingOutcome<String>: Future<Output = Result<String>>, Send, Unpin);
        assert_impl_all!(ExecutorArg: Clone, Send, Sync);
        assert_impl_all!(WorkerPool: Into<ExecutorArg>);
        assert_impl_all!(Arc<WorkerPool>: Into<ExecutorArg>);
        assert_not_impl_any!(tokio::runtime::Handle: Into<ExecutorArg>);
    }

    #[test]
    fn builder() -> anyhow::Result<()> {
        let pool = WorkerPool::new()?;
        assert_eq!(pool.threads(), DEFAULT_WORKER_THREADS);
        let pool = WorkerPool::builder().with_threads(0).build()?;
        assert_eq!(pool.threads(), 1);
        Ok(())
    }

    #[test]
    fn runs_on_named_thread() -> anyhow::Result<()> {
        let pool = WorkerPool::builder()
            .with_threads(2)
            .with_thread_name("test-worker")
            .build()?;
        let caller = std::thread::current().id();
        let pending = spawn(&pool, async move {
            let current = std::thread::current();
            Ok::<_, Error>((current.id(), current.name().map(str::to_string)))
        });
        let (id, name) = pending.wait()?;
        assert_ne!(id, caller);
        assert_eq!(name.as_deref(), Some("test-worker"));
        Ok(())
    }

    #[test]
    fn propagates_errors() -> anyhow::Result<()> {
        let pool = WorkerPool::builder().with_threads(1).build()?;
        let pending = spawn::<(), _>(&pool, async { Err(Error::timeout("simulated")) });
        let err = pending.wait().unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn await_outcome() -> anyhow::Result<()> {
        let pool = WorkerPool::builder().with_threads(1).build()?;
        let got = spawn(&pool, async { Ok::<_, Error>("done") }).await?;
        assert_eq!(got, "done");
        // Dropping a runtime from an async context is safe.
        drop(pool);
        Ok(())
    }

    #[tokio::test]
    async fn never_runs_on_calling_runtime() -> anyhow::Result<()> {
        let pool = WorkerPool::builder().with_threads(1).build()?;
        let arg = ExecutorArg::from(pool);
        let executor: Arc<dyn Executor> = arg.into();
        let caller = std::thread::current().id();
        let got = spawn(executor.as_ref(), async {
            Ok::<_, Error>(std::thread::current().id())
        })
        .await?;
        assert_ne!(got, caller);
        Ok(())
    }

    #[test]
    fn nested_submit_uses_another_thread() -> anyhow::Result<()> {
        let pool = Arc::new(WorkerPool::builder().with_threads(1).build()?);
        let inner = pool.clone();
        let (outer, nested) = spawn(pool.as_ref(), async move {
            let outer = std::thread::current().id();
            let nested = spawn(inner.as_ref(), async {
                Ok::<_, Error>(std::thread::current().id())
            })
            .await?;
            Ok::<_, Error>((outer, nested))
        })
        .wait()?;
        assert_ne!(outer, nested);
        Ok(())
    }

    #[derive(Debug, Default)]
    struct Discard(Mutex<u32>);
    impl Executor for Discard {
        fn submit(&self, _task: BoxFuture<'static, ()>) {
            *self.0.lock().unwrap() += 1;
        }
    }

    #[test]
    fn discarded_task() {
        let executor = Discard::default();
        let pending = spawn(&executor, async { Ok::<_, Error>(1) });
        let err = pending.wait().unwrap_err();
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<oneshot::error::RecvError>());
        assert!(source.is_some(), "{err:?}");
        assert_eq!(*executor.0.lock().unwrap(), 1);
    }

    #[test]
    fn executor_arg() -> anyhow::Result<()> {
        let pool = Arc::new(WorkerPool::builder().with_threads(1).build()?);
        let arg = ExecutorArg::from(pool.clone());
        let executor: Arc<dyn Executor> = arg.into();
        let got = spawn(executor.as_ref(), async { Ok::<_, Error>(1) }).wait()?;
        assert_eq!(got, 1);
        Ok(())
    }
}
