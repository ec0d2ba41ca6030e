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

//! Verify the spans created by the dispatcher.

#[cfg(test)]
mod tests {
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptions;
    use gax::retry_throttler::CircuitBreaker;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use nimbus_gax_internal::dispatcher::Dispatcher;
    use nimbus_gax_internal::operation::Operation;
    use nimbus_gax_internal::options::ClientConfig;
    use nimbus_gax_internal::service::{Protocol, ServiceInfo};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Result<T> = anyhow::Result<T>;

    const SERVICE: ServiceInfo = ServiceInfo {
        signing_name: "test",
        endpoint_prefix: "test",
        protocol: Protocol::Json {
            target_prefix: "Test_20250101",
        },
        global_endpoint: None,
        signing_region: None,
    };

    #[derive(Clone, Debug, Default, PartialEq)]
    struct CapturedSpan {
        name: &'static str,
        fields: BTreeMap<String, String>,
    }

    /// Captures all the spans, in creation order.
    #[derive(Clone, Debug, Default)]
    struct TestLayer {
        spans: Arc<Mutex<Vec<(Id, CapturedSpan)>>>,
    }

    impl TestLayer {
        fn captured(&self) -> Vec<CapturedSpan> {
            let spans = self.spans.lock().expect("poisoned lock");
            spans.iter().map(|(_, s)| s.clone()).collect()
        }
    }

    struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

    impl Visit for FieldVisitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for TestLayer {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, _ctx: Context<'_, S>) {
            let mut span = CapturedSpan {
                name: attrs.metadata().name(),
                fields: BTreeMap::new(),
            };
            attrs.record(&mut FieldVisitor(&mut span.fields));
            let mut spans = self.spans.lock().expect("poisoned lock");
            spans.push((id.clone(), span));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
            let mut spans = self.spans.lock().expect("poisoned lock");
            if let Some((_, span)) = spans.iter_mut().find(|(i, _)| i == id) {
                values.record(&mut FieldVisitor(&mut span.fields));
            }
        }
    }

    #[tokio::test]
    async fn spans_for_each_attempt() -> Result<()> {
        let layer = TestLayer::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(layer.clone()));

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .times(2)
                .respond_with(cycle(vec![
                    Box::new(status_code(503)) as Box<dyn Responder>,
                    Box::new(status_code(200).body(r#"{"status": "done"}"#)),
                ])),
        );
        let mut config = test_config(&server);
        config.tracing = true;
        let dispatcher = Dispatcher::new(config, SERVICE).await?;
        let response = dispatcher
            .execute::<Value, Value>(Operation::json("Echo"), &json!({}), RequestOptions::default())
            .await?;
        assert_eq!(response.retry_count(), 1);

        let spans = layer.captured();
        let dispatch = spans
            .iter()
            .filter(|s| s.name == "dispatch")
            .collect::<Vec<_>>();
        assert_eq!(dispatch.len(), 1, "{spans:?}");
        assert_eq!(dispatch[0].fields.get("service").map(String::as_str), Some("test"));
        assert_eq!(dispatch[0].fields.get("operation").map(String::as_str), Some("Echo"));

        let attempts = spans
            .iter()
            .filter(|s| s.name == "http_request")
            .collect::<Vec<_>>();
        assert_eq!(attempts.len(), 2, "{spans:?}");
        let field = |i: usize, name: &str| attempts[i].fields.get(name).cloned();
        assert_eq!(field(0, "http.request.method").as_deref(), Some("POST"));
        assert_eq!(field(0, "http.request.resend_count").as_deref(), Some("0"));
        assert_eq!(field(0, "http.response.status_code").as_deref(), Some("503"));
        assert_eq!(field(1, "http.request.resend_count").as_deref(), Some("1"));
        assert_eq!(field(1, "http.response.status_code").as_deref(), Some("200"));
        assert_eq!(field(1, "server.address").as_deref(), Some("127.0.0.1"));
        Ok(())
    }

    #[tokio::test]
    async fn no_attempt_spans_without_tracing() -> Result<()> {
        let layer = TestLayer::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(layer.clone()));

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/"))
                .respond_with(status_code(200).body("{}")),
        );
        let dispatcher = Dispatcher::new(test_config(&server), SERVICE).await?;
        let _ = dispatcher
            .execute::<Value, Value>(Operation::json("Echo"), &json!({}), RequestOptions::default())
            .await?;

        let spans = layer.captured();
        assert!(spans.iter().any(|s| s.name == "dispatch"), "{spans:?}");
        assert!(!spans.iter().any(|s| s.name == "http_request"), "{spans:?}");
        Ok(())
    }

    fn test_config(server: &Server) -> ClientConfig {
        use auth::credentials::anonymous::Builder as Anonymous;
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}", server.addr()));
        config.cred = Some(Anonymous::new().build());
        config.backoff_policy = Some(Arc::new(
            ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(1))
                .clamp(),
        ));
        config.retry_throttler = Arc::new(Mutex::new(CircuitBreaker::default()));
        config
    }
}
