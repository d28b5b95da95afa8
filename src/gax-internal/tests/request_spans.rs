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

#[cfg(test)]
mod tests {
    use gax::query_parameter::QueryParameters;
    use google_cloud_rest_gax_internal::http::{NoBody, ReqwestClient};
    use google_cloud_rest_gax_internal::options::ClientConfig;
    use google_cloud_rest_test_utils::credentials::test_credentials;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::{Value, json};
    use std::collections::{BTreeMap, HashMap};
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Result<T> = anyhow::Result<T>;

    #[derive(Clone, Debug, Default)]
    struct CapturedSpan {
        name: String,
        fields: BTreeMap<String, String>,
    }

    #[derive(Default)]
    struct Captured {
        spans: Vec<CapturedSpan>,
        live: HashMap<u64, usize>,
    }

    /// Records every span and the values recorded on it, including values
    /// recorded after the span is created.
    #[derive(Clone, Default)]
    struct SpanCollector(Arc<Mutex<Captured>>);

    impl SpanCollector {
        fn spans_named(&self, name: &str) -> Vec<CapturedSpan> {
            let captured = self.0.lock().unwrap();
            captured
                .spans
                .iter()
                .filter(|s| s.name == name)
                .cloned()
                .collect()
        }
    }

    struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

    impl Visit for FieldVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for SpanCollector {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, _ctx: Context<'_, S>) {
            let mut span = CapturedSpan {
                name: attrs.metadata().name().to_string(),
                ..CapturedSpan::default()
            };
            attrs.record(&mut FieldVisitor(&mut span.fields));
            let mut captured = self.0.lock().unwrap();
            let index = captured.spans.len();
            captured.spans.push(span);
            captured.live.insert(id.into_u64(), index);
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
            let mut captured = self.0.lock().unwrap();
            let Some(index) = captured.live.get(&id.into_u64()).copied() else {
                return;
            };
            values.record(&mut FieldVisitor(&mut captured.spans[index].fields));
        }
    }

    async fn traced_client(server: &Server) -> Result<ReqwestClient> {
        let mut config = ClientConfig::default();
        config.cred = Some(test_credentials());
        config.tracing = true;
        let client = ReqwestClient::new(config, &format!("http://{}", server.addr())).await?;
        Ok(client)
    }

    #[tokio::test]
    async fn request_span_records_status() -> Result<()> {
        let collector = SpanCollector::default();
        let subscriber = tracing_subscriber::registry().with(collector.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things/abc"))
                .respond_with(json_encoded(json!({"name": "abc"}))),
        );
        let client = traced_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things/abc".into());
        let response: Value = client
            .execute(builder, None::<NoBody>, &QueryParameters::new())
            .await?;
        assert_eq!(response, json!({"name": "abc"}));

        let spans = collector.spans_named("http_request");
        assert_eq!(spans.len(), 1, "{spans:?}");
        let fields = &spans[0].fields;
        assert_eq!(
            fields.get("http.request.method").map(String::as_str),
            Some("GET"),
            "{fields:?}"
        );
        let url = fields.get("url.full").cloned().unwrap_or_default();
        assert!(url.ends_with("/v1/things/abc"), "{fields:?}");
        assert_eq!(
            fields.get("http.response.status_code").map(String::as_str),
            Some("200"),
            "{fields:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn request_span_records_error_status() -> Result<()> {
        let collector = SpanCollector::default();
        let subscriber = tracing_subscriber::registry().with(collector.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let body = json!({"error": {"code": 404, "message": "not found", "status": "NOT_FOUND"}});
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/things/missing"))
                .respond_with(status_code(404).body(body.to_string())),
        );
        let client = traced_client(&server).await?;
        let builder = client.builder(reqwest::Method::DELETE, "/v1/things/missing".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, &QueryParameters::new())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");

        let spans = collector.spans_named("http_request");
        assert_eq!(spans.len(), 1, "{spans:?}");
        let fields = &spans[0].fields;
        assert_eq!(
            fields.get("http.request.method").map(String::as_str),
            Some("DELETE"),
            "{fields:?}"
        );
        let url = fields.get("url.full").cloned().unwrap_or_default();
        assert!(url.ends_with("/v1/things/missing"), "{fields:?}");
        assert_eq!(
            fields.get("http.response.status_code").map(String::as_str),
            Some("404"),
            "{fields:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn no_span_without_tracing() -> Result<()> {
        let collector = SpanCollector::default();
        let subscriber = tracing_subscriber::registry().with(collector.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things/abc"))
                .respond_with(json_encoded(json!({"name": "abc"}))),
        );
        let mut config = ClientConfig::default();
        config.cred = Some(test_credentials());
        let client = ReqwestClient::new(config, &format!("http://{}", server.addr())).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things/abc".into());
        let _: Value = client
            .execute(builder, None::<NoBody>, &QueryParameters::new())
            .await?;

        let spans = collector.spans_named("http_request");
        assert!(spans.is_empty(), "{spans:?}");
        Ok(())
    }
}
