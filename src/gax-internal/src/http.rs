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

use crate::options::{ClientConfig, tracing_enabled};
use auth::credentials::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::{DecodeError, Error};
use gax::query_parameter::QueryParameters;
use http::header::{CONTENT_TYPE, HeaderValue};
use tracing::Instrument;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Sends requests to a REST service, using the client's credentials.
///
/// The client libraries hold one of these, shared by all their request
/// builders. Each call is a single HTTP round trip: there are no retries and
/// no caching of responses.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    tracing: bool,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let cred = Self::make_credentials(&config).await?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let tracing = tracing_enabled(&config);
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            cred,
            endpoint,
            tracing,
        })
    }

    /// The credentials used by this client.
    pub fn credentials(&self) -> &Credentials {
        &self.cred
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner.request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends a request with an optional JSON body and decodes the response.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        params: &QueryParameters,
    ) -> Result<O> {
        let mut builder = params.apply(builder);
        if let Some(body) = body {
            let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                .body(payload);
        }
        self.request_attempt(builder).await
    }

    /// Sends a request whose body is raw media, and decodes the response.
    pub async fn execute_media<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        payload: bytes::Bytes,
        media_type: &str,
        params: &QueryParameters,
    ) -> Result<O> {
        let content_type = HeaderValue::from_str(media_type).map_err(Error::ser)?;
        let builder = params
            .apply(builder)
            .header(CONTENT_TYPE, content_type)
            .body(payload);
        self.request_attempt(builder).await
    }

    async fn make_credentials(config: &ClientConfig) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        let mut builder = auth::credentials::Builder::new();
        if !config.service.scopes.is_empty() {
            builder = builder.with_scopes(config.service.scopes.iter().map(String::as_str));
        }
        if let Some(path) = &config.provider.credentials_file {
            builder = builder.with_credentials_file(path);
        }
        if let Some(account) = &config.service.service_account {
            builder = builder.with_service_account(account);
        }
        builder.build().map_err(BuilderError::cred)
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<O> {
        let auth_headers = self.cred.headers().await.map_err(|e| {
            tracing::debug!("cannot obtain authentication headers: {e}");
            Error::authentication(e)
        })?;
        let request = builder
            .headers(auth_headers)
            .build()
            .map_err(Error::binding)?;
        if !self.tracing {
            return self.send(request).await;
        }
        let span = tracing::info_span!(
            "http_request",
            "http.request.method" = %request.method(),
            "url.full" = %request.url(),
            "http.response.status_code" = tracing::field::Empty,
        );
        self.send(request).instrument(span).await
    }

    async fn send<O: serde::de::DeserializeOwned + Default>(
        &self,
        request: reqwest::Request,
    ) -> Result<O> {
        let response = self.inner.execute(request).await.map_err(|e| {
            tracing::debug!("error sending request: {e}");
            Self::map_send_error(e)
        })?;
        let status = response.status();
        tracing::Span::current().record("http.response.status_code", status.as_u16());
        if !status.is_success() {
            tracing::debug!("request failed with HTTP status {status}");
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

/// The body for requests without a payload.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(
            status,
            Some(status_code),
            Some(parts.headers),
            Some(body),
        ),
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<O> {
    let response = http::Response::from(response);
    let (_, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    // Some successful responses (e.g. 204 No Content) have no body.
    if body.is_empty() {
        return Ok(O::default());
    }
    serde_json::from_slice::<O>(&body)
        .map_err(|e| Error::deser(DecodeError::new::<O>(body.clone(), e)))
}

#[cfg(test)]
mod tests {
    use gax::error::DecodeError;
    use http::{HeaderMap, HeaderValue};
    use std::error::Error as _;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Thing {
        #[serde(default)]
        name: String,
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        assert!(response.status().is_client_error());
        let response = super::to_http_error::<()>(response).await;
        let err = response.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert!(err.status().is_none(), "{err:?}");
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        use gax::error::rpc::{Code, Status};
        let detail = serde_json::json!({
            "@type": "type.googleapis.com/google.rpc.LocalizedMessage",
            "locale": "en-US",
            "message": "we searched everywhere, honest",
        });
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "The thing is not there, oh noes!",
            "status": "NOT_FOUND",
            "details": [detail.clone()]
        }});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = super::to_http_error::<()>(response).await.unwrap_err();
        let want_status = Status::default()
            .set_code(Code::NotFound)
            .set_message("The thing is not there, oh noes!")
            .set_details([detail]);
        assert_eq!(err.status(), Some(&want_status));
        assert_eq!(err.http_status_code(), Some(404_u16));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(body.to_string())).as_ref()
        );
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        assert!(response.status().is_success());
        let got = super::to_http_response::<Thing>(response).await?;
        assert_eq!(got, Thing::default());
        Ok(())
    }

    #[tokio::test]
    async fn client_empty_unit() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::NO_CONTENT, "")?;
        super::to_http_response::<()>(response).await?;
        Ok(())
    }

    #[tokio::test]
    async fn client_decode_error() -> TestResult {
        let response = resp_from_code_content(reqwest::StatusCode::OK, r#"{"name": 42}"#)?;
        let err = super::to_http_response::<Thing>(response)
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let decode = err
            .source()
            .and_then(|e| e.downcast_ref::<DecodeError>())
            .unwrap();
        assert!(decode.type_name().ends_with("Thing"), "{decode:?}");
        assert_eq!(decode.payload(), &bytes::Bytes::from(r#"{"name": 42}"#));
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;

        let response: reqwest::Response = http_resp.into();
        Ok(response)
    }
}
