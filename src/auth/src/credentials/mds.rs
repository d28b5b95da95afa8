// Copyright 2024 Google LLC
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

//! [Metadata Service] Credentials type.
//!
//! Google Cloud environments such as [Google Compute Engine (GCE)][gce-link],
//! [Google Kubernetes Engine (GKE)][gke-link], or [Cloud Run] provide a metadata service.
//! This is a local service to the VM (or pod) which (as the name implies) provides
//! metadata information about the VM. The service also provides access
//! tokens associated with the service accounts attached to the VM.
//!
//! You can use this access token to securely authenticate with Google Cloud,
//! without having to download secrets or other credentials.
//!
//! The `GCE_METADATA_HOST` environment variable overrides the host of the
//! metadata service. This is mostly useful in tests.
//!
//! # Example
//! ```
//! # use google_cloud_rest_auth::credentials::mds::Builder;
//! # async fn sample() -> anyhow::Result<()> {
//! let credentials = Builder::default()
//!     .with_service_account("my-sa@my-project.iam.gserviceaccount.com")
//!     .with_scopes(["https://www.googleapis.com/auth/devstorage.read_only"])
//!     .build();
//! let headers = credentials.headers().await?;
//! # Ok(()) }
//! ```
//!
//! [Cloud Run]: https://cloud.google.com/run
//! [gce-link]: https://cloud.google.com/products/compute
//! [gke-link]: https://cloud.google.com/kubernetes-engine
//! [Metadata Service]: https://cloud.google.com/compute/docs/metadata/overview

use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, Result};
use crate::errors;
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use http::HeaderMap;
use http::header::HeaderValue;
use std::time::Duration;

pub(crate) const GCE_METADATA_HOST_ENV_VAR: &str = "GCE_METADATA_HOST";
const METADATA_FLAVOR_VALUE: &str = "Google";
const METADATA_FLAVOR: &str = "metadata-flavor";
const METADATA_ROOT: &str = "http://metadata.google.internal";
const MDS_SERVICE_ACCOUNTS_URI: &str = "/computeMetadata/v1/instance/service-accounts";
const DEFAULT_SERVICE_ACCOUNT: &str = "default";

/// Creates [Credentials] instances backed by the [Metadata Service].
///
/// [Metadata Service]: https://cloud.google.com/compute/docs/metadata/overview
#[derive(Debug, Default)]
pub struct Builder {
    endpoint: Option<String>,
    scopes: Option<Vec<String>>,
    service_account: Option<String>,
}

impl Builder {
    /// Sets the endpoint for these credentials.
    ///
    /// If not set, the credentials use `http://${GCE_METADATA_HOST}` when the
    /// environment variable is set, and `http://metadata.google.internal`
    /// otherwise.
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the [scopes] for these credentials.
    ///
    /// If no scopes are specified, the metadata service returns tokens with
    /// all the scopes configured for the service account on the instance.
    ///
    /// [scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = Some(scopes.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the service account used to fetch tokens.
    ///
    /// If not set, the credentials use the `default` service account of the
    /// instance.
    pub fn with_service_account<S: Into<String>>(mut self, service_account: S) -> Self {
        self.service_account = Some(service_account.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        let endpoint = self
            .endpoint
            .or_else(|| {
                std::env::var(GCE_METADATA_HOST_ENV_VAR)
                    .ok()
                    .map(|host| format!("http://{host}"))
            })
            .unwrap_or_else(|| METADATA_ROOT.to_string());
        let token_provider = MDSAccessTokenProvider {
            endpoint,
            scopes: self.scopes.unwrap_or_default(),
            service_account: self
                .service_account
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SERVICE_ACCOUNT.to_string()),
        };
        Credentials::from(MDSCredentials {
            token_provider: TokenCache::new(token_provider),
        })
    }
}

#[derive(Debug)]
struct MDSCredentials<T>
where
    T: TokenProvider,
{
    token_provider: T,
}

#[async_trait::async_trait]
impl<T> CredentialsProvider for MDSCredentials<T>
where
    T: TokenProvider,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        build_bearer_headers(&token)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct MDSTokenResponse {
    access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<u64>,
    token_type: String,
}

#[derive(Debug)]
struct MDSAccessTokenProvider {
    endpoint: String,
    scopes: Vec<String>,
    service_account: String,
}

impl MDSAccessTokenProvider {
    fn token_url(&self) -> String {
        format!(
            "{}{MDS_SERVICE_ACCOUNTS_URI}/{}/token",
            self.endpoint.trim_end_matches('/'),
            self.service_account
        )
    }
}

#[async_trait::async_trait]
impl TokenProvider for MDSAccessTokenProvider {
    async fn token(&self) -> Result<Token> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(errors::non_retryable)?;
        let mut request = client.get(self.token_url()).header(
            METADATA_FLAVOR,
            HeaderValue::from_static(METADATA_FLAVOR_VALUE),
        );
        if !self.scopes.is_empty() {
            request = request.query(&[("scopes", self.scopes.join(","))]);
        }

        let response = request.send().await.map_err(errors::retryable)?;
        if !response.status().is_success() {
            return Err(errors::from_http_response(response, "failed to fetch token").await);
        }
        let response = response.json::<MDSTokenResponse>().await.map_err(|e| {
            let retryable = !e.is_decode();
            gax::error::CredentialsError::new(retryable, e)
        })?;
        tracing::debug!(
            "fetched token from the metadata service, expires_in={:?}",
            response.expires_in
        );
        Ok(Token {
            token: response.access_token,
            token_type: response.token_type,
            expires_at: response
                .expires_in
                .map(|d| tokio::time::Instant::now() + Duration::from_secs(d)),
            metadata: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tests::MockTokenProvider;
    use http::header::AUTHORIZATION;
    use httptest::matchers::{all_of, contains, eq, key, not, request, url_decoded};
    use httptest::responders::{json_encoded, status_code};
    use httptest::{Expectation, Server};
    use scoped_env::ScopedEnv;
    use serial_test::{parallel, serial};
    use test_case::test_case;

    const DEFAULT_TOKEN_URI: &str = "/computeMetadata/v1/instance/service-accounts/default/token";

    fn token_response(token: &str) -> MDSTokenResponse {
        MDSTokenResponse {
            access_token: token.to_string(),
            expires_in: Some(3600),
            token_type: "Bearer".to_string(),
        }
    }

    #[tokio::test]
    async fn headers_success() -> anyhow::Result<()> {
        let mut mock = MockTokenProvider::new();
        mock.expect_token().times(1).return_once(|| {
            Ok(Token {
                token: "test-token".to_string(),
                token_type: "Bearer".to_string(),
                expires_at: None,
                metadata: None,
            })
        });
        let mdsc = MDSCredentials {
            token_provider: mock,
        };
        let headers = mdsc.headers().await?;
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn headers_failure() {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .return_once(|| Err(errors::non_retryable_from_str("fail")));
        let mdsc = MDSCredentials {
            token_provider: mock,
        };
        assert!(mdsc.headers().await.is_err());
    }

    #[tokio::test]
    #[parallel]
    async fn token_with_scopes() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(DEFAULT_TOKEN_URI),
                request::headers(contains(("metadata-flavor", "Google"))),
                request::query(url_decoded(contains(("scopes", "scope1,scope2")))),
            ])
            .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let credentials = Builder::default()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_scopes(["scope1", "scope2"])
            .build();
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-access-token"))
        );
        Ok(())
    }

    #[tokio::test]
    #[parallel]
    async fn token_without_scopes() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::path(DEFAULT_TOKEN_URI),
                request::query(url_decoded(not(contains(key("scopes"))))),
            ])
            .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let credentials = Builder::default()
            .with_endpoint(format!("http://{}", server.addr()))
            .build();
        credentials.headers().await?;
        Ok(())
    }

    #[tokio::test]
    #[parallel]
    async fn token_custom_service_account() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![request::path(eq(
                "/computeMetadata/v1/instance/service-accounts/sa@example.com/token"
            ))])
            .respond_with(json_encoded(token_response("sa-token"))),
        );

        let credentials = Builder::default()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_service_account("sa@example.com")
            .build();
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer sa-token"))
        );
        Ok(())
    }

    #[tokio::test]
    #[parallel]
    async fn token_is_cached() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path(DEFAULT_TOKEN_URI))
                .times(1)
                .respond_with(json_encoded(token_response("cached-token"))),
        );

        let credentials = Builder::default()
            .with_endpoint(format!("http://{}", server.addr()))
            .build();
        for _ in 0..3 {
            let headers = credentials.headers().await?;
            assert_eq!(
                headers.get(AUTHORIZATION),
                Some(&HeaderValue::from_static("Bearer cached-token"))
            );
        }
        Ok(())
    }

    #[test_case(500, true)]
    #[test_case(503, true)]
    #[test_case(429, true)]
    #[test_case(404, false)]
    #[test_case(403, false)]
    #[tokio::test]
    #[parallel]
    async fn token_http_error(code: u16, transient: bool) -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path(DEFAULT_TOKEN_URI))
                .respond_with(status_code(code).body("test-only-error")),
        );

        let credentials = Builder::default()
            .with_endpoint(format!("http://{}", server.addr()))
            .build();
        let e = credentials.headers().await.unwrap_err();
        assert_eq!(e.is_transient(), transient, "{e}");
        assert!(e.to_string().contains("test-only-error"), "{e}");
        Ok(())
    }

    #[tokio::test]
    #[parallel]
    async fn token_malformed_response_is_not_transient() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path(DEFAULT_TOKEN_URI))
                .respond_with(status_code(200).body("not-json")),
        );

        let credentials = Builder::default()
            .with_endpoint(format!("http://{}", server.addr()))
            .build();
        let e = credentials.headers().await.unwrap_err();
        assert!(!e.is_transient(), "{e}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn endpoint_from_env() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path(DEFAULT_TOKEN_URI))
                .respond_with(json_encoded(token_response("env-token"))),
        );

        let addr = server.addr().to_string();
        let _e = ScopedEnv::set(GCE_METADATA_HOST_ENV_VAR, &addr);
        let credentials = Builder::default().build();
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer env-token"))
        );
        Ok(())
    }

    #[test]
    #[serial]
    fn default_endpoint() {
        let _e = ScopedEnv::remove(GCE_METADATA_HOST_ENV_VAR);
        let credentials = Builder::default().build();
        let fmt = format!("{credentials:?}");
        assert!(fmt.contains(METADATA_ROOT), "{fmt}");
        assert!(fmt.contains("service_account: \"default\""), "{fmt}");
    }
}
