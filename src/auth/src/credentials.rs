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

use crate::build_errors::Error as BuilderError;
use http::HeaderMap;
use serde_json::Value;
use std::sync::Arc;

pub mod access_token;
pub mod anonymous;
pub mod mds;
pub mod service_account;

pub use crate::errors::CredentialsError;

/// A `Result` alias where the `Err` case is [CredentialsError].
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// The result of building [Credentials].
pub type BuildResult<T> = std::result::Result<T, BuilderError>;

pub(crate) const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Represents a [Credentials] used to obtain the auth request headers.
///
/// In general, [Credentials][credentials-link] are "digital object that
/// provide proof of identity", the archetype may be a username and password
/// combination, but a private RSA key may be a better example.
///
/// Modern authentication protocols do not send the credentials to
/// authenticate with a service. Even when sent over encrypted transports,
/// the credentials may be accidentally exposed via logging or may be
/// captured if there are errors in the transport encryption. Because the
/// credentials are often long-lived, that risk of exposure is also
/// long-lived.
///
/// Instead, modern authentication protocols exchange the credentials for a
/// time-limited [Token][token-link], a digital object that shows the caller
/// was in possession of the credentials. Because tokens are time limited,
/// risk of misuse is also time limited. Tokens may be further restricted to
/// only a certain subset of the RPCs in the service, or even to specific
/// resources, or only when used from a given machine (virtual or not).
/// Further limiting the risks associated with any leaks of these tokens.
///
/// This struct also abstracts token sources that are not backed by a
/// specific digital object. The canonical example is the [Metadata Service].
/// This service is available in many Google Cloud environments, including
/// [Google Compute Engine], and [Google Kubernetes Engine].
///
/// [credentials-link]: https://cloud.google.com/docs/authentication#credentials
/// [token-link]: https://cloud.google.com/docs/authentication#token
/// [Metadata Service]: https://cloud.google.com/compute/docs/metadata/overview
/// [Google Compute Engine]: https://cloud.google.com/products/compute
/// [Google Kubernetes Engine]: https://cloud.google.com/kubernetes-engine
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: dynamic::CredentialsProvider + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers used to authenticate a request.
    ///
    /// Typically this is a single `Authorization: Bearer ...` header. Some
    /// credentials (e.g. [anonymous]) return no headers at all.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }

    /// Returns the project associated with the credentials, if any.
    ///
    /// Service account keys include the project that owns the service
    /// account. Other credential types return `None`.
    pub fn project_id(&self) -> Option<String> {
        self.inner.project_id()
    }
}

pub mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A trait for credential types that can provide authentication headers.
    ///
    /// Applications rarely need to implement this trait, except in tests,
    /// where they may want to inject a fake implementation.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self) -> Result<HeaderMap>;

        /// The project associated with the credentials, if any.
        fn project_id(&self) -> Option<String> {
            None
        }
    }
}

/// A builder for the default [Credentials].
///
/// The default credentials are found by following (in order):
///
/// 1. The credentials file set with [with_credentials_file][Builder::with_credentials_file].
/// 2. The file named by the `GOOGLE_APPLICATION_CREDENTIALS` environment
///    variable.
/// 3. The [metadata server][mds].
///
/// Only service account key files are supported.
///
/// # Example
/// ```no_run
/// # use google_cloud_rest_auth::credentials::Builder;
/// # async fn sample() -> anyhow::Result<()> {
/// let credentials = Builder::default()
///     .with_scopes(["https://www.googleapis.com/auth/spreadsheets"])
///     .build()?;
/// let headers = credentials.headers().await?;
/// # Ok(()) }
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    credentials_file: Option<String>,
    scopes: Option<Vec<String>>,
    service_account: Option<String>,
}

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the credentials from this file.
    pub fn with_credentials_file<V: Into<String>>(mut self, v: V) -> Self {
        self.credentials_file = Some(v.into());
        self
    }

    /// Sets the [scopes] requested for the access tokens.
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

    /// Sets the service account used with the metadata server.
    ///
    /// Ignored when the credentials are loaded from a file.
    pub fn with_service_account<V: Into<String>>(mut self, v: V) -> Self {
        self.service_account = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials file cannot be read, is not valid
    /// JSON, or contains an unsupported credentials type.
    pub fn build(self) -> BuildResult<Credentials> {
        let path = self
            .credentials_file
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| {
                std::env::var(GOOGLE_APPLICATION_CREDENTIALS)
                    .ok()
                    .filter(|p| !p.is_empty())
            });
        match path {
            Some(path) => {
                tracing::debug!("loading credentials from {path}");
                let contents = std::fs::read_to_string(&path).map_err(BuilderError::loading)?;
                let json =
                    serde_json::from_str::<Value>(&contents).map_err(BuilderError::parsing)?;
                self.build_from_json(json)
            }
            None => {
                tracing::debug!("no credentials file found, using the metadata server");
                let mut builder = mds::Builder::default();
                if let Some(scopes) = self.scopes {
                    builder = builder.with_scopes(scopes);
                }
                if let Some(account) = self.service_account {
                    builder = builder.with_service_account(account);
                }
                Ok(builder.build())
            }
        }
    }

    fn build_from_json(self, json: Value) -> BuildResult<Credentials> {
        let cred_type = json
            .get("type")
            .ok_or_else(|| BuilderError::parsing("no `type` field found."))?
            .as_str()
            .ok_or_else(|| BuilderError::parsing("`type` field is not a string."))?;
        match cred_type {
            "service_account" => {
                let mut builder = service_account::Builder::new(json);
                if let Some(scopes) = self.scopes {
                    builder = builder.with_scopes(scopes);
                }
                builder.build()
            }
            _ => Err(BuilderError::unknown_type(format!(
                "unsupported credentials type `{cred_type}`, only service account keys are supported"
            ))),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rsa::pkcs8::{EncodePrivateKey, LineEnding};
    use scoped_env::ScopedEnv;
    use serde_json::json;
    use std::io::Write;

    // Generating RSA keys is slow, share one across the tests.
    pub(crate) fn test_private_key() -> String {
        static KEY: std::sync::OnceLock<String> = std::sync::OnceLock::new();
        KEY.get_or_init(|| {
            let mut rng = rsa::rand_core::OsRng;
            let key = rsa::RsaPrivateKey::new(&mut rng, 2048).expect("failed to generate a key");
            key.to_pkcs8_pem(LineEnding::LF)
                .expect("failed to encode key to PKCS#8 PEM")
                .to_string()
        })
        .clone()
    }

    pub(crate) fn service_account_json(project_id: &str) -> Value {
        json!({
            "type": "service_account",
            "client_email": "test-client-email@example.com",
            "private_key_id": "test-private-key-id",
            "private_key": test_private_key(),
            "project_id": project_id,
        })
    }

    fn write_json(value: &Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("cannot create temp file");
        file.write_all(value.to_string().as_bytes())
            .expect("cannot write temp file");
        file
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn from_explicit_file() -> anyhow::Result<()> {
        let _e = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS);
        let file = write_json(&service_account_json("test-project"));
        let path = file.path().to_string_lossy().to_string();
        let credentials = Builder::new().with_credentials_file(path).build()?;
        assert_eq!(credentials.project_id().as_deref(), Some("test-project"));
        let headers = credentials.headers().await?;
        let value = headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(value.starts_with("Bearer "), "{headers:?}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env() -> anyhow::Result<()> {
        let file = write_json(&service_account_json("env-project"));
        let path = file.path().to_string_lossy().to_string();
        let _e = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS, &path);
        let credentials = Builder::new().build()?;
        assert_eq!(credentials.project_id().as_deref(), Some("env-project"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn explicit_file_wins_over_env() -> anyhow::Result<()> {
        let env_file = write_json(&service_account_json("env-project"));
        let env_path = env_file.path().to_string_lossy().to_string();
        let _e = ScopedEnv::set(GOOGLE_APPLICATION_CREDENTIALS, &env_path);
        let file = write_json(&service_account_json("explicit-project"));
        let path = file.path().to_string_lossy().to_string();
        let credentials = Builder::new().with_credentials_file(path).build()?;
        assert_eq!(credentials.project_id().as_deref(), Some("explicit-project"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn fallback_to_mds() -> anyhow::Result<()> {
        let _e = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS);
        let credentials = Builder::new().with_service_account("my-sa").build()?;
        let fmt = format!("{credentials:?}");
        assert!(fmt.contains("MDSCredentials"), "{fmt}");
        assert!(fmt.contains("my-sa"), "{fmt}");
        assert_eq!(credentials.project_id(), None);
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn missing_file() {
        let _e = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS);
        let e = Builder::new()
            .with_credentials_file("/this/file/does/not/exist.json")
            .build()
            .unwrap_err();
        assert!(e.is_loading(), "{e:?}");
    }

    #[test]
    #[serial_test::serial]
    fn invalid_json() {
        let _e = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let e = Builder::new()
            .with_credentials_file(file.path().to_string_lossy())
            .build()
            .unwrap_err();
        assert!(e.is_parsing(), "{e:?}");
    }

    #[test]
    #[serial_test::serial]
    fn missing_type() {
        let _e = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS);
        let file = write_json(&json!({"client_email": "a@b.com"}));
        let e = Builder::new()
            .with_credentials_file(file.path().to_string_lossy())
            .build()
            .unwrap_err();
        assert!(e.is_parsing(), "{e:?}");
    }

    #[test]
    #[serial_test::serial]
    fn unsupported_type() {
        let _e = ScopedEnv::remove(GOOGLE_APPLICATION_CREDENTIALS);
        let file = write_json(&json!({"type": "authorized_user"}));
        let e = Builder::new()
            .with_credentials_file(file.path().to_string_lossy())
            .build()
            .unwrap_err();
        assert!(e.is_unknown_type(), "{e:?}");
        assert!(e.to_string().contains("authorized_user"), "{e}");
    }

    #[derive(Debug)]
    struct Fake;

    #[async_trait::async_trait]
    impl dynamic::CredentialsProvider for Fake {
        async fn headers(&self) -> Result<HeaderMap> {
            Err(CredentialsError::from_msg(true, "test-only"))
        }
    }

    #[tokio::test]
    async fn from_provider() {
        let credentials = Credentials::from(Fake);
        let e = credentials.headers().await.unwrap_err();
        assert!(e.is_transient(), "{e}");
        assert_eq!(credentials.project_id(), None);
    }
}
