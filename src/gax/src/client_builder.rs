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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the authentication
//! credentials, or the project. The client libraries use a generic builder
//! type to provide such functionality. The types in this module implement the
//! client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with a different endpoint
//!
//! ```no_run
//! # use google_cloud_rest_gax::client_builder::Result;
//! # async fn sample() -> Result<()> {
//! # struct Client;
//! # impl Client { fn builder() -> Builder { Builder } }
//! # struct Builder;
//! # impl Builder {
//! #   fn with_endpoint(self, _: &str) -> Self { self }
//! #   async fn build(self) -> Result<Client> { Ok(Client) }
//! # }
//! let client = Client::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build().await?;
//! # Ok(()) }
//! ```

/// A `Result` alias where the `Err` case is an [Error].
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use google_cloud_rest_gax::client_builder::Error;
/// fn handle(e: Error) {
///     if e.is_missing_project_id() {
///         println!("set PROJECT_ID, or configure a project for the client");
///     }
/// }
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, none of the configuration sources provided a project id.
    ///
    /// The clients resolve the project id from (in order): the `PROJECT_ID`
    /// environment variable, the project of the service account credentials,
    /// the service configuration, and the provider configuration.
    pub fn is_missing_project_id(&self) -> bool {
        matches!(&self.0, ErrorKind::MissingProjectId)
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn missing_project_id() -> Self {
        Self(ErrorKind::MissingProjectId)
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("missing project id, set PROJECT_ID or configure the project of the client")]
    MissingProjectId,
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The configuration shared by all the clients of a cloud provider.
///
/// # Example
/// ```
/// # use google_cloud_rest_gax::client_builder::ProviderConfig;
/// let config = ProviderConfig::new()
///     .set_project_id("my-project")
///     .set_credentials_file("/etc/secrets/service-account.json");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ProviderConfig {
    /// The project used when no other source provides one.
    pub project_id: Option<String>,
    /// The path to a service account key file.
    pub credentials_file: Option<String>,
}

impl ProviderConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [project_id][ProviderConfig::project_id].
    pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [credentials_file][ProviderConfig::credentials_file].
    pub fn set_credentials_file<V: Into<String>>(mut self, v: V) -> Self {
        self.credentials_file = Some(v.into());
        self
    }
}

/// The configuration specific to one service.
///
/// Each client crate defines its own configuration type (with defaults that
/// make sense for the service), and converts it into this type.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ServiceConfig {
    /// The OAuth scopes requested for the access tokens.
    pub scopes: Vec<String>,
    /// The service account used to fetch tokens from the metadata server.
    pub service_account: Option<String>,
    /// The project used for this service.
    pub project_id: Option<String>,
}

impl ServiceConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [scopes][ServiceConfig::scopes].
    pub fn set_scopes<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scopes = v.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the value of [service_account][ServiceConfig::service_account].
    pub fn set_service_account<V: Into<String>>(mut self, v: V) -> Self {
        self.service_account = Some(v.into());
        self
    }

    /// Sets the value of [project_id][ServiceConfig::project_id].
    pub fn set_project_id<V: Into<String>>(mut self, v: V) -> Self {
        self.project_id = Some(v.into());
        self
    }
}

/// A generic builder for clients.
///
/// In the Google Cloud client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```no_run
/// # use google_cloud_rest_gax::client_builder::Result;
/// # async fn sample() -> Result<()> {
/// # struct Client;
/// # impl Client { fn builder() -> Builder { Builder } }
/// # struct Builder;
/// # impl Builder { async fn build(self) -> Result<Client> { Ok(Client) } }
/// let client = Client::builder().build().await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The endpoint is the scheme and host of the service, the clients append
    /// the API paths (e.g. `/v4/spreadsheets`) to it.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Most Google Cloud services require authentication, though some services
    /// allow for anonymous access, and some services provide emulators where
    /// no authentication is required.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sets the service configuration: scopes, service account and project.
    pub fn with_config<V: Into<ServiceConfig>>(mut self, v: V) -> Self {
        self.config.service = v.into();
        self
    }

    /// Sets the configuration shared by all the clients of the provider.
    pub fn with_provider_config(mut self, v: ProviderConfig) -> Self {
        self.config.provider = v;
        self
    }

    /// Sets the project for this service.
    ///
    /// This is a shorthand to change the project in the service
    /// configuration. Note that the `PROJECT_ID` environment variable, and
    /// the project of service account credentials, take precedence.
    pub fn with_project_id<V: Into<String>>(mut self, v: V) -> Self {
        self.config.service.project_id = Some(v.into());
        self
    }
}

/// Not part of the public API, subject to change without notice.
#[doc(hidden)]
pub mod internal {
    use super::*;

    /// The client libraries implement this trait to create their clients.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        new_builder_with_config(factory, ServiceConfig::default())
    }

    pub fn new_builder_with_config<F, Cr, C>(
        factory: F,
        service: ServiceConfig,
    ) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig {
                service,
                ..Default::default()
            },
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to a Google Cloud Service. Each service
    /// has one or more client types. The default configuration for each client
    /// should work for most applications. But some applications may need to
    /// override the default endpoint, the default authentication credentials,
    /// or the project.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub service: ServiceConfig,
        pub provider: ProviderConfig,
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                service: ServiceConfig::default(),
                provider: ProviderConfig::default(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    type Config = internal::ClientConfig<FakeCredentials>;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct FakeCredentials(String);

    impl From<&str> for FakeCredentials {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }

    struct Client(Config);

    struct Factory;

    impl internal::ClientFactory for Factory {
        type Client = Client;
        type Credentials = FakeCredentials;
        async fn build(self, config: Config) -> Result<Self::Client> {
            Ok(Client(config))
        }
    }

    fn builder() -> ClientBuilder<Factory, FakeCredentials> {
        internal::new_builder(Factory)
    }

    #[tokio::test]
    async fn build_default() -> anyhow::Result<()> {
        let client = builder().build().await?;
        let config = client.0;
        assert_eq!(config.endpoint, None);
        assert_eq!(config.cred, None);
        assert!(!config.tracing);
        assert_eq!(config.service, ServiceConfig::default());
        assert_eq!(config.provider, ProviderConfig::default());
        Ok(())
    }

    #[tokio::test]
    async fn with_overrides() -> anyhow::Result<()> {
        let client = builder()
            .with_endpoint("http://example.com")
            .with_credentials("test-only")
            .with_tracing()
            .with_config(
                ServiceConfig::new()
                    .set_scopes(["scope-a", "scope-b"])
                    .set_service_account("sa@example.com")
                    .set_project_id("service-project"),
            )
            .with_provider_config(
                ProviderConfig::new()
                    .set_project_id("provider-project")
                    .set_credentials_file("/dev/null"),
            )
            .build()
            .await?;
        let config = client.0;
        assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
        assert_eq!(config.cred, Some(FakeCredentials("test-only".into())));
        assert!(config.tracing);
        assert_eq!(config.service.scopes, vec!["scope-a", "scope-b"]);
        assert_eq!(
            config.service.service_account.as_deref(),
            Some("sa@example.com")
        );
        assert_eq!(config.service.project_id.as_deref(), Some("service-project"));
        assert_eq!(
            config.provider.project_id.as_deref(),
            Some("provider-project")
        );
        assert_eq!(config.provider.credentials_file.as_deref(), Some("/dev/null"));
        Ok(())
    }

    #[tokio::test]
    async fn with_default_service_config() -> anyhow::Result<()> {
        let service = ServiceConfig::new().set_scopes(["default-scope"]);
        let client = internal::new_builder_with_config(Factory, service.clone())
            .build()
            .await?;
        assert_eq!(client.0.service, service);
        Ok(())
    }

    #[tokio::test]
    async fn with_project_id_keeps_scopes() -> anyhow::Result<()> {
        let service = ServiceConfig::new().set_scopes(["default-scope"]);
        let client = internal::new_builder_with_config(Factory, service)
            .with_project_id("my-project")
            .build()
            .await?;
        assert_eq!(client.0.service.scopes, vec!["default-scope"]);
        assert_eq!(client.0.service.project_id.as_deref(), Some("my-project"));
        Ok(())
    }

    #[test]
    fn errors() {
        let e = Error::cred("test-only");
        assert!(e.is_default_credentials(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
        assert!(!e.is_missing_project_id(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");

        let e = Error::transport("test-only");
        assert!(!e.is_default_credentials(), "{e:?}");
        assert!(e.is_transport(), "{e:?}");
        assert!(!e.is_missing_project_id(), "{e:?}");

        let e = Error::missing_project_id();
        assert!(e.is_missing_project_id(), "{e:?}");
        assert!(e.to_string().contains("PROJECT_ID"), "{e}");
    }
}
