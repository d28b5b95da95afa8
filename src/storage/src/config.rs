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

use gax::client_builder::ServiceConfig;

/// The service account used when none is configured.
pub const DEFAULT_SERVICE_ACCOUNT: &str = "default";

/// Configuration for the [Storage][crate::client::Storage] client.
///
/// Defaults to the [READ_WRITE][crate::scope::READ_WRITE] scope and the
/// `default` service account.
///
/// # Example
/// ```
/// # use google_cloud_rest_storage::{config::StorageConfig, scope};
/// let config = StorageConfig::new([scope::FULL_CONTROL], "default")
///     .set_project("my-project");
/// assert_eq!(config.project.as_deref(), Some("my-project"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct StorageConfig {
    pub scopes: Vec<String>,
    pub service_account: String,
    /// Overrides the project from the provider configuration, but not the
    /// project from the environment or the credentials.
    pub project: Option<String>,
}

impl StorageConfig {
    pub fn new<I, S, V>(scopes: I, service_account: V) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        V: Into<String>,
    {
        Self {
            scopes: scopes.into_iter().map(|s| s.into()).collect(),
            service_account: service_account.into(),
            project: None,
        }
    }

    pub fn set_project<V: Into<String>>(mut self, v: V) -> Self {
        self.project = Some(v.into());
        self
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new([crate::scope::READ_WRITE], DEFAULT_SERVICE_ACCOUNT)
    }
}

impl From<StorageConfig> for ServiceConfig {
    fn from(value: StorageConfig) -> Self {
        let config = ServiceConfig::new()
            .set_scopes(value.scopes)
            .set_service_account(value.service_account);
        match value.project {
            Some(p) => config.set_project_id(p),
            None => config,
        }
    }
}
