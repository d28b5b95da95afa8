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

/// Configuration for the [Sheets][crate::client::Sheets] client.
///
/// The default configuration requests the [READ_WRITE][crate::scope::READ_WRITE]
/// scope, uses the `default` service account, and has no project.
///
/// # Example
/// ```
/// # use google_cloud_rest_sheets::{config::SheetsConfig, scope};
/// let config = SheetsConfig::new([scope::READ_ONLY], "reader@my-project.iam.gserviceaccount.com")
///     .set_project("my-project");
/// assert_eq!(config.scopes, vec![scope::READ_ONLY.to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct SheetsConfig {
    /// The OAuth 2.0 scopes requested by the client.
    pub scopes: Vec<String>,
    /// The service account used to obtain tokens from the metadata server.
    pub service_account: String,
    /// The project used by this client, if any.
    pub project: Option<String>,
}

impl SheetsConfig {
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

impl Default for SheetsConfig {
    fn default() -> Self {
        Self::new([crate::scope::READ_WRITE], DEFAULT_SERVICE_ACCOUNT)
    }
}

impl From<SheetsConfig> for ServiceConfig {
    fn from(value: SheetsConfig) -> Self {
        let config = ServiceConfig::new()
            .set_scopes(value.scopes)
            .set_service_account(value.service_account);
        match value.project {
            Some(p) => config.set_project_id(p),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope;

    #[test]
    fn default() {
        let config = SheetsConfig::default();
        assert_eq!(config.scopes, vec![scope::READ_WRITE.to_string()]);
        assert_eq!(config.service_account, "default");
        assert_eq!(config.project, None);
    }

    #[test]
    fn into_service_config() {
        let got = ServiceConfig::from(SheetsConfig::default());
        let want = ServiceConfig::new()
            .set_scopes([scope::READ_WRITE])
            .set_service_account("default");
        assert_eq!(got, want);

        let got = ServiceConfig::from(
            SheetsConfig::new([scope::DRIVE_FILE, scope::READ_ONLY], "sa@p.iam.gserviceaccount.com")
                .set_project("my-project"),
        );
        let want = ServiceConfig::new()
            .set_scopes([scope::DRIVE_FILE, scope::READ_ONLY])
            .set_service_account("sa@p.iam.gserviceaccount.com")
            .set_project_id("my-project");
        assert_eq!(got, want);
    }
}
