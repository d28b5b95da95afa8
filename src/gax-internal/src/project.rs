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

//! Resolve the project used by a client.

use crate::options::ClientConfig;
use auth::credentials::Credentials;
use gax::client_builder::{Error, Result};

/// The environment variable with the highest priority project id.
pub const PROJECT_ID_VAR: &str = "PROJECT_ID";

/// Finds the project id for a client.
///
/// The sources are consulted in order, and the first non-empty value wins:
/// - the `PROJECT_ID` environment variable,
/// - the project embedded in the credentials (e.g. a service account key),
/// - the project in the service-specific configuration,
/// - the project in the provider-wide configuration.
pub fn resolve_project_id(credentials: &Credentials, config: &ClientConfig) -> Result<String> {
    let from_env = std::env::var(PROJECT_ID_VAR).ok();
    [
        from_env,
        credentials.project_id(),
        config.service.project_id.clone(),
        config.provider.project_id.clone(),
    ]
    .into_iter()
    .flatten()
    .find(|p| !p.is_empty())
    .ok_or_else(Error::missing_project_id)
}
