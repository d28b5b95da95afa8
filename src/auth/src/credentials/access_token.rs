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

//! Credentials with a caller-supplied access token.
//!
//! Some applications obtain access tokens out of band, for example, from a
//! secret manager or from `gcloud auth print-access-token`. These credentials
//! send the token as-is, they never refresh it.
//!
//! # Example
//! ```
//! # use google_cloud_rest_auth::credentials::access_token::Builder;
//! let credentials = Builder::new("ya29.test-only").build();
//! ```

use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{Credentials, Result};
use crate::headers_util::build_bearer_headers;
use crate::token::Token;
use http::HeaderMap;

/// A builder for credentials with a fixed access token.
pub struct Builder {
    token: String,
    project_id: Option<String>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("token", &"[censored]")
            .field("project_id", &self.project_id)
            .finish()
    }
}

impl Builder {
    /// Creates a new builder for `token`.
    pub fn new<V: Into<String>>(token: V) -> Self {
        Self {
            token: token.into(),
            project_id: None,
        }
    }

    /// Sets the project associated with these credentials.
    pub fn with_project_id<V: Into<String>>(mut self, v: V) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Credentials {
        Credentials::from(AccessTokenCredentials {
            token: Token {
                token: self.token,
                token_type: "Bearer".to_string(),
                expires_at: None,
                metadata: None,
            },
            project_id: self.project_id,
        })
    }
}

#[derive(Debug)]
struct AccessTokenCredentials {
    token: Token,
    project_id: Option<String>,
}

#[async_trait::async_trait]
impl CredentialsProvider for AccessTokenCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        build_bearer_headers(&self.token)
    }

    fn project_id(&self) -> Option<String> {
        self.project_id.clone()
    }
}
