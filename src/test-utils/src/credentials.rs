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

use auth::credentials::{Credentials, access_token};

/// The token sent by [test_credentials].
pub const TEST_TOKEN: &str = "test-only-token";

/// The project embedded in [test_credentials_with_project].
pub const TEST_PROJECT: &str = "test-only-project";

/// Credentials that send a fixed bearer token, for use with fake servers.
pub fn test_credentials() -> Credentials {
    access_token::Builder::new(TEST_TOKEN).build()
}

/// Like [test_credentials], but the credentials also carry a project id.
pub fn test_credentials_with_project() -> Credentials {
    access_token::Builder::new(TEST_TOKEN)
        .with_project_id(TEST_PROJECT)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::AUTHORIZATION;

    #[tokio::test]
    async fn bearer() -> anyhow::Result<()> {
        let headers = test_credentials().headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer test-only-token")
        );
        assert_eq!(test_credentials().project_id(), None);
        assert_eq!(
            test_credentials_with_project().project_id().as_deref(),
            Some(TEST_PROJECT)
        );
        Ok(())
    }
}
