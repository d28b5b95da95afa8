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

//! Contains the Sheets client and related types.

use crate::builder;
use crate::model;
use gaxi::http::ReqwestClient;
use std::sync::Arc;

const DEFAULT_ENDPOINT: &str = "https://sheets.googleapis.com";

/// Implements a client for the Google Sheets API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_rest_sheets::client::Sheets;
/// let client = Sheets::builder().build().await?;
/// let spreadsheet = client.get("my-spreadsheet-id").send().await?;
/// println!("{spreadsheet:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `Sheets` use the `with_*` methods in the type returned
/// by [builder()][Sheets::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://sheets.googleapis.com`).
/// * [with_credentials()]: by default this client uses credentials from the
///   `GOOGLE_APPLICATION_CREDENTIALS` file, or the metadata server.
/// * [with_config()]: change the scopes, the service account, or the project.
///
/// # Pooling and Cloning
///
/// `Sheets` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Sheets` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_endpoint()]: builder::ClientBuilder::with_endpoint
/// [with_credentials()]: builder::ClientBuilder::with_credentials
/// [with_config()]: builder::ClientBuilder::with_config
#[derive(Clone, Debug)]
pub struct Sheets {
    inner: Arc<ReqwestClient>,
    project_id: String,
}

impl Sheets {
    /// Returns a builder for [Sheets].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use google_cloud_rest_sheets::client::Sheets;
    /// # use google_cloud_rest_sheets::{config::SheetsConfig, scope};
    /// let client = Sheets::builder()
    ///     .with_config(SheetsConfig::new([scope::READ_ONLY], "default"))
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> builder::ClientBuilder {
        gax::client_builder::internal::new_builder_with_config(
            client_builder::Factory,
            crate::config::SheetsConfig::default().into(),
        )
    }

    async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config.clone(), DEFAULT_ENDPOINT).await?;
        let project_id = gaxi::project::resolve_project_id(inner.credentials(), &config)?;
        tracing::debug!("Sheets client using project {project_id}");
        Ok(Self {
            inner: Arc::new(inner),
            project_id,
        })
    }

    /// The project resolved when the client was built.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the spreadsheet with the given ID.
    pub fn get<V: Into<String>>(&self, spreadsheet_id: V) -> builder::GetSpreadsheet {
        builder::GetSpreadsheet::new(self.inner.clone(), spreadsheet_id.into())
    }

    /// Creates a spreadsheet, returning the newly created spreadsheet.
    pub fn create(&self) -> builder::CreateSpreadsheet {
        builder::CreateSpreadsheet::new(self.inner.clone())
    }

    /// Copies the sheet `sheet_id` from `spreadsheet_id` into
    /// `destination_spreadsheet_id`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_rest_sheets::client::Sheets;
    /// # async fn sample(client: &Sheets) -> anyhow::Result<()> {
    /// let properties = client.copy_sheet(0, "source-id", "destination-id").send().await?;
    /// println!("new sheet is {:?}", properties.sheet_id);
    /// # Ok(()) }
    /// ```
    pub fn copy_sheet<S, D>(
        &self,
        sheet_id: i32,
        spreadsheet_id: S,
        destination_spreadsheet_id: D,
    ) -> builder::CopySheet
    where
        S: Into<String>,
        D: Into<String>,
    {
        builder::CopySheet::new(
            self.inner.clone(),
            sheet_id,
            spreadsheet_id.into(),
            destination_spreadsheet_id.into(),
        )
    }

    /// Deletes the sheet `sheet_id` from a spreadsheet.
    pub fn delete_sheet<V: Into<String>>(
        &self,
        spreadsheet_id: V,
        sheet_id: i32,
    ) -> builder::BatchUpdate {
        let delete = model::DeleteSheetRequest::new().set_sheet_id(sheet_id);
        let request = model::BatchUpdateSpreadsheetRequest::new()
            .set_requests([model::Request::new().set_delete_sheet(delete)]);
        builder::BatchUpdate::new(self.inner.clone(), spreadsheet_id.into(), request)
    }

    /// Applies one or more updates to a spreadsheet.
    pub fn batch_update<V, R>(&self, spreadsheet_id: V, request: R) -> builder::BatchUpdate
    where
        V: Into<String>,
        R: Into<model::BatchUpdateSpreadsheetRequest>,
    {
        builder::BatchUpdate::new(self.inner.clone(), spreadsheet_id.into(), request.into())
    }

    /// Sets the values in the range named by `value_range`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_rest_sheets::client::Sheets;
    /// # use google_cloud_rest_sheets::model::ValueRange;
    /// # async fn sample(client: &Sheets) -> anyhow::Result<()> {
    /// let values = ValueRange::new()
    ///     .set_range("Sheet1!A1:B2")
    ///     .set_values([["a", "b"], ["c", "d"]]);
    /// let response = client.update_values("my-spreadsheet-id", values).send().await?;
    /// println!("updated {} cells", response.updated_cells);
    /// # Ok(()) }
    /// ```
    pub fn update_values<V, R>(&self, spreadsheet_id: V, value_range: R) -> builder::UpdateValues
    where
        V: Into<String>,
        R: Into<model::ValueRange>,
    {
        builder::UpdateValues::new(self.inner.clone(), spreadsheet_id.into(), value_range.into())
    }

    /// Returns the values in `range`, a range in A1 notation.
    pub fn get_values<V, R>(&self, spreadsheet_id: V, range: R) -> builder::GetValues
    where
        V: Into<String>,
        R: Into<String>,
    {
        builder::GetValues::new(self.inner.clone(), spreadsheet_id.into(), range.into())
    }
}

pub(crate) mod client_builder {
    use super::Sheets;

    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Sheets;
        type Credentials = gaxi::options::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sheets;
    use google_cloud_rest_test_utils::credentials::{
        TEST_PROJECT, test_credentials, test_credentials_with_project,
    };
    use scoped_env::ScopedEnv;

    #[tokio::test]
    #[serial_test::serial]
    async fn builder() -> anyhow::Result<()> {
        let _e = ScopedEnv::remove("PROJECT_ID");
        let client = Sheets::builder()
            .with_credentials(test_credentials_with_project())
            .build()
            .await?;
        assert_eq!(client.project_id(), TEST_PROJECT);
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn builder_with_project_id() -> anyhow::Result<()> {
        let _e = ScopedEnv::remove("PROJECT_ID");
        let client = Sheets::builder()
            .with_credentials(test_credentials())
            .with_project_id("my-project")
            .build()
            .await?;
        assert_eq!(client.project_id(), "my-project");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn builder_env_project() -> anyhow::Result<()> {
        let _e = ScopedEnv::set("PROJECT_ID", "env-x");
        let client = Sheets::builder()
            .with_credentials(test_credentials_with_project())
            .build()
            .await?;
        assert_eq!(client.project_id(), "env-x");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn builder_missing_project() {
        let _e = ScopedEnv::remove("PROJECT_ID");
        let err = Sheets::builder()
            .with_credentials(test_credentials())
            .build()
            .await
            .unwrap_err();
        assert!(err.is_missing_project_id(), "{err:?}");
    }
}
