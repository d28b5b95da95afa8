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

//! Request builders for the [Sheets][crate::client::Sheets] client.
//!
//! Each method in the client returns one of these builders. Applications set
//! any optional parameters and then call `send()` to make the request.

use crate::Result;
use crate::model;
use gax::path_parameter::required;
use gax::query_parameter::{QueryParameter, QueryParameters};
use gaxi::http::{NoBody, ReqwestClient};
use std::sync::Arc;

/// A builder for [Sheets][crate::client::Sheets].
///
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_rest_sheets::builder::ClientBuilder;
/// # use google_cloud_rest_sheets::client::Sheets;
/// let builder: ClientBuilder = Sheets::builder();
/// let client = builder
///     .with_endpoint("https://sheets.googleapis.com")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
pub type ClientBuilder = gax::client_builder::ClientBuilder<
    crate::client::client_builder::Factory,
    gaxi::options::Credentials,
>;

const BASE_PATH: &str = "/v4/spreadsheets";

// All the request builders accept arbitrary query parameters.
macro_rules! query_parameter_setters {
    ($t:ty) => {
        impl $t {
            /// Sets a query parameter, replacing any previous values.
            pub fn with_query_parameter<K, V>(mut self, name: K, value: V) -> Self
            where
                K: Into<String>,
                V: QueryParameter,
            {
                self.params.insert(name, value);
                self
            }

            /// Sets multiple query parameters, replacing any previous values
            /// with the same names.
            pub fn with_query_parameters<I, K, V>(mut self, v: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<String>,
                V: QueryParameter,
            {
                self.params.extend(v.into_iter().collect());
                self
            }
        }
    };
}

/// Returns a spreadsheet.
///
/// # Example
/// ```
/// # use google_cloud_rest_sheets::client::Sheets;
/// # async fn sample(client: &Sheets) -> anyhow::Result<()> {
/// let spreadsheet = client
///     .get("my-spreadsheet-id")
///     .with_ranges(["Sheet1!A1:B2"])
///     .with_include_grid_data(true)
///     .send()
///     .await?;
/// println!("{spreadsheet:?}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct GetSpreadsheet {
    stub: Arc<ReqwestClient>,
    spreadsheet_id: String,
    params: QueryParameters,
}

impl GetSpreadsheet {
    pub(crate) fn new(stub: Arc<ReqwestClient>, spreadsheet_id: String) -> Self {
        Self {
            stub,
            spreadsheet_id,
            params: QueryParameters::new(),
        }
    }

    /// Only return the data in these ranges.
    pub fn with_ranges<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let ranges: Vec<String> = v.into_iter().map(|r| r.into()).collect();
        self.params.insert("ranges", ranges);
        self
    }

    /// Include the grid data in the response.
    pub fn with_include_grid_data(mut self, v: bool) -> Self {
        self.params.insert("includeGridData", v);
        self
    }

    pub async fn send(self) -> Result<model::Spreadsheet> {
        let path = format!(
            "{BASE_PATH}/{}",
            required("spreadsheet_id", &self.spreadsheet_id)?
        );
        let builder = self.stub.builder(reqwest::Method::GET, path);
        self.stub
            .execute(builder, None::<NoBody>, &self.params)
            .await
    }
}

query_parameter_setters!(GetSpreadsheet);

/// Creates a spreadsheet.
#[derive(Clone, Debug)]
pub struct CreateSpreadsheet {
    stub: Arc<ReqwestClient>,
    spreadsheet: Option<model::Spreadsheet>,
    params: QueryParameters,
}

impl CreateSpreadsheet {
    pub(crate) fn new(stub: Arc<ReqwestClient>) -> Self {
        Self {
            stub,
            spreadsheet: None,
            params: QueryParameters::new(),
        }
    }

    /// Use this spreadsheet (e.g. its title and sheets) as the template for
    /// the new spreadsheet.
    pub fn with_spreadsheet<V: Into<model::Spreadsheet>>(mut self, v: V) -> Self {
        self.spreadsheet = Some(v.into());
        self
    }

    pub async fn send(self) -> Result<model::Spreadsheet> {
        let builder = self
            .stub
            .builder(reqwest::Method::POST, BASE_PATH.to_string());
        self.stub
            .execute(builder, self.spreadsheet, &self.params)
            .await
    }
}

query_parameter_setters!(CreateSpreadsheet);

/// Copies a sheet to another spreadsheet.
///
/// Returns the properties of the newly created sheet.
#[derive(Clone, Debug)]
pub struct CopySheet {
    stub: Arc<ReqwestClient>,
    sheet_id: i32,
    spreadsheet_id: String,
    request: model::CopySheetToAnotherSpreadsheetRequest,
    params: QueryParameters,
}

impl CopySheet {
    pub(crate) fn new(
        stub: Arc<ReqwestClient>,
        sheet_id: i32,
        spreadsheet_id: String,
        destination_spreadsheet_id: String,
    ) -> Self {
        Self {
            stub,
            sheet_id,
            spreadsheet_id,
            request: model::CopySheetToAnotherSpreadsheetRequest::new()
                .set_destination_spreadsheet_id(destination_spreadsheet_id),
            params: QueryParameters::new(),
        }
    }

    pub async fn send(self) -> Result<model::SheetProperties> {
        let path = format!(
            "{BASE_PATH}/{}/sheets/{}:copyTo",
            required("spreadsheet_id", &self.spreadsheet_id)?,
            self.sheet_id
        );
        let builder = self.stub.builder(reqwest::Method::POST, path);
        self.stub
            .execute(builder, Some(self.request), &self.params)
            .await
    }
}

query_parameter_setters!(CopySheet);

/// Applies one or more updates to a spreadsheet.
#[derive(Clone, Debug)]
pub struct BatchUpdate {
    stub: Arc<ReqwestClient>,
    spreadsheet_id: String,
    request: model::BatchUpdateSpreadsheetRequest,
    params: QueryParameters,
}

impl BatchUpdate {
    pub(crate) fn new(
        stub: Arc<ReqwestClient>,
        spreadsheet_id: String,
        request: model::BatchUpdateSpreadsheetRequest,
    ) -> Self {
        Self {
            stub,
            spreadsheet_id,
            request,
            params: QueryParameters::new(),
        }
    }

    pub async fn send(self) -> Result<model::BatchUpdateSpreadsheetResponse> {
        let path = format!(
            "{BASE_PATH}/{}:batchUpdate",
            required("spreadsheet_id", &self.spreadsheet_id)?
        );
        let builder = self.stub.builder(reqwest::Method::POST, path);
        self.stub
            .execute(builder, Some(self.request), &self.params)
            .await
    }
}

query_parameter_setters!(BatchUpdate);

/// Sets the values in a range of a spreadsheet.
///
/// The range is taken from the [ValueRange::range][model::ValueRange::range]
/// field of the request. By default the values are parsed as if the user
/// typed them into the UI (`valueInputOption=USER_ENTERED`).
#[derive(Clone, Debug)]
pub struct UpdateValues {
    stub: Arc<ReqwestClient>,
    spreadsheet_id: String,
    value_range: model::ValueRange,
    params: QueryParameters,
}

impl UpdateValues {
    pub(crate) fn new(
        stub: Arc<ReqwestClient>,
        spreadsheet_id: String,
        value_range: model::ValueRange,
    ) -> Self {
        Self {
            stub,
            spreadsheet_id,
            value_range,
            params: QueryParameters::new().set("valueInputOption", "USER_ENTERED"),
        }
    }

    /// How the input data is interpreted, e.g. `RAW` or `USER_ENTERED`.
    pub fn with_value_input_option<V: Into<String>>(mut self, v: V) -> Self {
        self.params.insert("valueInputOption", v.into());
        self
    }

    /// Include the updated values in the response.
    pub fn with_include_values_in_response(mut self, v: bool) -> Self {
        self.params.insert("includeValuesInResponse", v);
        self
    }

    pub async fn send(self) -> Result<model::UpdateValuesResponse> {
        let range = self.value_range.range.as_deref().unwrap_or_default();
        let path = format!(
            "{BASE_PATH}/{}/values/{}",
            required("spreadsheet_id", &self.spreadsheet_id)?,
            required("range", range)?
        );
        let builder = self.stub.builder(reqwest::Method::PUT, path);
        self.stub
            .execute(builder, Some(self.value_range), &self.params)
            .await
    }
}

query_parameter_setters!(UpdateValues);

/// Returns the values in a range of a spreadsheet.
#[derive(Clone, Debug)]
pub struct GetValues {
    stub: Arc<ReqwestClient>,
    spreadsheet_id: String,
    range: String,
    params: QueryParameters,
}

impl GetValues {
    pub(crate) fn new(stub: Arc<ReqwestClient>, spreadsheet_id: String, range: String) -> Self {
        Self {
            stub,
            spreadsheet_id,
            range,
            params: QueryParameters::new(),
        }
    }

    /// Return the values organized by rows or by columns.
    pub fn with_major_dimension<V: Into<model::Dimension>>(mut self, v: V) -> Self {
        let dimension: model::Dimension = v.into();
        self.params.insert("majorDimension", dimension.name());
        self
    }

    /// How the values are rendered, e.g. `FORMATTED_VALUE` or `FORMULA`.
    pub fn with_value_render_option<V: Into<String>>(mut self, v: V) -> Self {
        self.params.insert("valueRenderOption", v.into());
        self
    }

    pub async fn send(self) -> Result<model::ValueRange> {
        let path = format!(
            "{BASE_PATH}/{}/values/{}",
            required("spreadsheet_id", &self.spreadsheet_id)?,
            required("range", &self.range)?
        );
        let builder = self.stub.builder(reqwest::Method::GET, path);
        self.stub
            .execute(builder, None::<NoBody>, &self.params)
            .await
    }
}

query_parameter_setters!(GetValues);
