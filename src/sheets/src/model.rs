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

//! The resources and messages used by the Sheets API.
//!
//! See <https://developers.google.com/sheets/api/reference/rest> for the
//! complete reference.

use serde::{Deserialize, Serialize};

/// A spreadsheet, with its properties and sheets.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Spreadsheet {
    /// The ID of the spreadsheet. Assigned by the service.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub spreadsheet_id: String,

    /// Overall properties of the spreadsheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SpreadsheetProperties>,

    /// The sheets that are part of the spreadsheet.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sheets: Vec<Sheet>,

    /// The url of the spreadsheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spreadsheet_url: Option<String>,
}

impl Spreadsheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [properties][Spreadsheet::properties].
    pub fn set_properties<T: Into<SpreadsheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value of [sheets][Spreadsheet::sheets].
    pub fn set_sheets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Sheet>,
    {
        self.sheets = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Properties of a spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpreadsheetProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The locale of the spreadsheet, e.g. `en_US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// The amount of time to wait before volatile functions are recalculated,
    /// e.g. `ON_CHANGE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_recalc: Option<String>,

    /// The time zone of the spreadsheet, in CLDR format, e.g. `America/New_York`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl SpreadsheetProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    pub fn set_locale<T: Into<String>>(mut self, v: T) -> Self {
        self.locale = Some(v.into());
        self
    }

    pub fn set_auto_recalc<T: Into<String>>(mut self, v: T) -> Self {
        self.auto_recalc = Some(v.into());
        self
    }

    pub fn set_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.time_zone = Some(v.into());
        self
    }
}

/// A sheet in a spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Sheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SheetProperties>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_properties<T: Into<SheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }
}

/// Properties of a sheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SheetProperties {
    /// The ID of the sheet. Must be non-negative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// The index of the sheet within the spreadsheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,

    /// The type of sheet, e.g. `GRID`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_properties: Option<GridProperties>,
}

impl SheetProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sheet_id(mut self, v: i32) -> Self {
        self.sheet_id = Some(v);
        self
    }

    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    pub fn set_index(mut self, v: i32) -> Self {
        self.index = Some(v);
        self
    }

    pub fn set_sheet_type<T: Into<String>>(mut self, v: T) -> Self {
        self.sheet_type = Some(v.into());
        self
    }

    pub fn set_grid_properties<T: Into<GridProperties>>(mut self, v: T) -> Self {
        self.grid_properties = Some(v.into());
        self
    }
}

/// Properties of a grid.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GridProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_gridlines: Option<bool>,
}

impl GridProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_row_count(mut self, v: i32) -> Self {
        self.row_count = Some(v);
        self
    }

    pub fn set_column_count(mut self, v: i32) -> Self {
        self.column_count = Some(v);
        self
    }

    pub fn set_hide_gridlines(mut self, v: bool) -> Self {
        self.hide_gridlines = Some(v);
        self
    }
}

/// The major dimension of a [ValueRange].
///
/// Values unknown to this version of the library are preserved in
/// [Dimension::UnknownValue].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Dimension {
    #[default]
    Unspecified,
    Rows,
    Columns,
    UnknownValue(String),
}

impl Dimension {
    /// The name of the value, as it appears in JSON.
    pub fn name(&self) -> &str {
        match self {
            Self::Unspecified => "DIMENSION_UNSPECIFIED",
            Self::Rows => "ROWS",
            Self::Columns => "COLUMNS",
            Self::UnknownValue(s) => s.as_str(),
        }
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        match value {
            "DIMENSION_UNSPECIFIED" => Self::Unspecified,
            "ROWS" => Self::Rows,
            "COLUMNS" => Self::Columns,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|s| Dimension::from(s.as_str()))
    }
}

/// A range of values in a spreadsheet.
///
/// # Example
/// ```
/// # use google_cloud_rest_sheets::model::{Dimension, ValueRange};
/// let range = ValueRange::new()
///     .set_range("Sheet1!A1:B2")
///     .set_major_dimension(Dimension::Rows)
///     .set_values([["a", "b"], ["c", "d"]]);
/// assert_eq!(range.values.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValueRange {
    /// The range the values cover, in A1 notation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<Dimension>,

    /// The data, one inner list per row (or column, see
    /// [major_dimension][ValueRange::major_dimension]).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Vec<serde_json::Value>>,
}

impl ValueRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_range<T: Into<String>>(mut self, v: T) -> Self {
        self.range = Some(v.into());
        self
    }

    pub fn set_major_dimension<T: Into<Dimension>>(mut self, v: T) -> Self {
        self.major_dimension = Some(v.into());
        self
    }

    /// Sets the value of [values][ValueRange::values].
    pub fn set_values<T, R, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        self.values = v
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.into()).collect())
            .collect();
        self
    }
}

/// The response to an update values request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateValuesResponse {
    pub spreadsheet_id: String,
    /// The range (in A1 notation) that updates were applied to.
    pub updated_range: String,
    pub updated_rows: i32,
    pub updated_columns: i32,
    pub updated_cells: i32,
    /// The values of the cells after the update, only included when the
    /// request sets `includeValuesInResponse`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_data: Option<ValueRange>,
}

/// The request to copy a sheet to another spreadsheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CopySheetToAnotherSpreadsheetRequest {
    pub destination_spreadsheet_id: String,
}

impl CopySheetToAnotherSpreadsheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination_spreadsheet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_spreadsheet_id = v.into();
        self
    }
}

/// A list of updates to apply to a spreadsheet.
///
/// The updates are applied atomically, if any update fails none of them are
/// applied.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateSpreadsheetRequest {
    pub requests: Vec<Request>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_spreadsheet_in_response: Option<bool>,
}

impl BatchUpdateSpreadsheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Request>,
    {
        self.requests = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_include_spreadsheet_in_response(mut self, v: bool) -> Self {
        self.include_spreadsheet_in_response = Some(v);
        self
    }
}

/// A single update in a [BatchUpdateSpreadsheetRequest].
///
/// Only one of the fields should be set.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_sheet: Option<AddSheetRequest>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_sheet: Option<DeleteSheetRequest>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_add_sheet<T: Into<AddSheetRequest>>(mut self, v: T) -> Self {
        self.add_sheet = Some(v.into());
        self
    }

    pub fn set_delete_sheet<T: Into<DeleteSheetRequest>>(mut self, v: T) -> Self {
        self.delete_sheet = Some(v.into());
        self
    }
}

/// Adds a new sheet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddSheetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SheetProperties>,
}

impl AddSheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_properties<T: Into<SheetProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }
}

/// Deletes the sheet with the given ID.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteSheetRequest {
    pub sheet_id: i32,
}

impl DeleteSheetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sheet_id(mut self, v: i32) -> Self {
        self.sheet_id = v;
        self
    }
}

/// The response to a [BatchUpdateSpreadsheetRequest].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateSpreadsheetResponse {
    pub spreadsheet_id: String,

    /// One reply per request, in the same order. Requests without a reply
    /// (such as deleting a sheet) produce an empty object.
    pub replies: Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_spreadsheet: Option<Spreadsheet>,
}
