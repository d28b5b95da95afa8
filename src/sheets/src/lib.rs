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

//! Google Cloud REST Client Libraries for Rust - Sheets
//!
//! This crate contains types and functions to interact with the [Google
//! Sheets API]. Most applications will use the [Sheets][client::Sheets]
//! client, which returns a request builder for each operation:
//!
//! ```
//! # async fn sample() -> anyhow::Result<()> {
//! use google_cloud_rest_sheets::client::Sheets;
//! use google_cloud_rest_sheets::model::ValueRange;
//! let client = Sheets::builder().build().await?;
//! let spreadsheet = client.create().send().await?;
//! let values = ValueRange::new()
//!     .set_range("Sheet1!A1:B2")
//!     .set_values([[1, 2], [3, 4]]);
//! let response = client
//!     .update_values(&spreadsheet.spreadsheet_id, values)
//!     .send()
//!     .await?;
//! println!("{response:?}");
//! # Ok(()) }
//! ```
//!
//! [Google Sheets API]: https://developers.google.com/sheets/api

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod config;
pub mod model;
pub mod scope;
