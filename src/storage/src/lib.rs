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

//! Google Cloud REST Client Libraries for Rust - Storage
//!
//! This crate contains types and functions to interact with the objects in
//! [Google Cloud Storage] using its JSON API. Most applications will use the
//! [Storage][client::Storage] client, which returns a request builder for each
//! operation:
//!
//! ```
//! # async fn sample() -> anyhow::Result<()> {
//! use google_cloud_rest_storage::client::Storage;
//! let client = Storage::builder().build().await?;
//! let object = client
//!     .create_simple_upload("my-bucket", "greetings/hello.txt", "Hello World!", "text/plain")
//!     .send()
//!     .await?;
//! println!("uploaded generation {:?}", object.generation);
//! # Ok(()) }
//! ```
//!
//! [Google Cloud Storage]: https://cloud.google.com/storage

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod config;
pub mod model;
pub mod scope;
