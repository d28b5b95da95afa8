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

//! Google Cloud REST Client Libraries for Rust - Common types
//!
//! This crate contains the types shared by the Sheets and Storage REST
//! clients: the error model, the client builder, and helpers to format the
//! query and path parameters of a request.
//!
//! Applications rarely need to use this crate directly, other than to
//! interrogate the errors returned by the clients.

/// An alias of [std::result::Result] where the error is always [Error][crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client libraries.
pub mod error;

/// Types and functions to configure and construct clients.
pub mod client_builder;

/// Format and parse the query parameters of a request.
pub mod query_parameter;

/// Format the path parameters of a request.
pub mod path_parameter;
