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

mod core_error;
mod credentials;
mod decode;
pub use core_error::*;
pub use credentials::*;
pub use decode::*;

/// Errors and error details returned by the services.
///
/// The client libraries distinguish between errors detected while trying to
/// send a request (e.g. cannot open a connection), errors trying to receive a
/// response (e.g. the response is not valid JSON), and errors returned by the
/// service itself.
///
/// The types in this module represent detailed information returned by the
/// Google Cloud services.
pub mod rpc;
