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

//! OAuth 2.0 scopes used by the Cloud Storage API.

/// Only allows access to read data, including listing buckets.
pub const READ_ONLY: &str = "https://www.googleapis.com/auth/devstorage.read_only";

/// Allows access to read and change data, but not metadata like IAM policies.
pub const READ_WRITE: &str = "https://www.googleapis.com/auth/devstorage.read_write";

/// Allows full control over data, including the ability to modify IAM
/// policies.
pub const FULL_CONTROL: &str = "https://www.googleapis.com/auth/devstorage.full_control";

/// View your data across Google Cloud services.
pub const CLOUD_PLATFORM_READ_ONLY: &str =
    "https://www.googleapis.com/auth/cloud-platform.read-only";

/// View and manage data across all Google Cloud services.
pub const CLOUD_PLATFORM: &str = "https://www.googleapis.com/auth/cloud-platform";
