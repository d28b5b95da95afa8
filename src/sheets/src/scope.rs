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

//! OAuth 2.0 scopes used by the Sheets API.

/// Allows read-only access to the user's sheets and their properties.
pub const READ_ONLY: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// Allows read/write access to the user's sheets and their properties.
pub const READ_WRITE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Allows read-only access to the user's file metadata and file content.
pub const DRIVE_READ_ONLY: &str = "https://www.googleapis.com/auth/drive.readonly";

/// Per-file access to files created or opened by the app.
pub const DRIVE_FILE: &str = "https://www.googleapis.com/auth/drive.file";

/// Full, permissive scope to access all of a user's files. Request this scope
/// only when it is strictly necessary.
pub const DRIVE_FULL: &str = "https://www.googleapis.com/auth/drive";
