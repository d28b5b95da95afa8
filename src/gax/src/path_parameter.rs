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

//! Formatting and validation of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required, and must be escaped before they are inserted in the path. For
//! example, object names routinely contain `/` characters, which must be sent
//! as `%2F`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

const ENCODED_CHARS: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}');

/// Escapes a path parameter.
///
/// # Example
/// ```
/// # use google_cloud_rest_gax::path_parameter::enc;
/// assert_eq!(enc("logs/2024 01.txt"), "logs%2F2024%2001.txt");
/// ```
pub fn enc(v: &str) -> String {
    utf8_percent_encode(v, ENCODED_CHARS).to_string()
}

/// Returns the escaped parameter, or an error if it is empty.
pub fn required(name: &str, v: &str) -> crate::Result<String> {
    if v.is_empty() {
        return Err(missing(name));
    }
    Ok(enc(v))
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

pub fn missing(name: &str) -> crate::error::Error {
    crate::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}
