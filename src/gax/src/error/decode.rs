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

/// The response payload could not be decoded into the expected type.
///
/// The client libraries wrap this type in an
/// [Error][crate::error::Error] where
/// [is_deserialization()][crate::error::Error::is_deserialization] is true.
///
/// # Example
/// ```
/// use std::error::Error as _;
/// use google_cloud_rest_gax::error::{DecodeError, Error};
/// fn inspect(e: &Error) {
///     if let Some(d) = e.source().and_then(|s| s.downcast_ref::<DecodeError>()) {
///         println!("expected a {}, got {:?}", d.type_name(), d.payload());
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
#[error("cannot decode the response payload as `{type_name}`: {source}")]
pub struct DecodeError {
    type_name: &'static str,
    payload: bytes::Bytes,
    #[source]
    source: serde_json::Error,
}

impl DecodeError {
    /// Creates a new error for a payload that failed to decode as `T`.
    pub fn new<T>(payload: bytes::Bytes, source: serde_json::Error) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            payload,
            source,
        }
    }

    /// The name of the type the payload was decoded into.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The payload received from the service.
    pub fn payload(&self) -> &bytes::Bytes {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Thing {
        name: String,
    }

    #[test]
    fn names_type() {
        let payload = bytes::Bytes::from_static(br#"{"name": 42}"#);
        let source = serde_json::from_slice::<Thing>(&payload).unwrap_err();
        let e = DecodeError::new::<Thing>(payload.clone(), source);
        assert!(e.type_name().ends_with("Thing"), "{e:?}");
        assert_eq!(e.payload(), &payload);
        assert!(e.source().is_some(), "{e:?}");
        assert!(e.to_string().contains("Thing"), "{e}");

        let error = crate::error::Error::deser(e);
        assert!(error.is_deserialization(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<DecodeError>());
        assert!(got.is_some(), "{error:?}");
    }
}
