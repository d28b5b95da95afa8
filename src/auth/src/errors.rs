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

//! Errors created while fetching tokens or creating authentication headers.

use http::StatusCode;
use std::error::Error;

pub use gax::error::CredentialsError;

/// Returns true if a token endpoint error status may succeed on a retry.
pub(crate) fn is_retryable(c: StatusCode) -> bool {
    matches!(
        c,
        StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::REQUEST_TIMEOUT
            | StatusCode::TOO_MANY_REQUESTS
    )
}

pub(crate) fn retryable<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::new(true, source)
}

pub(crate) fn non_retryable<T: Error + Send + Sync + 'static>(source: T) -> CredentialsError {
    CredentialsError::new(false, source)
}

pub(crate) fn non_retryable_from_str<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}

/// Converts an unsuccessful token endpoint response into an error.
pub(crate) async fn from_http_response(
    response: reqwest::Response,
    msg: &str,
) -> CredentialsError {
    let status = response.status();
    let transient = is_retryable(status);
    match response.text().await {
        Ok(body) => CredentialsError::from_msg(
            transient,
            format!("{msg}, status={status}, body=<{body}>"),
        ),
        Err(e) => CredentialsError::new(transient, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(StatusCode::INTERNAL_SERVER_ERROR)]
    #[test_case(StatusCode::SERVICE_UNAVAILABLE)]
    #[test_case(StatusCode::REQUEST_TIMEOUT)]
    #[test_case(StatusCode::TOO_MANY_REQUESTS)]
    fn retryable_status(c: StatusCode) {
        assert!(is_retryable(c));
    }

    #[test_case(StatusCode::NOT_FOUND)]
    #[test_case(StatusCode::UNAUTHORIZED)]
    #[test_case(StatusCode::BAD_REQUEST)]
    #[test_case(StatusCode::BAD_GATEWAY)]
    #[test_case(StatusCode::PRECONDITION_FAILED)]
    fn non_retryable_status(c: StatusCode) {
        assert!(!is_retryable(c));
    }

    #[test]
    fn helpers() {
        let e = retryable(std::io::Error::other("test-only"));
        assert!(e.is_transient(), "{e}");
        let e = non_retryable(std::io::Error::other("test-only"));
        assert!(!e.is_transient(), "{e}");
        let e = non_retryable_from_str("test-only");
        assert!(!e.is_transient(), "{e}");
        assert!(e.to_string().contains("test-only"), "{e}");
    }

    #[tokio::test]
    async fn from_response() -> anyhow::Result<()> {
        let response = http::Response::builder()
            .status(StatusCode::SERVICE_UNAVAILABLE)
            .body("try-again-later")?;
        let e = from_http_response(response.into(), "cannot fetch token").await;
        assert!(e.is_transient(), "{e}");
        let fmt = e.to_string();
        assert!(fmt.contains("cannot fetch token"), "{fmt}");
        assert!(fmt.contains("try-again-later"), "{fmt}");
        assert!(fmt.contains("503"), "{fmt}");
        Ok(())
    }
}
