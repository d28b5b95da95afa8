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

use crate::Result;
use crate::errors::CredentialsError;
use crate::token::{Token, TokenProvider};
use std::sync::Arc;
use tokio::sync::Mutex;
// Using tokio's wrapper makes the cache testable without relying on clock times.
use tokio::time::Instant;

/// Caches the tokens returned by a [TokenProvider].
///
/// Many tasks may request a token at the same time. The cache ensures there is
/// at most one refresh in flight; all the other tasks wait for its result.
#[derive(Debug)]
pub(crate) struct TokenCache<T>
where
    T: TokenProvider,
{
    // The cached token, or the last seen error.
    token: Arc<Mutex<Result<Token>>>,

    // Tracks if a refresh is ongoing. If the lock is held, there is a refresh.
    // Waiters queue on this lock, the refresh result is in `token` once they
    // acquire it.
    refresh_in_progress: Arc<Mutex<()>>,

    // The token provider. This thing does the refreshing.
    inner: Arc<T>,
}

// Returns true if we are holding an error, or a token that has expired.
fn invalid(token: &Result<Token>) -> bool {
    match token {
        Ok(t) => t.expires_at.is_some_and(|e| e <= Instant::now()),
        Err(_) => true,
    }
}

// Implemented manually, deriving `Clone` would require `T: Clone`.
impl<T: TokenProvider> Clone for TokenCache<T> {
    fn clone(&self) -> TokenCache<T> {
        TokenCache {
            token: self.token.clone(),
            refresh_in_progress: self.refresh_in_progress.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub(crate) fn new(inner: T) -> TokenCache<T> {
        TokenCache {
            token: Arc::new(Mutex::new(Err(CredentialsError::from_msg(
                true,
                "no token in the cache, a refresh is required",
            )))),
            refresh_in_progress: Arc::new(Mutex::new(())),
            inner: Arc::new(inner),
        }
    }

    // Clones the current token, in a thread-safe manner. Releases the lock on return.
    async fn current_token(&self) -> Result<Token> {
        self.token.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        let token = self.current_token().await;
        if !invalid(&token) {
            return token;
        }

        match self.refresh_in_progress.try_lock() {
            Ok(_guard) => {
                // Another task may have completed a refresh since we looked.
                let current = self.current_token().await;
                if !invalid(&current) {
                    return current;
                }

                let token = self.inner.token().await;
                if let Err(e) = &token {
                    tracing::debug!("token refresh failed: {e}");
                }
                *self.token.lock().await = token.clone();
                token
            }
            Err(_) => {
                // Wait until whoever holds the guard releases it. Any refresh
                // they started has stored its result by then.
                drop(self.refresh_in_progress.lock().await);
                self.current_token().await
            }
        }
    }
}
