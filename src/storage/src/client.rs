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

//! Contains the Storage client and related types.

use crate::builder;
use crate::model;
use gaxi::http::ReqwestClient;
use std::sync::Arc;

const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com";

/// Implements a client for the objects in the Cloud Storage JSON API.
///
/// # Example
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_rest_storage::client::Storage;
/// let client = Storage::builder().build().await?;
/// let object = client.get("my-bucket", "path/to/object.txt").send().await?;
/// println!("{object:?}");
/// # Ok(()) }
/// ```
///
/// # Configuration
///
/// To configure `Storage` use the `with_*` methods in the type returned
/// by [builder()][Storage::builder]. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://www.googleapis.com`). Applications can use a custom endpoint,
///   for example, to connect to an emulator.
/// * [with_credentials()]: by default this client uses credentials from the
///   `GOOGLE_APPLICATION_CREDENTIALS` file, or the metadata server.
/// * [with_config()]: change the scopes, the service account, or the project.
///
/// # Pooling and Cloning
///
/// `Storage` holds a connection pool internally, it is advised to
/// create one and then reuse it. You do not need to wrap `Storage` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_endpoint()]: builder::ClientBuilder::with_endpoint
/// [with_credentials()]: builder::ClientBuilder::with_credentials
/// [with_config()]: builder::ClientBuilder::with_config
#[derive(Clone, Debug)]
pub struct Storage {
    inner: Arc<ReqwestClient>,
    project_id: String,
}

impl Storage {
    /// Returns a builder for [Storage].
    ///
    /// ```
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use google_cloud_rest_storage::client::Storage;
    /// # use google_cloud_rest_storage::{config::StorageConfig, scope};
    /// let client = Storage::builder()
    ///     .with_config(StorageConfig::new([scope::READ_ONLY], "default"))
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> builder::ClientBuilder {
        gax::client_builder::internal::new_builder_with_config(
            client_builder::Factory,
            crate::config::StorageConfig::default().into(),
        )
    }

    async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config.clone(), DEFAULT_ENDPOINT).await?;
        let project_id = gaxi::project::resolve_project_id(inner.credentials(), &config)?;
        tracing::debug!("Storage client using project {project_id}");
        Ok(Self {
            inner: Arc::new(inner),
            project_id,
        })
    }

    /// The project resolved when the client was built.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Concatenates the objects in `request` into `destination_object`.
    ///
    /// The source objects must be in `destination_bucket`.
    pub fn compose<B, O, R>(
        &self,
        destination_bucket: B,
        destination_object: O,
        request: R,
    ) -> builder::ComposeObject
    where
        B: Into<String>,
        O: Into<String>,
        R: Into<model::ComposeRequest>,
    {
        builder::ComposeObject::new(
            self.inner.clone(),
            destination_bucket.into(),
            destination_object.into(),
            request.into(),
        )
    }

    /// Copies an object, the fields set in `metadata` override the source
    /// object's metadata.
    pub fn copy<SB, SO, DB, DO, M>(
        &self,
        source_bucket: SB,
        source_object: SO,
        destination_bucket: DB,
        destination_object: DO,
        metadata: M,
    ) -> builder::CopyObject
    where
        SB: Into<String>,
        SO: Into<String>,
        DB: Into<String>,
        DO: Into<String>,
        M: Into<model::Object>,
    {
        builder::CopyObject::new(
            self.inner.clone(),
            (source_bucket.into(), source_object.into()),
            (destination_bucket.into(), destination_object.into()),
            metadata.into(),
        )
    }

    /// Deletes an object.
    pub fn delete<B, O>(&self, bucket: B, object: O) -> builder::DeleteObject
    where
        B: Into<String>,
        O: Into<String>,
    {
        builder::DeleteObject::new(self.inner.clone(), bucket.into(), object.into())
    }

    /// Returns the metadata of an object.
    pub fn get<B, O>(&self, bucket: B, object: O) -> builder::GetObject
    where
        B: Into<String>,
        O: Into<String>,
    {
        builder::GetObject::new(self.inner.clone(), bucket.into(), object.into())
    }

    /// Uploads `data` as the object `name` in a single request.
    ///
    /// `media_type` is sent as the `content-type` of the request, and
    /// becomes the object's content type.
    pub fn create_simple_upload<B, N, D, M>(
        &self,
        bucket: B,
        name: N,
        data: D,
        media_type: M,
    ) -> builder::CreateSimpleUpload
    where
        B: Into<String>,
        N: Into<String>,
        D: Into<bytes::Bytes>,
        M: Into<String>,
    {
        builder::CreateSimpleUpload::new(
            self.inner.clone(),
            bucket.into(),
            name.into(),
            data.into(),
            media_type.into(),
        )
    }

    /// Lists the objects in a bucket, one page at a time.
    pub fn list<B: Into<String>>(&self, bucket: B) -> builder::ListObjects {
        builder::ListObjects::new(self.inner.clone(), bucket.into())
    }

    /// Changes the fields of the object metadata set in `metadata`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_rest_storage::client::Storage;
    /// # use google_cloud_rest_storage::model::Object;
    /// # async fn sample(client: &Storage) -> anyhow::Result<()> {
    /// let object = client
    ///     .patch("my-bucket", "report.csv", Object::new().set_cache_control("no-store"))
    ///     .with_if_metageneration_match(3)
    ///     .send()
    ///     .await?;
    /// println!("{object:?}");
    /// # Ok(()) }
    /// ```
    pub fn patch<B, O, M>(&self, bucket: B, object: O, metadata: M) -> builder::PatchObject
    where
        B: Into<String>,
        O: Into<String>,
        M: Into<model::Object>,
    {
        builder::PatchObject::new(
            self.inner.clone(),
            bucket.into(),
            object.into(),
            metadata.into(),
        )
    }

    /// Rewrites an object, the fields set in `metadata` override the source
    /// object's metadata.
    pub fn rewrite<SB, SO, DB, DO, M>(
        &self,
        source_bucket: SB,
        source_object: SO,
        destination_bucket: DB,
        destination_object: DO,
        metadata: M,
    ) -> builder::RewriteObject
    where
        SB: Into<String>,
        SO: Into<String>,
        DB: Into<String>,
        DO: Into<String>,
        M: Into<model::Object>,
    {
        builder::RewriteObject::new(
            self.inner.clone(),
            (source_bucket.into(), source_object.into()),
            (destination_bucket.into(), destination_object.into()),
            metadata.into(),
        )
    }

    /// Replaces the object metadata with `metadata`.
    pub fn update<B, O, M>(&self, bucket: B, object: O, metadata: M) -> builder::UpdateObject
    where
        B: Into<String>,
        O: Into<String>,
        M: Into<model::Object>,
    {
        builder::UpdateObject::new(
            self.inner.clone(),
            bucket.into(),
            object.into(),
            metadata.into(),
        )
    }

    /// Starts watching the objects in `bucket`, notifications are sent to
    /// the address in `channel`.
    pub fn watch_all<B, C>(&self, bucket: B, channel: C) -> builder::WatchAllObjects
    where
        B: Into<String>,
        C: Into<model::Channel>,
    {
        builder::WatchAllObjects::new(self.inner.clone(), bucket.into(), channel.into())
    }
}

pub(crate) mod client_builder {
    use super::Storage;

    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Storage;
        type Credentials = gaxi::options::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}
