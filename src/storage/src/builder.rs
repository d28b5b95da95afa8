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

//! Request builders for the [Storage][crate::client::Storage] client.
//!
//! Each method in the client returns one of these builders. Applications set
//! any optional parameters, such as preconditions, and then call `send()` to
//! make the request.

use crate::Result;
use crate::model;
use gax::path_parameter::{missing, required};
use gax::query_parameter::{QueryParameter, QueryParameters};
use gaxi::http::{NoBody, ReqwestClient};
use std::sync::Arc;

/// A builder for [Storage][crate::client::Storage].
///
/// ```
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_rest_storage::builder::ClientBuilder;
/// # use google_cloud_rest_storage::client::Storage;
/// let builder: ClientBuilder = Storage::builder();
/// let client = builder
///     .with_endpoint("https://www.googleapis.com")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
pub type ClientBuilder = gax::client_builder::ClientBuilder<
    crate::client::client_builder::Factory,
    gaxi::options::Credentials,
>;

const STORAGE_PATH: &str = "/storage/v1/b";
const UPLOAD_PATH: &str = "/upload/storage/v1/b";

fn bucket_path(bucket: &str) -> Result<String> {
    Ok(format!("{STORAGE_PATH}/{}/o", required("bucket", bucket)?))
}

fn object_path(bucket: &str, object: &str) -> Result<String> {
    Ok(format!(
        "{}/{}",
        bucket_path(bucket)?,
        required("object", object)?
    ))
}

// Every builder accepts arbitrary query parameters and a billing project.
macro_rules! query_parameter_setters {
    ($t:ty) => {
        impl $t {
            /// Sets a query parameter, replacing any previous values.
            pub fn with_query_parameter<K, V>(mut self, name: K, value: V) -> Self
            where
                K: Into<String>,
                V: QueryParameter,
            {
                self.params.insert(name, value);
                self
            }

            /// Sets multiple query parameters, replacing any previous values
            /// with the same names.
            pub fn with_query_parameters<I, K, V>(mut self, v: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<String>,
                V: QueryParameter,
            {
                self.params.extend(v.into_iter().collect());
                self
            }

            /// The project to be billed for this request. Required for
            /// requester-pays buckets.
            pub fn with_user_project<V: Into<String>>(mut self, v: V) -> Self {
                self.params.insert("userProject", v.into());
                self
            }
        }
    };
}

macro_rules! string_parameter {
    ($(#[$m:meta])* $f:ident => $name:literal) => {
        $(#[$m])*
        pub fn $f<V: Into<String>>(mut self, v: V) -> Self {
            self.params.insert($name, v.into());
            self
        }
    };
}

macro_rules! scalar_parameter {
    ($(#[$m:meta])* $f:ident: $t:ty => $name:literal) => {
        $(#[$m])*
        pub fn $f(mut self, v: $t) -> Self {
            self.params.insert($name, v);
            self
        }
    };
}

/// Concatenates a list of existing objects into a new object in the same
/// bucket.
///
/// # Example
/// ```
/// # use google_cloud_rest_storage::client::Storage;
/// # use google_cloud_rest_storage::model::ComposeRequest;
/// # async fn sample(client: &Storage) -> anyhow::Result<()> {
/// let request = ComposeRequest::new().set_source_objects(["part-1", "part-2"]);
/// let object = client
///     .compose("my-bucket", "combined", request)
///     .with_if_generation_match(0)
///     .send()
///     .await?;
/// println!("{object:?}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ComposeObject {
    stub: Arc<ReqwestClient>,
    bucket: String,
    object: String,
    request: model::ComposeRequest,
    params: QueryParameters,
}

impl ComposeObject {
    pub(crate) fn new(
        stub: Arc<ReqwestClient>,
        bucket: String,
        object: String,
        request: model::ComposeRequest,
    ) -> Self {
        Self {
            stub,
            bucket,
            object,
            request,
            params: QueryParameters::new(),
        }
    }

    string_parameter!(
        /// Applies a predefined set of access controls to the destination
        /// object, e.g. `projectPrivate`.
        with_destination_predefined_acl => "destinationPredefinedAcl"
    );
    scalar_parameter!(
        /// Only compose if the destination object's generation matches. Use
        /// `0` to compose only if the destination does not exist.
        with_if_generation_match: i64 => "ifGenerationMatch"
    );
    scalar_parameter!(with_if_metageneration_match: i64 => "ifMetagenerationMatch");
    string_parameter!(
        /// Encrypts the destination object with this Cloud KMS key.
        with_kms_key_name => "kmsKeyName"
    );

    pub async fn send(self) -> Result<model::Object> {
        let path = format!("{}/compose", object_path(&self.bucket, &self.object)?);
        let builder = self.stub.builder(reqwest::Method::POST, path);
        self.stub
            .execute(builder, Some(self.request), &self.params)
            .await
    }
}

query_parameter_setters!(ComposeObject);

/// Copies an object, optionally overriding its metadata.
///
/// Large objects, or copies across locations or storage classes, may be
/// rejected by the service. Use [RewriteObject] for those.
#[derive(Clone, Debug)]
pub struct CopyObject {
    stub: Arc<ReqwestClient>,
    source: (String, String),
    destination: (String, String),
    metadata: model::Object,
    params: QueryParameters,
}

impl CopyObject {
    pub(crate) fn new(
        stub: Arc<ReqwestClient>,
        source: (String, String),
        destination: (String, String),
        metadata: model::Object,
    ) -> Self {
        Self {
            stub,
            source,
            destination,
            metadata,
            params: QueryParameters::new(),
        }
    }

    scalar_parameter!(
        /// Copy this generation of the source object, instead of the live
        /// version.
        with_source_generation: i64 => "sourceGeneration"
    );
    string_parameter!(with_destination_predefined_acl => "destinationPredefinedAcl");
    scalar_parameter!(with_if_generation_match: i64 => "ifGenerationMatch");
    scalar_parameter!(with_if_metageneration_match: i64 => "ifMetagenerationMatch");
    scalar_parameter!(with_if_source_generation_match: i64 => "ifSourceGenerationMatch");
    string_parameter!(
        /// Either `full` or `noAcl`.
        with_projection => "projection"
    );

    pub async fn send(self) -> Result<model::Object> {
        let path = format!(
            "{}/copyTo/b/{}/o/{}",
            object_path(&self.source.0, &self.source.1)?,
            required("destination_bucket", &self.destination.0)?,
            required("destination_object", &self.destination.1)?
        );
        let builder = self.stub.builder(reqwest::Method::POST, path);
        self.stub
            .execute(builder, Some(self.metadata), &self.params)
            .await
    }
}

query_parameter_setters!(CopyObject);

/// Deletes an object.
///
/// Deletes the live version by default. With [with_generation] it
/// permanently deletes a specific version.
///
/// [with_generation]: DeleteObject::with_generation
#[derive(Clone, Debug)]
pub struct DeleteObject {
    stub: Arc<ReqwestClient>,
    bucket: String,
    object: String,
    params: QueryParameters,
}

impl DeleteObject {
    pub(crate) fn new(stub: Arc<ReqwestClient>, bucket: String, object: String) -> Self {
        Self {
            stub,
            bucket,
            object,
            params: QueryParameters::new(),
        }
    }

    scalar_parameter!(with_generation: i64 => "generation");
    scalar_parameter!(with_if_generation_match: i64 => "ifGenerationMatch");
    scalar_parameter!(with_if_generation_not_match: i64 => "ifGenerationNotMatch");
    scalar_parameter!(with_if_metageneration_match: i64 => "ifMetagenerationMatch");
    scalar_parameter!(with_if_metageneration_not_match: i64 => "ifMetagenerationNotMatch");

    pub async fn send(self) -> Result<()> {
        let path = object_path(&self.bucket, &self.object)?;
        let builder = self.stub.builder(reqwest::Method::DELETE, path);
        self.stub
            .execute::<NoBody, ()>(builder, None, &self.params)
            .await
    }
}

query_parameter_setters!(DeleteObject);

/// Returns the metadata of an object.
#[derive(Clone, Debug)]
pub struct GetObject {
    stub: Arc<ReqwestClient>,
    bucket: String,
    object: String,
    params: QueryParameters,
}

impl GetObject {
    pub(crate) fn new(stub: Arc<ReqwestClient>, bucket: String, object: String) -> Self {
        Self {
            stub,
            bucket,
            object,
            params: QueryParameters::new(),
        }
    }

    scalar_parameter!(
        /// Returns this version of the object, instead of the live version.
        with_generation: i64 => "generation"
    );
    scalar_parameter!(with_if_generation_match: i64 => "ifGenerationMatch");
    scalar_parameter!(with_if_generation_not_match: i64 => "ifGenerationNotMatch");
    scalar_parameter!(with_if_metageneration_match: i64 => "ifMetagenerationMatch");
    scalar_parameter!(with_if_metageneration_not_match: i64 => "ifMetagenerationNotMatch");
    string_parameter!(with_projection => "projection");

    pub async fn send(self) -> Result<model::Object> {
        let path = object_path(&self.bucket, &self.object)?;
        let builder = self.stub.builder(reqwest::Method::GET, path);
        self.stub
            .execute(builder, None::<NoBody>, &self.params)
            .await
    }
}

query_parameter_setters!(GetObject);

/// Uploads an object in a single request.
///
/// The request always uses `uploadType=media` and the object name given to
/// the client, any values for these query parameters set via
/// [with_query_parameter][CreateSimpleUpload::with_query_parameter] are
/// replaced.
///
/// # Example
/// ```
/// # use google_cloud_rest_storage::client::Storage;
/// # async fn sample(client: &Storage) -> anyhow::Result<()> {
/// let object = client
///     .create_simple_upload("my-bucket", "data.json", r#"{"a": 1}"#, "application/json")
///     .with_if_generation_match(0)
///     .send()
///     .await?;
/// println!("{object:?}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct CreateSimpleUpload {
    stub: Arc<ReqwestClient>,
    bucket: String,
    name: String,
    payload: bytes::Bytes,
    media_type: String,
    params: QueryParameters,
}

impl CreateSimpleUpload {
    pub(crate) fn new(
        stub: Arc<ReqwestClient>,
        bucket: String,
        name: String,
        payload: bytes::Bytes,
        media_type: String,
    ) -> Self {
        Self {
            stub,
            bucket,
            name,
            payload,
            media_type,
            params: QueryParameters::new(),
        }
    }

    /// Changes the media type of the payload, e.g. `text/plain`.
    pub fn with_content_type<V: Into<String>>(mut self, v: V) -> Self {
        self.media_type = v.into();
        self
    }

    string_parameter!(
        /// Sets the `contentEncoding` metadata, e.g. `gzip`.
        with_content_encoding => "contentEncoding"
    );
    scalar_parameter!(
        /// Only upload if the object's live generation matches. Use `0` to
        /// upload only if the object does not exist.
        with_if_generation_match: i64 => "ifGenerationMatch"
    );
    scalar_parameter!(with_if_generation_not_match: i64 => "ifGenerationNotMatch");
    scalar_parameter!(with_if_metageneration_match: i64 => "ifMetagenerationMatch");
    string_parameter!(with_kms_key_name => "kmsKeyName");
    string_parameter!(with_predefined_acl => "predefinedAcl");

    pub async fn send(mut self) -> Result<model::Object> {
        if self.name.is_empty() {
            return Err(missing("name"));
        }
        let path = format!("{UPLOAD_PATH}/{}/o", required("bucket", &self.bucket)?);
        self.params.extend(
            QueryParameters::new()
                .set("uploadType", "media")
                .set("name", self.name.as_str()),
        );
        let builder = self.stub.builder(reqwest::Method::POST, path);
        self.stub
            .execute_media(builder, self.payload, &self.media_type, &self.params)
            .await
    }
}

query_parameter_setters!(CreateSimpleUpload);

/// Lists the objects in a bucket.
///
/// Returns a single page of results. If
/// [next_page_token][model::Objects::next_page_token] is set, send another
/// request with [with_page_token][ListObjects::with_page_token] to get the next page.
///
/// # Example
/// ```
/// # use google_cloud_rest_storage::client::Storage;
/// # async fn sample(client: &Storage) -> anyhow::Result<()> {
/// let mut page_token = None;
/// loop {
///     let mut list = client.list("my-bucket").with_prefix("logs/");
///     if let Some(token) = page_token {
///         list = list.with_page_token(token);
///     }
///     let page = list.send().await?;
///     page.items.iter().for_each(|o| println!("{:?}", o.name));
///     page_token = page.next_page_token;
///     if page_token.is_none() {
///         break;
///     }
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ListObjects {
    stub: Arc<ReqwestClient>,
    bucket: String,
    params: QueryParameters,
}

impl ListObjects {
    pub(crate) fn new(stub: Arc<ReqwestClient>, bucket: String) -> Self {
        Self {
            stub,
            bucket,
            params: QueryParameters::new(),
        }
    }

    string_parameter!(
        /// Only list objects whose names begin with this prefix.
        with_prefix => "prefix"
    );
    string_parameter!(
        /// Group the names with this delimiter into `prefixes`, e.g. `/`.
        with_delimiter => "delimiter"
    );
    scalar_parameter!(with_include_trailing_delimiter: bool => "includeTrailingDelimiter");
    string_parameter!(with_page_token => "pageToken");
    scalar_parameter!(
        /// The maximum number of items in the page.
        with_max_results: u32 => "maxResults"
    );
    scalar_parameter!(
        /// Include noncurrent versions of the objects.
        with_versions: bool => "versions"
    );
    string_parameter!(with_start_offset => "startOffset");
    string_parameter!(with_end_offset => "endOffset");
    string_parameter!(with_match_glob => "matchGlob");
    string_parameter!(with_projection => "projection");

    pub async fn send(self) -> Result<model::Objects> {
        let path = bucket_path(&self.bucket)?;
        let builder = self.stub.builder(reqwest::Method::GET, path);
        self.stub
            .execute(builder, None::<NoBody>, &self.params)
            .await
    }
}

query_parameter_setters!(ListObjects);

/// Changes some of the metadata of an object.
///
/// Only the fields set in the request are sent, the service keeps the
/// current value for any other fields.
#[derive(Clone, Debug)]
pub struct PatchObject {
    stub: Arc<ReqwestClient>,
    bucket: String,
    object: String,
    metadata: model::Object,
    params: QueryParameters,
}

impl PatchObject {
    pub(crate) fn new(
        stub: Arc<ReqwestClient>,
        bucket: String,
        object: String,
        metadata: model::Object,
    ) -> Self {
        Self {
            stub,
            bucket,
            object,
            metadata,
            params: QueryParameters::new(),
        }
    }

    scalar_parameter!(with_generation: i64 => "generation");
    scalar_parameter!(with_if_generation_match: i64 => "ifGenerationMatch");
    scalar_parameter!(
        /// Only patch if the metadata version matches, use this to implement
        /// read-modify-write loops.
        with_if_metageneration_match: i64 => "ifMetagenerationMatch"
    );
    scalar_parameter!(with_if_metageneration_not_match: i64 => "ifMetagenerationNotMatch");
    string_parameter!(with_predefined_acl => "predefinedAcl");
    string_parameter!(with_projection => "projection");

    pub async fn send(self) -> Result<model::Object> {
        let path = object_path(&self.bucket, &self.object)?;
        let builder = self.stub.builder(reqwest::Method::PATCH, path);
        self.stub
            .execute(builder, Some(self.metadata), &self.params)
            .await
    }
}

query_parameter_setters!(PatchObject);

/// Rewrites a source object to a destination object.
///
/// Unlike [CopyObject], a rewrite works across locations and storage classes. The
/// service may need multiple calls to finish, see
/// [RewriteResponse][model::RewriteResponse].
///
/// # Example
/// ```
/// # use google_cloud_rest_storage::client::Storage;
/// # use google_cloud_rest_storage::model::Object;
/// # async fn sample(client: &Storage) -> anyhow::Result<()> {
/// let mut token: Option<String> = None;
/// let object = loop {
///     let mut rewrite = client.rewrite("src", "a.bin", "dst", "a.bin", Object::new());
///     if let Some(t) = token.take() {
///         rewrite = rewrite.with_rewrite_token(t);
///     }
///     let response = rewrite.send().await?;
///     if response.done {
///         break response.resource;
///     }
///     token = response.rewrite_token;
/// };
/// println!("{object:?}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct RewriteObject {
    stub: Arc<ReqwestClient>,
    source: (String, String),
    destination: (String, String),
    metadata: model::Object,
    params: QueryParameters,
}

impl RewriteObject {
    pub(crate) fn new(
        stub: Arc<ReqwestClient>,
        source: (String, String),
        destination: (String, String),
        metadata: model::Object,
    ) -> Self {
        Self {
            stub,
            source,
            destination,
            metadata,
            params: QueryParameters::new(),
        }
    }

    string_parameter!(
        /// Continues a rewrite started by a previous call.
        with_rewrite_token => "rewriteToken"
    );
    scalar_parameter!(with_max_bytes_rewritten_per_call: i64 => "maxBytesRewrittenPerCall");
    scalar_parameter!(with_source_generation: i64 => "sourceGeneration");
    string_parameter!(with_destination_predefined_acl => "destinationPredefinedAcl");
    string_parameter!(with_destination_kms_key_name => "destinationKmsKeyName");
    scalar_parameter!(with_if_generation_match: i64 => "ifGenerationMatch");
    scalar_parameter!(with_if_metageneration_match: i64 => "ifMetagenerationMatch");
    scalar_parameter!(with_if_source_generation_match: i64 => "ifSourceGenerationMatch");
    string_parameter!(with_projection => "projection");

    pub async fn send(self) -> Result<model::RewriteResponse> {
        let path = format!(
            "{}/rewriteTo/b/{}/o/{}",
            object_path(&self.source.0, &self.source.1)?,
            required("destination_bucket", &self.destination.0)?,
            required("destination_object", &self.destination.1)?
        );
        let builder = self.stub.builder(reqwest::Method::POST, path);
        self.stub
            .execute(builder, Some(self.metadata), &self.params)
            .await
    }
}

query_parameter_setters!(RewriteObject);

/// Replaces the metadata of an object.
///
/// Fields missing from the request are reset to their default values, use
/// [PatchObject] to change only some fields.
#[derive(Clone, Debug)]
pub struct UpdateObject {
    stub: Arc<ReqwestClient>,
    bucket: String,
    object: String,
    metadata: model::Object,
    params: QueryParameters,
}

impl UpdateObject {
    pub(crate) fn new(
        stub: Arc<ReqwestClient>,
        bucket: String,
        object: String,
        metadata: model::Object,
    ) -> Self {
        Self {
            stub,
            bucket,
            object,
            metadata,
            params: QueryParameters::new(),
        }
    }

    scalar_parameter!(with_generation: i64 => "generation");
    scalar_parameter!(with_if_generation_match: i64 => "ifGenerationMatch");
    scalar_parameter!(with_if_metageneration_match: i64 => "ifMetagenerationMatch");
    scalar_parameter!(with_if_metageneration_not_match: i64 => "ifMetagenerationNotMatch");
    string_parameter!(with_predefined_acl => "predefinedAcl");
    string_parameter!(with_projection => "projection");

    pub async fn send(self) -> Result<model::Object> {
        let path = object_path(&self.bucket, &self.object)?;
        let builder = self.stub.builder(reqwest::Method::PUT, path);
        self.stub
            .execute(builder, Some(self.metadata), &self.params)
            .await
    }
}

query_parameter_setters!(UpdateObject);

/// Watches for changes on all the objects in a bucket.
///
/// Returns the channel created by the service.
#[derive(Clone, Debug)]
pub struct WatchAllObjects {
    stub: Arc<ReqwestClient>,
    bucket: String,
    channel: model::Channel,
    params: QueryParameters,
}

impl WatchAllObjects {
    pub(crate) fn new(stub: Arc<ReqwestClient>, bucket: String, channel: model::Channel) -> Self {
        Self {
            stub,
            bucket,
            channel,
            params: QueryParameters::new(),
        }
    }

    string_parameter!(with_prefix => "prefix");
    string_parameter!(with_delimiter => "delimiter");
    scalar_parameter!(with_include_trailing_delimiter: bool => "includeTrailingDelimiter");
    scalar_parameter!(with_versions: bool => "versions");
    string_parameter!(with_page_token => "pageToken");
    scalar_parameter!(with_max_results: u32 => "maxResults");
    string_parameter!(with_projection => "projection");

    pub async fn send(self) -> Result<model::Channel> {
        let path = format!("{}/watch", bucket_path(&self.bucket)?);
        let builder = self.stub.builder(reqwest::Method::POST, path);
        self.stub
            .execute(builder, Some(self.channel), &self.params)
            .await
    }
}

query_parameter_setters!(WatchAllObjects);
