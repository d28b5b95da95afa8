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

//! The resources and messages used by the Cloud Storage JSON API.
//!
//! See <https://cloud.google.com/storage/docs/json_api/v1/objects#resource>
//! for the complete reference. The JSON API encodes 64-bit integers as
//! strings, the types here use Rust integers and convert them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::OffsetDateTime;

/// An object (a file) in Cloud Storage.
///
/// All the fields are optional: the same type is used for the objects
/// returned by the service and for the (partial) metadata sent in `patch`,
/// `update`, `copy`, and `rewrite` requests. Fields that are `None` are not
/// sent.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Object {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// The ID of the object, including the bucket name, object name, and
    /// generation number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// A URL to download the object data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_link: Option<String>,

    /// The name of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The name of the bucket containing this object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    /// The content generation of this object, used for object versioning.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,

    /// The version of the metadata for this object at this generation.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metageneration: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,

    /// The content length of the data in bytes.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// MD5 hash of the data, encoded using base64.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5_hash: Option<String>,

    /// CRC32c checksum, encoded using base64 in big-endian byte order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crc32c: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_disposition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_control: Option<String>,

    /// User-provided metadata, in key/value pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// The number of components, only set for composite objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_based_hold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporary_hold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_name: Option<String>,

    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_time: Option<OffsetDateTime>,

    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_created: Option<OffsetDateTime>,

    /// The modification time of the object metadata.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated: Option<OffsetDateTime>,

    /// The time at which the object became noncurrent, only set for
    /// noncurrent versions.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_deleted: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub acl: Vec<ObjectAccessControl>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    pub fn set_content_encoding<T: Into<String>>(mut self, v: T) -> Self {
        self.content_encoding = Some(v.into());
        self
    }

    pub fn set_content_disposition<T: Into<String>>(mut self, v: T) -> Self {
        self.content_disposition = Some(v.into());
        self
    }

    pub fn set_content_language<T: Into<String>>(mut self, v: T) -> Self {
        self.content_language = Some(v.into());
        self
    }

    pub fn set_cache_control<T: Into<String>>(mut self, v: T) -> Self {
        self.cache_control = Some(v.into());
        self
    }

    pub fn set_storage_class<T: Into<String>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }

    /// Sets the value of [metadata][Object::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    pub fn set_event_based_hold(mut self, v: bool) -> Self {
        self.event_based_hold = Some(v);
        self
    }

    pub fn set_temporary_hold(mut self, v: bool) -> Self {
        self.temporary_hold = Some(v);
        self
    }

    pub fn set_custom_time(mut self, v: OffsetDateTime) -> Self {
        self.custom_time = Some(v);
        self
    }
}

/// An access-control entry for an object.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectAccessControl {
    /// The entity holding the permission, e.g. `user-liz@example.com` or
    /// `allUsers`.
    pub entity: String,
    /// The access permission for the entity, `OWNER` or `READER`.
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl ObjectAccessControl {
    pub fn new<E: Into<String>, R: Into<String>>(entity: E, role: R) -> Self {
        Self {
            entity: entity.into(),
            role: role.into(),
            ..Default::default()
        }
    }
}

/// The owner of an object.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Owner {
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
}

/// A page of objects, as returned by `list`.
///
/// To fetch the next page, send the same request with
/// `with_page_token(next_page_token)`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Objects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub items: Vec<Object>,

    /// The prefixes of objects matching-but-not-listed up to and including
    /// the requested delimiter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,

    /// The continuation token. Not set on the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// A request to concatenate a list of existing objects into a new object in
/// the same bucket.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ComposeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Properties of the resulting object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Object>,

    /// The list of source objects that will be concatenated into a single
    /// object.
    pub source_objects: Vec<SourceObject>,
}

impl ComposeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_destination<T: Into<Object>>(mut self, v: T) -> Self {
        self.destination = Some(v.into());
        self
    }

    pub fn set_source_objects<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SourceObject>,
    {
        self.source_objects = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A source object for a [ComposeRequest].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SourceObject {
    /// The source object's name. The source object's bucket is implicitly
    /// the destination bucket.
    pub name: String,

    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_preconditions: Option<ObjectPreconditions>,
}

impl SourceObject {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn set_generation(mut self, v: i64) -> Self {
        self.generation = Some(v);
        self
    }

    /// Only compose if the source object's generation matches `v`.
    pub fn set_if_generation_match(mut self, v: i64) -> Self {
        self.object_preconditions = Some(ObjectPreconditions {
            if_generation_match: Some(v),
        });
        self
    }
}

impl From<&str> for SourceObject {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Conditions that must be met for a compose operation to proceed.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectPreconditions {
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub if_generation_match: Option<i64>,
}

/// The result of a rewrite request.
///
/// Large objects may need multiple rewrite calls. Until `done` is true,
/// send the same request again with `with_rewrite_token(rewrite_token)`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RewriteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// The total bytes written so far.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bytes_rewritten: Option<u64>,

    /// The total size of the object being copied in bytes.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_size: Option<u64>,

    /// True if the copy is finished.
    pub done: bool,

    /// A token to use in subsequent requests to continue copying data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrite_token: Option<String>,

    /// The completed object, only present when the copy is finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Object>,
}

/// A notification channel used to watch for resource changes.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Channel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// A UUID or similar unique string that identifies this channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// An opaque ID that identifies the resource being watched on this
    /// channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,

    /// An arbitrary string delivered to the target address with each
    /// notification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// The expiration time, in milliseconds since the Unix epoch.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<i64>,

    /// The type of delivery mechanism, e.g. `web_hook`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// The address where notifications are delivered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<bool>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, String>,
}

impl Channel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.type_ = Some(v.into());
        self
    }

    pub fn set_address<T: Into<String>>(mut self, v: T) -> Self {
        self.address = Some(v.into());
        self
    }

    pub fn set_token<T: Into<String>>(mut self, v: T) -> Self {
        self.token = Some(v.into());
        self
    }

    pub fn set_expiration(mut self, v: i64) -> Self {
        self.expiration = Some(v);
        self
    }
}
