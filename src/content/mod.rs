// SPDX-License-Identifier: MPL-2.0
//! Studio content records.
//!
//! [`Artwork`] is the record delivered by the content source for the work,
//! play and daily galleries. The navigation engine only uses its identifier;
//! the remaining fields are for presentation.

pub mod demo;

use crate::domain::gallery::{GalleryItem, ItemId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One portfolio entry as delivered by the content source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    #[serde(serialize_with = "serialize_id", deserialize_with = "deserialize_id")]
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl GalleryItem for Artwork {
    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Envelope of a page response: `{"items": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

fn serialize_id<S: Serializer>(id: &ItemId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(id.as_str())
}

/// CMS identifiers arrive either as strings or as integers.
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ItemId, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => ItemId::new(text),
        RawId::Number(number) => ItemId::from(number),
    })
}
