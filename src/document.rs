//! The site document: five named collections of loosely-typed items.

use crate::resource::Resource;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Root object persisted by the document stores. A collection key absent from
/// the stored JSON, or holding anything other than an array, reads as an empty
/// collection; the other collections are kept.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default, deserialize_with = "lenient_collection")]
    pub music_releases: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_collection")]
    pub acting_projects: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_collection")]
    pub gallery_items: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_collection")]
    pub team_members: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_collection")]
    pub contact_messages: Vec<Value>,
}

fn lenient_collection<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        other => {
            tracing::warn!(found = %other, "collection is not an array, reading as empty");
            Ok(Vec::new())
        }
    }
}

impl Document {
    pub fn collection(&self, resource: Resource) -> &Vec<Value> {
        match resource {
            Resource::MusicReleases => &self.music_releases,
            Resource::ActingProjects => &self.acting_projects,
            Resource::GalleryItems => &self.gallery_items,
            Resource::TeamMembers => &self.team_members,
            Resource::ContactMessages => &self.contact_messages,
        }
    }

    pub fn collection_mut(&mut self, resource: Resource) -> &mut Vec<Value> {
        match resource {
            Resource::MusicReleases => &mut self.music_releases,
            Resource::ActingProjects => &mut self.acting_projects,
            Resource::GalleryItems => &mut self.gallery_items,
            Resource::TeamMembers => &mut self.team_members,
            Resource::ContactMessages => &mut self.contact_messages,
        }
    }

    /// Pretty-printed with 2-space indentation, the on-disk format.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
