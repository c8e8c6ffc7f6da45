use serde::{Deserialize, Serialize};

use crate::api::Filter;

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct TagDescription {
    pub resource_id: String,
    /// Resource kind the tag is attached to, e.g. `instance` or `volume`.
    pub resource_type: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateTagsRequest {
    pub resource_ids: Vec<String>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteTagsRequest {
    pub resource_ids: Vec<String>,
    /// Tags to remove. An empty value matches any value for that key.
    pub tags: Vec<Tag>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeTagsRequest {
    pub filters: Vec<Filter>,
    pub max_results: Option<u32>,
    pub next_token: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct DescribeTagsResponse {
    pub tags: Vec<TagDescription>,
    pub next_token: Option<String>,
}
