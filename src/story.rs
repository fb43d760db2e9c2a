// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// A story record as delivered by the backing store. Read-only here;
/// fetching and ownership belong to the caller.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub content: String,
    pub cover_image: String,
    pub tags: Vec<String>,
    /// Discriminator for the tag chip color, resolved through [`crate::config::Theme`].
    pub tag_type: String,
    pub is_featured: bool,
    #[serde(rename = "authorName")]
    pub author_name: Option<String>,
    #[serde(rename = "authorImage")]
    pub author_image: Option<String>,
    /// RFC 3339 timestamp, parsed at render time.
    pub published_at: String,
}
