// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Presentation lookup table for the card: tag chip colors keyed by a
/// story's `tag_type`, plus the fixed fallback assets and strings.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Theme {
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
    #[serde(default = "default_tag_color")]
    pub default_tag_color: String,
    /// Substituted for the cover image when it fails to load.
    #[serde(default = "default_cover")]
    pub fallback_cover: String,
    /// Substituted for the author avatar when it fails to load.
    #[serde(default = "default_avatar")]
    pub fallback_avatar: String,
    /// Shown when a story carries no author name.
    #[serde(default = "default_author")]
    pub default_author: String,
}

fn default_tag_color() -> String {
    "#6b7280".into()
}

fn default_cover() -> String {
    "/assets/cover-fallback.png".into()
}

fn default_avatar() -> String {
    "/assets/avatar-fallback.png".into()
}

fn default_author() -> String {
    "Anonymous".into()
}

lazy_static! {
    pub static ref DEFAULT_THEME: Theme = Theme::default();
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tag_colors: HashMap::from_iter(vec![
                ("news".to_owned(), "#2563eb".to_owned()),
                ("opinion".to_owned(), "#9333ea".to_owned()),
                ("community".to_owned(), "#16a34a".to_owned()),
            ]),
            default_tag_color: default_tag_color(),
            fallback_cover: default_cover(),
            fallback_avatar: default_avatar(),
            default_author: default_author(),
        }
    }
}

impl Theme {
    pub fn from_yaml(source: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Chip color for a `tag_type`. Unknown keys degrade to the default
    /// color instead of an undefined style.
    pub fn tag_color(&self, tag_type: &str) -> &str {
        match self.tag_colors.get(tag_type) {
            Some(color) => color,
            None => {
                log::warn!(
                    "No color for tag type {:?}. Using {}.",
                    tag_type,
                    self.default_tag_color
                );
                &self.default_tag_color
            }
        }
    }
}
