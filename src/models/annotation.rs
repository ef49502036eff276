//! Item tags and notes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ItemId;

/// A user tag on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemTag {
    Favorite,
    Keep,
    Infuse,
    Junk,
    Archive,
}

impl ItemTag {
    pub const ALL: [ItemTag; 5] = [
        Self::Favorite,
        Self::Keep,
        Self::Infuse,
        Self::Junk,
        Self::Archive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorite => "favorite",
            Self::Keep => "keep",
            Self::Infuse => "infuse",
            Self::Junk => "junk",
            Self::Archive => "archive",
        }
    }
}

impl fmt::Display for ItemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown tag '{}'", s))
    }
}

/// Tag and notes attached to an item instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAnnotation {
    pub id: ItemId,
    pub hash: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<ItemTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ItemAnnotation {
    pub fn new(id: impl Into<ItemId>, hash: u32) -> Self {
        Self {
            id: id.into(),
            hash,
            tag: None,
            notes: None,
        }
    }

    /// An annotation with neither tag nor notes carries no information
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.notes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parse_is_case_insensitive() {
        assert_eq!("Favorite".parse::<ItemTag>(), Ok(ItemTag::Favorite));
        assert_eq!(" JUNK ".parse::<ItemTag>(), Ok(ItemTag::Junk));
        assert!("trash".parse::<ItemTag>().is_err());
    }

    #[test]
    fn test_empty_annotation() {
        let mut annotation = ItemAnnotation::new("1", 2);
        assert!(annotation.is_empty());
        annotation.notes = Some("god roll".into());
        assert!(!annotation.is_empty());
    }
}
