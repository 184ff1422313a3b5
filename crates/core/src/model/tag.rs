//! Threat types and tags.
//!
//! The numeric minor component of a record id selects a `ThreatType`;
//! each type expands to a fixed, ordered set of `Tag`s.

use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

/// Platform tag attached to a classified record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Cloud,
    Containers,
    CiCd,
}

/// Ordered tag set. Holds at most three tags, so it never spills.
pub type TagSet = SmallVec<[Tag; 3]>;

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::Cloud, Tag::Containers, Tag::CiCd];

    pub fn label(self) -> &'static str {
        match self {
            Tag::Cloud => "Cloud",
            Tag::Containers => "Containers",
            Tag::CiCd => "CI/CD",
        }
    }

    /// Parses a tag label, ignoring ASCII case. `cicd` is accepted for `CI/CD`.
    pub fn from_label(label: &str) -> Option<Tag> {
        let label = label.trim();
        Tag::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(label))
            .or_else(|| label.eq_ignore_ascii_case("cicd").then_some(Tag::CiCd))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Classification of a record, keyed by the minor component of its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreatType {
    CloudAndContainers,
    Cloud,
    Containers,
    CiCd,
    CloudContainersAndCiCd,
}

impl ThreatType {
    pub const ALL: [ThreatType; 5] = [
        ThreatType::CloudAndContainers,
        ThreatType::Cloud,
        ThreatType::Containers,
        ThreatType::CiCd,
        ThreatType::CloudContainersAndCiCd,
    ];

    /// Looks up the type for an id minor component.
    pub fn from_key(key: u32) -> Option<ThreatType> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    pub fn key(self) -> u32 {
        match self {
            ThreatType::CloudAndContainers => 0,
            ThreatType::Cloud => 1,
            ThreatType::Containers => 2,
            ThreatType::CiCd => 3,
            ThreatType::CloudContainersAndCiCd => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThreatType::CloudAndContainers => "Cloud and containers",
            ThreatType::Cloud => "Cloud",
            ThreatType::Containers => "Containers",
            ThreatType::CiCd => "CI/CD",
            ThreatType::CloudContainersAndCiCd => "Cloud, containers and CI/CD",
        }
    }

    pub fn tags(self) -> &'static [Tag] {
        match self {
            ThreatType::CloudAndContainers => &[Tag::Cloud, Tag::Containers],
            ThreatType::Cloud => &[Tag::Cloud],
            ThreatType::Containers => &[Tag::Containers],
            ThreatType::CiCd => &[Tag::CiCd],
            ThreatType::CloudContainersAndCiCd => &[Tag::Cloud, Tag::Containers, Tag::CiCd],
        }
    }
}

impl fmt::Display for ThreatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ThreatType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Expands an optional type into its tag set. No type, no tags.
pub fn tags_for(threat_type: Option<ThreatType>) -> TagSet {
    threat_type
        .map(|t| t.tags().iter().copied().collect())
        .unwrap_or_default()
}
