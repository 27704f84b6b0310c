//! Planned animation set for Merry.
//!
//! Six categories, 31 frames in total. The catalog is descriptive only: the
//! composer draws a single demo frame, and the catalog is emitted to the
//! metadata document so artists know which frames to produce.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Animation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Entrance when the alarm starts; plays once, then hands over to idle
    Appearing,
    /// Resting loop: breathing, tail sway
    Idle,
    /// Full 360 degree turn in 45 degree steps
    Spinning,
    /// Head tilt and raised paw to catch the user's eye
    Attention,
    /// Wake-up nagging, played fast
    Urgent,
    /// Grooming, stretching and play poses
    Special,
}

impl AnimationKind {
    /// All categories in catalog order.
    pub const ALL: [AnimationKind; 6] = [
        AnimationKind::Appearing,
        AnimationKind::Idle,
        AnimationKind::Spinning,
        AnimationKind::Attention,
        AnimationKind::Urgent,
        AnimationKind::Special,
    ];

    /// Category key used in metadata and output directories.
    pub fn name(self) -> &'static str {
        match self {
            AnimationKind::Appearing => "appearing",
            AnimationKind::Idle => "idle",
            AnimationKind::Spinning => "spinning",
            AnimationKind::Attention => "attention",
            AnimationKind::Urgent => "urgent",
            AnimationKind::Special => "special",
        }
    }

    pub fn from_name(name: &str) -> Option<AnimationKind> {
        AnimationKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            AnimationKind::Appearing => "Appearing",
            AnimationKind::Idle => "Idle",
            AnimationKind::Spinning => "Spinning",
            AnimationKind::Attention => "Attention",
            AnimationKind::Urgent => "Urgent",
            AnimationKind::Special => "Special",
        }
    }

    /// Frame names for this category, in playback order.
    pub fn frames(self) -> &'static [&'static str] {
        match self {
            AnimationKind::Appearing => {
                &["appear_01", "appear_02", "appear_03", "appear_04", "appear_05"]
            }
            AnimationKind::Idle => &["idle_01", "idle_02", "idle_03", "idle_04"],
            AnimationKind::Spinning => &[
                "spin_01", "spin_02", "spin_03", "spin_04", "spin_05", "spin_06", "spin_07",
                "spin_08",
            ],
            AnimationKind::Attention => &["attention_01", "attention_02", "attention_03"],
            AnimationKind::Urgent => &["urgent_01", "urgent_02", "urgent_03", "urgent_04"],
            AnimationKind::Special => &[
                "grooming_01",
                "grooming_02",
                "grooming_03",
                "stretch_01",
                "stretch_02",
                "play_01",
                "play_02",
            ],
        }
    }

    pub fn frame_count(self) -> usize {
        self.frames().len()
    }

    /// Length of one full cycle in milliseconds.
    pub fn default_duration_ms(self) -> u64 {
        match self {
            AnimationKind::Appearing => 800,
            AnimationKind::Idle => 3000,
            AnimationKind::Spinning => 2000,
            AnimationKind::Attention => 1500,
            AnimationKind::Urgent => 1000,
            AnimationKind::Special => 2500,
        }
    }

    pub fn is_looping(self) -> bool {
        !matches!(self, AnimationKind::Appearing | AnimationKind::Special)
    }

    /// Display time of a single frame in milliseconds (truncating).
    pub fn frame_duration_ms(self) -> u64 {
        self.default_duration_ms() / self.frame_count() as u64
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named category and its frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSequence {
    pub name: String,
    pub frames: Vec<String>,
}

/// Ordered mapping of category name to frame names.
///
/// Serializes as a JSON object whose keys keep catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationCatalog {
    sequences: Vec<AnimationSequence>,
}

impl Default for AnimationCatalog {
    fn default() -> Self {
        Self::merry()
    }
}

impl AnimationCatalog {
    /// The full planned set for Merry.
    pub fn merry() -> Self {
        let sequences = AnimationKind::ALL
            .into_iter()
            .map(|kind| AnimationSequence {
                name: kind.name().to_string(),
                frames: kind.frames().iter().map(|f| f.to_string()).collect(),
            })
            .collect();
        Self { sequences }
    }

    pub fn sequences(&self) -> &[AnimationSequence] {
        &self.sequences
    }

    /// Frames for a category, or `None` if the category is absent.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.sequences.iter().find(|s| s.name == name).map(|s| s.frames.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.sequences.iter().map(|s| s.name.as_str())
    }

    pub fn total_frames(&self) -> usize {
        self.sequences.iter().map(|s| s.frames.len()).sum()
    }

    /// True if `frame` is listed under `category`.
    pub fn contains(&self, category: &str, frame: &str) -> bool {
        self.get(category).is_some_and(|frames| frames.iter().any(|f| f == frame))
    }
}

impl Serialize for AnimationCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sequences.len()))?;
        for sequence in &self.sequences {
            map.serialize_entry(&sequence.name, &sequence.frames)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AnimationCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = AnimationCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of animation category to frame names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut sequences = Vec::new();
                while let Some((name, frames)) = access.next_entry::<String, Vec<String>>()? {
                    sequences.push(AnimationSequence { name, frames });
                }
                Ok(AnimationCatalog { sequences })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
