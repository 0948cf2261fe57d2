//! Panel kind registry
//!
//! Static, per-kind capability flags. The engine never looks at what a panel
//! renders, only at these flags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorkspaceError;

/// Kind of content a panel shows
///
/// Closed set; adding a kind means adding a registry entry below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    Commentary,
    RelatedSayings,
    Notes,
    CrossReference,
    KnowledgeGraph,
    ContextPreview,
    AiAssistant,
    Translation,
}

impl PanelKind {
    /// All panel kinds for iteration
    pub const ALL: [PanelKind; 8] = [
        PanelKind::Commentary,
        PanelKind::RelatedSayings,
        PanelKind::Notes,
        PanelKind::CrossReference,
        PanelKind::KnowledgeGraph,
        PanelKind::ContextPreview,
        PanelKind::AiAssistant,
        PanelKind::Translation,
    ];

    /// Stable name used in config files, scripts and snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::Commentary => "commentary",
            PanelKind::RelatedSayings => "related-sayings",
            PanelKind::Notes => "notes",
            PanelKind::CrossReference => "cross-reference",
            PanelKind::KnowledgeGraph => "knowledge-graph",
            PanelKind::ContextPreview => "context-preview",
            PanelKind::AiAssistant => "ai-assistant",
            PanelKind::Translation => "translation",
        }
    }

    /// Registry entry for this kind
    pub fn info(&self) -> &'static PanelTypeInfo {
        info_for(*self)
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelKind {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| WorkspaceError::UnknownKind(s.to_string()))
    }
}

/// Static metadata for one panel kind
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTypeInfo {
    pub kind: PanelKind,
    pub label: &'static str,
    /// Whether several instances may be open at once
    pub allow_multiple: bool,
    /// Minimum width in logical pixels
    pub min_width: f32,
    /// Whether the panel follows the focused content location
    pub verse_aware: bool,
    pub description: &'static str,
}

impl PanelTypeInfo {
    /// Minimum width as a share of a container `container_width` pixels wide.
    ///
    /// The pixel/percent conversion belongs to the caller; a non-positive
    /// width disables the constraint.
    pub fn min_percent(&self, container_width: f32) -> f64 {
        if container_width <= 0.0 {
            0.0
        } else {
            f64::from(self.min_width) / f64::from(container_width) * 100.0
        }
    }
}

/// Static registry indexed in `PanelKind::ALL` order
static REGISTRY: [PanelTypeInfo; 8] = [
    PanelTypeInfo {
        kind: PanelKind::Commentary,
        label: "Commentary",
        allow_multiple: true,
        min_width: 240.0,
        verse_aware: true,
        description: "Commentary and exegesis on the focused passage",
    },
    PanelTypeInfo {
        kind: PanelKind::RelatedSayings,
        label: "Related Sayings",
        allow_multiple: false,
        min_width: 240.0,
        verse_aware: true,
        description: "Related traditions and sayings",
    },
    PanelTypeInfo {
        kind: PanelKind::Notes,
        label: "Notes",
        allow_multiple: false,
        min_width: 240.0,
        verse_aware: true,
        description: "Your personal study notes",
    },
    PanelTypeInfo {
        kind: PanelKind::CrossReference,
        label: "Cross-Ref",
        allow_multiple: false,
        min_width: 240.0,
        verse_aware: true,
        description: "Cross-scripture references",
    },
    PanelTypeInfo {
        kind: PanelKind::KnowledgeGraph,
        label: "Knowledge Graph",
        allow_multiple: false,
        min_width: 320.0,
        verse_aware: false,
        description: "Visual knowledge connections",
    },
    PanelTypeInfo {
        kind: PanelKind::ContextPreview,
        label: "Context",
        allow_multiple: false,
        min_width: 240.0,
        verse_aware: true,
        description: "Quick overview of the surrounding passage",
    },
    PanelTypeInfo {
        kind: PanelKind::AiAssistant,
        label: "AI Assistant",
        allow_multiple: false,
        min_width: 320.0,
        verse_aware: true,
        description: "Study assistant",
    },
    PanelTypeInfo {
        kind: PanelKind::Translation,
        label: "Translation",
        allow_multiple: true,
        min_width: 240.0,
        verse_aware: true,
        description: "Side-by-side translation comparison",
    },
];

/// Look up the registry entry for a kind.
///
/// `PanelKind` is a closed enum, so every kind has an entry; a mismatch
/// between the table and the enum is a programming error.
pub fn info_for(kind: PanelKind) -> &'static PanelTypeInfo {
    let info = &REGISTRY[kind as usize];
    debug_assert_eq!(info.kind, kind, "panel registry out of order");
    info
}

/// Iterate all registry entries (e.g. for an "add panel" menu)
pub fn all() -> impl Iterator<Item = &'static PanelTypeInfo> {
    REGISTRY.iter()
}
