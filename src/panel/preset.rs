//! Workspace presets - named arrangements of panel kinds into groups

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PanelKind;
use crate::error::WorkspaceError;

/// Identifies a built-in preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetId {
    DailyReading,
    DeepStudy,
    TranslationComparison,
    Research,
    Focus,
}

impl PresetId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetId::DailyReading => "daily-reading",
            PresetId::DeepStudy => "deep-study",
            PresetId::TranslationComparison => "translation-comparison",
            PresetId::Research => "research",
            PresetId::Focus => "focus",
        }
    }

    /// Preset definition from the static table
    pub fn preset(&self) -> &'static WorkspacePreset {
        preset(*self)
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetId {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PRESETS
            .iter()
            .map(|p| p.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| WorkspaceError::UnknownPreset(s.to_string()))
    }
}

/// A preset definition
///
/// Each row of `panel_kinds` becomes one group holding one panel per kind.
#[derive(Debug, Clone)]
pub struct WorkspacePreset {
    pub id: PresetId,
    pub label: &'static str,
    pub description: &'static str,
    pub panel_kinds: &'static [&'static [PanelKind]],
}

/// Static table of all built-in presets
pub static PRESETS: &[WorkspacePreset] = &[
    WorkspacePreset {
        id: PresetId::DailyReading,
        label: "Daily Reading",
        description: "Clean reading surface, no panels",
        panel_kinds: &[],
    },
    WorkspacePreset {
        id: PresetId::DeepStudy,
        label: "Deep Study",
        description: "Commentary and related sayings as tabs",
        panel_kinds: &[&[PanelKind::Commentary, PanelKind::RelatedSayings]],
    },
    WorkspacePreset {
        id: PresetId::TranslationComparison,
        label: "Translation Comparison",
        description: "No study panels, focus on translations",
        panel_kinds: &[],
    },
    WorkspacePreset {
        id: PresetId::Research,
        label: "Research",
        description: "Commentary, cross-references and notes",
        panel_kinds: &[&[
            PanelKind::Commentary,
            PanelKind::CrossReference,
            PanelKind::Notes,
        ]],
    },
    WorkspacePreset {
        id: PresetId::Focus,
        label: "Focus",
        description: "All study panels as tabs in one group",
        panel_kinds: &[&[
            PanelKind::Commentary,
            PanelKind::RelatedSayings,
            PanelKind::CrossReference,
            PanelKind::Notes,
        ]],
    },
];

/// Look up a preset by id
pub fn preset(id: PresetId) -> &'static WorkspacePreset {
    // Every PresetId has a row in PRESETS (checked by tests)
    PRESETS
        .iter()
        .find(|p| p.id == id)
        .unwrap_or(&PRESETS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_id_has_a_row() {
        for id in [
            PresetId::DailyReading,
            PresetId::DeepStudy,
            PresetId::TranslationComparison,
            PresetId::Research,
            PresetId::Focus,
        ] {
            assert_eq!(preset(id).id, id);
            assert_eq!(id.as_str().parse::<PresetId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_preset_name() {
        assert_eq!(
            "zen".parse::<PresetId>(),
            Err(WorkspaceError::UnknownPreset("zen".to_string()))
        );
    }

    #[test]
    fn test_presets_do_not_repeat_single_instance_kinds() {
        for preset in PRESETS {
            let kinds: Vec<PanelKind> = preset
                .panel_kinds
                .iter()
                .flat_map(|row| row.iter())
                .copied()
                .collect();
            for kind in &kinds {
                if !kind.info().allow_multiple {
                    assert_eq!(
                        kinds.iter().filter(|k| *k == kind).count(),
                        1,
                        "{} repeats {}",
                        preset.id,
                        kind
                    );
                }
            }
        }
    }
}
