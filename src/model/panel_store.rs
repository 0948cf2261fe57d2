//! Panel instance store
//!
//! Owns every live panel: its kind, opaque config, breadcrumb stack, scroll
//! offset and sync flag. Ids come from a monotonically increasing counter and
//! are never reused within a session, even after the panel is destroyed.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::breadcrumbs::{BreadcrumbItem, BreadcrumbStack};
use crate::error::{Result, WorkspaceError};
use crate::panel::PanelKind;

/// Unique identifier for a panel instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub u64);

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

/// Opaque per-panel configuration.
///
/// The engine never interprets keys; panel-specific code reads and writes
/// them by convention.
pub type PanelConfig = serde_json::Map<String, serde_json::Value>;

/// A live panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelInstance {
    pub id: PanelId,
    pub kind: PanelKind,
    #[serde(default)]
    pub config: PanelConfig,
    #[serde(default)]
    pub breadcrumbs: BreadcrumbStack,
    #[serde(default)]
    pub scroll_top: f64,
    pub sync_to_verse: bool,
}

impl PanelInstance {
    fn new(id: PanelId, kind: PanelKind, config: PanelConfig) -> Self {
        Self {
            id,
            kind,
            config,
            breadcrumbs: BreadcrumbStack::new(),
            scroll_top: 0.0,
            sync_to_verse: kind.info().verse_aware,
        }
    }
}

/// Owns all panel instances and the panel id counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelStore {
    panels: BTreeMap<PanelId, PanelInstance>,
    next_panel_id: u64,
}

impl Default for PanelStore {
    fn default() -> Self {
        Self {
            panels: BTreeMap::new(),
            next_panel_id: 1,
        }
    }
}

impl PanelStore {
    /// Rebuild a store from persisted parts, checking its invariants
    pub fn from_parts(panels: Vec<PanelInstance>, next_panel_id: u64) -> Result<Self> {
        let mut map = BTreeMap::new();
        for panel in panels {
            if panel.id.0 >= next_panel_id {
                return Err(WorkspaceError::InvalidSnapshot(format!(
                    "{} is not below the panel counter {}",
                    panel.id, next_panel_id
                )));
            }
            if !panel.scroll_top.is_finite() {
                return Err(WorkspaceError::InvalidSnapshot(format!(
                    "{} has a non-finite scroll offset",
                    panel.id
                )));
            }
            if panel.sync_to_verse && !panel.kind.info().verse_aware {
                return Err(WorkspaceError::InvalidSnapshot(format!(
                    "{} ({}) syncs but is not verse-aware",
                    panel.id, panel.kind
                )));
            }
            if map.insert(panel.id, panel).is_some() {
                return Err(WorkspaceError::InvalidSnapshot(
                    "duplicate panel id".to_string(),
                ));
            }
        }
        Ok(Self {
            panels: map,
            next_panel_id,
        })
    }

    /// Value the next created panel will receive
    pub fn next_panel_id(&self) -> u64 {
        self.next_panel_id
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.panels.contains_key(&id)
    }

    pub fn get(&self, id: PanelId) -> Option<&PanelInstance> {
        self.panels.get(&id)
    }

    /// Panels in creation order
    pub fn iter(&self) -> impl Iterator<Item = &PanelInstance> {
        self.panels.values()
    }

    /// Oldest live panel of the given kind
    pub fn first_of_kind(&self, kind: PanelKind) -> Option<PanelId> {
        self.iter().find(|p| p.kind == kind).map(|p| p.id)
    }

    /// Panels currently following the focused content location
    pub fn synced_panel_ids(&self) -> Vec<PanelId> {
        self.iter()
            .filter(|p| p.sync_to_verse)
            .map(|p| p.id)
            .collect()
    }

    /// Allocate a new panel. Sync defaults to the kind's `verse_aware` flag.
    pub fn create(&mut self, kind: PanelKind, config: PanelConfig) -> PanelId {
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;
        self.panels.insert(id, PanelInstance::new(id, kind, config));
        tracing::trace!(panel = %id, %kind, "panel created");
        id
    }

    /// Remove a panel. Idempotent: an absent id is a no-op.
    pub fn destroy(&mut self, id: PanelId) -> Option<PanelInstance> {
        self.panels.remove(&id)
    }

    /// Remove every panel. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.panels.clear();
    }

    fn get_mut(&mut self, id: PanelId) -> Result<&mut PanelInstance> {
        self.panels
            .get_mut(&id)
            .ok_or_else(|| WorkspaceError::panel_not_found(id))
    }

    /// Shallow-merge `partial` into the panel's config
    pub fn set_config(&mut self, id: PanelId, partial: PanelConfig) -> Result<()> {
        let panel = self.get_mut(id)?;
        panel.config.extend(partial);
        Ok(())
    }

    /// Store a scroll offset. Non-finite offsets are ignored.
    ///
    /// Returns whether the offset changed.
    pub fn set_scroll_top(&mut self, id: PanelId, scroll_top: f64) -> Result<bool> {
        let panel = self.get_mut(id)?;
        if !scroll_top.is_finite() || panel.scroll_top == scroll_top {
            return Ok(false);
        }
        panel.scroll_top = scroll_top;
        Ok(true)
    }

    pub fn set_sync_to_verse(&mut self, id: PanelId, sync: bool) -> Result<()> {
        let panel = self.get_mut(id)?;
        if sync && !panel.kind.info().verse_aware {
            return Err(WorkspaceError::NotVerseAware {
                panel: id,
                kind: panel.kind,
            });
        }
        panel.sync_to_verse = sync;
        Ok(())
    }

    pub fn push_breadcrumb(&mut self, id: PanelId, item: BreadcrumbItem) -> Result<()> {
        self.get_mut(id)?.breadcrumbs.push(item);
        Ok(())
    }

    /// Returns whether a step was removed
    pub fn pop_breadcrumb(&mut self, id: PanelId) -> Result<bool> {
        Ok(self.get_mut(id)?.breadcrumbs.pop().is_some())
    }

    pub fn goto_breadcrumb(&mut self, id: PanelId, index: i64) -> Result<()> {
        let stack = &mut self.get_mut(id)?.breadcrumbs;
        if !stack.goto(index) {
            return Err(WorkspaceError::IndexOutOfRange {
                panel: id,
                index,
                len: stack.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::breadcrumbs::BreadcrumbKind;
    use serde_json::json;

    fn config(pairs: &[(&str, serde_json::Value)]) -> PanelConfig {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_create_allocates_sequential_ids() {
        let mut store = PanelStore::default();
        let a = store.create(PanelKind::Notes, PanelConfig::new());
        let b = store.create(PanelKind::Commentary, PanelConfig::new());
        assert_eq!(a, PanelId(1));
        assert_eq!(b, PanelId(2));
        assert_eq!(store.next_panel_id(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_destroy() {
        let mut store = PanelStore::default();
        let a = store.create(PanelKind::Notes, PanelConfig::new());
        store.destroy(a);
        let b = store.create(PanelKind::Notes, PanelConfig::new());
        assert_ne!(a, b);
    }

    #[test]
    fn test_sync_defaults_follow_registry() {
        let mut store = PanelStore::default();
        let c = store.create(PanelKind::Commentary, PanelConfig::new());
        let g = store.create(PanelKind::KnowledgeGraph, PanelConfig::new());
        assert!(store.get(c).unwrap().sync_to_verse);
        assert!(!store.get(g).unwrap().sync_to_verse);
        assert_eq!(store.synced_panel_ids(), vec![c]);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut store = PanelStore::default();
        let a = store.create(PanelKind::Notes, PanelConfig::new());
        assert!(store.destroy(a).is_some());
        assert!(store.destroy(a).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_config_is_shallow_merge() {
        let mut store = PanelStore::default();
        let id = store.create(
            PanelKind::Translation,
            config(&[("edition", json!("sahih")), ("font", json!({"size": 14}))]),
        );
        store
            .set_config(
                id,
                config(&[("font", json!({"family": "serif"})), ("extra", json!(true))]),
            )
            .unwrap();

        let panel = store.get(id).unwrap();
        assert_eq!(panel.config["edition"], json!("sahih"));
        assert_eq!(panel.config["font"], json!({"family": "serif"}));
        assert_eq!(panel.config["extra"], json!(true));
    }

    #[test]
    fn test_enable_sync_on_graph_is_rejected() {
        let mut store = PanelStore::default();
        let g = store.create(PanelKind::KnowledgeGraph, PanelConfig::new());
        assert_eq!(
            store.set_sync_to_verse(g, true),
            Err(WorkspaceError::NotVerseAware {
                panel: g,
                kind: PanelKind::KnowledgeGraph
            })
        );
        assert!(store.set_sync_to_verse(g, false).is_ok());
    }

    #[test]
    fn test_non_finite_scroll_is_ignored() {
        let mut store = PanelStore::default();
        let id = store.create(PanelKind::Commentary, PanelConfig::new());
        assert_eq!(store.set_scroll_top(id, 120.0), Ok(true));
        assert_eq!(store.set_scroll_top(id, f64::NAN), Ok(false));
        assert_eq!(store.set_scroll_top(id, f64::INFINITY), Ok(false));
        assert_eq!(store.get(id).unwrap().scroll_top, 120.0);
    }

    #[test]
    fn test_missing_panel_errors() {
        let mut store = PanelStore::default();
        let missing = PanelId(42);
        assert_eq!(
            store.set_scroll_top(missing, 10.0),
            Err(WorkspaceError::panel_not_found(missing))
        );
        assert_eq!(
            store.pop_breadcrumb(missing),
            Err(WorkspaceError::panel_not_found(missing))
        );
    }

    #[test]
    fn test_goto_breadcrumb_reports_length() {
        let mut store = PanelStore::default();
        let id = store.create(PanelKind::Commentary, PanelConfig::new());
        store
            .push_breadcrumb(id, BreadcrumbItem::new("a", "A", BreadcrumbKind::Commentary))
            .unwrap();
        assert_eq!(
            store.goto_breadcrumb(id, 3),
            Err(WorkspaceError::IndexOutOfRange {
                panel: id,
                index: 3,
                len: 1
            })
        );
    }

    #[test]
    fn test_from_parts_rejects_stale_counter() {
        let mut store = PanelStore::default();
        store.create(PanelKind::Notes, PanelConfig::new());
        let panels: Vec<_> = store.iter().cloned().collect();
        assert!(PanelStore::from_parts(panels.clone(), 2).is_ok());
        assert!(matches!(
            PanelStore::from_parts(panels, 1),
            Err(WorkspaceError::InvalidSnapshot(_))
        ));
    }
}
