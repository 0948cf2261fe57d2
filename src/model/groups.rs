//! Panel groups - tabbed layout slots laid out along one axis
//!
//! A group holds an ordered list of panels, one of which is active (visible),
//! and a share of the study region expressed as a percentage. Sibling shares
//! always sum to 100.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::panel_store::{PanelId, PanelStore};
use crate::error::{Result, WorkspaceError};
use crate::panel::PanelKind;

/// Tolerance when comparing share totals against 100
pub const SIZE_EPSILON: f64 = 0.01;

/// Unique identifier for a panel group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

/// A tabbed container occupying one layout slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelGroup {
    pub id: GroupId,
    pub panel_ids: Vec<PanelId>,
    pub active_panel_id: PanelId,
    pub size_percent: f64,
}

impl PanelGroup {
    fn new(id: GroupId, panel: PanelId, size_percent: f64) -> Self {
        Self {
            id,
            panel_ids: vec![panel],
            active_panel_id: panel,
            size_percent,
        }
    }

    pub fn contains(&self, panel: PanelId) -> bool {
        self.panel_ids.contains(&panel)
    }

    /// Effective minimum share: the widest minimum of any member panel
    pub fn min_percent(&self, panels: &PanelStore, container_width: f32) -> f64 {
        self.panel_ids
            .iter()
            .filter_map(|id| panels.get(*id))
            .map(|p| p.kind.info().min_percent(container_width))
            .fold(0.0, f64::max)
    }
}

/// Where `add_panel` should put a panel of a given kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Single-instance kind already open: focus it instead of adding
    Existing { panel: PanelId, group: GroupId },
    /// Append to an existing group as a new tab
    Join(GroupId),
    /// Open a new sibling group
    NewGroup,
}

/// Result of taking a panel out of its group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detached {
    pub group: GroupId,
    /// Index the group had among its siblings
    pub index: usize,
    /// Whether the group became empty and was deleted
    pub group_removed: bool,
}

/// Owns the ordered sibling groups and the group id counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupManager {
    groups: Vec<PanelGroup>,
    next_group_id: u64,
}

impl Default for GroupManager {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            next_group_id: 1,
        }
    }
}

impl GroupManager {
    /// Rebuild from persisted parts, checking structural invariants against
    /// the panel store.
    pub fn from_parts(
        groups: Vec<PanelGroup>,
        next_group_id: u64,
        panels: &PanelStore,
    ) -> Result<Self> {
        let manager = Self {
            groups,
            next_group_id,
        };
        manager.check(panels).map_err(WorkspaceError::InvalidSnapshot)?;
        Ok(manager)
    }

    /// Check every group invariant, describing the first violation
    pub fn check(&self, panels: &PanelStore) -> std::result::Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        let mut group_ids = std::collections::HashSet::new();
        for group in &self.groups {
            if group.id.0 >= self.next_group_id {
                return Err(format!("{} is not below the group counter", group.id));
            }
            if !group_ids.insert(group.id) {
                return Err(format!("duplicate {}", group.id));
            }
            if group.panel_ids.is_empty() {
                return Err(format!("{} has no panels", group.id));
            }
            if !group.contains(group.active_panel_id) {
                return Err(format!(
                    "{} active panel {} is not a member",
                    group.id, group.active_panel_id
                ));
            }
            for id in &group.panel_ids {
                if !panels.contains(*id) {
                    return Err(format!("{} references missing {}", group.id, id));
                }
                if !seen.insert(*id) {
                    return Err(format!("{} appears in more than one group", id));
                }
            }
        }
        if seen.len() != panels.len() {
            return Err("some panels are not in any group".to_string());
        }
        if !self.groups.is_empty() && !sums_to_hundred(self.total_size()) {
            return Err(format!("group sizes sum to {:.3}", self.total_size()));
        }
        Ok(())
    }

    /// Value the next created group will receive
    pub fn next_group_id(&self) -> u64 {
        self.next_group_id
    }

    pub fn groups(&self) -> &[PanelGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, id: GroupId) -> Option<&PanelGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn position(&self, id: GroupId) -> Option<usize> {
        self.groups.iter().position(|g| g.id == id)
    }

    /// Group containing a panel
    pub fn group_of(&self, panel: PanelId) -> Option<&PanelGroup> {
        self.groups.iter().find(|g| g.contains(panel))
    }

    pub fn total_size(&self) -> f64 {
        self.groups.iter().map(|g| g.size_percent).sum()
    }

    fn get_mut(&mut self, id: GroupId) -> Result<&mut PanelGroup> {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| WorkspaceError::group_not_found(id))
    }

    fn allocate_id(&mut self) -> GroupId {
        let id = GroupId(self.next_group_id);
        self.next_group_id += 1;
        id
    }

    /// Decide where a new panel of `kind` goes.
    ///
    /// - single-instance kind already open: that panel's group
    /// - multi-instance kind: the focused panel's group, else a group already
    ///   showing that kind, else a new group
    /// - otherwise a new group, unless `max_groups` is reached, in which case
    ///   the focused group (or the first group)
    pub fn placement_for(
        &self,
        kind: PanelKind,
        panels: &PanelStore,
        focused: Option<PanelId>,
        max_groups: usize,
    ) -> Placement {
        let info = kind.info();
        if !info.allow_multiple {
            if let Some(panel) = panels.first_of_kind(kind) {
                if let Some(group) = self.group_of(panel) {
                    return Placement::Existing {
                        panel,
                        group: group.id,
                    };
                }
            }
        }

        let focused_group = focused.and_then(|p| self.group_of(p)).map(|g| g.id);

        if info.allow_multiple {
            let same_kind = || {
                self.groups
                    .iter()
                    .find(|g| {
                        g.panel_ids
                            .iter()
                            .any(|id| panels.get(*id).is_some_and(|p| p.kind == kind))
                    })
                    .map(|g| g.id)
            };
            if let Some(group) = focused_group.or_else(same_kind) {
                return Placement::Join(group);
            }
        }

        if self.groups.len() >= max_groups.max(1) {
            if let Some(group) = focused_group.or_else(|| self.groups.first().map(|g| g.id)) {
                return Placement::Join(group);
            }
        }

        Placement::NewGroup
    }

    /// Open a new trailing group holding `panel`.
    ///
    /// The new group gets `100 / (n + 1)`; existing shares are scaled by
    /// `n / (n + 1)` so their proportions are kept.
    pub fn create_group(&mut self, panel: PanelId) -> GroupId {
        let n = self.groups.len() as f64;
        let share = 100.0 / (n + 1.0);
        for group in &mut self.groups {
            group.size_percent *= n / (n + 1.0);
        }
        let id = self.allocate_id();
        self.groups.push(PanelGroup::new(id, panel, share));
        self.normalize();
        id
    }

    /// Append a panel to a group and make it active
    pub fn add_panel_to_group(&mut self, group: GroupId, panel: PanelId) -> Result<()> {
        let group = self.get_mut(group)?;
        group.panel_ids.push(panel);
        group.active_panel_id = panel;
        Ok(())
    }

    /// Make `panel` the visible tab of `group`
    pub fn set_active(&mut self, group: GroupId, panel: PanelId) -> Result<()> {
        let group = self.get_mut(group)?;
        if !group.contains(panel) {
            return Err(WorkspaceError::panel_not_found(panel));
        }
        group.active_panel_id = panel;
        Ok(())
    }

    /// Take a panel out of whichever group holds it.
    ///
    /// If it was active, the panel before it becomes active (or the first
    /// remaining one). An emptied group is deleted and its share handed to
    /// the remaining siblings proportionally.
    pub fn detach(&mut self, panel: PanelId) -> Option<Detached> {
        let index = self.groups.iter().position(|g| g.contains(panel))?;
        let group = &mut self.groups[index];
        let group_id = group.id;
        let pos = group.panel_ids.iter().position(|id| *id == panel)?;
        group.panel_ids.remove(pos);

        if group.panel_ids.is_empty() {
            self.remove_group_at(index);
            return Some(Detached {
                group: group_id,
                index,
                group_removed: true,
            });
        }

        if group.active_panel_id == panel {
            group.active_panel_id = group.panel_ids[pos.saturating_sub(1)];
        }
        Some(Detached {
            group: group_id,
            index,
            group_removed: false,
        })
    }

    /// Same as `detach`, scoped to one group
    pub fn remove_panel_from_group(&mut self, group: GroupId, panel: PanelId) -> Result<Detached> {
        let owner = self.get_mut(group)?;
        if !owner.contains(panel) {
            return Err(WorkspaceError::panel_not_found(panel));
        }
        self.detach(panel)
            .ok_or_else(|| WorkspaceError::panel_not_found(panel))
    }

    fn remove_group_at(&mut self, index: usize) {
        let removed = self.groups.remove(index);
        let remaining: f64 = self.total_size();
        if self.groups.is_empty() {
            return;
        }
        if remaining <= f64::EPSILON {
            let even = 100.0 / self.groups.len() as f64;
            for group in &mut self.groups {
                group.size_percent = even;
            }
        } else {
            for group in &mut self.groups {
                group.size_percent *= 100.0 / remaining;
            }
        }
        tracing::trace!(group = %removed.id, freed = removed.size_percent, "group removed");
    }

    /// Set one group's share, giving the difference to its neighbour (the
    /// next sibling, or the previous one for the last group).
    ///
    /// `min_percent` reports a group's effective minimum share. A lone group
    /// stays at 100.
    pub fn resize(
        &mut self,
        group: GroupId,
        size_percent: f64,
        min_percent: impl Fn(&PanelGroup) -> f64,
    ) -> Result<bool> {
        let index = self
            .position(group)
            .ok_or_else(|| WorkspaceError::group_not_found(group))?;
        if self.groups.len() == 1 {
            return Ok(false);
        }
        let neighbour = if index + 1 < self.groups.len() {
            index + 1
        } else {
            index - 1
        };

        let delta = size_percent - self.groups[index].size_percent;
        let neighbour_size = self.groups[neighbour].size_percent - delta;

        check_share(&self.groups[index], size_percent, &min_percent)?;
        check_share(&self.groups[neighbour], neighbour_size, &min_percent)?;

        self.groups[index].size_percent = size_percent;
        self.groups[neighbour].size_percent = neighbour_size;
        Ok(delta != 0.0)
    }

    /// Replace every share at once
    pub fn resize_all(
        &mut self,
        sizes: &[f64],
        min_percent: impl Fn(&PanelGroup) -> f64,
    ) -> Result<()> {
        let sum: f64 = sizes.iter().sum();
        if sizes.len() != self.groups.len()
            || (!self.groups.is_empty() && !sums_to_hundred(sum))
        {
            return Err(WorkspaceError::SizeMismatch {
                expected: self.groups.len(),
                actual: sizes.len(),
                sum,
            });
        }
        for (group, size) in self.groups.iter().zip(sizes) {
            check_share(group, *size, &min_percent)?;
        }
        for (group, size) in self.groups.iter_mut().zip(sizes) {
            group.size_percent = *size;
        }
        Ok(())
    }

    /// Move a panel out of a multi-panel group into a new group right after
    /// it. The source group's share is split in half between the two.
    ///
    /// Returns `None` when the group holds a single panel or `max_groups`
    /// is reached.
    pub fn split_out(&mut self, panel: PanelId, max_groups: usize) -> Result<Option<GroupId>> {
        let index = self
            .groups
            .iter()
            .position(|g| g.contains(panel))
            .ok_or_else(|| WorkspaceError::panel_not_found(panel))?;
        if self.groups[index].panel_ids.len() < 2 || self.groups.len() >= max_groups {
            return Ok(None);
        }

        self.detach(panel);
        let source = &mut self.groups[index];
        let half = source.size_percent / 2.0;
        source.size_percent = half;

        let id = self.allocate_id();
        self.groups.insert(index + 1, PanelGroup::new(id, panel, half));
        Ok(Some(id))
    }

    /// Move a panel into another existing group, appended and active
    pub fn move_panel(&mut self, panel: PanelId, to: GroupId) -> Result<bool> {
        if self.get(to).is_none() {
            return Err(WorkspaceError::group_not_found(to));
        }
        let from = self
            .group_of(panel)
            .map(|g| g.id)
            .ok_or_else(|| WorkspaceError::panel_not_found(panel))?;
        if from == to {
            return Ok(false);
        }
        self.detach(panel);
        self.add_panel_to_group(to, panel)?;
        Ok(true)
    }

    /// Group before/after `group` in sibling order, wrapping around
    pub fn adjacent(&self, group: GroupId, forward: bool) -> Option<&PanelGroup> {
        let len = self.groups.len();
        let index = self.position(group)?;
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        self.groups.get(next)
    }

    /// Append a pre-built group with an explicit share (preset application)
    pub fn push_group(&mut self, panels: Vec<PanelId>, size_percent: f64) -> Option<GroupId> {
        let first = *panels.first()?;
        let id = self.allocate_id();
        self.groups.push(PanelGroup {
            id,
            panel_ids: panels,
            active_panel_id: first,
            size_percent,
        });
        Some(id)
    }

    /// Remove every group. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Rescale shares so they sum to exactly 100, absorbing float drift
    fn normalize(&mut self) {
        let total = self.total_size();
        if self.groups.is_empty() || total <= f64::EPSILON {
            return;
        }
        for group in &mut self.groups {
            group.size_percent *= 100.0 / total;
        }
    }
}

/// Whether a share total is 100 within tolerance (false for NaN)
fn sums_to_hundred(total: f64) -> bool {
    (total - 100.0).abs() <= SIZE_EPSILON
}

fn check_share(
    group: &PanelGroup,
    size_percent: f64,
    min_percent: &impl Fn(&PanelGroup) -> f64,
) -> Result<()> {
    let min = min_percent(group);
    if !size_percent.is_finite() || size_percent <= 0.0 || size_percent < min - SIZE_EPSILON {
        return Err(WorkspaceError::BelowMinimumWidth {
            group: group.id,
            size_percent,
            min_percent: min,
        });
    }
    Ok(())
}
