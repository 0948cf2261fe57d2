//! Per-panel drill-down history
//!
//! A breadcrumb stack records navigation *steps*, not locations: visiting the
//! same target twice produces two entries. Navigation always keeps a
//! contiguous prefix of the stack.

use serde::{Deserialize, Serialize};

/// What a breadcrumb points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreadcrumbKind {
    ContentLocation,
    Commentary,
    RelatedText,
    CrossReference,
    Note,
}

/// One step in a panel's drill-down history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: BreadcrumbKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<u64>,
}

impl BreadcrumbItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: BreadcrumbKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            location_key: None,
            resource_id: None,
        }
    }

    pub fn with_location(mut self, key: impl Into<String>) -> Self {
        self.location_key = Some(key.into());
        self
    }

    pub fn with_resource(mut self, resource_id: u64) -> Self {
        self.resource_id = Some(resource_id);
        self
    }
}

/// Ordered navigation history, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreadcrumbStack {
    items: Vec<BreadcrumbItem>,
}

impl BreadcrumbStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The step the panel is currently showing (None = panel root view)
    pub fn current(&self) -> Option<&BreadcrumbItem> {
        self.items.last()
    }

    /// Append a step. No de-duplication.
    pub fn push(&mut self, item: BreadcrumbItem) {
        self.items.push(item);
    }

    /// Drop the last step; no-op on an empty stack.
    ///
    /// Returns the removed step, if any.
    pub fn pop(&mut self) -> Option<BreadcrumbItem> {
        self.items.pop()
    }

    /// Whether `goto(index)` would be accepted
    pub fn can_goto(&self, index: i64) -> bool {
        index >= -1 && index < self.items.len() as i64
    }

    /// Keep items `[0..=index]`; `-1` clears the stack.
    ///
    /// Returns false (and leaves the stack untouched) when `index` is out of
    /// range. Callers that need an error check `can_goto` first.
    pub fn goto(&mut self, index: i64) -> bool {
        if !self.can_goto(index) {
            return false;
        }
        self.items.truncate((index + 1) as usize);
        true
    }
}

impl From<Vec<BreadcrumbItem>> for BreadcrumbStack {
    fn from(items: Vec<BreadcrumbItem>) -> Self {
        Self { items }
    }
}
