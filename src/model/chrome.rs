//! Workspace chrome outside the study region: bottom panel and left sidebar

use serde::{Deserialize, Serialize};

/// Tab selected when the bottom panel opens with nothing chosen
pub const DEFAULT_BOTTOM_TAB: &str = "audio";

/// Bottom drawer (audio player, search results, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottomPanel {
    pub open: bool,
    pub active_tab: Option<String>,
    pub size_percent: f64,
}

impl Default for BottomPanel {
    fn default() -> Self {
        Self {
            open: false,
            active_tab: None,
            size_percent: 30.0,
        }
    }
}

impl BottomPanel {
    /// Flip visibility, picking the default tab when opening with none
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open && self.active_tab.is_none() {
            self.active_tab = Some(DEFAULT_BOTTOM_TAB.to_string());
        }
    }
}

/// Navigation sidebar on the left edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeftSidebar {
    pub open: bool,
    pub collapsed: bool,
}

impl Default for LeftSidebar {
    fn default() -> Self {
        Self {
            open: false,
            collapsed: true,
        }
    }
}
