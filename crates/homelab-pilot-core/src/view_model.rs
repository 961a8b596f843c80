//! Render-ready projection of the dashboard
//!
//! Renderers only ever see these borrowed views, never the controller's
//! mutable state.

use crate::async_state::AsyncState;
use crate::indicators::HealthIndicator;
use crate::stats_cache::DetailSnapshot;
use crate::view::ViewState;
use homelab_rs::{DetailPayload, ServiceKind};
use std::time::Duration;

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct ViewModel<'a> {
    pub title: &'a str,
    pub view: &'a ViewState,
    /// Cursor position in the service list
    pub highlighted: usize,
    pub rows: Vec<ServiceRow<'a>>,
    pub status_line: &'a str,
    /// Worst health across all services
    pub overall: HealthIndicator,
    /// Present only while a detail view is open
    pub detail: Option<DetailView<'a>>,
}

/// One line of the service list
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRow<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub kind: ServiceKind,
    pub health: HealthIndicator,
    pub status_text: String,
    pub highlighted: bool,
    pub active: bool,
    pub has_detail: bool,
}

/// The open detail view
#[derive(Debug, Clone)]
pub struct DetailView<'a> {
    pub service: &'a str,
    pub kind: ServiceKind,
    pub health: HealthIndicator,
    pub state: &'a AsyncState<DetailSnapshot<DetailPayload>>,
    /// Age of the snapshot on screen, if any
    pub age: Option<Duration>,
    pub selected_row: usize,
}

impl DetailView<'_> {
    pub fn payload(&self) -> Option<&DetailPayload> {
        self.state.data().map(|snapshot| &snapshot.payload)
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }
}

impl ViewModel<'_> {
    /// Row currently under the cursor
    pub fn highlighted_row(&self) -> Option<&ServiceRow<'_>> {
        self.rows.get(self.highlighted)
    }
}
