//! Component system for homelab-pilot TUI
//!
//! Components hold only presentation state (scroll offsets); everything
//! they show comes from the controller's [`ViewModel`].

pub mod detail;
pub mod service_list;

pub use detail::DetailComponent;
pub use service_list::ServiceListComponent;

use color_eyre::Result;
use homelab_pilot_core::ViewModel;
use ratatui::{Frame, layout::Rect};

/// Trait for UI components
pub trait Component {
    /// Render the component to the frame
    fn draw(&mut self, frame: &mut Frame, area: Rect, view: &ViewModel<'_>) -> Result<()>;
}
