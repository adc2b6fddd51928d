//! UI components for the Gardenist application.

pub mod dialog_component;
pub mod help_panel;
pub mod plant_list_component;
pub mod sidebar_component;
pub mod stats_panel;
pub mod status_bar;
pub mod toast;

pub use dialog_component::DialogComponent;
pub use help_panel::HelpPanel;
pub use plant_list_component::PlantListComponent;
pub use sidebar_component::SidebarComponent;
pub use stats_panel::StatsPanel;
pub use status_bar::StatusBar;
pub use toast::{Severity, Toast, ToastManager};
