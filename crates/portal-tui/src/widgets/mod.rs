//! Custom widget components

mod alert_dialog;
mod banner;
pub mod confirm_dialog;
mod content_editor;
mod header;
pub mod modal_overlay;
mod section;
mod status_bar;
mod submissions_table;
mod usage_panel;
mod validation_panel;

pub use alert_dialog::AlertDialog;
pub use banner::BannerWidget;
pub use confirm_dialog::ConfirmDialog;
pub use content_editor::ContentEditor;
pub use header::MainHeader;
pub use section::SectionHeader;
pub use status_bar::StatusBar;
pub use submissions_table::SubmissionsTable;
pub use usage_panel::UsagePanel;
pub use validation_panel::ValidationPanel;
