pub mod clock;
pub mod container_block;
pub mod gear_menu;
pub mod schedule_dialog;
pub mod settings_dialog;
pub mod settings_panel;
pub mod status;
pub mod theme_toggle;

pub use clock::DeviceClock;
pub use container_block::ContainerBlock;
pub use gear_menu::GearMenu;
pub use schedule_dialog::ScheduleDialog;
pub use settings_dialog::SettingsDialog;
pub use settings_panel::SettingsPanel;
pub use status::Status;
