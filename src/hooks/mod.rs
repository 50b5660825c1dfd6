pub mod use_device_clock;
pub mod use_session;
pub mod use_theme;
