/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Device clock polling interval in milliseconds
    pub const CLOCK_POLL_INTERVAL_MS: u32 = 1_000;

    /// Shown in the clock until the device answers once
    pub const CLOCK_PLACEHOLDER: &'static str = "--:--:--";

    /// Value every freshly generated time input starts with
    pub const DEFAULT_DOSE_TIME: &'static str = "08:00";

    /// Motor speed used when a container has no stored settings
    pub const DEFAULT_MOTOR_SPEED: u32 = 128;

    /// Trigger threshold used when a container has no stored settings
    pub const DEFAULT_TRIGGER_THRESHOLD: u32 = 1_500;

    /// Slider bounds for motor speed (PWM duty, 8 bit)
    pub const MOTOR_SPEED_RANGE: (u32, u32) = (0, 255);

    /// Slider bounds for the vibration sensor trigger threshold (12 bit ADC)
    pub const TRIGGER_THRESHOLD_RANGE: (u32, u32) = (0, 4_095);

    /// Horizontal offset of a row menu relative to its gear icon, in pixels
    pub const MENU_OFFSET_X: f64 = -15.0;
}
