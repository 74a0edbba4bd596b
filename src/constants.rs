pub const WINDOW_WIDTH: i32 = 960;             // Window width (pixels)
pub const WINDOW_HEIGHT: i32 = 600;            // Window height (pixels)
pub const FPS: u32 = 60;                       // Target frames per second

pub const BASE_DURATION_MS: u32 = 500;         // Base duration for the pulse effect (ms)
pub const SHAKE_BASE_DURATION_MS: u32 = 600;   // Base duration for the shake effect (ms)
pub const PER_CARD_DURATION_MS: u32 = 100;     // Extra duration added per animated card (ms)

pub const AUTO_PULSE_DELAY_MS: u32 = 1000;     // Delay before the startup pulse fires (ms)
pub const AUTO_PULSE_DURATION_MS: u32 = 1000;  // Duration of the startup pulse (ms)

pub const CARD_WIDTH: f32 = 180.0;             // Card width (pixels)
pub const CARD_HEIGHT: f32 = 220.0;            // Card height (pixels)
pub const CARD_SPACING: f32 = 24.0;            // Gap between cards (pixels)
pub const CARD_ROW_Y: f32 = 160.0;             // Top edge of the card row (pixels)

pub const BUTTON_WIDTH: f32 = 150.0;           // Trigger button width (pixels)
pub const BUTTON_HEIGHT: f32 = 40.0;           // Trigger button height (pixels)
pub const BUTTON_SPACING: f32 = 16.0;          // Gap between buttons (pixels)
pub const BUTTON_ROW_Y: f32 = 60.0;            // Top edge of the button row (pixels)

pub const PULSE_SCALE_AMPLITUDE: f32 = 0.06;   // Peak relative scale growth while pulsing
pub const PULSE_SCALE_HZ: f32 = 2.0;           // Pulse oscillations per second
pub const SHAKE_JITTER_PX: f32 = 5.0;          // Max random offset while shaking (pixels)

pub const MODAL_CONTENT_WIDTH: f32 = 420.0;    // Modal content width (pixels)
pub const MODAL_CONTENT_HEIGHT: f32 = 260.0;   // Modal content height (pixels)
