//! Platform abstraction layer
//!
//! Handles windowing and input for the frame loop:
//! - Time
//! - Held keys
//! - Window events (close, resize)

pub mod headless;

pub use headless::HeadlessPlatform;

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    Left,
    Right,
    Escape,
}

/// Events drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Framebuffer resized to (width, height)
    Resized(u32, u32),
    CloseRequested,
}

/// Window and input provider
pub trait Platform {
    fn should_close(&self) -> bool;
    /// Drain pending events; never blocks
    fn poll_events(&mut self) -> Vec<WindowEvent>;
    fn is_key_down(&self, key: Key) -> bool;
    /// Seconds since startup
    fn time(&self) -> f64;
}
