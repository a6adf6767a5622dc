//! Interface to the host firmware.
//!
//! The watchface does not own an event loop. The host delivers lifecycle,
//! tick and message callbacks (see [`Watchface`](crate::app::Watchface)) and
//! in turn provides the services described here. Everything runs on the host's
//! single callback thread, so none of these traits need to be `Send` or `Sync`.

use crate::time::WallTime;

/// Drawable layers of the main window.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayerId {
    /// Root layer; invalidating it redraws everything.
    Window,
    HourText,
    MinuteSegment,
}

/// Failure reported by a persistent store write.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StorageError {
    /// The store has no room for the value.
    NoSpaceLeft,
    /// The backing medium could not be written.
    Io,
}

impl core::fmt::Display for StorageError {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::NoSpaceLeft => f.write_str("no space left"),
            Self::Io => f.write_str("write failed"),
        }
    }
}

/// Small key-value store that survives restarts.
pub trait PersistentStore {
    /// Whether any value is stored under `key`.
    fn exists(
        &self,
        key: u32,
    ) -> bool;

    fn read_int(
        &self,
        key: u32,
    ) -> Option<i32>;

    fn write_int(
        &mut self,
        key: u32,
        value: i32,
    ) -> Result<(), StorageError>;

    fn read_bool(
        &self,
        key: u32,
    ) -> Option<bool>;

    fn write_bool(
        &mut self,
        key: u32,
        value: bool,
    ) -> Result<(), StorageError>;
}

/// Services provided by the host firmware.
pub trait Host {
    /// Current local wall-clock time.
    fn local_time(&self) -> WallTime;

    /// User preference for 24-hour display.
    fn clock_is_24h(&self) -> bool;

    /// Start delivering `on_tick` once per minute.
    fn tick_subscribe(&mut self);

    /// Stop delivering ticks.
    fn tick_unsubscribe(&mut self);

    /// Request a redraw of `layer` before the next frame.
    fn mark_dirty(
        &mut self,
        layer: LayerId,
    );
}

/// One key/value pair received from the companion app.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ConfigMessage<'a> {
    pub key: u32,
    pub value: &'a str,
}

impl<'a> ConfigMessage<'a> {
    pub const fn new(
        key: u32,
        value: &'a str,
    ) -> Self {
        Self { key, value }
    }
}
