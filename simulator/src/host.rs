//! Host services backed by the desktop.

use log::debug;
use uncertainty_common::{Host, LayerId, PersistentStore, StorageError, WallTime};

use crate::clock::SimClock;
use crate::store::FileStore;

/// Desktop stand-in for the watch firmware services.
#[derive(Debug)]
pub struct SimHost {
    store: FileStore,
    clock: SimClock,
    clock_24h: bool,
    subscribed: bool,
    last_tick: Option<WallTime>,
    dirty: bool,
}

impl SimHost {
    pub fn new(
        store: FileStore,
        clock: SimClock,
        clock_24h: bool,
    ) -> Self {
        Self {
            store,
            clock,
            clock_24h,
            subscribed: false,
            last_tick: None,
            dirty: false,
        }
    }

    /// Shift the simulated clock by `minutes`.
    pub fn shift_clock(
        &mut self,
        minutes: i32,
    ) {
        self.clock.shift(minutes);
    }

    /// Flip the 12/24h preference and return the new value.
    pub fn toggle_24h(&mut self) -> bool {
        self.clock_24h = !self.clock_24h;
        self.clock_24h
    }

    /// Time of the next tick to deliver, if subscribed and the minute changed.
    pub fn poll_tick(&mut self) -> Option<WallTime> {
        if !self.subscribed {
            return None;
        }
        let now = self.clock.now();
        if self.last_tick == Some(now) {
            return None;
        }
        self.last_tick = Some(now);
        Some(now)
    }

    #[inline]
    pub const fn clock(&self) -> &SimClock { &self.clock }

    /// Whether a redraw was requested since the last call.
    pub fn take_dirty(&mut self) -> bool { std::mem::take(&mut self.dirty) }
}

impl Host for SimHost {
    fn local_time(&self) -> WallTime { self.clock.now() }

    fn clock_is_24h(&self) -> bool { self.clock_24h }

    fn tick_subscribe(&mut self) {
        self.subscribed = true;
        // Ticks fire on minute changes, not on subscription
        self.last_tick = Some(self.clock.now());
    }

    fn tick_unsubscribe(&mut self) {
        self.subscribed = false;
        self.last_tick = None;
    }

    fn mark_dirty(
        &mut self,
        layer: LayerId,
    ) {
        debug!("dirty: {layer:?}");
        self.dirty = true;
    }
}

impl PersistentStore for SimHost {
    fn exists(
        &self,
        key: u32,
    ) -> bool {
        self.store.exists(key)
    }

    fn read_int(
        &self,
        key: u32,
    ) -> Option<i32> {
        self.store.read_int(key)
    }

    fn write_int(
        &mut self,
        key: u32,
        value: i32,
    ) -> Result<(), StorageError> {
        self.store.write_int(key, value)
    }

    fn read_bool(
        &self,
        key: u32,
    ) -> Option<bool> {
        self.store.read_bool(key)
    }

    fn write_bool(
        &mut self,
        key: u32,
        value: bool,
    ) -> Result<(), StorageError> {
        self.store.write_bool(key, value)
    }
}
