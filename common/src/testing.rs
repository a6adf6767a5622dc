//! Test doubles for the host services and the display.

use core::convert::Infallible;
use std::collections::BTreeMap;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::host::{Host, LayerId, PersistentStore, StorageError};
use crate::time::WallTime;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Stored {
    Int(i32),
    Bool(bool),
}

/// In-memory persistent store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<u32, Stored>,
    /// Make every write fail with `StorageError::Io`.
    pub fail_writes: bool,
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    fn write(
        &mut self,
        key: u32,
        value: Stored,
    ) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io);
        }
        self.writes += 1;
        self.entries.insert(key, value);
        Ok(())
    }
}

impl PersistentStore for MemoryStore {
    fn exists(
        &self,
        key: u32,
    ) -> bool {
        self.entries.contains_key(&key)
    }

    fn read_int(
        &self,
        key: u32,
    ) -> Option<i32> {
        match self.entries.get(&key) {
            Some(Stored::Int(v)) => Some(*v),
            _ => None,
        }
    }

    fn write_int(
        &mut self,
        key: u32,
        value: i32,
    ) -> Result<(), StorageError> {
        self.write(key, Stored::Int(value))
    }

    fn read_bool(
        &self,
        key: u32,
    ) -> Option<bool> {
        match self.entries.get(&key) {
            Some(Stored::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    fn write_bool(
        &mut self,
        key: u32,
        value: bool,
    ) -> Result<(), StorageError> {
        self.write(key, Stored::Bool(value))
    }
}

/// Host that records every request made by the watchface.
#[derive(Debug)]
pub struct MockHost {
    pub store: MemoryStore,
    pub now: WallTime,
    pub is_24h: bool,
    pub subscribed: bool,
    pub subscribe_calls: usize,
    pub unsubscribe_calls: usize,
    pub dirty: Vec<LayerId>,
}

impl MockHost {
    pub fn new(now: WallTime) -> Self { Self::with_store(now, MemoryStore::new()) }

    pub fn with_store(
        now: WallTime,
        store: MemoryStore,
    ) -> Self {
        Self {
            store,
            now,
            is_24h: true,
            subscribed: false,
            subscribe_calls: 0,
            unsubscribe_calls: 0,
            dirty: Vec::new(),
        }
    }

    /// Number of times `layer` was invalidated.
    pub fn dirty_count(
        &self,
        layer: LayerId,
    ) -> usize {
        self.dirty.iter().filter(|&&l| l == layer).count()
    }
}

impl Host for MockHost {
    fn local_time(&self) -> WallTime { self.now }

    fn clock_is_24h(&self) -> bool { self.is_24h }

    fn tick_subscribe(&mut self) {
        self.subscribed = true;
        self.subscribe_calls += 1;
    }

    fn tick_unsubscribe(&mut self) {
        self.subscribed = false;
        self.unsubscribe_calls += 1;
    }

    fn mark_dirty(
        &mut self,
        layer: LayerId,
    ) {
        self.dirty.push(layer);
    }
}

impl PersistentStore for MockHost {
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

/// Screen-sized frame buffer. Pixels outside the screen are dropped.
pub struct FrameBuffer {
    pixels: Vec<BinaryColor>,
}

impl FrameBuffer {
    pub fn new(fill: BinaryColor) -> Self {
        Self {
            pixels: vec![fill; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> BinaryColor {
        self.pixels[(y as u32 * SCREEN_WIDTH + x as u32) as usize]
    }

    pub fn count(
        &self,
        color: BinaryColor,
    ) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Count pixels of `color` inside the rectangle `[x0, x1) x [y0, y1)`.
    pub fn count_in(
        &self,
        color: BinaryColor,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> usize {
        (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixel(x, y) == color)
            .count()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < SCREEN_WIDTH && (p.y as u32) < SCREEN_HEIGHT {
                self.pixels[(p.y as u32 * SCREEN_WIDTH + p.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}
