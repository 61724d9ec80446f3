//! # Double-Buffered Slot Table
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │     DoubleBufferedTable     │
//!                    │                             │
//!                    │  ┌─────────┐  ┌─────────┐   │
//!                    │  │ Table A │  │ Table B │   │
//!                    │  └────┬────┘  └────┬────┘   │
//!                    │       │            │        │
//!                    │  ┌────┴────────────┴────┐   │
//!                    │  │   Front Index (0/1)  │   │
//!                    │  └──────────────────────┘   │
//!                    └─────────────────────────────┘
//!                              │
//!                 ┌────────────┴────────────┐
//!                 ▼                         ▼
//!         ┌──────────────┐          ┌──────────────┐
//!         │ WriteHandle  │          │  ReadHandle  │
//!         │ (one, back)  │          │ (many, front)│
//!         └──────────────┘          └──────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! - `TableWriteHandle`: exclusive access to the back buffer. One writer.
//! - `TableReadHandle`: shared access to the front buffer. Many readers.
//! - Each buffer sits behind its own `RwLock`, so a writer only waits on
//!   readers that still hold a buffer from two publications ago.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use muster_shared::Tick;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::slot::SlotTable;

/// A table together with the tick it was published for.
#[derive(Debug)]
struct Published {
    table: SlotTable,
    tick: Option<Tick>,
}

/// Slot table shared between one writer and many readers.
///
/// ## Usage
///
/// ```rust
/// use muster_core::{DoubleBufferedTable, SlotTable};
///
/// let shared = DoubleBufferedTable::new(4);
///
/// // UI thread, once per tick
/// let mut write = shared.write_handle();
/// write.copy_from(&SlotTable::new(4));
/// write.publish(1);
///
/// // Any thread
/// let read = shared.read_handle();
/// assert_eq!(read.tick(), Some(1));
/// assert_eq!(read.len(), 4);
/// ```
#[derive(Debug)]
pub struct DoubleBufferedTable {
    /// The two table buffers.
    buffers: [RwLock<Published>; 2],
    /// Index of the buffer readers see (0 or 1).
    /// The writer always fills `front ^ 1`.
    front: AtomicUsize,
    /// Number of publications.
    publish_count: AtomicU64,
}

impl DoubleBufferedTable {
    /// Creates a shared table with `num_slots` empty rows in both buffers.
    #[must_use]
    pub fn new(num_slots: usize) -> Arc<Self> {
        let empty = || {
            RwLock::new(Published {
                table: SlotTable::new(num_slots),
                tick: None,
            })
        };

        Arc::new(Self {
            buffers: [empty(), empty()],
            front: AtomicUsize::new(0),
            publish_count: AtomicU64::new(0),
        })
    }

    /// Number of publications so far.
    #[inline]
    #[must_use]
    pub fn publish_count(&self) -> u64 {
        self.publish_count.load(Ordering::Relaxed)
    }

    /// Tick of the front buffer, `None` before the first publication.
    #[must_use]
    pub fn published_tick(&self) -> Option<Tick> {
        self.read_handle().tick()
    }

    /// Locks the back buffer for writing.
    ///
    /// The buffer still holds the table from two publications ago; overwrite
    /// it completely before publishing. Only one writer should exist.
    #[must_use]
    pub fn write_handle(&self) -> TableWriteHandle<'_> {
        let back = self.front.load(Ordering::Acquire) ^ 1;
        TableWriteHandle {
            owner: self,
            index: back,
            guard: self.buffers[back].write(),
        }
    }

    /// Locks the front buffer for reading.
    #[must_use]
    pub fn read_handle(&self) -> TableReadHandle<'_> {
        let front = self.front.load(Ordering::Acquire);
        TableReadHandle {
            index: front,
            guard: self.buffers[front].read(),
        }
    }
}

/// Exclusive access to the back buffer.
///
/// Dropping the handle without [`TableWriteHandle::publish`] discards
/// nothing, but readers keep seeing the previous front buffer.
pub struct TableWriteHandle<'a> {
    owner: &'a DoubleBufferedTable,
    index: usize,
    guard: RwLockWriteGuard<'a, Published>,
}

impl TableWriteHandle<'_> {
    /// Buffer index this handle writes to (for debugging).
    #[inline]
    #[must_use]
    pub fn buffer_index(&self) -> usize {
        self.index
    }

    /// Stamps the buffer with `tick` and makes it the front buffer.
    pub fn publish(mut self, tick: Tick) {
        self.guard.tick = Some(tick);
        let Self { owner, index, guard } = self;
        drop(guard);
        owner.front.store(index, Ordering::Release);
        owner.publish_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl Deref for TableWriteHandle<'_> {
    type Target = SlotTable;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.guard.table
    }
}

impl DerefMut for TableWriteHandle<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard.table
    }
}

/// Shared access to the front buffer.
pub struct TableReadHandle<'a> {
    index: usize,
    guard: RwLockReadGuard<'a, Published>,
}

impl TableReadHandle<'_> {
    /// Buffer index this handle reads from (for debugging).
    #[inline]
    #[must_use]
    pub fn buffer_index(&self) -> usize {
        self.index
    }

    /// Tick the table was published for.
    #[inline]
    #[must_use]
    pub fn tick(&self) -> Option<Tick> {
        self.guard.tick
    }
}

impl Deref for TableReadHandle<'_> {
    type Target = SlotTable;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.guard.table
    }
}
