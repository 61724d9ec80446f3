//! # Slot Table Publication
//!
//! The engine is single-threaded. Hosts that read the roster from another
//! thread (a loading screen worker, a voice overlay) read a published copy.
//!
//! ## The Problem
//!
//! ```text
//! UI thread:      recompute slot table for tick N
//! Other thread:   read slot table
//!
//! Sharing the engine's table: reader sees half of tick N and half of N-1
//! ```
//!
//! ## The Solution: Double Buffering
//!
//! ```text
//! Tick N:
//!   Writer fills the back buffer
//!   Readers keep reading the front buffer (tick N-1)
//!   publish(N) flips the front index
//!
//! Tick N+1:
//!   Writer fills the other buffer
//!   Readers see tick N, complete
//! ```

mod double_buffer;

pub use double_buffer::{DoubleBufferedTable, TableReadHandle, TableWriteHandle};
