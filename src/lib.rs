//! Fixed-capacity ring queue over a power-of-two number of slots.
//!
//! [`RingQueue`] owns its storage and never allocates. Full and empty are
//! tracked with explicit flags, so a queue of capacity `N` holds `N` items.
//! Every operation returns a [`QueueError`] on failure instead of panicking.
//!
//! The queue is meant for one producer and one consumer that are serialized
//! by the caller; it does no locking of its own.
//!
//! ```
//! use p2ring::{QueueError, RingQueue};
//!
//! let mut queue = RingQueue::<u8, 2>::try_new().unwrap();
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! assert_eq!(queue.enqueue(3), Err(QueueError::Full));
//!
//! let bad = RingQueue::<u8, 3>::try_new();
//! assert_eq!(bad.err(), Some(QueueError::LengthNotPowerOfTwo));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod handle;
mod queue;
mod raw_ring;
mod wrapper;

pub use error::{QueueError, Status};
pub use queue::RingQueue;
pub use wrapper::{QueueSink, QueueStream};
