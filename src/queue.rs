use crate::error::QueueError;
use crate::raw_ring::RawRing;
use core::fmt;

/// Fixed-capacity FIFO over `N` slots of `T`.
///
/// `N` must be a non-zero power of two; this is checked by [`init`], which
/// must succeed before any other operation is accepted. All `N` slots are
/// usable: `empty` and `full` are tracked as explicit flags because
/// `head == tail` holds in both states.
///
/// The queue owns its storage and never allocates, so it can live in a
/// `static`, a struct field or on the stack.
///
/// ```
/// use p2ring::RingQueue;
///
/// let mut queue = RingQueue::<u32, 4>::new();
/// queue.init().unwrap();
///
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// assert_eq!(queue.len(), Ok(2));
/// assert_eq!(queue.dequeue(), Ok(1));
/// ```
///
/// [`init`]: RingQueue::init
pub struct RingQueue<T, const N: usize> {
    buf: RawRing<T, N>,
    empty: bool,
    full: bool,
    initialized: bool,
}

impl<T: Copy, const N: usize> RingQueue<T, N> {
    /// An uninitialized queue. Call [`init`](RingQueue::init) before use.
    pub const fn new() -> Self {
        Self {
            buf: RawRing::new(),
            empty: true,
            full: false,
            initialized: false,
        }
    }

    /// `new` followed by `init`.
    pub fn try_new() -> Result<Self, QueueError> {
        let mut queue = Self::new();
        queue.init()?;
        Ok(queue)
    }

    /// Validates the capacity and puts the queue in the empty state.
    ///
    /// Fails with [`QueueError::LengthNotPowerOfTwo`] when `N` is zero or
    /// not a power of two, leaving the queue unusable.
    pub fn init(&mut self) -> Result<(), QueueError> {
        if !RawRing::<T, N>::is_power_of_two() {
            return Err(QueueError::LengthNotPowerOfTwo);
        }

        self.clear();
        self.initialized = true;
        Ok(())
    }

    /// Copies `item` into the next free slot.
    ///
    /// The call that fills the last slot raises the full flag itself, so
    /// `is_full` is accurate as soon as it returns. Only the call after
    /// that is rejected with [`QueueError::Full`].
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        self.check_initialized()?;

        if self.full {
            return Err(QueueError::Full);
        }

        let next = self.buf.next_head();
        if next == self.buf.tail {
            self.full = true;
        }

        unsafe {
            self.buf.buffer_write(self.buf.head, item);
        }
        self.empty = false;
        self.buf.head = next;
        Ok(())
    }

    /// Copies the oldest item out of the queue.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        self.check_initialized()?;

        if self.empty {
            return Err(QueueError::Empty);
        }

        // the empty flag is clear, so the slot at tail holds a written value.
        let item = unsafe { self.buf.buffer_read(self.buf.tail) };
        self.full = false;
        self.buf.tail = self.buf.next_tail();
        if self.buf.head == self.buf.tail {
            self.empty = true;
        }
        Ok(item)
    }

    /// Like [`dequeue`](RingQueue::dequeue), writing into `out`. On error
    /// `out` is left as it was.
    pub fn dequeue_into(&mut self, out: &mut T) -> Result<(), QueueError> {
        *out = self.dequeue()?;
        Ok(())
    }

    pub fn is_empty(&self) -> Result<bool, QueueError> {
        self.check_initialized()?;
        Ok(self.empty)
    }

    pub fn is_full(&self) -> Result<bool, QueueError> {
        self.check_initialized()?;
        Ok(self.full)
    }

    /// Number of occupied slots, `N` when full.
    pub fn len(&self) -> Result<usize, QueueError> {
        self.check_initialized()?;

        if self.full {
            Ok(self.buf.capacity())
        } else {
            Ok(self.buf.distance())
        }
    }

    /// Drops every queued item. Slot contents are left in place but become
    /// unreachable.
    pub fn reset(&mut self) -> Result<(), QueueError> {
        self.check_initialized()?;
        self.clear();
        Ok(())
    }

    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn clear(&mut self) {
        self.buf.rewind();
        self.full = false;
        self.empty = true;
    }

    fn check_initialized(&self) -> Result<(), QueueError> {
        if self.initialized {
            Ok(())
        } else {
            Err(QueueError::NotInitialized)
        }
    }
}

impl<T: Copy, const N: usize> Default for RingQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for RingQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("capacity", &N)
            .field("head", &self.buf.head)
            .field("tail", &self.buf.tail)
            .field("empty", &self.empty)
            .field("full", &self.full)
            .field("initialized", &self.initialized)
            .finish()
    }
}
