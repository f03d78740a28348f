use core::mem::MaybeUninit;

/// Slot storage plus head/tail cursors. Knows nothing about full or empty;
/// the caller is responsible for only reading slots it has written.
pub(crate) struct RawRing<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    pub(crate) head: usize,
    pub(crate) tail: usize,
}

impl<T: Copy, const N: usize> RawRing<T, N> {
    const MASK: usize = N.wrapping_sub(1);

    pub(crate) const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            head: 0,
            tail: 0,
        }
    }

    pub(crate) const fn capacity(&self) -> usize {
        N
    }

    pub(crate) const fn is_power_of_two() -> bool {
        N != 0 && N & Self::MASK == 0
    }

    pub(crate) fn index(&self, pos: usize) -> usize {
        pos & Self::MASK
    }

    pub(crate) fn next_head(&self) -> usize {
        self.index(self.head + 1)
    }

    pub(crate) fn next_tail(&self) -> usize {
        self.index(self.tail + 1)
    }

    /// Occupied slots, ambiguous between 0 and `N` when `head == tail`.
    pub(crate) fn distance(&self) -> usize {
        self.index(self.head.wrapping_sub(self.tail))
    }

    pub(crate) fn rewind(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    /// # Safety
    ///
    /// `idx` must be in bounds and the slot must have been written.
    pub(crate) unsafe fn buffer_read(&self, idx: usize) -> T {
        self.buf.get_unchecked(idx).assume_init_read()
    }

    /// # Safety
    ///
    /// `idx` must be in bounds.
    pub(crate) unsafe fn buffer_write(&mut self, idx: usize, value: T) {
        let slot = self.buf.get_unchecked_mut(idx);
        *slot = MaybeUninit::new(value);
    }
}
