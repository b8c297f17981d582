//! Lock-free single-producer/single-consumer byte queue of fixed size 256.
//!
//! Intended for asynchronous byte ingestion, e.g. an interrupt handler
//! feeding a task context. Correctness rests on disjoint index ownership:
//! the write index is advanced only by the producer, the read index only by
//! the consumer, and both wrap naturally at 256 as `u8` values. One slot is
//! always kept empty to distinguish full from empty, so the usable capacity
//! is 255 bytes.
//!
//! No mutex is involved anywhere; `write` and `read` fail immediately
//! instead of blocking, and any backoff policy belongs to the caller.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU8, Ordering};

/// Fixed-size lock-free SPSC byte queue.
///
/// [`split`](Self::split) hands out the single producer and the single
/// consumer endpoint; the exclusive borrow guarantees at most one of each.
pub struct Lf256Fifo {
    data: UnsafeCell<[u8; 256]>,
    /// Index of the first filled slot; advanced only by the consumer.
    read: AtomicU8,
    /// Index of the first empty slot; advanced only by the producer.
    write: AtomicU8,
}

// The interior slots are only touched through the Producer/Consumer split,
// which keeps the accesses disjoint.
unsafe impl Sync for Lf256Fifo {}

impl Lf256Fifo {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            data: UnsafeCell::new([0; 256]),
            read: AtomicU8::new(0),
            write: AtomicU8::new(0),
        }
    }

    /// Splits the queue into its producer and consumer endpoints.
    pub fn split(&mut self) -> (Producer<'_>, Consumer<'_>) {
        (Producer { fifo: self }, Consumer { fifo: self })
    }

    /// Returns `true` when no byte is buffered.
    pub fn is_empty(&self) -> bool {
        self.read.load(Ordering::Acquire) == self.write.load(Ordering::Acquire)
    }

    /// Returns `true` when writing one more byte would collide with the
    /// read index (the reserved-slot convention).
    pub fn is_full(&self) -> bool {
        let write = self.write.load(Ordering::Acquire);
        write.wrapping_add(1) == self.read.load(Ordering::Acquire)
    }

    fn push(&self, byte: u8) -> core::result::Result<(), u8> {
        let write = self.write.load(Ordering::Relaxed);
        if write.wrapping_add(1) == self.read.load(Ordering::Acquire) {
            return Err(byte);
        }

        // The slot at `write` is outside the readable region until the index
        // advance below publishes it, so the consumer never observes this
        // store half-done.
        unsafe {
            (*self.data.get())[write as usize] = byte;
        }
        self.write.store(write.wrapping_add(1), Ordering::Release);
        Ok(())
    }

    fn pop(&self) -> Option<u8> {
        let read = self.read.load(Ordering::Relaxed);
        if read == self.write.load(Ordering::Acquire) {
            return None;
        }

        // The Acquire load above pairs with the producer's Release store, so
        // the slot contents are visible before the index said they exist.
        let byte = unsafe { (*self.data.get())[read as usize] };
        self.read.store(read.wrapping_add(1), Ordering::Release);
        Some(byte)
    }

    fn drop_all(&self) {
        self.read
            .store(self.write.load(Ordering::Acquire), Ordering::Release);
    }
}

impl Default for Lf256Fifo {
    fn default() -> Self {
        Self::new()
    }
}

/// Write endpoint of an [`Lf256Fifo`]; exactly one exists per queue.
pub struct Producer<'a> {
    fifo: &'a Lf256Fifo,
}

impl Producer<'_> {
    /// Buffers one byte, or returns it back when the queue is full.
    pub fn write(&mut self, byte: u8) -> core::result::Result<(), u8> {
        self.fifo.push(byte)
    }

    /// Returns `true` when the next `write` would fail.
    pub fn is_full(&self) -> bool {
        self.fifo.is_full()
    }
}

/// Read endpoint of an [`Lf256Fifo`]; exactly one exists per queue.
pub struct Consumer<'a> {
    fifo: &'a Lf256Fifo,
}

impl Consumer<'_> {
    /// Takes the oldest buffered byte, or `None` when the queue is empty.
    pub fn read(&mut self) -> Option<u8> {
        self.fifo.pop()
    }

    /// Drops every buffered byte by catching the read index up to the write
    /// index.
    pub fn flush(&mut self) {
        self.fifo.drop_all()
    }

    /// Returns `true` when the next `read` would fail.
    pub fn is_empty(&self) -> bool {
        self.fifo.is_empty()
    }
}
