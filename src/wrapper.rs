use crate::error::QueueError;
use crate::queue::RingQueue;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures_sink::Sink;
use futures_util::Stream;

/// Feeds a queue through [`Sink`]. Never returns `Pending`: a full queue
/// surfaces as `Err(QueueError::Full)` from `poll_ready`.
pub struct QueueSink<'a, T, const N: usize> {
    inner: &'a mut RingQueue<T, N>,
}

impl<'a, T: Copy, const N: usize> QueueSink<'a, T, N> {
    pub fn new(queue: &'a mut RingQueue<T, N>) -> Self {
        Self { inner: queue }
    }

    pub fn into_inner(self) -> &'a mut RingQueue<T, N> {
        self.inner
    }
}

impl<T: Copy, const N: usize> Sink<T> for QueueSink<'_, T, N> {
    type Error = QueueError;

    fn poll_ready(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        let ready = match self.inner.is_full() {
            Ok(true) => Err(QueueError::Full),
            Ok(false) => Ok(()),
            Err(err) => Err(err),
        };
        Poll::Ready(ready)
    }

    fn start_send(mut self: Pin<&mut Self>, item: T) -> Result<(), Self::Error> {
        self.inner.enqueue(item)
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }
}

/// Drains a queue as a [`Stream`]. The stream ends as soon as the queue is
/// empty; items enqueued afterwards need a fresh stream.
pub struct QueueStream<'a, T, const N: usize> {
    inner: &'a mut RingQueue<T, N>,
}

impl<'a, T: Copy, const N: usize> QueueStream<'a, T, N> {
    pub fn new(queue: &'a mut RingQueue<T, N>) -> Self {
        Self { inner: queue }
    }

    pub fn into_inner(self) -> &'a mut RingQueue<T, N> {
        self.inner
    }
}

impl<T: Copy, const N: usize> Stream for QueueStream<'_, T, N> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // an uninitialized queue has nothing to yield either.
        Poll::Ready(self.inner.dequeue().ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len().unwrap_or(0);
        (len, Some(len))
    }
}
