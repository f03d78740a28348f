//! Procedural access to a [`RingQueue`] through optional references.
//!
//! Each function mirrors one queue operation. An absent queue, input or
//! output reference is rejected with [`QueueError::NullParameter`] before the
//! queue is inspected, so the check takes priority over
//! [`QueueError::NotInitialized`]. Use [`Status::from`](crate::Status) to turn
//! a result into its numeric code.

use crate::error::QueueError;
use crate::queue::RingQueue;

fn required<R>(r: Option<R>) -> Result<R, QueueError> {
    r.ok_or(QueueError::NullParameter)
}

pub fn init<T: Copy, const N: usize>(
    ctx: Option<&mut RingQueue<T, N>>,
) -> Result<(), QueueError> {
    required(ctx)?.init()
}

pub fn put<T: Copy, const N: usize>(
    ctx: Option<&mut RingQueue<T, N>>,
    input: Option<&T>,
) -> Result<(), QueueError> {
    let ctx = required(ctx)?;
    let input = required(input)?;
    ctx.enqueue(*input)
}

pub fn get<T: Copy, const N: usize>(
    ctx: Option<&mut RingQueue<T, N>>,
    output: Option<&mut T>,
) -> Result<(), QueueError> {
    let ctx = required(ctx)?;
    let output = required(output)?;
    ctx.dequeue_into(output)
}

pub fn empty<T: Copy, const N: usize>(
    ctx: Option<&RingQueue<T, N>>,
    empty: Option<&mut bool>,
) -> Result<(), QueueError> {
    let ctx = required(ctx)?;
    let empty = required(empty)?;
    *empty = ctx.is_empty()?;
    Ok(())
}

pub fn full<T: Copy, const N: usize>(
    ctx: Option<&RingQueue<T, N>>,
    full: Option<&mut bool>,
) -> Result<(), QueueError> {
    let ctx = required(ctx)?;
    let full = required(full)?;
    *full = ctx.is_full()?;
    Ok(())
}

pub fn length<T: Copy, const N: usize>(
    ctx: Option<&RingQueue<T, N>>,
    length: Option<&mut usize>,
) -> Result<(), QueueError> {
    let ctx = required(ctx)?;
    let length = required(length)?;
    *length = ctx.len()?;
    Ok(())
}

pub fn reset<T: Copy, const N: usize>(
    ctx: Option<&mut RingQueue<T, N>>,
) -> Result<(), QueueError> {
    required(ctx)?.reset()
}
