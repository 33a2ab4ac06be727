//! Bounded worker pool for batch scrubbing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::error::{Result, ScrubError};

/// Runs `task` once per index in `0..count` on at most `workers` threads and
/// returns the outputs in index order.
///
/// Workers claim indices from a shared cursor, so the pool stays busy no
/// matter how unevenly sized the inputs are, and every result lands in the
/// slot matching its input position. All inputs run to completion even when
/// an earlier one fails; the batch then reports the failure with the lowest
/// input index and returns no partial output. A panicking worker surfaces as
/// [`ScrubError::WorkerPanicked`].
pub(crate) fn run_ordered<T, F>(workers: usize, count: usize, task: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    let workers = workers.clamp(1, count);
    let cursor = AtomicUsize::new(0);
    let cursor = &cursor;
    let task = &task;

    let mut slots: Vec<Option<Result<T>>> = Vec::with_capacity(count);
    slots.resize_with(count, || None);

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            handles.push(scope.spawn(move || {
                let mut produced = Vec::new();
                loop {
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    if index >= count {
                        break;
                    }
                    produced.push((index, task(index)));
                }
                produced
            }));
        }
        for handle in handles {
            if let Ok(produced) = handle.join() {
                for (index, result) in produced {
                    slots[index] = Some(result);
                }
            }
            // A panicked worker leaves its slots empty; they surface below.
        }
    });

    let mut out = Vec::with_capacity(count);
    for slot in slots {
        match slot {
            Some(Ok(value)) => out.push(value),
            Some(Err(err)) => return Err(err),
            None => return Err(ScrubError::WorkerPanicked),
        }
    }
    Ok(out)
}
