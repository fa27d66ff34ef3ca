//! Work partitioning for the convolution filters.
//!
//! A buffer of `L` bytes is split into `T` contiguous, pixel-aligned byte ranges,
//! one per worker. Each worker gets a disjoint `&mut` slice of the output, so
//! the write path needs no locking; the input is shared read-only. The caller
//! blocks until every worker has finished.

use std::ops::Range;

use log::{debug, trace};

use crate::buffer::CHANNELS;
use crate::error::{FilterError, Result};

/// Controls how a partitioned operation is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run on the current thread, no partitioning.
    Serial,

    /// One worker per thread of the global rayon pool.
    #[default]
    Parallel,

    /// Exactly `n` workers, scheduled on the global rayon pool.
    Workers(usize),

    /// A local pool of `n` threads running `n` workers.
    ///
    /// # Warning
    /// Builds a new thread pool on every call.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Number of chunks the buffer is split into.
    pub fn worker_count(&self) -> Result<usize> {
        match *self {
            ExecutionStrategy::Serial => Ok(1),
            ExecutionStrategy::Parallel => Ok(rayon::current_num_threads().max(1)),
            ExecutionStrategy::Workers(n) | ExecutionStrategy::Fixed(n) => {
                if n == 0 {
                    Err(FilterError::InvalidWorkerCount(n))
                } else {
                    Ok(n)
                }
            }
        }
    }
}

/// One worker's share of the buffer: the half-open byte range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkAssignment {
    pub start: usize,
    pub end: usize,
}

impl ChunkAssignment {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Per-worker share: `ceil(len / workers)` rounded up to a whole pixel.
fn chunk_share(len: usize, workers: usize) -> usize {
    len.div_ceil(workers).next_multiple_of(CHANNELS)
}

/// Split `len` bytes into `workers` assignments.
///
/// Assignments are returned in worker order, cover `[0, len)` without gaps or
/// overlaps, and every boundary is a multiple of 4. Because the share is
/// rounded up, trailing workers may receive an empty range.
pub fn partition(len: usize, workers: usize) -> Result<Vec<ChunkAssignment>> {
    if workers == 0 {
        return Err(FilterError::InvalidWorkerCount(workers));
    }
    let share = chunk_share(len, workers);

    Ok((0..workers)
        .map(|t| ChunkAssignment {
            start: (t * share).min(len),
            end: ((t + 1) * share).min(len),
        })
        .collect())
}

/// Run `op` once per assignment, each with its own disjoint slice of `dst`.
///
/// `op` receives the assignment (offsets into the full buffer) and the matching
/// slice of `dst`. Returns after all workers have joined.
pub fn run_partitioned<F>(dst: &mut [u8], strategy: ExecutionStrategy, op: F) -> Result<()>
where
    F: Fn(ChunkAssignment, &mut [u8]) + Sync,
{
    if strategy == ExecutionStrategy::Serial {
        op(
            ChunkAssignment {
                start: 0,
                end: dst.len(),
            },
            dst,
        );
        return Ok(());
    }

    let workers = strategy.worker_count()?;
    let assignments = partition(dst.len(), workers)?;
    debug!(
        "partitioned {} bytes across {} workers ({} bytes each)",
        dst.len(),
        workers,
        chunk_share(dst.len(), workers)
    );

    let mut chunks = Vec::with_capacity(assignments.len());
    let mut rest = dst;
    for assignment in &assignments {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(assignment.len());
        chunks.push((*assignment, head));
        rest = tail;
    }

    let op = &op;
    let spawn_all = move || {
        rayon::scope(|s| {
            for (worker, (assignment, chunk)) in chunks.into_iter().enumerate() {
                s.spawn(move |_| {
                    trace!("worker {} processing bytes {:?}", worker, assignment.range());
                    op(assignment, chunk);
                });
            }
        });
    };

    match strategy {
        ExecutionStrategy::Fixed(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| FilterError::ThreadPool(e.to_string()))?;
            pool.install(spawn_all);
        }
        _ => spawn_all(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(len: usize, assignments: &[ChunkAssignment]) {
        let mut sorted = assignments.to_vec();
        sorted.sort_by_key(|a| a.start);
        let mut cursor = 0;
        for a in &sorted {
            assert_eq!(a.start, cursor, "gap or overlap at {cursor}");
            assert!(a.start <= a.end);
            assert_eq!(a.start % 4, 0);
            assert_eq!(a.end % 4, 0);
            cursor = a.end;
        }
        assert_eq!(cursor, len);
    }

    #[test]
    fn test_partition_covers_buffer() {
        for len in [4, 40, 4000] {
            for workers in [1, 5, 16] {
                let assignments = partition(len, workers).unwrap();
                assert_eq!(assignments.len(), workers);
                assert_exact_cover(len, &assignments);
            }
        }
    }

    #[test]
    fn test_partition_uneven_split_has_no_gap() {
        // 11 pixels over 5 workers: a floor-based share would drop the tail
        let assignments = partition(44, 5).unwrap();
        assert_exact_cover(44, &assignments);
        assert_eq!(assignments[0], ChunkAssignment { start: 0, end: 12 });
        assert_eq!(assignments[3], ChunkAssignment { start: 36, end: 44 });
        assert!(assignments[4].is_empty());
    }

    #[test]
    fn test_partition_more_workers_than_pixels() {
        let assignments = partition(4, 16).unwrap();
        assert_eq!(assignments[0], ChunkAssignment { start: 0, end: 4 });
        assert!(assignments[1..].iter().all(|a| a.is_empty() && a.start == 4));
    }

    #[test]
    fn test_partition_zero_workers() {
        assert!(matches!(
            partition(40, 0),
            Err(FilterError::InvalidWorkerCount(0))
        ));
    }

    #[test]
    fn test_worker_count() {
        assert_eq!(ExecutionStrategy::Serial.worker_count().unwrap(), 1);
        assert!(ExecutionStrategy::Parallel.worker_count().unwrap() >= 1);
        assert_eq!(ExecutionStrategy::Workers(3).worker_count().unwrap(), 3);
        assert!(matches!(
            ExecutionStrategy::Fixed(0).worker_count(),
            Err(FilterError::InvalidWorkerCount(0))
        ));
    }

    #[test]
    fn test_run_partitioned_writes_every_chunk() {
        for strategy in [
            ExecutionStrategy::Serial,
            ExecutionStrategy::Parallel,
            ExecutionStrategy::Workers(7),
            ExecutionStrategy::Fixed(3),
        ] {
            let mut dst = vec![0u8; 4 * 25];
            run_partitioned(&mut dst, strategy, |assignment, chunk| {
                assert_eq!(chunk.len(), assignment.len());
                for (i, byte) in chunk.iter_mut().enumerate() {
                    *byte = ((assignment.start + i) % 251) as u8;
                }
            })
            .unwrap();
            let expected: Vec<u8> = (0..100).map(|i| (i % 251) as u8).collect();
            assert_eq!(dst, expected, "{strategy:?}");
        }
    }

    #[test]
    fn test_run_partitioned_rejects_zero_workers() {
        let mut dst = vec![0u8; 8];
        let res = run_partitioned(&mut dst, ExecutionStrategy::Workers(0), |_, _| {});
        assert!(matches!(res, Err(FilterError::InvalidWorkerCount(0))));
    }
}
