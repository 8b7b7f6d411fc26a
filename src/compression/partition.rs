use std::ops::Range;

use log::trace;

use crate::error::HuffError;

/// Upper bound on worker threads for one phase. Partitions beyond this share threads.
pub const MAX_WORKERS: usize = 256;

/// A contiguous slice of the input handed to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start: usize,
    pub end: usize,
    pub index: usize,
}

impl Partition {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Anything a worker hands back, tagged with the partition it came from.
pub trait Indexed {
    fn index(&self) -> usize;
}

/// Split `len` items into exactly `count` contiguous partitions of `len / count` items.
/// The last partition also takes the remainder.
pub fn partition(len: usize, count: usize) -> Result<Vec<Partition>, HuffError> {
    if count == 0 {
        return Err(HuffError::InvalidInput(
            "partition count must be at least 1".to_string(),
        ));
    }
    let size = len / count;
    let partitions = (0..count)
        .map(|index| Partition {
            start: index * size,
            end: if index == count - 1 {
                len
            } else {
                (index + 1) * size
            },
            index,
        })
        .collect::<Vec<_>>();
    trace!("Partitions: {:?}", partitions);
    Ok(partitions)
}

/// Put worker results back in partition order.
///
/// Exactly `expected` results must be present, with indices `0..expected` each appearing once.
/// Completion order plays no part; only the index does.
pub fn reassemble<P: Indexed>(mut parts: Vec<P>, expected: usize) -> Result<Vec<P>, HuffError> {
    if parts.len() != expected {
        return Err(HuffError::PartitionMismatch(format!(
            "expected {} results, collected {}",
            expected,
            parts.len()
        )));
    }
    parts.sort_by_key(|p| p.index());
    for (position, part) in parts.iter().enumerate() {
        let index = part.index();
        if index < position {
            return Err(HuffError::PartitionMismatch(format!(
                "partition {} is duplicated",
                index
            )));
        }
        if index > position {
            return Err(HuffError::PartitionMismatch(format!(
                "partition {} is missing",
                position
            )));
        }
    }
    Ok(parts)
}

/// A pool with one thread per partition, capped at MAX_WORKERS. Lives for a single phase.
pub(crate) fn worker_pool(partitions: usize) -> Result<rayon::ThreadPool, HuffError> {
    Ok(rayon::ThreadPoolBuilder::new()
        .num_threads(partitions.clamp(1, MAX_WORKERS))
        .thread_name(|i| format!("huffpar-worker-{}", i))
        .build()?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Tagged(usize, &'static str);
    impl Indexed for Tagged {
        fn index(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn even_split_test() {
        let parts = partition(12, 4).unwrap();
        assert_eq!(
            parts.iter().map(|p| p.range()).collect::<Vec<_>>(),
            vec![0..3, 3..6, 6..9, 9..12]
        );
        assert_eq!(
            parts.iter().map(|p| p.index).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn remainder_test() {
        let parts = partition(11, 3).unwrap();
        assert_eq!(
            parts.iter().map(|p| p.len()).collect::<Vec<_>>(),
            vec![3, 3, 5]
        );
    }

    #[test]
    fn more_partitions_than_items_test() {
        let parts = partition(3, 5).unwrap();
        assert_eq!(parts.len(), 5);
        assert!(parts[..4].iter().all(|p| p.is_empty()));
        assert_eq!(parts[4].range(), 0..3);
    }

    #[test]
    fn coverage_test() {
        for len in 0..40 {
            for count in 1..10 {
                let parts = partition(len, count).unwrap();
                assert_eq!(parts.len(), count);
                assert_eq!(parts[0].start, 0);
                assert_eq!(parts[count - 1].end, len);
                for pair in parts.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }
            }
        }
    }

    #[test]
    fn zero_partitions_test() {
        assert!(matches!(
            partition(10, 0),
            Err(HuffError::InvalidInput(_))
        ));
    }

    #[test]
    fn reassemble_order_test() {
        let parts = vec![Tagged(2, "c"), Tagged(0, "a"), Tagged(1, "b")];
        let ordered = reassemble(parts, 3).unwrap();
        assert_eq!(ordered, vec![Tagged(0, "a"), Tagged(1, "b"), Tagged(2, "c")]);
    }

    #[test]
    fn reassemble_count_test() {
        let parts = vec![Tagged(0, "a"), Tagged(1, "b")];
        assert!(matches!(
            reassemble(parts, 3),
            Err(HuffError::PartitionMismatch(_))
        ));
    }

    #[test]
    fn reassemble_duplicate_test() {
        let parts = vec![Tagged(0, "a"), Tagged(1, "b"), Tagged(1, "b")];
        assert_eq!(
            reassemble(parts, 3),
            Err(HuffError::PartitionMismatch(
                "partition 1 is duplicated".to_string()
            ))
        );
    }

    #[test]
    fn reassemble_missing_test() {
        let parts = vec![Tagged(0, "a"), Tagged(2, "c"), Tagged(3, "d")];
        assert_eq!(
            reassemble(parts, 3),
            Err(HuffError::PartitionMismatch(
                "partition 1 is missing".to_string()
            ))
        );
    }

    #[test]
    fn worker_pool_test() {
        assert_eq!(worker_pool(3).unwrap().current_num_threads(), 3);
        assert_eq!(worker_pool(0).unwrap().current_num_threads(), 1);
        assert_eq!(
            worker_pool(MAX_WORKERS * 2).unwrap().current_num_threads(),
            MAX_WORKERS
        );
    }
}
