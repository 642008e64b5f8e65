//! Tests for batch module

use super::*;
use crate::error::SeqBatchError;
use ndarray::{array, Array2};

fn rows(batch: &PaddedBatch<i32>) -> Vec<Vec<i32>> {
    batch.to_rows()
}

// =========================================================================
// pad Tests
// =========================================================================

#[test]
fn test_pad_empty_sequence() {
    let batch = pad(&[vec![]], 5, 0).unwrap();
    assert_eq!(rows(&batch), vec![vec![0, 0, 0, 0, 0]]);
    assert_eq!(batch.mask_rows(), vec![vec![false; 5]]);
}

#[test]
fn test_pad_short_sequence() {
    let batch = pad(&[vec![1, 2, 3]], 5, 0).unwrap();
    assert_eq!(rows(&batch), vec![vec![1, 2, 3, 0, 0]]);
    assert_eq!(batch.mask_rows(), vec![vec![true, true, true, false, false]]);
}

#[test]
fn test_pad_exact_length_unchanged() {
    let batch = pad(&[vec![1, 2, 3, 4, 5]], 5, 0).unwrap();
    assert_eq!(rows(&batch), vec![vec![1, 2, 3, 4, 5]]);
    assert_eq!(batch.real_token_counts(), vec![5]);
}

#[test]
fn test_pad_truncates_long_sequence() {
    let batch = pad(&[vec![1, 2, 3, 4, 5, 6]], 5, 0).unwrap();
    assert_eq!(rows(&batch), vec![vec![1, 2, 3, 4, 5]]);
    assert_eq!(batch.mask_rows(), vec![vec![true; 5]]);
}

#[test]
fn test_pad_mixed_batch() {
    let batch = pad(&[vec![7], vec![1, 2, 3, 4, 5, 6, 7], vec![]], 3, -1).unwrap();
    assert_eq!(batch.batch_size(), 3);
    assert_eq!(batch.max_length(), 3);
    assert_eq!(rows(&batch), vec![vec![7, -1, -1], vec![1, 2, 3], vec![-1, -1, -1]]);
    assert_eq!(batch.real_token_counts(), vec![1, 3, 0]);
}

#[test]
fn test_pad_empty_batch() {
    let batch = pad::<i32>(&[], 4, 0).unwrap();
    assert!(batch.is_empty());
    assert_eq!(batch.tokens().dim(), (0, 4));
    assert_eq!(batch.mask().dim(), (0, 4));
}

#[test]
fn test_pad_rejects_zero_and_negative_width() {
    for max_length in [0, -1, i64::MIN] {
        let err = pad(&[vec![1, 2, 3]], max_length, 0).unwrap_err();
        assert!(matches!(err, SeqBatchError::InvalidConfiguration { .. }));
    }
}

#[test]
fn test_pad_string_tokens() {
    let seq: Vec<String> = ["A", "U", "G"].iter().map(|s| s.to_string()).collect();
    let batch = pad(&[seq], 5, "PAD".to_string()).unwrap();
    assert_eq!(batch.to_rows(), vec![vec!["A", "U", "G", "PAD", "PAD"]]);
}

#[test]
fn test_pad_char_tokens() {
    let batch = pad(&[vec!['A', 'U']], 3, '-').unwrap();
    assert_eq!(batch.to_rows(), vec![vec!['A', 'U', '-']]);
}

#[test]
fn test_pad_is_idempotent() {
    let once = pad(&[vec![1, 2, 3], vec![1, 2, 3, 4, 5, 6]], 5, 0).unwrap();
    let twice = pad(&once.to_rows(), 5, 0).unwrap();
    assert_eq!(once.tokens(), twice.tokens());
}

#[test]
fn test_mask_is_positional_for_real_sentinel_values() {
    // A real 0 stays attended in the batch mask
    let batch = pad(&[vec![1, 0, 3]], 5, 0).unwrap();
    assert_eq!(batch.mask_rows(), vec![vec![true, true, true, false, false]]);
    // while value-based reconstruction cannot tell it apart
    assert_eq!(
        build_mask(batch.row(0).unwrap().as_slice().unwrap(), &0),
        vec![true, false, true, false, false]
    );
}

// =========================================================================
// SequenceBatchPreparer Tests
// =========================================================================

#[test]
fn test_preparer_defaults() {
    let preparer = SequenceBatchPreparer::new(8, 0u32).unwrap();
    assert_eq!(preparer.max_length(), 8);
    assert_eq!(*preparer.pad_token(), 0);
    assert_eq!(preparer.side(), PaddingSide::Right);
}

#[test]
fn test_preparer_rejects_non_positive_width() {
    assert!(SequenceBatchPreparer::new(0, 0u32).is_err());
    assert!(SequenceBatchPreparer::new(-5, 0u32).is_err());
}

#[test]
fn test_preparer_pad_sequence() {
    let preparer = SequenceBatchPreparer::new(4, 0).unwrap();
    assert_eq!(preparer.pad_sequence(&[9, 8]), vec![9, 8, 0, 0]);
    assert_eq!(preparer.pad_sequence(&[1, 2, 3, 4, 5]), vec![1, 2, 3, 4]);
    assert_eq!(preparer.pad_sequence(&[]), vec![0, 0, 0, 0]);
}

#[test]
fn test_preparer_left_padding() {
    let preparer = SequenceBatchPreparer::new(5, 0).unwrap().pad_side(PaddingSide::Left);
    let batch = preparer.prepare(&[vec![1, 2, 3], vec![1, 2, 3, 4, 5, 6]]);

    assert_eq!(rows(&batch), vec![vec![0, 0, 1, 2, 3], vec![1, 2, 3, 4, 5]]);
    assert_eq!(
        batch.mask_rows(),
        vec![vec![false, false, true, true, true], vec![true; 5]]
    );
}

#[test]
fn test_preparer_reused_across_batches() {
    let preparer = SequenceBatchPreparer::new(3, 0).unwrap();
    let first = preparer.prepare(&[vec![1]]);
    let second = preparer.prepare(&[vec![2, 2], vec![3, 3, 3, 3]]);

    assert_eq!(rows(&first), vec![vec![1, 0, 0]]);
    assert_eq!(rows(&second), vec![vec![2, 2, 0], vec![3, 3, 3]]);
}

#[test]
fn test_preparer_shared_between_threads() {
    let preparer = SequenceBatchPreparer::new(4, 0u32).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                let preparer = &preparer;
                scope.spawn(move || preparer.prepare(&[vec![i; i as usize]]))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let batch = handle.join().unwrap();
            assert_eq!(batch.real_token_counts(), vec![i]);
        }
    });
}

// =========================================================================
// build_mask Tests
// =========================================================================

#[test]
fn test_build_mask() {
    assert_eq!(build_mask(&[1, 2, 3, 0, 0], &0), vec![true, true, true, false, false]);
}

#[test]
fn test_build_mask_sentinel_ambiguity() {
    assert_eq!(build_mask(&[1, 0, 3, 0, 0], &0), vec![true, false, true, false, false]);
}

#[test]
fn test_build_mask_empty() {
    assert!(build_mask::<u32>(&[], &0).is_empty());
}

#[test]
fn test_build_mask_batch() {
    let tokens: Array2<u32> = array![[5, 6, 0], [0, 0, 0]];
    let mask = build_mask_batch(&tokens, &0);
    assert_eq!(mask, array![[true, true, false], [false, false, false]]);
}

// =========================================================================
// PaddedBatch Tests
// =========================================================================

#[test]
fn test_mask_f32_and_u8() {
    let batch = pad(&[vec![4, 4]], 3, 0).unwrap();
    assert_eq!(batch.mask_f32(), array![[1.0f32, 1.0, 0.0]]);
    assert_eq!(batch.mask_u8(), array![[1u8, 1, 0]]);
}

#[test]
fn test_row_out_of_range() {
    let batch = pad(&[vec![1]], 2, 0).unwrap();
    assert!(batch.row(0).is_some());
    assert!(batch.row(1).is_none());
}

#[test]
fn test_into_parts() {
    let batch = pad(&[vec![1, 2]], 3, 0).unwrap();
    let (tokens, mask) = batch.into_parts();
    assert_eq!(tokens, array![[1, 2, 0]]);
    assert_eq!(mask, array![[true, true, false]]);
}
