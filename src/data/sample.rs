use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Index sampling for sparse x-axis ticks
// ---------------------------------------------------------------------------

/// Step between sampled rows for a table of `n` rows.
pub fn stride_for(n: usize) -> usize {
    if n <= 20 {
        3
    } else if n <= 50 {
        5
    } else {
        10
    }
}

/// Row positions plotted for one table.  Computed once, shared by every
/// chart of that table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledIndices {
    pub positions: Vec<usize>,
    pub stride: usize,
}

impl SampledIndices {
    /// `0, stride, 2*stride, …` while `< n`.
    pub fn for_len(n: usize) -> Self {
        let stride = stride_for(n);
        Self {
            positions: (0..n).step_by(stride).collect(),
            stride,
        }
    }

    /// 1-based record numbers for the tick labels.
    pub fn labels(&self) -> Vec<String> {
        self.positions.iter().map(|p| (p + 1).to_string()).collect()
    }
}

/// Sorted union of several tables' positions, used as the shared x-axis of
/// the cross-model chart.
pub fn union_positions<'a>(sets: impl IntoIterator<Item = &'a SampledIndices>) -> Vec<usize> {
    sets.into_iter()
        .flat_map(|s| s.positions.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stride_boundaries() {
        assert_eq!(stride_for(1), 3);
        assert_eq!(stride_for(20), 3);
        assert_eq!(stride_for(21), 5);
        assert_eq!(stride_for(50), 5);
        assert_eq!(stride_for(51), 10);
        assert_eq!(stride_for(75), 10);
    }

    #[test]
    fn fifteen_rows() {
        let s = SampledIndices::for_len(15);
        assert_eq!(s.stride, 3);
        assert_eq!(s.positions, vec![0, 3, 6, 9, 12]);
        assert_eq!(s.labels(), vec!["1", "4", "7", "10", "13"]);
    }

    #[test]
    fn empty_table_has_no_positions() {
        let s = SampledIndices::for_len(0);
        assert!(s.positions.is_empty());
        assert!(s.labels().is_empty());
    }

    #[test]
    fn positions_are_increasing_bounded_and_capped() {
        for n in 0..=120 {
            let s = SampledIndices::for_len(n);
            assert!(s.positions.windows(2).all(|w| w[0] < w[1]), "n={n}");
            assert!(s.positions.iter().all(|&p| p < n), "n={n}");
            if n > 0 {
                assert_eq!(s.positions[0], 0);
            }
            assert!(s.positions.len() <= n.div_ceil(s.stride), "n={n}");
            assert_eq!(s, SampledIndices::for_len(n));
        }
    }

    #[test]
    fn union_merges_unequal_lengths() {
        let a = SampledIndices::for_len(15); // 0,3,6,9,12
        let b = SampledIndices::for_len(35); // 0,5,..,30
        assert_eq!(
            union_positions([&a, &b]),
            vec![0, 3, 5, 6, 9, 10, 12, 15, 20, 25, 30]
        );
        assert_eq!(union_positions([&a, &a]), a.positions);
    }
}
