// File: crates/chart-core/src/downsample.rs
// Summary: Nearest-neighbour column sampling of normalized datasets.

/// Source index for column `i` when `len` values are shown in `columns` columns.
///
/// Identity when the sizes match, otherwise `round(len / columns * i)`.
/// Callers guarantee `columns <= len`, which keeps the result in bounds.
#[inline]
pub fn sample_index(len: usize, columns: usize, i: usize) -> usize {
    if len == columns {
        return i;
    }
    let idx = ((len as f64 / columns as f64) * i as f64).round() as usize;
    idx.min(len.saturating_sub(1))
}

/// All source indices for `columns` columns over `len` values.
pub fn sample_indices(len: usize, columns: usize) -> Vec<usize> {
    (0..columns).map(|i| sample_index(len, columns, i)).collect()
}
