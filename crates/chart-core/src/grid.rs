// File: crates/chart-core/src/grid.rs
// Summary: Tick and marking layout helpers.

/// Step between labelled ticks so that roughly `markings` labels appear over
/// `discrete_points` positions. `None` means only the first and last tick get
/// a label.
pub fn marking_divisor(discrete_points: usize, markings: Option<usize>) -> Option<usize> {
    let markings = markings.filter(|&m| m > 2)?;
    let divisor = (discrete_points as f64 / (markings - 1) as f64).round() as usize;
    (divisor > 0).then_some(divisor)
}

/// Whether the tick at `index` of `count` ticks carries a label.
pub fn shows_marking(index: usize, count: usize, divisor: Option<usize>) -> bool {
    index == 0 || index + 1 == count || divisor.is_some_and(|d| index % d == 0)
}

/// Indices of labelled ticks among `count` ticks.
pub fn labelled_ticks(count: usize, divisor: Option<usize>) -> Vec<usize> {
    (0..count).filter(|&i| shows_marking(i, count, divisor)).collect()
}
