use std::collections::{HashSet, VecDeque};

pub const WINDOW_SIZE: usize = 10;

/// Merges `incoming` into `current` with the default capacity of [`WINDOW_SIZE`].
pub fn merge(current: &[f64], incoming: &[f64]) -> Vec<f64> {
    merge_with_capacity(current, incoming, WINDOW_SIZE)
}

/// Appends the unique values of `incoming` to `current`, evicting the oldest
/// entries first whenever the window is full.
///
/// Duplicates are only removed within `incoming`; a value already present in
/// `current` is appended again.
pub fn merge_with_capacity(current: &[f64], incoming: &[f64], capacity: usize) -> Vec<f64> {
    if capacity == 0 {
        return Vec::new();
    }

    let mut window: VecDeque<f64> = current.iter().copied().collect();
    for value in dedup(incoming) {
        while window.len() >= capacity {
            window.pop_front();
        }
        window.push_back(value);
    }
    window.into()
}

/// Unique values in first-occurrence order. `0.0` and `-0.0` count as equal.
pub fn dedup(values: &[f64]) -> Vec<f64> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .copied()
        .filter(|v| seen.insert(identity(*v)))
        .collect()
}

fn identity(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Arithmetic mean rounded to two decimals; `0.0` for an empty window.
pub fn average(window: &[f64]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    let sum: f64 = window.iter().sum();
    round2(sum / window.len() as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
