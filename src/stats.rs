//! Descriptive statistics over a sample set.
//!
//! All functions return `None` for an empty slice. Results are unrounded.

/// Most frequent value(s) of a sample set.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Exactly one value reaches the highest frequency.
    Unique(f64),
    /// Several values share the highest frequency, sorted ascending.
    Tied(Vec<f64>),
}

impl Mode {
    /// Mode values as a sorted list (one element when unique).
    pub fn values(&self) -> Vec<f64> {
        match self {
            Mode::Unique(v) => vec![*v],
            Mode::Tied(vs) => vs.clone(),
        }
    }
}

/// Arithmetic mean: sum / count.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle element of the sorted set, or the average of the two middle
/// elements for an even count.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Values with the highest frequency (exact equality).
pub fn mode(values: &[f64]) -> Option<Mode> {
    if values.is_empty() {
        return None;
    }

    // Runs of equal values in sorted order give the frequency table already
    // ordered ascending.
    let sorted = sorted(values);
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for v in sorted {
        match runs.last_mut() {
            Some((last, count)) if *last == v => *count += 1,
            _ => runs.push((v, 1)),
        }
    }

    let max = runs.iter().map(|(_, count)| *count).max()?;
    let mut modes: Vec<f64> = runs
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(v, _)| v)
        .collect();

    if modes.len() == 1 {
        modes.pop().map(Mode::Unique)
    } else {
        Some(Mode::Tied(modes))
    }
}

/// Population variance: mean of squared deviations (divisor N).
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
    Some(sum_sq / values.len() as f64)
}

/// Population standard deviation (divisor N, not N - 1).
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    population_variance(values).map(f64::sqrt)
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
