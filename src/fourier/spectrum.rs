//! Discrete Fourier transform of sampled curves and component selection.

use std::f64::consts::PI;

use rustfft::{num_complex::Complex64, FftPlanner};

use super::rational::Frequency;
use crate::error::{EpicycleError, Result};

/// Unnormalized DFT coefficient `a_k` at integer index `k`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub k: usize,
    pub coefficient: Complex64,
}

impl Component {
    pub fn magnitude(&self) -> f64 {
        self.coefficient.norm()
    }
}

/// Parameters of one rotating arrow derived from a component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowSpec {
    /// `|a_k| / N` (curve units)
    pub length: f64,

    /// Exact `k / N` (cycles per sample step)
    pub frequency: Frequency,

    /// `arg(a_k)` (radians)
    pub phase: f64,
}

/// Compute `a_k = sum_n x[n] * exp(-2 pi i n k / N)` for every `k` in `[0, N)`
///
/// Uses rustfft's forward transform, which applies no normalization.
/// Results are ordered by ascending `k`.
pub fn transform(samples: &[Complex64]) -> Vec<Component> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(samples.len());

    let mut buffer = samples.to_vec();
    fft.process(&mut buffer);

    buffer
        .into_iter()
        .enumerate()
        .map(|(k, coefficient)| Component { k, coefficient })
        .collect()
}

/// Direct O(N^2) summation, the reference for `transform`
pub fn transform_direct(samples: &[Complex64]) -> Vec<Component> {
    let n = samples.len();
    (0..n)
        .map(|k| {
            let coefficient = samples
                .iter()
                .enumerate()
                .map(|(idx, x)| {
                    let angle = -2.0 * PI * (idx * k) as f64 / n as f64;
                    x * Complex64::from_polar(1.0, angle)
                })
                .sum();
            Component { k, coefficient }
        })
        .collect()
}

/// Keep the `n` components with the greatest magnitude
///
/// The sort is stable, so equal magnitudes keep ascending `k` order.
pub fn top_components(spectrum: &[Component], n: usize) -> Vec<Component> {
    let mut sorted = spectrum.to_vec();
    sorted.sort_by(|a, b| b.magnitude().total_cmp(&a.magnitude()));
    sorted.truncate(n);
    sorted
}

/// Convert components into arrow parameters, normalizing by the sample count
pub fn build_vectors(components: &[Component], total_samples: usize) -> Result<Vec<ArrowSpec>> {
    if total_samples == 0 {
        return Err(EpicycleError::EmptySamples);
    }

    let n = total_samples as f64;
    components
        .iter()
        .map(|c| -> Result<ArrowSpec> {
            Ok(ArrowSpec {
                length: c.magnitude() / n,
                frequency: Frequency::new(c.k as i64, total_samples as i64)?,
                phase: c.coefficient.arg(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn wobbly_curve() -> Vec<Complex64> {
        (0..13)
            .map(|i| {
                let t = i as f64 * 0.7;
                Complex64::new(t.cos() + 0.3 * (3.0 * t).sin(), t.sin() - 0.1 * t)
            })
            .collect()
    }

    #[test]
    fn test_transform_empty() {
        assert!(transform(&[]).is_empty());
        assert!(transform_direct(&[]).is_empty());
    }

    #[test]
    fn test_transform_matches_direct_sum() {
        let samples = wobbly_curve();
        let fast = transform(&samples);
        let slow = transform_direct(&samples);

        assert_eq!(fast.len(), samples.len());
        for (a, b) in fast.iter().zip(&slow) {
            assert_eq!(a.k, b.k);
            assert!((a.coefficient - b.coefficient).norm() < EPS);
        }
    }

    #[test]
    fn test_inverse_sum_reconstructs_samples() {
        let samples = wobbly_curve();
        let spectrum = transform(&samples);
        let n = samples.len() as f64;

        for (idx, original) in samples.iter().enumerate() {
            let rebuilt: Complex64 = spectrum
                .iter()
                .map(|c| {
                    let angle = 2.0 * PI * (idx * c.k) as f64 / n;
                    c.coefficient * Complex64::from_polar(1.0, angle)
                })
                .sum::<Complex64>()
                / n;
            assert!((rebuilt - original).norm() < EPS);
        }
    }

    #[test]
    fn test_single_point_is_dc() {
        let spectrum = transform(&[Complex64::new(2.0, -1.0)]);
        assert_eq!(spectrum.len(), 1);
        assert_eq!(spectrum[0].k, 0);
        assert!((spectrum[0].coefficient - Complex64::new(2.0, -1.0)).norm() < EPS);
    }

    #[test]
    fn test_top_components_dominate_excluded() {
        let spectrum = transform(&wobbly_curve());
        for n in [0, 1, 4, 13, 40] {
            let top = top_components(&spectrum, n);
            assert_eq!(top.len(), n.min(spectrum.len()));

            let weakest_kept = top
                .iter()
                .map(Component::magnitude)
                .fold(f64::INFINITY, f64::min);
            for c in spectrum.iter().filter(|c| !top.iter().any(|t| t.k == c.k)) {
                assert!(c.magnitude() <= weakest_kept);
            }
        }
    }

    #[test]
    fn test_top_components_ties_keep_index_order() {
        let spectrum: Vec<Component> = [1.0, 3.0, 1.0, 3.0, 2.0]
            .iter()
            .enumerate()
            .map(|(k, &m)| Component {
                k,
                coefficient: Complex64::new(0.0, m),
            })
            .collect();

        let ks: Vec<usize> = top_components(&spectrum, 4).iter().map(|c| c.k).collect();
        assert_eq!(ks, vec![1, 3, 4, 0]);
    }

    #[test]
    fn test_build_vectors_normalizes() {
        let components = [
            Component {
                k: 2,
                coefficient: Complex64::new(0.0, 8.0),
            },
            Component {
                k: 0,
                coefficient: Complex64::new(-4.0, 0.0),
            },
        ];
        let specs = build_vectors(&components, 8).unwrap();

        assert!((specs[0].length - 1.0).abs() < EPS);
        assert_eq!(specs[0].frequency, Frequency::new(1, 4).unwrap());
        assert!((specs[0].phase - PI / 2.0).abs() < EPS);

        assert!((specs[1].length - 0.5).abs() < EPS);
        assert!(specs[1].frequency.is_zero());
        assert!((specs[1].phase - PI).abs() < EPS);
    }

    #[test]
    fn test_build_vectors_rejects_zero_samples() {
        assert!(matches!(
            build_vectors(&[], 0),
            Err(EpicycleError::EmptySamples)
        ));
    }
}
