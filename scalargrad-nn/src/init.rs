use crate::error::NnError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Weight initialization scheme for a neuron with `nin` inputs.
///
/// Biases always start at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform in `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Normal with mean 0 and std `√(2/nin)`, suited to ReLU-like activations.
    KaimingNormal,
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Draws `nin` weights.
    ///
    /// # Errors
    /// [`NnError::InitializationError`] for an empty or non-finite uniform
    /// range, or a distribution that cannot be built.
    pub fn sample_weights<R: Rng + ?Sized>(&self, nin: usize, rng: &mut R) -> Result<Vec<f64>, NnError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite() && low < high) {
                    return Err(NnError::InitializationError(format!(
                        "uniform range [{}, {}) is empty or not finite",
                        low, high
                    )));
                }
                Ok((0..nin).map(|_| rng.gen_range(low..high)).collect())
            }
            Init::KaimingNormal => {
                if nin == 0 {
                    return Err(NnError::InitializationError(
                        "Kaiming initialization needs at least one input".to_string(),
                    ));
                }
                let std_dev = (2.0 / nin as f64).sqrt();
                let normal = Normal::new(0.0, std_dev)
                    .map_err(|e| NnError::InitializationError(e.to_string()))?;
                Ok((0..nin).map(|_| normal.sample(rng)).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let weights = Init::default().sample_weights(500, &mut rng).unwrap();
        assert_eq!(weights.len(), 500);
        assert!(weights.iter().all(|&w| (-1.0..1.0).contains(&w)));
    }

    #[test]
    fn test_uniform_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let init = Init::Uniform { low: 1.0, high: 1.0 };
        assert!(matches!(
            init.sample_weights(3, &mut rng),
            Err(NnError::InitializationError(_))
        ));
    }

    #[test]
    fn test_kaiming_normal_spread() {
        let mut rng = StdRng::seed_from_u64(11);
        let nin = 50;
        let weights = Init::KaimingNormal.sample_weights(nin, &mut rng).unwrap();
        let variance = weights.iter().map(|w| w * w).sum::<f64>() / nin as f64;
        // Expected variance 2/nin = 0.04; loose bound for a small sample.
        assert!(variance > 0.01 && variance < 0.1, "variance {}", variance);
    }

    #[test]
    fn test_seeded_init_is_reproducible() {
        let a = Init::default().sample_weights(4, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = Init::default().sample_weights(4, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }
}
