//! Pure transforms from a [`RawSequence`] to samples.
//!
//! Each transform reads the sequence and nothing else, so the same sequence
//! can feed all three without copying or locking.

use tracing::{debug, warn};

use crate::core::{
    constants::WEIGHT_SUM_TOLERANCE,
    error::{RangeBound, SampleError},
    mcg::RawSequence,
};

/// What to do with values the cumulative boundaries fail to cover.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BoundaryPolicy {
    /// Values above the last cumulative boundary are dropped, so the output
    /// may be shorter than the raw sequence.
    #[default]
    Legacy,
    /// The last boundary is forced to exactly 1.0, so every `u` in `[0, 1]`
    /// lands in a bucket.
    ClampFinal,
}

/// Precomputed cumulative bucket boundaries for one probability vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Categorical {
    /// `len() == weights.len() + 1`, `bounds[0] == 0.0`.
    bounds: Vec<f64>,
}

impl Categorical {
    /// Build boundaries by sequential summation of `weights`, used as given.
    pub fn new(weights: &[f64], policy: BoundaryPolicy) -> Result<Self, SampleError> {
        if weights.is_empty() {
            return Err(SampleError::EmptyDistribution);
        }

        let mut bounds = Vec::with_capacity(weights.len() + 1);
        let mut acc = 0.0_f64;
        bounds.push(acc);
        for w in weights {
            acc += w;
            bounds.push(acc);
        }

        if (acc - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            warn!(sum = acc, "categorical weights do not sum to 1");
        }
        if policy == BoundaryPolicy::ClampFinal {
            if let Some(last) = bounds.last_mut() {
                *last = 1.0;
            }
        }
        Ok(Self { bounds })
    }

    /// Number of categories.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Always false; construction rejects an empty vector.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    #[must_use]
    pub fn boundaries(&self) -> &[f64] {
        &self.bounds
    }

    /// First bucket `j` with `B[j] <= u <= B[j+1]`.
    ///
    /// Both ends are inclusive and buckets are scanned upwards, so a value on
    /// an interior boundary goes to the lower bucket.
    #[must_use]
    pub fn bucket(&self, u: f64) -> Option<usize> {
        self.bounds
            .windows(2)
            .position(|b| b[0] <= u && u <= b[1])
    }
}

/// `x / modulus` as a double.
#[inline]
#[allow(clippy::cast_precision_loss)]
fn unit(x: i64, modulus: i64) -> f64 {
    x as f64 / modulus as f64
}

impl RawSequence {
    /// `(x / modulus) · c` for every element, seed included.
    pub fn uniform_continuous(&self, c: f64) -> Result<Vec<f64>, SampleError> {
        if !(c.is_finite() && c > 0.0) {
            return Err(SampleError::InvalidRange(RangeBound::Real(c)));
        }
        let m = self.modulus();
        Ok(self.iter().map(|&x| unit(x, m) * c).collect())
    }

    /// `x mod c` (Euclidean) for every element, seed included.
    pub fn uniform_discrete(&self, c: i64) -> Result<Vec<i64>, SampleError> {
        if c <= 0 {
            return Err(SampleError::InvalidRange(RangeBound::Integer(c)));
        }
        Ok(self.iter().map(|&x| x.rem_euclid(c)).collect())
    }

    /// Bucket index for every element that finds a bucket.
    #[must_use]
    pub fn categorical(&self, dist: &Categorical) -> Vec<usize> {
        let m = self.modulus();
        let out: Vec<usize> = self
            .iter()
            .filter_map(|&x| dist.bucket(unit(x, m)))
            .collect();

        let dropped = self.len() - out.len();
        if dropped > 0 {
            warn!(dropped, "values outside the cumulative boundaries were dropped");
        }
        debug!(categories = dist.len(), len = out.len(), "categorical transform");
        out
    }
}
