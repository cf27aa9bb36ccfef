//! Run-time configuration objects + fluent builders.

use crate::core::{
    constants::{DEFAULT_MODULUS, DEFAULT_MULTIPLIER, DEFAULT_SEED},
    error::{ConfigError, SampleError},
};

/// Generator parameters.  Immutable once built; the seed is not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    modulus: i64,
    multiplier: i64,
    seed: i64,
}

impl GeneratorConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Validating constructor.
    pub fn new(modulus: i64, multiplier: i64, seed: i64) -> Result<Self, SampleError> {
        if modulus < 2 {
            return Err(SampleError::InvalidModulus(modulus));
        }
        Ok(Self {
            modulus,
            multiplier,
            seed,
        })
    }

    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> i64 {
        self.modulus
    }
    #[inline]
    #[must_use]
    pub const fn multiplier(&self) -> i64 {
        self.multiplier
    }
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }
}

/// `151 / 7 / 1`, the example parameter set.
impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            multiplier: DEFAULT_MULTIPLIER,
            seed: DEFAULT_SEED,
        }
    }
}

/// Fluent builder; unset fields fall back to the example defaults.
#[derive(Debug, Default)]
pub struct GeneratorConfigBuilder {
    modulus: Option<i64>,
    multiplier: Option<i64>,
    seed: Option<i64>,
}

impl GeneratorConfigBuilder {
    #[inline]
    #[must_use]
    pub fn modulus(mut self, m: i64) -> Self {
        self.modulus = Some(m);
        self
    }
    #[inline]
    #[must_use]
    pub fn multiplier(mut self, a: i64) -> Self {
        self.multiplier = Some(a);
        self
    }
    #[inline]
    #[must_use]
    pub fn seed(mut self, s: i64) -> Self {
        self.seed = Some(s);
        self
    }

    pub fn build(self) -> Result<GeneratorConfig, SampleError> {
        GeneratorConfig::new(
            self.modulus.unwrap_or(DEFAULT_MODULUS),
            self.multiplier.unwrap_or(DEFAULT_MULTIPLIER),
            self.seed.unwrap_or(DEFAULT_SEED),
        )
    }
}

/// Immutable parameters handed to the histogram renderer.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub bins: usize,
    /// Value range covered by the bins; `None` means "fit the data".
    pub range: Option<(f64, f64)>,
    pub x_chars: usize,
    pub y_chars: usize,
}

impl PlotConfig {
    #[inline]
    #[must_use]
    pub fn builder(x_chars: usize, y_chars: usize) -> PlotConfigBuilder {
        PlotConfigBuilder::new(x_chars, y_chars)
    }
}

#[derive(Debug)]
pub struct PlotConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    subtitle: Option<String>,
    bins: Option<usize>,
    range: Option<(f64, f64)>,
}

impl PlotConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize) -> Self {
        Self {
            x_chars,
            y_chars,
            title: None,
            subtitle: None,
            bins: None,
            range: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn bins(mut self, n: usize) -> Self {
        self.bins = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.range = Some((*r.start(), *r.end()));
        self
    }

    pub fn build(self) -> Result<PlotConfig, ConfigError> {
        let bins = self.bins.ok_or(ConfigError::MissingField("bins"))?;
        if bins == 0 {
            return Err(ConfigError::ZeroBins);
        }
        if let Some((low, high)) = self.range {
            let valid = low.is_finite() && high.is_finite() && low < high;
            if !valid {
                return Err(ConfigError::InvalidRange { low, high });
            }
        }
        Ok(PlotConfig {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            bins,
            range: self.range,
            x_chars: self.x_chars,
            y_chars: self.y_chars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_example_parameters() {
        let cfg = GeneratorConfig::default();
        assert_eq!(
            (cfg.modulus(), cfg.multiplier(), cfg.seed()),
            (151, 7, 1)
        );
        assert_eq!(GeneratorConfig::builder().build(), Ok(cfg));
    }

    #[test]
    fn builder_rejects_small_modulus() {
        for m in [i64::MIN, -5, 0, 1] {
            assert_eq!(
                GeneratorConfig::builder().modulus(m).build(),
                Err(SampleError::InvalidModulus(m))
            );
        }
        assert!(GeneratorConfig::builder().modulus(2).build().is_ok());
    }

    #[test]
    fn seed_is_not_range_checked() {
        let cfg = GeneratorConfig::builder()
            .modulus(11)
            .seed(-40)
            .build()
            .unwrap();
        assert_eq!(cfg.seed(), -40);
    }

    #[test]
    fn plot_config_requires_bins() {
        assert_eq!(
            PlotConfig::builder(40, 10).build().unwrap_err(),
            ConfigError::MissingField("bins")
        );
        assert_eq!(
            PlotConfig::builder(40, 10).bins(0).build().unwrap_err(),
            ConfigError::ZeroBins
        );
    }

    #[test]
    fn plot_config_rejects_inverted_range() {
        let err = PlotConfig::builder(40, 10)
            .bins(4)
            .range(2.0..=1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidRange { low: 2.0, high: 1.0 });
    }
}
