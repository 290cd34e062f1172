//! Distance metrics and their names

use std::fmt;
use std::str::FromStr;

use crate::error::{DistanceError, DistanceResult};

/// Distance metric used by the sweep engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Straight-line distance, `sqrt(dx² + dy²)`
    #[default]
    Euclidean,
    /// Chebyshev distance, `max(|dx|, |dy|)`
    Chessboard,
    /// Manhattan distance, `|dx| + |dy|`
    Cityblock,
    /// Chamfer approximation of Euclidean distance:
    /// `|dx| + (√2 - 1)|dy|` when `|dx| > |dy|`, else `(√2 - 1)|dx| + |dy|`
    QuasiEuclidean,
}

/// Advisory condition detected while preparing or running a transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Input held values other than 0 and 1; every non-zero value was
    /// treated as foreground
    NonBinaryInput,
    /// A metric was selected by a deprecated abbreviation
    DeprecatedMetricAbbreviation {
        /// Name as given by the caller
        given: String,
        /// Metric it resolved to
        metric: Metric,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonBinaryInput => {
                write!(f, "input is not binary; non-zero values treated as foreground")
            }
            Self::DeprecatedMetricAbbreviation { given, metric } => write!(
                f,
                "metric abbreviation '{given}' is deprecated; use '{metric}' instead"
            ),
        }
    }
}

impl Metric {
    /// All metrics
    pub const ALL: [Metric; 4] = [
        Metric::Euclidean,
        Metric::Chessboard,
        Metric::Cityblock,
        Metric::QuasiEuclidean,
    ];

    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Chessboard => "chessboard",
            Self::Cityblock => "cityblock",
            Self::QuasiEuclidean => "quasi-euclidean",
        }
    }

    /// Resolve a metric name, case-insensitively
    ///
    /// Besides the canonical names, `quasi_euclidean` and the deprecated
    /// abbreviations `e`, `ch`, `ci` and `q` are accepted. An abbreviation
    /// also yields a [`Warning::DeprecatedMetricAbbreviation`].
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::InvalidMetric`] for unknown names.
    pub fn resolve(name: &str) -> DistanceResult<(Self, Option<Warning>)> {
        let lower = name.trim().to_ascii_lowercase();
        let (metric, abbreviated) = match lower.as_str() {
            "euclidean" => (Self::Euclidean, false),
            "chessboard" => (Self::Chessboard, false),
            "cityblock" => (Self::Cityblock, false),
            "quasi-euclidean" | "quasi_euclidean" => (Self::QuasiEuclidean, false),
            "e" => (Self::Euclidean, true),
            "ch" => (Self::Chessboard, true),
            "ci" => (Self::Cityblock, true),
            "q" => (Self::QuasiEuclidean, true),
            _ => return Err(DistanceError::InvalidMetric(name.to_string())),
        };

        let warning = abbreviated.then(|| Warning::DeprecatedMetricAbbreviation {
            given: name.to_string(),
            metric,
        });
        if let Some(warning) = &warning {
            log::warn!("{warning}");
        }
        Ok((metric, warning))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).map(|(metric, _)| metric)
    }
}
