//! Pearson correlation matrix over metric columns

use crate::core_types::record::Metric;
use crate::table::HotspotTable;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Square matrix of pairwise Pearson coefficients
///
/// Entries involving a constant column (or fewer than two rows) are NaN,
/// matching what a dataframe `corr()` reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    metrics: Vec<Metric>,
    values: DMatrix<f64>,
}

impl CorrelationMatrix {
    /// Column order of the matrix
    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Raw matrix, rows and columns in `metrics()` order
    #[must_use]
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Coefficient between two metrics, `None` if either is not in the matrix
    #[must_use]
    pub fn get(&self, a: Metric, b: Metric) -> Option<f64> {
        let i = self.metrics.iter().position(|m| *m == a)?;
        let j = self.metrics.iter().position(|m| *m == b)?;
        Some(self.values[(i, j)])
    }

    /// Off-diagonal pair with the largest absolute coefficient
    #[must_use]
    pub fn strongest_pair(&self) -> Option<(Metric, Metric, f64)> {
        let k = self.metrics.len();
        let mut best: Option<(Metric, Metric, f64)> = None;
        for i in 0..k {
            for j in (i + 1)..k {
                let r = self.values[(i, j)];
                if r.is_nan() {
                    continue;
                }
                if best.is_none_or(|(_, _, b)| r.abs() > b.abs()) {
                    best = Some((self.metrics[i], self.metrics[j], r));
                }
            }
        }
        best
    }
}

impl HotspotTable {
    /// Pearson correlation between every pair of `metrics`
    #[must_use]
    pub fn correlation_matrix(&self, metrics: &[Metric]) -> CorrelationMatrix {
        let n = self.len();
        let k = metrics.len();
        let records = self.records();

        let mut centered = DMatrix::from_fn(n, k, |i, j| records[i].metric(metrics[j]));
        // Checked on raw values: centering a constant like 26.8 leaves rounding residue
        let constant: Vec<bool> = (0..k)
            .map(|j| {
                let column = centered.column(j);
                column.iter().all(|v| v.to_bits() == column[0].to_bits())
            })
            .collect();
        for j in 0..k {
            let mut column = centered.column_mut(j);
            let mean = column.mean();
            column.add_scalar_mut(-mean);
        }
        let covariance = centered.transpose() * &centered;

        // Upper triangle only, mirrored, so get(a, b) == get(b, a) bit for bit
        let values = DMatrix::from_fn(k, k, |row, col| {
            let (i, j) = (row.min(col), row.max(col));
            let denom = (covariance[(i, i)] * covariance[(j, j)]).sqrt();
            if n < 2 || constant[i] || constant[j] || denom == 0.0 {
                f64::NAN
            } else if i == j {
                1.0
            } else {
                (covariance[(i, j)] / denom).clamp(-1.0, 1.0)
            }
        });

        CorrelationMatrix {
            metrics: metrics.to_vec(),
            values,
        }
    }
}
