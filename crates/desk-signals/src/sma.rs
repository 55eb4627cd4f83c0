//! Simple moving average.

use desk_core::traits::Indicator;

/// Simple Moving Average (SMA).
///
/// Arithmetic mean of the trailing N values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Mean of the trailing `period` values, ending at the most recent
    /// point. None when fewer values are available.
    pub fn latest(&self, data: &[f64]) -> Option<f64> {
        self.validate_data(data).ok()?;
        let tail = &data[data.len() - self.period..];
        Some(tail.iter().sum::<f64>() / self.period as f64)
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![];
        }

        let mut result = Vec::with_capacity(data.len() - self.period + 1);
        let period_f64 = self.period as f64;

        let mut sum: f64 = data[..self.period].iter().sum();
        result.push(sum / period_f64);

        // Sliding window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result.push(sum / period_f64);
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let sma = Sma::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[1] - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[2] - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5);
        assert!(sma.calculate(&[1.0, 2.0, 3.0]).is_empty());
        assert!(sma.latest(&[1.0, 2.0, 3.0]).is_none());
        assert!(sma.validate_data(&[1.0, 2.0, 3.0]).is_err());
        assert!(sma.validate_data(&[1.0; 5]).is_ok());
    }

    #[test]
    fn test_latest_matches_calculate() {
        let sma = Sma::new(4);
        let data = vec![10.0, 11.0, 13.0, 12.0, 14.0, 15.0, 13.5];

        let latest = sma.latest(&data).unwrap();
        let full = sma.calculate(&data);
        assert!((latest - full.last().unwrap()).abs() < 1e-10);
    }

    #[test]
    fn test_latest_uses_trailing_window_only() {
        let sma = Sma::new(2);
        // Only the last two values matter
        let latest = sma.latest(&[100.0, 100.0, 1.0, 3.0]).unwrap();
        assert!((latest - 2.0).abs() < 1e-10);
    }
}
