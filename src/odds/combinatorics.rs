use super::Evaluator;

/// Number of ways to choose `k` of `n` objects, as a float.
///
/// Returns 0 when `k < 0` or `n < k`. The coefficient is built exactly in
/// integer arithmetic and rounded once on conversion.
pub fn binomial_coeff(n: i32, k: i32) -> f64 {
    if k < 0 || n < k {
        return 0.0;
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;

    let mut exact: u128 = 1;
    for i in 1..=k {
        // C(n-k+i, i) = C(n-k+i-1, i-1) * (n-k+i) / i, always divisible
        match exact.checked_mul(n - k + i) {
            Some(product) => exact = product / i,
            None => return binomial_coeff_float(n, k),
        }
    }
    exact as f64
}

// Only reached far outside a 60 card deck.
fn binomial_coeff_float(n: u128, k: u128) -> f64 {
    (1..=k).fold(1.0, |acc, i| acc * (n - k + i) as f64 / i as f64)
}

impl Evaluator {
    /// Hypergeometric probability of exactly `k` successes when drawing `n`
    /// from a population of `big_n` holding `big_k` successes.
    ///
    /// Returns 0 when the sample is larger than the population. Memoized on
    /// the exact argument tuple.
    pub fn hypogeo(&mut self, big_n: i32, n: i32, big_k: i32, k: i32) -> f64 {
        let key = (big_n, n, big_k, k);
        if let Some(&p) = self.hypogeo.get(&key) {
            return p;
        }
        let p = if n > big_n || n < 0 {
            0.0
        } else {
            (binomial_coeff(big_k, k) * binomial_coeff(big_n - big_k, n - k)) / binomial_coeff(big_n, n)
        };
        self.hypogeo.insert(key, p);
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_guards() {
        assert_eq!(binomial_coeff(5, -1), 0.0);
        assert_eq!(binomial_coeff(3, 4), 0.0);
        assert_eq!(binomial_coeff(-2, 1), 0.0);
        for n in 0..=60 {
            assert_eq!(binomial_coeff(n, 0), 1.0);
        }
    }

    #[test]
    fn test_binomial_values() {
        assert_eq!(binomial_coeff(5, 2), 10.0);
        assert_eq!(binomial_coeff(60, 7), 386_206_920.0);
        assert_eq!(binomial_coeff(60, 30), 118_264_581_564_861_424.0);
        assert_eq!(binomial_coeff(60, 30), 1.1826458156486142e17);
    }

    #[test]
    fn test_hypogeo_sums_to_one() {
        let mut eval = Evaluator::new();
        for &(big_n, n, big_k) in &[(60, 7, 23), (53, 4, 21), (10, 3, 10), (60, 0, 23), (4, 4, 2)] {
            let lo = 0.max(n - (big_n - big_k));
            let hi = n.min(big_k);
            let total: f64 = (lo..=hi).map(|k| eval.hypogeo(big_n, n, big_k, k)).sum();
            assert!((total - 1.0).abs() < 1e-12, "({big_n}, {n}, {big_k}) summed to {total}");
        }
    }

    #[test]
    fn test_hypogeo_sample_larger_than_population() {
        let mut eval = Evaluator::new();
        assert_eq!(eval.hypogeo(3, 4, 2, 1), 0.0);
        assert_eq!(eval.hypogeo(-5, 4, -6, 0), 0.0);
    }

    #[test]
    fn test_hypogeo_opening_hand() {
        let mut eval = Evaluator::new();
        let p = eval.hypogeo(60, 7, 23, 2);
        assert!((p - 0.28555143703794844).abs() < 1e-15);
    }

    #[test]
    fn test_hypogeo_cache_not_normalized() {
        let mut eval = Evaluator::new();
        eval.hypogeo(60, 7, 23, 2);
        eval.hypogeo(60, 23, 7, 2);
        assert_eq!(eval.hypogeo.len(), 2);
    }
}
