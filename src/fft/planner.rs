use alloc::{vec, vec::Vec};

use super::{
    Complex32, Radix,
    bluestein::Bluestein,
    cooley_tukey::{
        cooley_tukey_radix_n, cooley_tukey_radix2, digit_reversal_permutation, stage_twiddles,
    },
    direct::DirectDft,
};

/// Lengths without a {2, 3, 5, 7} factorization up to this size are evaluated directly.
/// Above it, Bluestein's O(N log N) rewrite wins.
const DIRECT_DFT_LIMIT: usize = 64;

/// Algorithm selected for one transform length.
pub(crate) enum Strategy {
    /// Lengths 0 and 1: the transform is the identity.
    Trivial,
    /// Powers of two: bit reversal followed by radix-2 stages.
    Radix2 { twiddles: Vec<Complex32> },
    /// Lengths that factor completely into the supported radices.
    MixedRadix {
        factors: Vec<Radix>,
        twiddles: Vec<Complex32>,
        permutation: Vec<usize>,
    },
    /// Short lengths with a prime factor above 7.
    Direct(DirectDft),
    /// Everything else.
    Bluestein(Bluestein),
}

impl Strategy {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Strategy::Trivial => "trivial",
            Strategy::Radix2 { .. } => "radix-2",
            Strategy::MixedRadix { .. } => "mixed-radix",
            Strategy::Direct(_) => "direct",
            Strategy::Bluestein(_) => "bluestein",
        }
    }
}

/// A forward FFT plan for one length.
///
/// Plans are cheap to build relative to a transform of the same size and are built per call;
/// nothing is cached between calls.
pub(crate) struct FftPlan {
    len: usize,
    strategy: Strategy,
}

impl FftPlan {
    /// Factorizes `len` once and picks the strategy for it.
    pub(crate) fn new(len: usize) -> Self {
        let strategy = if len <= 1 {
            Strategy::Trivial
        } else if len.is_power_of_two() {
            let factors = vec![Radix::Factor2; len.trailing_zeros() as usize];
            Strategy::Radix2 {
                twiddles: stage_twiddles(&factors),
            }
        } else {
            match factorize(len) {
                (factors, 1) => {
                    let factors = optimize_factors(factors);
                    Strategy::MixedRadix {
                        twiddles: stage_twiddles(&factors),
                        permutation: digit_reversal_permutation(&factors),
                        factors,
                    }
                }
                _ if len <= DIRECT_DFT_LIMIT => Strategy::Direct(DirectDft::new(len)),
                _ => Strategy::Bluestein(Bluestein::new(len)),
            }
        };

        tracing::debug!(len, strategy = strategy.name(), "planned FFT");

        Self { len, strategy }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Computes the forward DFT of `data` in place.
    pub(crate) fn process(&self, data: &mut [Complex32]) {
        assert_eq!(data.len(), self.len);

        match &self.strategy {
            Strategy::Trivial => {}
            Strategy::Radix2 { twiddles } => cooley_tukey_radix2(data, twiddles),
            Strategy::MixedRadix {
                factors,
                twiddles,
                permutation,
            } => {
                let mut scratch = vec![Complex32::zero(); self.len];
                cooley_tukey_radix_n(data, twiddles, factors, permutation, &mut scratch);
            }
            Strategy::Direct(direct) => {
                let input = data.to_vec();
                direct.process(&input, data);
            }
            Strategy::Bluestein(bluestein) => {
                let mut scratch = vec![Complex32::zero(); bluestein.inner_len()];
                bluestein.process(data, &mut scratch);
            }
        }
    }
}

/// Splits `len` into supported radix factors.
///
/// Returns the factors found and the remaining cofactor, which is 1 when `len` is
/// {2, 3, 5, 7}-smooth.
pub(crate) fn factorize(mut len: usize) -> (Vec<Radix>, usize) {
    const PRIMES: &[Radix] = &[Radix::Factor2, Radix::Factor3, Radix::Factor5, Radix::Factor7];

    let mut factors = Vec::new();
    if len == 0 {
        return (factors, 0);
    }

    for &prime in PRIMES {
        let p = prime.radix();
        while len % p == 0 {
            factors.push(prime);
            len /= p;
        }
    }

    (factors, len)
}

/// Merges pairs of radix-2 factors into radix-4 and orders the stages by ascending radix.
pub(crate) fn optimize_factors(factors: Vec<Radix>) -> Vec<Radix> {
    let twos = factors.iter().filter(|&&f| f == Radix::Factor2).count();

    let mut optimized: Vec<Radix> = factors
        .into_iter()
        .filter(|&f| f != Radix::Factor2)
        .collect();

    // Prefer Factor4 for efficiency: decompose into 4s and at most one 2.
    optimized.extend(core::iter::repeat_n(Radix::Factor4, twos / 2));
    if twos % 2 == 1 {
        optimized.push(Radix::Factor2);
    }

    optimized.sort_by_key(|f| f.radix());
    optimized
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;
    use crate::fft::tests::{assert_spectra_close, naive_dft, test_signal};

    #[test]
    fn test_factorize_smooth() {
        assert_eq!(
            factorize(588),
            (
                vec![
                    Radix::Factor2,
                    Radix::Factor2,
                    Radix::Factor3,
                    Radix::Factor7,
                    Radix::Factor7
                ],
                1
            )
        );
        assert_eq!(factorize(1), (vec![], 1));
    }

    #[test]
    fn test_factorize_with_cofactor() {
        assert_eq!(factorize(22), (vec![Radix::Factor2], 11));
        assert_eq!(factorize(1009), (vec![], 1009));
        assert_eq!(factorize(0), (vec![], 0));
    }

    #[test]
    fn test_optimize_factors_basic() {
        let output = optimize_factors(vec![Radix::Factor2, Radix::Factor2]);
        assert_eq!(output, vec![Radix::Factor4]);
    }

    #[test]
    fn test_optimize_factors_odd_twos() {
        let output = optimize_factors(vec![
            Radix::Factor2,
            Radix::Factor2,
            Radix::Factor2,
            Radix::Factor5,
            Radix::Factor3,
        ]);
        assert_eq!(
            output,
            vec![Radix::Factor2, Radix::Factor3, Radix::Factor4, Radix::Factor5]
        );
    }

    #[test]
    fn test_optimize_factors_preserves_product() {
        for len in [12usize, 48, 96, 360, 588, 1176, 2520] {
            let (factors, rest) = factorize(len);
            assert_eq!(rest, 1);
            let product: usize = optimize_factors(factors).iter().map(|f| f.radix()).product();
            assert_eq!(product, len);
        }
    }

    #[test]
    fn test_strategy_selection() {
        let cases: &[(usize, &str)] = &[
            (0, "trivial"),
            (1, "trivial"),
            (2, "radix-2"),
            (1024, "radix-2"),
            (6, "mixed-radix"),
            (1000, "mixed-radix"),
            (588, "mixed-radix"),
            (11, "direct"),
            (62, "direct"),
            (64 + 3, "bluestein"),
            (1009, "bluestein"),
            (2 * 1009, "bluestein"),
        ];

        for &(len, expected) in cases {
            let plan = FftPlan::new(len);
            assert_eq!(plan.len(), len);
            assert_eq!(plan.strategy().name(), expected, "length {len}");
        }
    }

    #[test]
    fn test_every_strategy_vs_naive_dft() {
        for len in [0usize, 1, 2, 16, 12, 45, 49, 210, 13, 59, 67, 94, 149] {
            let input = test_signal(len);
            let plan = FftPlan::new(len);

            let mut data = input.clone();
            plan.process(&mut data);

            assert_spectra_close(
                &data,
                &naive_dft(&input),
                &format!("{} size {len}", plan.strategy().name()),
            );
        }
    }

    #[test]
    fn test_all_lengths_up_to_128() {
        for len in 0..=128usize {
            let input = test_signal(len);
            let mut data = input.clone();
            FftPlan::new(len).process(&mut data);
            assert_spectra_close(&data, &naive_dft(&input), &format!("size {len}"));
        }
    }
}
