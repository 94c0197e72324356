use alloc::vec::Vec;

use super::{Complex32, twiddle};

/// Direct O(N²) evaluation of the DFT for short lengths without a usable factorization.
pub(crate) struct DirectDft {
    /// `roots[m] = W_N^m` for `m < N`.
    roots: Vec<Complex32>,
}

impl DirectDft {
    pub(crate) fn new(len: usize) -> Self {
        let roots = (0..len).map(|m| twiddle(m, len)).collect();
        Self { roots }
    }

    /// Evaluates `X[k] = Σ x[j] * W_N^(j*k)` into `output`.
    ///
    /// The exponent is reduced modulo N in integer arithmetic, so every term uses an
    /// exactly tabulated root.
    pub(crate) fn process(&self, input: &[Complex32], output: &mut [Complex32]) {
        let n = self.roots.len();
        assert_eq!(input.len(), n);
        assert_eq!(output.len(), n);

        for (k, bin) in output.iter_mut().enumerate() {
            let mut exponent = 0;
            let mut sum = Complex32::zero();
            for x in input {
                sum = sum.add(&x.mul(&self.roots[exponent]));
                exponent += k;
                if exponent >= n {
                    exponent -= n;
                }
            }
            *bin = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec};

    use super::*;
    use crate::fft::tests::{assert_spectra_close, naive_dft, test_signal};

    #[test]
    fn test_direct_vs_naive_dft() {
        for len in [1usize, 2, 11, 13, 23, 31, 61] {
            let input = test_signal(len);
            let mut output = vec![Complex32::zero(); len];

            DirectDft::new(len).process(&input, &mut output);

            assert_spectra_close(&output, &naive_dft(&input), &format!("direct size {len}"));
        }
    }

    #[test]
    fn test_direct_dc_signal() {
        let input = vec![Complex32::new(2.0, 0.0); 11];
        let mut output = vec![Complex32::zero(); 11];

        DirectDft::new(11).process(&input, &mut output);

        assert!((output[0].re - 22.0).abs() < 1e-5);
        for bin in &output[1..] {
            assert!(bin.re.abs() < 1e-5 && bin.im.abs() < 1e-5);
        }
    }
}
