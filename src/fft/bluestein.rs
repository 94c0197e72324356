use alloc::{vec, vec::Vec};

use super::{
    Complex32, Radix,
    cooley_tukey::{cooley_tukey_radix2, stage_twiddles},
    twiddle,
};

/// Bluestein's chirp-z algorithm for arbitrary lengths.
///
/// Uses `jk = (j² + k² - (k - j)²) / 2` to rewrite the length-N DFT as a circular
/// convolution with the chirp `exp(iπn²/N)`, evaluated with power-of-two FFTs of
/// length `M >= 2N - 1`.
pub(crate) struct Bluestein {
    len: usize,
    /// `chirp[n] = exp(-iπn²/N)`.
    chirp: Vec<Complex32>,
    /// Spectrum of the conjugate chirp laid out circularly over `M` points, pre-scaled by `1/M`.
    kernel_spectrum: Vec<Complex32>,
    /// Twiddles of the inner radix-2 FFT of length `M`.
    inner_twiddles: Vec<Complex32>,
}

impl Bluestein {
    pub(crate) fn new(len: usize) -> Self {
        assert!(len > 1);

        let inner_len = (2 * len - 1).next_power_of_two();
        let inner_twiddles =
            stage_twiddles(&vec![Radix::Factor2; inner_len.trailing_zeros() as usize]);

        // n² is reduced modulo 2N before forming the angle, which keeps the chirp exact
        // for large N.
        let period = 2 * len as u128;
        let chirp: Vec<Complex32> = (0..len)
            .map(|n| twiddle(((n as u128 * n as u128) % period) as usize, 2 * len))
            .collect();

        let mut kernel_spectrum = vec![Complex32::zero(); inner_len];
        kernel_spectrum[0] = chirp[0].conj();
        for n in 1..len {
            let value = chirp[n].conj();
            kernel_spectrum[n] = value;
            kernel_spectrum[inner_len - n] = value;
        }
        cooley_tukey_radix2(&mut kernel_spectrum, &inner_twiddles);

        // The inverse FFT below is unnormalized; fold the 1/M into the kernel.
        let scale = 1.0 / inner_len as f32;
        kernel_spectrum
            .iter_mut()
            .for_each(|value| *value = value.scale(scale));

        Self {
            len,
            chirp,
            kernel_spectrum,
            inner_twiddles,
        }
    }

    /// Length of the padded inner transform.
    pub(crate) fn inner_len(&self) -> usize {
        self.kernel_spectrum.len()
    }

    /// Computes the DFT of `data` in place. `scratch` must hold at least [`Self::inner_len`] values.
    pub(crate) fn process(&self, data: &mut [Complex32], scratch: &mut [Complex32]) {
        assert_eq!(data.len(), self.len);
        let buffer = &mut scratch[..self.inner_len()];

        buffer.fill(Complex32::zero());
        for ((slot, x), w) in buffer.iter_mut().zip(data.iter()).zip(&self.chirp) {
            *slot = x.mul(w);
        }

        cooley_tukey_radix2(buffer, &self.inner_twiddles);
        for (value, kernel) in buffer.iter_mut().zip(&self.kernel_spectrum) {
            *value = value.mul(kernel);
        }

        // Inverse transform as conj(FFT(conj(x))).
        buffer.iter_mut().for_each(|value| *value = value.conj());
        cooley_tukey_radix2(buffer, &self.inner_twiddles);

        for ((out, value), w) in data.iter_mut().zip(buffer.iter()).zip(&self.chirp) {
            *out = value.conj().mul(w);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;
    use crate::fft::tests::{assert_spectra_close, naive_dft, test_signal};

    #[test]
    fn test_bluestein_vs_naive_dft() {
        for len in [2usize, 3, 11, 67, 97, 101, 127, 131, 257, 509] {
            let input = test_signal(len);
            let bluestein = Bluestein::new(len);
            let mut scratch = vec![Complex32::zero(); bluestein.inner_len()];

            let mut data = input.clone();
            bluestein.process(&mut data, &mut scratch);

            assert_spectra_close(&data, &naive_dft(&input), &format!("bluestein size {len}"));
        }
    }

    #[test]
    fn test_inner_len_is_power_of_two_covering_convolution() {
        for len in [2usize, 67, 100, 1009] {
            let bluestein = Bluestein::new(len);
            assert!(bluestein.inner_len().is_power_of_two());
            assert!(bluestein.inner_len() >= 2 * len - 1);
        }
    }
}
