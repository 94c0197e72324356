use alloc::{vec, vec::Vec};

use super::{Complex32, Radix, butterflies::butterfly, twiddle};

/// Performs the bit-reversal permutation in place.
fn bit_reverse_radix2(data: &mut [Complex32], log2n: u32) {
    if log2n == 0 {
        return;
    }

    let shift = usize::BITS - log2n;
    for i in 0..data.len() {
        let j = i.reverse_bits() >> shift;
        if i < j {
            data.swap(i, j);
        }
    }
}

/// Computes the digit-reversal permutation for a mixed-radix DIT transform.
///
/// This is a generalization of bit reversal for mixed-radix FFTs. Returns indices where
/// `permuted[p] = input[permutation[p]]`. `factors[0]` is the radix of the first stage.
pub(crate) fn digit_reversal_permutation(factors: &[Radix]) -> Vec<usize> {
    let len: usize = factors.iter().map(|f| f.radix()).product();

    (0..len)
        .map(|position| {
            let mut remainder = position;
            let mut block = len;
            let mut stride = 1;
            let mut index = 0;

            // The last stage splits the data into `radix` contiguous blocks, block `j`
            // holding the sub-sequence `input[j], input[j + radix], ...`.
            for factor in factors.iter().rev() {
                let radix = factor.radix();
                block /= radix;
                index += (remainder / block) * stride;
                remainder %= block;
                stride *= radix;
            }

            index
        })
        .collect()
}

/// Pre-computes the twiddle factors of all DIT stages in stage order.
///
/// A stage with radix `r` and sub-transform size `m` (product of all earlier radices)
/// stores `W_{r*m}^(j*idx)` for every column `idx < m` and row `1 <= j < r`.
pub(crate) fn stage_twiddles(factors: &[Radix]) -> Vec<Complex32> {
    let mut twiddles = Vec::new();
    let mut stage_size = 1;

    for factor in factors {
        let radix = factor.radix();
        let num_columns = stage_size;
        stage_size *= radix;

        for idx in 0..num_columns {
            for j in 1..radix {
                twiddles.push(twiddle(j * idx, stage_size));
            }
        }
    }

    twiddles
}

/// Runs the butterfly stages over data that is already in digit-reversed order.
fn run_stages(data: &mut [Complex32], twiddles: &[Complex32], factors: &[Radix]) {
    let mut twiddle_offset = 0;
    let mut stage_size = 1;

    for &factor in factors {
        let radix = factor.radix();
        let num_columns = stage_size;
        stage_size *= radix;
        let num_twiddles = num_columns * (radix - 1);
        let stage_twiddles = &twiddles[twiddle_offset..twiddle_offset + num_twiddles];

        for group in data.chunks_exact_mut(stage_size) {
            butterfly(factor, group, stage_twiddles, num_columns);
        }

        twiddle_offset += num_twiddles;
    }
}

/// Performs an in-place pure radix-2 FFT using the Cooley-Tukey DIT algorithm.
///
/// `twiddles` must come from [`stage_twiddles`] with `log2(n)` radix-2 factors.
pub(crate) fn cooley_tukey_radix2(data: &mut [Complex32], twiddles: &[Complex32]) {
    let n = data.len();
    assert!(n.is_power_of_two());

    let log2n = n.trailing_zeros();
    bit_reverse_radix2(data, log2n);

    let factors = vec![Radix::Factor2; log2n as usize];
    run_stages(data, twiddles, &factors);
}

/// Performs a mixed-radix FFT using the Cooley-Tukey DIT algorithm.
///
/// # Arguments
/// * `data` - Input/output buffer
/// * `twiddles` - Twiddle factors from [`stage_twiddles`] for the same `factors`
/// * `factors` - Radix of each stage, first stage first
/// * `permutation` - Indices from [`digit_reversal_permutation`]
/// * `scratch` - Scratch buffer for the permutation (size >= data.len())
pub(crate) fn cooley_tukey_radix_n(
    data: &mut [Complex32],
    twiddles: &[Complex32],
    factors: &[Radix],
    permutation: &[usize],
    scratch: &mut [Complex32],
) {
    let n = data.len();
    debug_assert_eq!(n, permutation.len());

    let temp = &mut scratch[..n];
    for (slot, &source) in temp.iter_mut().zip(permutation) {
        *slot = data[source];
    }
    data.copy_from_slice(temp);

    run_stages(data, twiddles, factors);
}
