use crate::fft::Complex32;

/// Largest odd prime radix handled by [`butterfly_odd`].
const MAX_ODD_RADIX: usize = 7;

/// Powers `W_3^k` of the primitive 3rd root of unity `exp(-2πi/3)`.
pub(crate) const ROOTS_3: [Complex32; 3] = [
    Complex32::new(1.0, 0.0),
    Complex32::new(-0.5, -0.8660254),
    Complex32::new(-0.5, 0.8660254),
];

/// Powers `W_5^k` of the primitive 5th root of unity `exp(-2πi/5)`.
pub(crate) const ROOTS_5: [Complex32; 5] = [
    Complex32::new(1.0, 0.0),
    Complex32::new(0.309017, -0.95105654),
    Complex32::new(-0.809017, -0.58778524),
    Complex32::new(-0.809017, 0.58778524),
    Complex32::new(0.309017, 0.95105654),
];

/// Powers `W_7^k` of the primitive 7th root of unity `exp(-2πi/7)`.
pub(crate) const ROOTS_7: [Complex32; 7] = [
    Complex32::new(1.0, 0.0),
    Complex32::new(0.6234898, -0.7818315),
    Complex32::new(-0.22252093, -0.9749279),
    Complex32::new(-0.90096885, -0.43388373),
    Complex32::new(-0.90096885, 0.43388373),
    Complex32::new(-0.22252093, 0.9749279),
    Complex32::new(0.6234898, 0.7818315),
];

/// Processes a single radix-R butterfly stage for an odd prime R (3, 5 or 7).
///
/// Inputs `j` and `R - j` are folded into a sum and a difference so every output pair
/// `X[k]`, `X[R - k]` shares one set of real multiplications:
///
/// X[k]     = x0 + Σ cos(2πjk/R)·(t_j + t_{R-j}) + i·Σ s_jk·(t_j - t_{R-j})
/// X[R - k] = x0 + Σ cos(2πjk/R)·(t_j + t_{R-j}) - i·Σ s_jk·(t_j - t_{R-j})
///
/// with `s_jk = Im(W_R^{jk})` and `t_j` the input of row `j` times its stage twiddle.
/// Twiddles for column `idx` are stored as `stage_twiddles[idx * (R - 1)..(idx + 1) * (R - 1)]`.
#[inline(always)]
pub(crate) fn butterfly_odd(
    data: &mut [Complex32],
    stage_twiddles: &[Complex32],
    num_columns: usize,
    roots: &[Complex32],
) {
    let radix = roots.len();
    debug_assert!(radix % 2 == 1 && radix <= MAX_ODD_RADIX);
    let half = radix / 2;

    let mut sums = [Complex32::zero(); MAX_ODD_RADIX / 2];
    let mut diffs = [Complex32::zero(); MAX_ODD_RADIX / 2];

    for (idx, w) in stage_twiddles[..num_columns * (radix - 1)]
        .chunks_exact(radix - 1)
        .enumerate()
    {
        let x0 = data[idx];
        let mut dc = x0;

        for j in 1..=half {
            let a = data[idx + j * num_columns].mul(&w[j - 1]);
            let b = data[idx + (radix - j) * num_columns].mul(&w[radix - j - 1]);
            sums[j - 1] = a.add(&b);
            diffs[j - 1] = a.sub(&b);
            dc = dc.add(&sums[j - 1]);
        }

        data[idx] = dc;

        for k in 1..=half {
            let mut even = x0;
            let mut odd = Complex32::zero();
            for j in 1..=half {
                let root = roots[(j * k) % radix];
                even = even.add(&sums[j - 1].scale(root.re));
                odd = odd.add(&diffs[j - 1].scale(root.im));
            }
            let odd = odd.rotate_90();
            data[idx + k * num_columns] = even.add(&odd);
            data[idx + (radix - k) * num_columns] = even.sub(&odd);
        }
    }
}
