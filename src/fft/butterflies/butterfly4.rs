use crate::fft::Complex32;

/// Processes a single radix-4 butterfly stage across all columns.
///
/// Implements the radix-4 DFT butterfly:
/// Y[0] = x[0] + x[1]*W1 + x[2]*W2 + x[3]*W3
/// Y[1] = x[0] - j*x[1]*W1 - x[2]*W2 + j*x[3]*W3
/// Y[2] = x[0] - x[1]*W1 + x[2]*W2 - x[3]*W3
/// Y[3] = x[0] + j*x[1]*W1 - x[2]*W2 - j*x[3]*W3
///
/// Where W1, W2, W3 are the stage-specific twiddle factors, stored as
/// `stage_twiddles[idx * 3..idx * 3 + 3]` for column `idx`.
#[inline(always)]
pub(crate) fn butterfly_4(
    data: &mut [Complex32],
    stage_twiddles: &[Complex32],
    num_columns: usize,
) {
    for (idx, w) in stage_twiddles[..num_columns * 3].chunks_exact(3).enumerate() {
        let i1 = idx + num_columns;
        let i2 = idx + 2 * num_columns;
        let i3 = idx + 3 * num_columns;

        let t0 = data[idx];
        let t1 = data[i1].mul(&w[0]);
        let t2 = data[i2].mul(&w[1]);
        let t3 = data[i3].mul(&w[2]);

        let u0 = t0.add(&t2);
        let u1 = t0.sub(&t2);
        let u2 = t1.add(&t3);
        // j * (t1 - t3)
        let u3 = t1.sub(&t3).rotate_90();

        data[idx] = u0.add(&u2);
        data[i1] = u1.sub(&u3);
        data[i2] = u0.sub(&u2);
        data[i3] = u1.add(&u3);
    }
}
