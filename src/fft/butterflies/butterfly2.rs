use crate::fft::Complex32;

/// Processes a single radix-2 butterfly stage across all columns.
///
/// `data` holds two rows of `num_columns` values. Column `idx` reads its twiddle from
/// `stage_twiddles[idx]`.
#[inline(always)]
pub(crate) fn butterfly_2(
    data: &mut [Complex32],
    stage_twiddles: &[Complex32],
    num_columns: usize,
) {
    let (lower, upper) = data.split_at_mut(num_columns);

    for ((u, d), w) in lower
        .iter_mut()
        .zip(upper.iter_mut())
        .zip(&stage_twiddles[..num_columns])
    {
        let t = d.mul(w);
        let a = *u;
        *u = a.add(&t);
        *d = a.sub(&t);
    }
}
