use alloc::vec::Vec;

use crate::SpectrumError;

/// Reduces an interleaved complex spectrum `[re0, im0, re1, im1, ...]` to one magnitude per bin.
pub fn magnitudes(interleaved: &[f32]) -> Result<Vec<f32>, SpectrumError> {
    if interleaved.len() % 2 != 0 {
        return Err(SpectrumError::OddInterleavedLength(interleaved.len()));
    }

    Ok(interleaved
        .chunks_exact(2)
        .map(|pair| modulus(pair[0], pair[1]))
        .collect())
}

#[inline(always)]
fn modulus(re: f32, im: f32) -> f32 {
    #[cfg(not(feature = "no_std"))]
    {
        (re * re + im * im).sqrt()
    }
    #[cfg(feature = "no_std")]
    {
        libm::sqrtf(re * re + im * im)
    }
}

/// Returns the bin with the largest magnitude and its value.
///
/// Ties resolve to the lowest bin. NaN bins never win. Returns `None` when there is no
/// comparable bin.
pub fn peak_bin(magnitudes: &[f32]) -> Option<(usize, f32)> {
    magnitudes
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, value)| !value.is_nan())
        .fold(None, |best, (bin, value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((bin, value)),
        })
}
