//! Forward FFT and magnitude spectrum of real-valued time series of any length.
//!
//! The four entry points never panic and never report errors: malformed input yields an
//! empty vector. Use [`parse_samples`] and [`magnitudes`] directly when the reason matters.
#![cfg_attr(feature = "no_std", no_std)]

extern crate alloc;

mod error;
mod fft;
mod magnitude;
mod parser;

use alloc::vec::Vec;

pub use error::SpectrumError;
pub use magnitude::{magnitudes, peak_bin};
pub use parser::{ParseReport, RejectedLine, parse_samples, parse_samples_lenient};

/// Computes the FFT of a time series.
///
/// Returns `2 * N` values interleaved as `[re0, im0, re1, im1, ...]`, bin 0 first. The
/// transform is unnormalized, so bin 0 holds the sum of the samples.
pub fn compute_fft(time_series: Vec<f32>) -> Vec<f32> {
    fft::forward_real(&time_series)
        .iter()
        .flat_map(|bin| [bin.re, bin.im])
        .collect()
}

/// Computes the magnitude of each of the `N` frequency bins of a time series.
pub fn compute_fft_magnitude(time_series: Vec<f32>) -> Vec<f32> {
    let spectrum = compute_fft(time_series);
    // The spectrum is always an even number of values.
    magnitudes(&spectrum).unwrap_or_default()
}

/// Parses text with one number per line into a time series.
///
/// Blank lines are skipped. Any other line that is not a valid number makes the whole
/// result empty.
pub fn parse_time_series_from_string(file_content: &str) -> Vec<f32> {
    parse_samples(file_content).unwrap_or_default()
}

/// Parses text with one number per line and computes its magnitude spectrum.
///
/// Unparsable input yields an empty spectrum.
pub fn compute_fft_magnitude_from_string(file_content: &str) -> Vec<f32> {
    compute_fft_magnitude(parse_time_series_from_string(file_content))
}
