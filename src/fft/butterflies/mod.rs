mod butterfly2;
mod butterfly4;
mod butterfly_odd;

pub(crate) use butterfly2::butterfly_2;
pub(crate) use butterfly4::butterfly_4;
use butterfly_odd::{ROOTS_3, ROOTS_5, ROOTS_7, butterfly_odd};

use super::{Complex32, Radix};

/// Runs one butterfly stage of the given radix over a group of `radix * num_columns` values.
#[inline(always)]
pub(crate) fn butterfly(
    radix: Radix,
    data: &mut [Complex32],
    stage_twiddles: &[Complex32],
    num_columns: usize,
) {
    match radix {
        Radix::Factor2 => butterfly_2(data, stage_twiddles, num_columns),
        Radix::Factor3 => butterfly_odd(data, stage_twiddles, num_columns, &ROOTS_3),
        Radix::Factor4 => butterfly_4(data, stage_twiddles, num_columns),
        Radix::Factor5 => butterfly_odd(data, stage_twiddles, num_columns, &ROOTS_5),
        Radix::Factor7 => butterfly_odd(data, stage_twiddles, num_columns, &ROOTS_7),
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec, vec::Vec};

    use super::*;
    use crate::fft::{
        tests::{assert_spectra_close, naive_dft, test_signal},
        twiddle,
    };

    const ALL_RADICES: &[Radix] = &[
        Radix::Factor2,
        Radix::Factor3,
        Radix::Factor4,
        Radix::Factor5,
        Radix::Factor7,
    ];

    #[test]
    fn test_single_butterfly_is_dft() {
        // One column with unit twiddles is a plain DFT of size `radix`.
        for &radix in ALL_RADICES {
            let r = radix.radix();
            let input = test_signal(r);
            let mut data = input.clone();
            let twiddles = vec![Complex32::new(1.0, 0.0); r - 1];

            butterfly(radix, &mut data, &twiddles, 1);

            assert_spectra_close(&data, &naive_dft(&input), &format!("{radix:?}"));
        }
    }

    #[test]
    fn test_butterfly_applies_twiddles_per_column() {
        // Columns are independent DFTs over rows, each row pre-multiplied by its twiddle.
        for &radix in ALL_RADICES {
            let r = radix.radix();
            for num_columns in [1usize, 2, 3, 5] {
                let input = test_signal(r * num_columns);
                let twiddles: Vec<Complex32> = (0..num_columns)
                    .flat_map(|idx| (1..r).map(move |j| twiddle(j * idx, r * num_columns)))
                    .collect();

                let mut data = input.clone();
                butterfly(radix, &mut data, &twiddles, num_columns);

                for idx in 0..num_columns {
                    let column: Vec<Complex32> = (0..r)
                        .map(|j| {
                            let x = input[idx + j * num_columns];
                            if j == 0 {
                                x
                            } else {
                                x.mul(&twiddles[idx * (r - 1) + j - 1])
                            }
                        })
                        .collect();
                    let expected = naive_dft(&column);
                    let actual: Vec<Complex32> =
                        (0..r).map(|k| data[idx + k * num_columns]).collect();

                    assert_spectra_close(
                        &actual,
                        &expected,
                        &format!("{radix:?} column {idx} of {num_columns}"),
                    );
                }
            }
        }
    }

    #[test]
    fn test_roots_are_unit_powers() {
        for roots in [&ROOTS_3[..], &ROOTS_5[..], &ROOTS_7[..]] {
            let n = roots.len();
            for (k, root) in roots.iter().enumerate() {
                let expected = twiddle(k, n);
                assert!(
                    (root.re - expected.re).abs() < 1e-6 && (root.im - expected.im).abs() < 1e-6,
                    "W_{n}^{k} = ({}, {}), expected ({}, {})",
                    root.re,
                    root.im,
                    expected.re,
                    expected.im
                );
            }
        }
    }
}
