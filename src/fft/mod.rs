mod bluestein;
mod butterflies;
pub(crate) mod cooley_tukey;
mod direct;
pub(crate) mod planner;

use alloc::vec::Vec;

pub(crate) use planner::FftPlan;

/// Simple complex number struct
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub(crate) struct Complex32 {
    pub(crate) re: f32,
    pub(crate) im: f32,
}

impl Complex32 {
    #[inline(always)]
    pub(crate) const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    #[inline(always)]
    pub(crate) const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    #[inline(always)]
    pub(crate) const fn conj(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline(always)]
    pub(crate) const fn add(&self, o: &Self) -> Self {
        Self {
            re: self.re + o.re,
            im: self.im + o.im,
        }
    }

    #[inline(always)]
    pub(crate) const fn sub(&self, o: &Self) -> Self {
        Self {
            re: self.re - o.re,
            im: self.im - o.im,
        }
    }

    #[inline(always)]
    pub(crate) const fn mul(&self, o: &Self) -> Self {
        Self {
            re: self.re * o.re - self.im * o.im,
            im: self.re * o.im + self.im * o.re,
        }
    }

    #[inline(always)]
    pub(crate) const fn scale(&self, f: f32) -> Self {
        Self {
            re: self.re * f,
            im: self.im * f,
        }
    }

    /// Multiplies by `i`.
    #[inline(always)]
    pub(crate) const fn rotate_90(&self) -> Self {
        Self {
            re: -self.im,
            im: self.re,
        }
    }
}

/// Radix factors supported for mixed-radix FFT decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Radix {
    /// Radix-2
    Factor2,
    /// Radix-3
    Factor3,
    /// Radix-4
    Factor4,
    /// Radix-5
    Factor5,
    /// Radix-7
    Factor7,
}

impl Radix {
    /// Returns the radix size.
    pub(crate) const fn radix(&self) -> usize {
        match self {
            Radix::Factor2 => 2,
            Radix::Factor3 => 3,
            Radix::Factor4 => 4,
            Radix::Factor5 => 5,
            Radix::Factor7 => 7,
        }
    }
}

/// Returns the twiddle factor `exp(-2πi * k / n)`.
///
/// `k` is reduced modulo `n` and the angle is evaluated in double precision, so large
/// transform sizes keep the accuracy of the direct DFT formula.
pub(crate) fn twiddle(k: usize, n: usize) -> Complex32 {
    debug_assert!(n > 0);
    let angle = -2.0 * core::f64::consts::PI * (k % n) as f64 / n as f64;
    #[cfg(not(feature = "no_std"))]
    let (sin, cos) = angle.sin_cos();
    #[cfg(feature = "no_std")]
    let (sin, cos) = libm::sincos(angle);
    Complex32::new(cos as f32, sin as f32)
}

/// Forward DFT of a real sequence. Returns one complex bin per input sample.
pub(crate) fn forward_real(samples: &[f32]) -> Vec<Complex32> {
    let plan = FftPlan::new(samples.len());
    let mut buffer: Vec<Complex32> = samples
        .iter()
        .map(|&value| Complex32::new(value, 0.0))
        .collect();
    plan.process(&mut buffer);
    buffer
}
