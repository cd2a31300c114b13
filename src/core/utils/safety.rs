//! Numeric guards for values coming from the host
//!
//! Sliders, JSON and JS callers can all hand us NaN or infinity. Everything
//! that feeds the integrator passes through these first.
//!
//! Usage:
//! ```rust
//! use tidewater_engine::finite_or;
//!
//! let mass = f32::NAN;
//! assert_eq!(finite_or!(mass, 100.0), 100.0);
//! assert_eq!(finite_or!(42.0_f32, 100.0), 42.0);
//! ```

/// Replace a non-finite float with a fallback
#[macro_export]
macro_rules! finite_or {
    ($value:expr, $fallback:expr) => {{
        let v = $value;
        if v.is_finite() { v } else { $fallback }
    }};
}

/// Sign that treats zero as zero (`f32::signum(0.0)` is `1.0`)
#[inline(always)]
pub fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamp into `[min, max]`, falling back to `fallback` for NaN/inf
#[inline]
pub fn clamp_finite(v: f32, min: f32, max: f32, fallback: f32) -> f32 {
    finite_or!(v, fallback).clamp(min, max)
}
