use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Decimal places kept in every reported emission figure.
pub const REPORT_DECIMALS: usize = 2;

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Negative zero passes.
pub fn ensure_non_negative(v: Real, what: &'static str) -> CoreResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        Err(CoreError::Negative { what, value: v })
    } else {
        Ok(v)
    }
}

/// Round to `decimals` places, correctly rounded against the exact binary
/// value with ties to even.
///
/// `(v * 100.0).round() / 100.0` is not equivalent: the scaling step can
/// push a value sitting just below a half-way point onto it. Float
/// formatting works on the exact value, so it is used as the rounding step.
pub fn round_dp(v: Real, decimals: usize) -> Real {
    if !v.is_finite() {
        return v;
    }
    format!("{v:.decimals$}").parse().unwrap_or(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_rejects_negative_and_infinite() {
        assert!(matches!(
            ensure_non_negative(-0.5, "distance"),
            Err(CoreError::Negative { .. })
        ));
        assert!(matches!(
            ensure_non_negative(Real::INFINITY, "distance"),
            Err(CoreError::NonFinite { .. })
        ));
        assert_eq!(ensure_non_negative(0.0, "distance").unwrap(), 0.0);
        assert_eq!(ensure_non_negative(-0.0, "distance").unwrap(), 0.0);
    }

    #[test]
    fn round_dp_half_way_points() {
        // 0.005 is stored slightly above the half-way point
        assert_eq!(round_dp(0.005, 2), 0.01);
        // 0.015 and 0.045 are stored slightly below it
        assert_eq!(round_dp(0.015, 2), 0.01);
        assert_eq!(round_dp(0.045, 2), 0.04);
        assert_eq!(round_dp(2.675, 2), 2.67);
        // exact ties go to even
        assert_eq!(round_dp(0.125, 2), 0.12);
        assert_eq!(round_dp(0.375, 2), 0.38);
    }

    #[test]
    fn round_dp_plain_values() {
        assert_eq!(round_dp(0.511, 2), 0.51);
        assert_eq!(round_dp(0.9125, 2), 0.91);
        assert_eq!(round_dp(0.0, 2), 0.0);
        assert_eq!(round_dp(1234.5678, 0), 1235.0);
        assert!(round_dp(Real::NAN, 2).is_nan());
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn round_dp_moves_at_most_half_a_step(v in 0.0_f64..1.0e4) {
                let r = round_dp(v, 2);
                prop_assert!((r - v).abs() <= 0.005 + 1e-9);
                prop_assert_eq!(round_dp(r, 2), r);
            }
        }
    }
}
