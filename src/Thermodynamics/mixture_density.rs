#![allow(non_snake_case)]
use crate::Kinetics::model_data::GasKineticModel;
use crate::Utils::diagnostics;
use crate::Utils::scalar::Scalar;
use crate::errors::{KineticsError, check_len};

/// Mixture density from the ideal gas equation of state
///    t : temperature, K
///    p : pressure, Pa
///    Ys : mass fractions
/// returns density, kg/m3
///
/// p / (Runiv * sum(Ys/sMass) * t). A zero sum or zero temperature gives Inf/NaN, nothing
/// is checked besides the length of `Ys`.
pub fn RhoMixMs<V: Scalar>(
    t: V,
    p: V,
    Ys: &[V],
    kmcd: &GasKineticModel,
) -> Result<V, KineticsError> {
    check_len("Ys", kmcd.nSpec(), Ys.len())?;
    let Ysum = Ys
        .iter()
        .zip(kmcd.sMass.iter())
        .fold(V::from(0.0), |acc, (&y, &mass)| acc + y / mass);
    let rho = p / (Ysum * kmcd.Runiv * t);
    diagnostics::dump_rho_mix_ms(t, p, Ys, kmcd, rho);
    Ok(rho)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::model_data::{NASA7, RUNIV};
    use approx::assert_relative_eq;
    use num_dual::Dual64;

    fn model(masses: Vec<f64>) -> GasKineticModel {
        let n = masses.len();
        GasKineticModel::new(
            (0..n).map(|i| format!("S{}", i)).collect(),
            masses,
            vec![NASA7::single_range(300.0, 3000.0, [3.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]); n],
        )
        .unwrap()
    }

    #[test]
    fn test_pure_species_is_ideal_gas_law() {
        let (T, P, M) = (1000.0, 101325.0, 28.0134);
        let rho = RhoMixMs(T, P, &[1.0], &model(vec![M])).unwrap();
        assert_relative_eq!(rho, P * M / (RUNIV * T), max_relative = 1e-14);
    }

    #[test]
    fn test_mixture_uses_mean_molar_mass() {
        let kmcd = model(vec![2.016, 31.998]);
        let Ys = [0.5, 0.5];
        let mean = 1.0 / (0.5 / 2.016 + 0.5 / 31.998);
        let rho = RhoMixMs(1000.0, 101325.0, &Ys, &kmcd).unwrap();
        assert_relative_eq!(rho, 101325.0 * mean / (RUNIV * 1000.0), max_relative = 1e-14);
    }

    #[test]
    fn test_degenerate_inputs_are_not_errors() {
        let kmcd = model(vec![2.016]);
        assert!(RhoMixMs(1000.0_f64, 101325.0, &[0.0], &kmcd).unwrap().is_infinite());
        assert!(RhoMixMs(0.0_f64, 101325.0, &[1.0], &kmcd).unwrap().is_infinite());
        assert!(RhoMixMs(0.0_f64, 0.0, &[1.0], &kmcd).unwrap().is_nan());
    }

    #[test]
    fn test_length_mismatch() {
        let err = RhoMixMs(1000.0, 101325.0, &[0.5, 0.5], &model(vec![2.016]));
        assert!(matches!(
            err,
            Err(KineticsError::LengthMismatch { what: "Ys", expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_temperature_derivative() {
        // d rho / dT = -rho / T
        let kmcd = model(vec![18.015]);
        let t = Dual64::new(900.0, 1.0);
        let rho = RhoMixMs(t, Dual64::from(2e5), &[Dual64::from(1.0)], &kmcd).unwrap();
        assert_relative_eq!(rho.eps, -rho.re / 900.0, max_relative = 1e-12);
    }
}
