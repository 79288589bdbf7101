#![allow(non_snake_case)]
use crate::Kinetics::model_data::GasKineticModel;
use crate::Utils::scalar::Scalar;
use crate::errors::{KineticsError, check_len};

/// gas phase molar concentrations from mass fractions, kmol/m3:
/// concX[i] = density * Yk[i] / sMass[i]
///
/// The density already carries the equation of state, so `t` and `p` only keep the
/// signature the same as the other evaluators.
pub fn MolarConcentrations<V: Scalar>(
    _t: V,
    _p: V,
    density: V,
    Yk: &[V],
    concX: &mut [V],
    kmcd: &GasKineticModel,
) -> Result<(), KineticsError> {
    check_len("Yk", kmcd.nSpec(), Yk.len())?;
    check_len("concX", kmcd.nSpec(), concX.len())?;
    for ((c, &y), &mass) in concX.iter_mut().zip(Yk.iter()).zip(kmcd.sMass.iter()) {
        *c = density * y / mass;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::model_data::NASA7;
    use crate::Thermodynamics::mixture_density::RhoMixMs;
    use approx::assert_relative_eq;

    #[test]
    fn test_concentrations_sum_to_ideal_gas_total() {
        let kmcd = GasKineticModel::new(
            vec!["H2".to_string(), "O2".to_string()],
            vec![2.016, 31.998],
            vec![NASA7::single_range(300.0, 3000.0, [3.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]); 2],
        )
        .unwrap();
        let (t, p) = (1000.0, 101325.0);
        let Yk = [0.5, 0.5];
        let density = RhoMixMs(t, p, &Yk, &kmcd).unwrap();
        let mut concX = [0.0; 2];
        MolarConcentrations(t, p, density, &Yk, &mut concX, &kmcd).unwrap();
        assert_relative_eq!(concX[0], density * 0.5 / 2.016, max_relative = 1e-15);
        // total kmol/m3 = p/(R T)
        assert_relative_eq!(concX[0] + concX[1], p / (kmcd.Runiv * t), max_relative = 1e-13);
    }

    #[test]
    fn test_output_length_is_checked() {
        let kmcd = GasKineticModel::new(
            vec!["H2".to_string()],
            vec![2.016],
            vec![NASA7::single_range(300.0, 3000.0, [3.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])],
        )
        .unwrap();
        let mut concX = [0.0; 2];
        let err = MolarConcentrations(1000.0, 1e5, 1.0, &[1.0], &mut concX, &kmcd);
        assert!(matches!(err, Err(KineticsError::LengthMismatch { what: "concX", .. })));
    }
}
