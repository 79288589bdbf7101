/// dimensionless Gibbs energy, enthalpy and heat capacity from NASA 7-coefficient polynomials
pub mod gibbs;
/// ideal gas mixture density from mass fractions
///
///  # Examples
/// ```
/// use KiSurf::Kinetics::model_data::{GasKineticModel, NASA7};
/// use KiSurf::Thermodynamics::mixture_density::RhoMixMs;
/// let flat = NASA7::single_range(300.0, 3000.0, [3.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// let air = GasKineticModel::new(vec!["N2".into()], vec![28.0134], vec![flat]).unwrap();
/// let rho = RhoMixMs(300.0_f64, 101325.0, &[1.0], &air).unwrap();
/// assert!((rho - 1.138).abs() < 1e-3);
/// ```
pub mod mixture_density;
