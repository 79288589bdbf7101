//! Standard-state heat capacity, enthalpy and Gibbs energy of a species set from NASA7
//! polynomials, for any `Scalar`.
#![allow(non_snake_case)]
use crate::Kinetics::model_data::{GasKineticModel, NASA7, SurfaceKineticModel};
use crate::Utils::scalar::Scalar;
use crate::errors::{KineticsError, check_len};

/// species set whose thermodynamic potentials can be evaluated
pub trait SpeciesThermo {
    fn n_species(&self) -> usize;
    /// J/(kmol K)
    fn Runiv(&self) -> f64;
    fn nasa7(&self, i: usize) -> &NASA7;
}

impl SpeciesThermo for GasKineticModel {
    fn n_species(&self) -> usize {
        self.nSpec()
    }
    fn Runiv(&self) -> f64 {
        self.Runiv
    }
    fn nasa7(&self, i: usize) -> &NASA7 {
        &self.thermo[i]
    }
}

impl SpeciesThermo for SurfaceKineticModel {
    fn n_species(&self) -> usize {
        self.nSpec()
    }
    fn Runiv(&self) -> f64 {
        self.Runiv
    }
    fn nasa7(&self, i: usize) -> &NASA7 {
        &self.thermo[i]
    }
}

/// Cp/R
pub fn Cp_R<V: Scalar>(t: V, a: &[f64; 7]) -> V {
    (((t * a[4] + a[3]) * t + a[2]) * t + a[1]) * t + a[0]
}

/// H/(RT)
pub fn H_RT<V: Scalar>(t: V, a: &[f64; 7]) -> V {
    (((t * (a[4] / 5.0) + a[3] / 4.0) * t + a[2] / 3.0) * t + a[1] / 2.0) * t
        + a[0]
        + t.recip() * a[5]
}

/// S/R
pub fn S_R<V: Scalar>(t: V, a: &[f64; 7]) -> V {
    t.ln() * a[0] + (((t * (a[4] / 4.0) + a[3] / 3.0) * t + a[2] / 2.0) * t + a[1]) * t + a[6]
}

/// G/(RT) = H/(RT) - S/R, written out so the polynomial is evaluated once
pub fn G_RT<V: Scalar>(t: V, a: &[f64; 7]) -> V {
    (V::from(1.0) - t.ln()) * a[0]
        - (((t * (a[4] / 20.0) + a[3] / 12.0) * t + a[2] / 6.0) * t + a[1] / 2.0) * t
        + t.recip() * a[5]
        - V::from(a[6])
}

/// fills, for every species of `model`:
/// - `gk`: dimensionless standard Gibbs energy +G/(RT) = H/(RT) - S/R, with no pressure or
///   ln T term. Consumers expecting -G/(RT) must flip the sign
///   (`KForwardReverseSurface` uses it as is)
/// - `hks`: enthalpy, J/kmol
/// - `cpks`: heat capacity, J/(kmol K)
pub fn GkSurfGas<V: Scalar, M: SpeciesThermo>(
    t: V,
    gk: &mut [V],
    hks: &mut [V],
    cpks: &mut [V],
    model: &M,
) -> Result<(), KineticsError> {
    let n = model.n_species();
    check_len("gk", n, gk.len())?;
    check_len("hks", n, hks.len())?;
    check_len("cpks", n, cpks.len())?;
    let R = model.Runiv();
    let rt = t * R;
    for i in 0..n {
        let a = model.nasa7(i).coeffs(t.value());
        cpks[i] = Cp_R(t, a) * R;
        hks[i] = H_RT(t, a) * rt;
        gk[i] = G_RT(t, a);
    }
    Ok(())
}
