#![allow(non_snake_case)]
use crate::Kinetics::model_data::{Phase, StoichTerm, SurfaceKineticModel};
use crate::Utils::scalar::Scalar;
use crate::errors::{KineticsError, check_len};

/// product of concentrations raised to their stoichiometric coefficients; returns the
/// product and the number of terms walked
fn concentration_product<V: Scalar>(
    terms: &[StoichTerm],
    concX: &[V],
    concXSurf: &[V],
) -> (V, usize) {
    let mut product = V::from(1.0);
    for term in terms {
        let c = match term.phase {
            Phase::Gas => concX[term.species],
            Phase::Surface => concXSurf[term.species],
        };
        product = product * c.powi(term.coefficient as i32);
    }
    (product, terms.len())
}

/// forward and reverse rates of progress of the surface reactions, mol/(cm2 s)
///    kfor, krev : rate constants (nReacSurf)
///    concX : gas concentrations, mol/cm3 (nSpec)
///    concXSurf : surface concentrations, mol/cm2 (nSpecSurf)
///    iter : workspace (2 nReacSurf); after the call iter[2r] and iter[2r+1] hold the
///           number of reactant and product terms of reaction r
///
/// A reaction with no products has a zero reverse rate whatever krev holds.
pub fn RateOfProgressSurface<V: Scalar>(
    _t: V,
    kfor: &[V],
    krev: &[V],
    concX: &[V],
    concXSurf: &[V],
    ropFor: &mut [V],
    ropRev: &mut [V],
    iter: &mut [usize],
    kmcdSurf: &SurfaceKineticModel,
) -> Result<(), KineticsError> {
    let nReac = kmcdSurf.nReac();
    check_len("kfor", nReac, kfor.len())?;
    check_len("krev", nReac, krev.len())?;
    check_len("concX", kmcdSurf.nSpecGas, concX.len())?;
    check_len("concXSurf", kmcdSurf.nSpec(), concXSurf.len())?;
    check_len("ropFor", nReac, ropFor.len())?;
    check_len("ropRev", nReac, ropRev.len())?;
    check_len("iter", 2 * nReac, iter.len())?;
    for (r, reaction) in kmcdSurf.reactions.iter().enumerate() {
        let (forward, n_reactants) =
            concentration_product(&reaction.reactants, concX, concXSurf);
        let (reverse, n_products) = concentration_product(&reaction.products, concX, concXSurf);
        iter[2 * r] = n_reactants;
        iter[2 * r + 1] = n_products;
        ropFor[r] = kfor[r] * forward;
        ropRev[r] = if n_products == 0 {
            V::from(0.0)
        } else {
            krev[r] * reverse
        };
    }
    Ok(())
}
