//! # Surface Rate Constants
//!
//! Forward and reverse rate constants of every surface reaction, in mol, cm, s units.
//!
//! - Arrhenius: `kf = A T^b exp(-Ea_R/T)`
//! - sticking coefficient: `kf = gamma/Gamma^m T^b exp(-Ea_R/T) sqrt(R T/(2 pi W))`, where `m` is
//!   the surface reactant order, `Gamma` the site density and `W` the molar mass of the gas
//!   reactant. With the Motz-Wise correction `gamma` becomes `gamma/(1 - gamma/2)`
//! - reverse: `kr = kf/Kc` for reversible reactions, 0 otherwise, with
//!   `Kc = exp(-sum(nu gk)) (P_REF/RT)^dn_gas Gamma^dn_surf`: the standard concentration of a gas
//!   species is P_REF/RT in mol/cm3 and the one of a surface species is the site density in
//!   mol/cm2. `Kc` depends on temperature only
#![allow(non_snake_case)]
use crate::Kinetics::model_data::{
    GasKineticModel, P_REF, Phase, SurfaceKineticModel, SurfaceRate, SurfaceReaction,
};
use crate::Utils::scalar::Scalar;
use crate::errors::{KineticsError, check_len};
use std::f64::consts::PI;

/// gas constant, erg/(mol K)
const R_CGS: f64 = 8.314462618e7;

fn arrhenius<V: Scalar>(t: V, ln_t: V, A: f64, b: f64, Ea_R: f64) -> V {
    (ln_t * b - t.recip() * Ea_R).exp() * A
}

/// forward rate constant of one reaction
pub fn k_forward<V: Scalar>(
    t: V,
    reaction: &SurfaceReaction,
    kmcd: &GasKineticModel,
    kmcdSurf: &SurfaceKineticModel,
) -> V {
    let ln_t = t.ln();
    match reaction.rate {
        SurfaceRate::Arrhenius { A, b, Ea_R } => arrhenius(t, ln_t, A, b, Ea_R),
        SurfaceRate::Sticking {
            gamma,
            b,
            Ea_R,
            motz_wise,
        } => {
            let gamma = if motz_wise {
                gamma / (1.0 - 0.5 * gamma)
            } else {
                gamma
            };
            let m = reaction.surface_reactant_order() as i32;
            // validated by SurfaceKineticModel::new
            let W = reaction
                .sticking_species()
                .map_or(f64::NAN, |k| kmcd.sMass[k]);
            let prefactor = gamma / kmcdSurf.sitedensity.powi(m);
            arrhenius(t, ln_t, prefactor, b, Ea_R) * (t * (R_CGS / (2.0 * PI * W))).sqrt()
        }
    }
}

/// ln of the concentration-based equilibrium constant of one reaction
pub fn ln_Kc<V: Scalar>(
    ln_c0_gas: V,
    gk: &[V],
    Surf_gk: &[V],
    reaction: &SurfaceReaction,
    kmcdSurf: &SurfaceKineticModel,
) -> V {
    let mut dG = V::from(0.0);
    for (sign, terms) in [(-1.0, &reaction.reactants), (1.0, &reaction.products)] {
        for term in terms.iter() {
            let g = match term.phase {
                Phase::Gas => gk[term.species],
                Phase::Surface => Surf_gk[term.species],
            };
            dG = dG + g * (sign * term.coefficient as f64);
        }
    }
    let (dn_gas, dn_surf) = reaction.net_order();
    -dG + ln_c0_gas * dn_gas as f64 + kmcdSurf.sitedensity.ln() * dn_surf as f64
}

/// fills kfor and krev (length nReacSurf) from the standard Gibbs energies of both phases.
/// The equilibrium constants use the standard pressure, `p` only keeps the signature uniform
pub fn KForwardReverseSurface<V: Scalar>(
    t: V,
    _p: V,
    gk: &[V],
    Surf_gk: &[V],
    kfor: &mut [V],
    krev: &mut [V],
    kmcd: &GasKineticModel,
    kmcdSurf: &SurfaceKineticModel,
) -> Result<(), KineticsError> {
    kmcdSurf.check_gas(kmcd)?;
    check_len("gk", kmcd.nSpec(), gk.len())?;
    check_len("Surf_gk", kmcdSurf.nSpec(), Surf_gk.len())?;
    check_len("kfor", kmcdSurf.nReac(), kfor.len())?;
    check_len("krev", kmcdSurf.nReac(), krev.len())?;
    // P_REF/RT, kmol/m3 -> mol/cm3
    let ln_c0_gas = (t.recip() * (P_REF / kmcd.Runiv * 1e-3)).ln();
    for (r, reaction) in kmcdSurf.reactions.iter().enumerate() {
        let kf = k_forward(t, reaction, kmcd, kmcdSurf);
        kfor[r] = kf;
        krev[r] = if reaction.reversible {
            kf * (-ln_Kc(ln_c0_gas, gk, Surf_gk, reaction, kmcdSurf)).exp()
        } else {
            V::from(0.0)
        };
    }
    Ok(())
}
