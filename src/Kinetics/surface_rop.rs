//! # Surface Rate of Progress Module
//!
//! ## Purpose
//! Forward and reverse rates of progress of all surface reactions for one thermodynamic
//! state, to be used by source-term and Jacobian assembly. Every kernel is generic over
//! `Scalar`, so seeding e.g. the temperature of a `Dual64` state gives the analytic
//! derivative of the rates without any change of control flow.
//!
//! ## Stages
//! 1. gas molar concentrations from mass fractions (kmol/m3), rescaled by 1e-3 to mol/cm3
//! 2. surface concentrations `zSurf[i] * sitedensity` (mol/cm2, one site type, occupancy 1)
//! 3. G/RT, enthalpy and heat capacity of the gas set and of the surface set
//! 4. forward and reverse rate constants
//! 5. rates of progress, mol/(cm2 s)
//! 6. rates scaled by 10 to kmol/(m2 s)
//!
//! Every stage reads only what earlier stages wrote. The stages run one after the other
//! over their whole index range, which is the barrier between them.
//!
//! ## Workspace
//! The caller owns two flat stores, one of values and one of ordinals, sized by
//! `SurfaceRopWorkspace::size`. They are carved in this order:
//!
//! | view | length | store |
//! |------|--------|-------|
//! | gk, hks, cpks, concX | nSpec each | values |
//! | kfor, krev | nReacSurf each | values |
//! | Surf_gk, Surf_hks, Surf_cpks, concXSurf | nSpecSurf each | values |
//! | iter | 2 nReacSurf | ordinals |
//!
//! A caller slicing the stores itself must follow the same order. The views are only valid
//! for one invocation.
//!
//! ## Usage
//! ```
//! use KiSurf::Kinetics::model_data::*;
//! use KiSurf::Kinetics::surface_rop::{RateOfProgressSurfaceInd, SurfaceRopWorkspace};
//! use KiSurf::Thermodynamics::mixture_density::RhoMixMs;
//! let flat = NASA7::single_range(300.0, 3000.0, [3.5, 0.0, 0.0, 0.0, 0.0, -1000.0, 1.0]);
//! let gas = GasKineticModel::new(vec!["H2".into()], vec![2.016], vec![flat.clone()]).unwrap();
//! let reaction = SurfaceReaction {
//!     equation: "H2 + 2 PT(S) => 2 H(S)".into(),
//!     reactants: vec![StoichTerm::gas(0, 1), StoichTerm::surface(0, 2)],
//!     products: vec![StoichTerm::surface(1, 2)],
//!     rate: SurfaceRate::Sticking { gamma: 0.046, b: 0.0, Ea_R: 0.0, motz_wise: false },
//!     reversible: false,
//! };
//! let surf = SurfaceKineticModel::new(
//!     vec!["PT(S)".into(), "H(S)".into()], vec![flat.clone(), flat], 2.7063e-9, vec![reaction], &gas,
//! ).unwrap();
//! let (t, p) = (1000.0, 101325.0);
//! let density = RhoMixMs(t, p, &[1.0], &gas).unwrap();
//! let size = SurfaceRopWorkspace::<f64>::size(&gas, &surf);
//! let (mut values, mut ordinals) = (vec![0.0; size.values], vec![0; size.ordinals]);
//! let (mut ropFor, mut ropRev) = (vec![0.0; 1], vec![0.0; 1]);
//! RateOfProgressSurfaceInd(
//!     t, p, density, &[1.0], &[0.5, 0.5], &mut ropFor, &mut ropRev,
//!     &mut values, &mut ordinals, &gas, &surf,
//! ).unwrap();
//! assert!(ropFor[0] > 0.0 && ropRev[0] == 0.0);
//! ```
#![allow(non_snake_case)]
use crate::Kinetics::model_data::{GasKineticModel, SurfaceKineticModel};
use crate::Kinetics::molar_concentrations::MolarConcentrations;
use crate::Kinetics::rate_constants::KForwardReverseSurface;
use crate::Kinetics::rate_of_progress::RateOfProgressSurface;
use crate::Thermodynamics::gibbs::GkSurfGas;
use crate::Utils::diagnostics::{self, SurfaceRopDump};
use crate::Utils::scalar::Scalar;
use crate::Utils::workspace::ScratchArena;
use crate::errors::{KineticsError, check_len};
use log::trace;
use std::fmt;

/// kmol/m3 -> mol/cm3
const KMOL_M3_TO_MOL_CM3: f64 = 1e-3;
/// mol/(cm2 s) -> kmol/(m2 s)
const MOL_CM2_TO_KMOL_M2: f64 = 10.0;

/// pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    GasConcentration,
    SurfaceConcentration,
    Potentials,
    RateConstants,
    RateOfProgress,
    UnitConversion,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Stage::GasConcentration => "gas molar concentrations",
            Stage::SurfaceConcentration => "surface molar concentrations",
            Stage::Potentials => "thermodynamic potentials",
            Stage::RateConstants => "rate constants",
            Stage::RateOfProgress => "rates of progress",
            Stage::UnitConversion => "unit conversion",
        };
        write!(f, "{}", name)
    }
}

/// number of elements each store must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceSize {
    pub values: usize,
    pub ordinals: usize,
}

/// named views of the pipeline workspace
#[derive(Debug)]
pub struct SurfaceRopWorkspace<'w, V> {
    pub gk: &'w mut [V],
    pub hks: &'w mut [V],
    pub cpks: &'w mut [V],
    pub concX: &'w mut [V],
    pub kfor: &'w mut [V],
    pub krev: &'w mut [V],
    pub Surf_gk: &'w mut [V],
    pub Surf_hks: &'w mut [V],
    pub Surf_cpks: &'w mut [V],
    pub concXSurf: &'w mut [V],
    pub iter: &'w mut [usize],
}

impl<'w, V> SurfaceRopWorkspace<'w, V> {
    pub fn size(kmcd: &GasKineticModel, kmcdSurf: &SurfaceKineticModel) -> WorkspaceSize {
        let (nSpec, nSpecSurf, nReac) = (kmcd.nSpec(), kmcdSurf.nSpec(), kmcdSurf.nReac());
        WorkspaceSize {
            values: 4 * nSpec + 2 * nReac + 4 * nSpecSurf,
            ordinals: 2 * nReac,
        }
    }
    /// carves the two stores in the documented order. Stores larger than needed are
    /// accepted, the surplus is left untouched
    pub fn partition(
        values: &'w mut [V],
        ordinals: &'w mut [usize],
        kmcd: &GasKineticModel,
        kmcdSurf: &SurfaceKineticModel,
    ) -> Result<Self, KineticsError> {
        let size = Self::size(kmcd, kmcdSurf);
        let (nSpec, nSpecSurf, nReac) = (kmcd.nSpec(), kmcdSurf.nSpec(), kmcdSurf.nReac());
        let mut w = ScratchArena::new("values", values);
        let mut o = ScratchArena::new("ordinals", ordinals);
        w.reserve(size.values)?;
        o.reserve(size.ordinals)?;
        Ok(Self {
            // gas species thermal properties
            gk: w.take(nSpec)?,
            hks: w.take(nSpec)?,
            cpks: w.take(nSpec)?,
            concX: w.take(nSpec)?,
            kfor: w.take(nReac)?,
            krev: w.take(nReac)?,
            // surface species thermal properties
            Surf_gk: w.take(nSpecSurf)?,
            Surf_hks: w.take(nSpecSurf)?,
            Surf_cpks: w.take(nSpecSurf)?,
            concXSurf: w.take(nSpecSurf)?,
            iter: o.take(2 * nReac)?,
        })
    }
    fn check(
        &self,
        kmcd: &GasKineticModel,
        kmcdSurf: &SurfaceKineticModel,
    ) -> Result<(), KineticsError> {
        let (nSpec, nSpecSurf, nReac) = (kmcd.nSpec(), kmcdSurf.nSpec(), kmcdSurf.nReac());
        check_len("gk", nSpec, self.gk.len())?;
        check_len("hks", nSpec, self.hks.len())?;
        check_len("cpks", nSpec, self.cpks.len())?;
        check_len("concX", nSpec, self.concX.len())?;
        check_len("kfor", nReac, self.kfor.len())?;
        check_len("krev", nReac, self.krev.len())?;
        check_len("Surf_gk", nSpecSurf, self.Surf_gk.len())?;
        check_len("Surf_hks", nSpecSurf, self.Surf_hks.len())?;
        check_len("Surf_cpks", nSpecSurf, self.Surf_cpks.len())?;
        check_len("concXSurf", nSpecSurf, self.concXSurf.len())?;
        check_len("iter", 2 * nReac, self.iter.len())
    }
}

/// rates of progress with a workspace the caller has already carved
///    t : temperature, K
///    p : pressure, Pa
///    density : mixture density, kg/m3
///    Yk : gas mass fractions (nSpec)
///    zSurf : site fractions (nSpecSurf)
///    ropFor, ropRev : output (nReacSurf), kmol/(m2 s)
///
/// All lengths, and the size of `kmcd` against the gas model `kmcdSurf` was built with, are
/// checked before anything is written. Non-physical states are not
/// checked and show up as Inf/NaN in the output.
pub fn RateOfProgressSurfaceInd_detail<V: Scalar>(
    t: V,
    p: V,
    density: V,
    Yk: &[V],
    zSurf: &[V],
    ropFor: &mut [V],
    ropRev: &mut [V],
    ws: &mut SurfaceRopWorkspace<V>,
    kmcd: &GasKineticModel,
    kmcdSurf: &SurfaceKineticModel,
) -> Result<(), KineticsError> {
    kmcdSurf.check_gas(kmcd)?;
    check_len("Yk", kmcd.nSpec(), Yk.len())?;
    check_len("zSurf", kmcdSurf.nSpec(), zSurf.len())?;
    check_len("ropFor", kmcdSurf.nReac(), ropFor.len())?;
    check_len("ropRev", kmcdSurf.nReac(), ropRev.len())?;
    ws.check(kmcd, kmcdSurf)?;

    trace!("{}", Stage::GasConcentration);
    MolarConcentrations(t, p, density, Yk, ws.concX, kmcd)?;
    for c in ws.concX.iter_mut() {
        *c = *c * KMOL_M3_TO_MOL_CM3;
    }

    trace!("{}", Stage::SurfaceConcentration);
    for (c, &z) in ws.concXSurf.iter_mut().zip(zSurf.iter()) {
        *c = z * kmcdSurf.sitedensity;
    }

    trace!("{}", Stage::Potentials);
    GkSurfGas(t, ws.gk, ws.hks, ws.cpks, kmcd)?;
    GkSurfGas(t, ws.Surf_gk, ws.Surf_hks, ws.Surf_cpks, kmcdSurf)?;

    trace!("{}", Stage::RateConstants);
    KForwardReverseSurface(t, p, ws.gk, ws.Surf_gk, ws.kfor, ws.krev, kmcd, kmcdSurf)?;

    trace!("{}", Stage::RateOfProgress);
    RateOfProgressSurface(
        t,
        ws.kfor,
        ws.krev,
        ws.concX,
        ws.concXSurf,
        ropFor,
        ropRev,
        ws.iter,
        kmcdSurf,
    )?;

    trace!("{}", Stage::UnitConversion);
    for (f, r) in ropFor.iter_mut().zip(ropRev.iter_mut()) {
        *f = *f * MOL_CM2_TO_KMOL_M2;
        *r = *r * MOL_CM2_TO_KMOL_M2;
    }

    diagnostics::dump_surface_rop(
        SurfaceRopDump {
            t,
            p,
            density,
            Yk,
            zSurf,
            ropFor,
            ropRev,
        },
        kmcd,
        kmcdSurf,
    );
    Ok(())
}

/// rates of progress with raw workspace stores, see `RateOfProgressSurfaceInd_detail`
///    values : at least `SurfaceRopWorkspace::size(..).values` elements
///    ordinals : at least `SurfaceRopWorkspace::size(..).ordinals` elements
pub fn RateOfProgressSurfaceInd<V: Scalar>(
    t: V,
    p: V,
    density: V,
    Yk: &[V],
    zSurf: &[V],
    ropFor: &mut [V],
    ropRev: &mut [V],
    values: &mut [V],
    ordinals: &mut [usize],
    kmcd: &GasKineticModel,
    kmcdSurf: &SurfaceKineticModel,
) -> Result<(), KineticsError> {
    let mut ws = SurfaceRopWorkspace::partition(values, ordinals, kmcd, kmcdSurf)?;
    RateOfProgressSurfaceInd_detail(t, p, density, Yk, zSurf, ropFor, ropRev, &mut ws, kmcd, kmcdSurf)
}
