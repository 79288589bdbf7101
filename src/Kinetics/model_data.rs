//! # Model Data Module
//!
//! ## Purpose
//! Read-only records describing a gas phase and the surface phase it reacts with. They are
//! built once when the mechanism is loaded, validated by their constructors, and then only
//! borrowed by the kernels, which do not check indices again.
//!
//! ## Units
//! | quantity | unit |
//! |----------|------|
//! | `sMass` | kg/kmol (= g/mol) |
//! | `Runiv` | J/(kmol K) |
//! | `sitedensity` | mol/cm2 |
//! | Arrhenius `A` | mol, cm, s based, depending on the reaction order |
//! | `Ea_R` | K (activation energy divided by the gas constant) |
#![allow(non_snake_case)]
use crate::errors::{KineticsError, check_len};
use log::info;
use serde::{Deserialize, Serialize};

/// universal gas constant, J/(kmol K)
pub const RUNIV: f64 = 8314.462618;
/// standard-state pressure of the NASA7 data, Pa
pub const P_REF: f64 = 101325.0;

/// NASA 7-coefficient polynomial for one species with two temperature ranges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NASA7 {
    pub T_low: f64,
    pub T_mid: f64,
    pub T_high: f64,
    /// coefficients for T_low <= T <= T_mid
    pub low: [f64; 7],
    /// coefficients for T_mid < T <= T_high
    pub high: [f64; 7],
}

impl NASA7 {
    pub fn new(T_low: f64, T_mid: f64, T_high: f64, low: [f64; 7], high: [f64; 7]) -> Self {
        Self {
            T_low,
            T_mid,
            T_high,
            low,
            high,
        }
    }
    /// same coefficients on the whole range
    pub fn single_range(T_low: f64, T_high: f64, coeffs: [f64; 7]) -> Self {
        Self::new(T_low, T_high, T_high, coeffs, coeffs)
    }
    /// coefficient set for temperature `t`. Outside [T_low, T_high] the nearest range is
    /// extrapolated
    pub fn coeffs(&self, t: f64) -> &[f64; 7] {
        if t <= self.T_mid { &self.low } else { &self.high }
    }
}

/// phase a stoichiometric term refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Gas,
    Surface,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Gas => "gas",
            Phase::Surface => "surface",
        }
    }
}

/// one participant of a reaction side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoichTerm {
    pub phase: Phase,
    /// index into the species list of `phase`
    pub species: usize,
    /// stoichiometric coefficient, also the reaction order
    pub coefficient: u32,
}

impl StoichTerm {
    pub fn gas(species: usize, coefficient: u32) -> Self {
        Self {
            phase: Phase::Gas,
            species,
            coefficient,
        }
    }
    pub fn surface(species: usize, coefficient: u32) -> Self {
        Self {
            phase: Phase::Surface,
            species,
            coefficient,
        }
    }
}

/// forward rate constant expression of a surface reaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceRate {
    /// k = A T^b exp(-Ea_R/T)
    Arrhenius { A: f64, b: f64, Ea_R: f64 },
    /// k = gamma/site_density^m T^b exp(-Ea_R/T) sqrt(R T/(2 pi W))
    Sticking {
        gamma: f64,
        b: f64,
        Ea_R: f64,
        motz_wise: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceReaction {
    /// label only, never parsed
    pub equation: String,
    pub reactants: Vec<StoichTerm>,
    pub products: Vec<StoichTerm>,
    pub rate: SurfaceRate,
    pub reversible: bool,
}

impl SurfaceReaction {
    /// net change of gas and surface moles (products - reactants)
    pub fn net_order(&self) -> (i32, i32) {
        let mut gas = 0;
        let mut surface = 0;
        for (sign, terms) in [(-1, &self.reactants), (1, &self.products)] {
            for term in terms.iter() {
                match term.phase {
                    Phase::Gas => gas += sign * term.coefficient as i32,
                    Phase::Surface => surface += sign * term.coefficient as i32,
                }
            }
        }
        (gas, surface)
    }
    /// sum of surface reactant coefficients
    pub fn surface_reactant_order(&self) -> u32 {
        self.reactants
            .iter()
            .filter(|term| term.phase == Phase::Surface)
            .map(|term| term.coefficient)
            .sum()
    }
    /// the gas species a sticking coefficient refers to
    pub fn sticking_species(&self) -> Option<usize> {
        let mut gas = self.reactants.iter().filter(|term| term.phase == Phase::Gas);
        match (gas.next(), gas.next()) {
            (Some(term), None) if term.coefficient == 1 => Some(term.species),
            _ => None,
        }
    }
}

/// gas phase kinetic model data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasKineticModel {
    pub species: Vec<String>,
    /// molar masses, kg/kmol
    pub sMass: Vec<f64>,
    /// J/(kmol K)
    pub Runiv: f64,
    pub thermo: Vec<NASA7>,
}

impl GasKineticModel {
    pub fn new(
        species: Vec<String>,
        sMass: Vec<f64>,
        thermo: Vec<NASA7>,
    ) -> Result<Self, KineticsError> {
        check_len("gas molar masses", species.len(), sMass.len())?;
        check_len("gas thermo data", species.len(), thermo.len())?;
        info!("gas kinetic model with {} species", species.len());
        Ok(Self {
            species,
            sMass,
            Runiv: RUNIV,
            thermo,
        })
    }
    pub fn nSpec(&self) -> usize {
        self.species.len()
    }
}

/// surface phase kinetic model data (single site type, site occupancy 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceKineticModel {
    pub species: Vec<String>,
    pub thermo: Vec<NASA7>,
    /// mol/cm2
    pub sitedensity: f64,
    pub reactions: Vec<SurfaceReaction>,
    /// copy of the gas constant so the surface set can be evaluated on its own
    pub Runiv: f64,
    /// number of species of the gas model the reactions were validated against
    pub nSpecGas: usize,
}

impl SurfaceKineticModel {
    /// validates the reactions against both species sets
    pub fn new(
        species: Vec<String>,
        thermo: Vec<NASA7>,
        sitedensity: f64,
        reactions: Vec<SurfaceReaction>,
        gas: &GasKineticModel,
    ) -> Result<Self, KineticsError> {
        check_len("surface thermo data", species.len(), thermo.len())?;
        for (r, reaction) in reactions.iter().enumerate() {
            for term in reaction.reactants.iter().chain(reaction.products.iter()) {
                let bound = match term.phase {
                    Phase::Gas => gas.nSpec(),
                    Phase::Surface => species.len(),
                };
                if term.species >= bound {
                    return Err(KineticsError::InvalidSpeciesIndex {
                        reaction: r,
                        species: term.species,
                        phase: term.phase.name(),
                    });
                }
            }
            if reaction.reactants.is_empty() {
                return Err(KineticsError::InvalidReaction {
                    reaction: r,
                    reason: "no reactants".to_string(),
                });
            }
            if let SurfaceRate::Sticking { .. } = reaction.rate {
                if reaction.sticking_species().is_none() {
                    return Err(KineticsError::InvalidReaction {
                        reaction: r,
                        reason: "sticking coefficient needs exactly one gas reactant of order 1"
                            .to_string(),
                    });
                }
            }
        }
        info!(
            "surface kinetic model with {} species and {} reactions",
            species.len(),
            reactions.len()
        );
        Ok(Self {
            species,
            thermo,
            sitedensity,
            reactions,
            Runiv: gas.Runiv,
            nSpecGas: gas.nSpec(),
        })
    }
    pub fn nSpec(&self) -> usize {
        self.species.len()
    }
    pub fn nReac(&self) -> usize {
        self.reactions.len()
    }
    /// `gas` must be the model the reactions were validated against, at least in size
    pub fn check_gas(&self, gas: &GasKineticModel) -> Result<(), KineticsError> {
        check_len("gas species", self.nSpecGas, gas.nSpec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> NASA7 {
        NASA7::single_range(300.0, 3000.0, [3.5, 0.0, 0.0, 0.0, 0.0, -1000.0, 3.0])
    }

    fn gas() -> GasKineticModel {
        GasKineticModel::new(
            vec!["H2".to_string(), "O2".to_string()],
            vec![2.016, 31.998],
            vec![flat(), flat()],
        )
        .unwrap()
    }

    fn adsorption() -> SurfaceReaction {
        SurfaceReaction {
            equation: "H2 + 2 PT(S) => 2 H(S)".to_string(),
            reactants: vec![StoichTerm::gas(0, 1), StoichTerm::surface(0, 2)],
            products: vec![StoichTerm::surface(1, 2)],
            rate: SurfaceRate::Sticking {
                gamma: 0.046,
                b: 0.0,
                Ea_R: 0.0,
                motz_wise: false,
            },
            reversible: false,
        }
    }

    #[test]
    fn test_nasa7_range_selection() {
        let nasa = NASA7::new(300.0, 1000.0, 3000.0, [1.0; 7], [2.0; 7]);
        assert_eq!(nasa.coeffs(999.0)[0], 1.0);
        assert_eq!(nasa.coeffs(1000.0)[0], 1.0);
        assert_eq!(nasa.coeffs(1000.1)[0], 2.0);
    }

    #[test]
    fn test_gas_model_length_check() {
        let err = GasKineticModel::new(vec!["H2".to_string()], vec![2.016, 1.0], vec![flat()]);
        assert!(matches!(err, Err(KineticsError::LengthMismatch { .. })));
        assert_eq!(gas().nSpec(), 2);
        assert_eq!(gas().Runiv, RUNIV);
    }

    #[test]
    fn test_reaction_orders() {
        let reaction = adsorption();
        assert_eq!(reaction.net_order(), (-1, 0));
        assert_eq!(reaction.surface_reactant_order(), 2);
        assert_eq!(reaction.sticking_species(), Some(0));
    }

    #[test]
    fn test_surface_model_validation() {
        let gas = gas();
        let names = vec!["PT(S)".to_string(), "H(S)".to_string()];
        let model = SurfaceKineticModel::new(
            names.clone(),
            vec![flat(), flat()],
            2.7063e-9,
            vec![adsorption()],
            &gas,
        )
        .unwrap();
        assert_eq!(model.nSpec(), 2);
        assert_eq!(model.nReac(), 1);
        assert_eq!(model.nSpecGas, 2);
        assert!(model.check_gas(&gas).is_ok());
        let smaller =
            GasKineticModel::new(vec!["H2".to_string()], vec![2.016], vec![flat()]).unwrap();
        assert!(matches!(
            model.check_gas(&smaller),
            Err(KineticsError::LengthMismatch { what: "gas species", expected: 2, found: 1 })
        ));

        let mut bad = adsorption();
        bad.products = vec![StoichTerm::surface(5, 2)];
        let err = SurfaceKineticModel::new(names.clone(), vec![flat(), flat()], 2.7e-9, vec![bad], &gas);
        assert!(matches!(
            err,
            Err(KineticsError::InvalidSpeciesIndex {
                reaction: 0,
                species: 5,
                phase: "surface"
            })
        ));

        let mut bad = adsorption();
        bad.reactants.push(StoichTerm::gas(1, 1));
        let err = SurfaceKineticModel::new(names, vec![flat(), flat()], 2.7e-9, vec![bad], &gas);
        assert!(matches!(err, Err(KineticsError::InvalidReaction { reaction: 0, .. })));
    }

    #[test]
    fn test_models_serde_round_trip() {
        let gas = gas();
        let json = serde_json::to_string(&gas).unwrap();
        let back: GasKineticModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, gas);
        let json = serde_json::to_value(adsorption()).unwrap();
        assert_eq!(json["reactants"][1]["phase"], "Surface");
    }
}
