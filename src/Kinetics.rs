/// Read-only mechanism data: gas and surface species, NASA polynomials, surface reactions.
/// Constructors validate every species index once so the kernels don't have to.
pub mod model_data;
/// gas molar concentrations from mass fractions and mixture density
pub mod molar_concentrations;
/// Arrhenius and sticking-coefficient rate constants, reverse constants from equilibrium
///
///  # Examples
/// ```
/// use KiSurf::Kinetics::model_data::*;
/// use KiSurf::Kinetics::rate_constants::k_forward;
/// let flat = NASA7::single_range(300.0, 3000.0, [0.0; 7]);
/// let gas = GasKineticModel::new(vec!["H2".into()], vec![2.016], vec![flat.clone()]).unwrap();
/// let reaction = SurfaceReaction {
///     equation: "2 H(S) => H2 + 2 PT(S)".into(),
///     reactants: vec![StoichTerm::surface(1, 2)],
///     products: vec![StoichTerm::gas(0, 1), StoichTerm::surface(0, 2)],
///     rate: SurfaceRate::Arrhenius { A: 3.7e21, b: 0.0, Ea_R: 8106.0 },
///     reversible: false,
/// };
/// let surf = SurfaceKineticModel::new(
///     vec!["PT(S)".into(), "H(S)".into()], vec![flat.clone(), flat], 2.7063e-9, vec![reaction], &gas,
/// ).unwrap();
/// let kf: f64 = k_forward(1000.0, &surf.reactions[0], &gas, &surf);
/// println!("kf = {:e}", kf);
/// ```
pub mod rate_constants;
pub mod rate_of_progress;
/// the staged surface rate-of-progress pipeline over a caller-owned workspace
pub mod surface_rop;
