#![allow(non_snake_case)]
use crate::Kinetics::model_data::{
    GasKineticModel, NASA7, StoichTerm, SurfaceKineticModel, SurfaceRate, SurfaceReaction,
};
use crate::Kinetics::surface_rop::{RateOfProgressSurfaceInd, SurfaceRopWorkspace};
use crate::Thermodynamics::mixture_density::RhoMixMs;
use crate::Utils::scalar::lift;
use crate::errors::KineticsError;
use num_dual::Dual64;
use prettytable::{Cell, Row, Table};

/// H2 and O2 (GRI-Mech 3.0 polynomials) over platinum, hydrogen adsorption and desorption
/// after Deutschmann's Pt mechanism, where each direction is its own irreversible reaction
pub fn h2_pt_mechanism() -> Result<(GasKineticModel, SurfaceKineticModel), KineticsError> {
    let H2 = NASA7::new(
        200.0,
        1000.0,
        3500.0,
        [
            2.34433112E+00,
            7.98052075E-03,
            -1.94781510E-05,
            2.01572094E-08,
            -7.37611761E-12,
            -9.17935173E+02,
            6.83010238E-01,
        ],
        [
            3.33727920E+00,
            -4.94024731E-05,
            4.99456778E-07,
            -1.79566394E-10,
            2.00255376E-14,
            -9.50158922E+02,
            -3.20502331E+00,
        ],
    );
    let O2 = NASA7::new(
        200.0,
        1000.0,
        3500.0,
        [
            3.78245636E+00,
            -2.99673416E-03,
            9.84730201E-06,
            -9.68129509E-09,
            3.24372837E-12,
            -1.06394356E+03,
            3.65767573E+00,
        ],
        [
            3.28253784E+00,
            1.48308754E-03,
            -7.57966669E-07,
            2.09470555E-10,
            -2.16717794E-14,
            -1.08845772E+03,
            5.45323129E+00,
        ],
    );
    let gas = GasKineticModel::new(
        vec!["H2".to_string(), "O2".to_string()],
        vec![2.016, 31.998],
        vec![H2, O2],
    )?;

    let PT = NASA7::new(300.0, 1000.0, 3000.0, [0.0; 7], [0.0; 7]);
    let H_S = NASA7::new(
        300.0,
        1000.0,
        3000.0,
        [
            -1.3029877E+00,
            5.4173199E-03,
            3.1277972E-07,
            -3.2328533E-09,
            1.136282E-12,
            -4.2277075E+03,
            5.8743238E+00,
        ],
        [
            1.0696996E+00,
            1.543223E-03,
            -1.5500922E-07,
            -1.6573165E-10,
            3.8359347E-14,
            -5.0546128E+03,
            -7.1555238E+00,
        ],
    );
    let reactions = vec![
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
        },
        SurfaceReaction {
            equation: "2 H(S) => H2 + 2 PT(S)".to_string(),
            reactants: vec![StoichTerm::surface(1, 2)],
            products: vec![StoichTerm::gas(0, 1), StoichTerm::surface(0, 2)],
            // 67.4 kJ/mol
            rate: SurfaceRate::Arrhenius {
                A: 3.7e21,
                b: 0.0,
                Ea_R: 67400.0 / 8.314462618,
            },
            reversible: false,
        },
    ];
    let surf = SurfaceKineticModel::new(
        vec!["PT(S)".to_string(), "H(S)".to_string()],
        vec![PT, H_S],
        2.7063e-9,
        reactions,
        &gas,
    )?;
    Ok((gas, surf))
}

fn rates_table(surf: &SurfaceKineticModel, columns: &[(&str, Vec<f64>)]) -> Table {
    let mut table = Table::new();
    let mut header = vec![Cell::new("reaction")];
    header.extend(columns.iter().map(|(name, _)| Cell::new(name)));
    table.add_row(Row::new(header));
    for (r, reaction) in surf.reactions.iter().enumerate() {
        let mut row = vec![Cell::new(&reaction.equation)];
        row.extend(
            columns
                .iter()
                .map(|(_, values)| Cell::new(&format!("{:.6e}", values[r]))),
        );
        table.add_row(Row::new(row));
    }
    table
}

pub fn surface_examples(task: usize) -> Result<(), KineticsError> {
    let (gas, surf) = h2_pt_mechanism()?;
    let (t, p) = (1000.0, 101325.0);
    let Yk = [0.5, 0.5];
    let zSurf = [0.3, 0.7];
    let size = SurfaceRopWorkspace::<f64>::size(&gas, &surf);
    match task {
        0 => {
            // MIXTURE DENSITY AND RATES OF PROGRESS
            let density = RhoMixMs(t, p, &Yk, &gas)?;
            println!("density: {:e} kg/m3", density);
            let mut values = vec![0.0; size.values];
            let mut ordinals = vec![0; size.ordinals];
            let mut ropFor = vec![0.0; surf.nReac()];
            let mut ropRev = vec![0.0; surf.nReac()];
            RateOfProgressSurfaceInd(
                t, p, density, &Yk, &zSurf, &mut ropFor, &mut ropRev, &mut values,
                &mut ordinals, &gas, &surf,
            )?;
            rates_table(&surf, &[("ropFor, kmol/(m2 s)", ropFor), ("ropRev, kmol/(m2 s)", ropRev)])
                .printstd();
        }
        1 => {
            // TEMPERATURE DERIVATIVES WITH DUAL NUMBERS
            let td = Dual64::new(t, 1.0);
            let pd = Dual64::from(p);
            let Ykd: Vec<Dual64> = lift(&Yk);
            let density = RhoMixMs(td, pd, &Ykd, &gas)?;
            let mut values = vec![Dual64::from(0.0); size.values];
            let mut ordinals = vec![0; size.ordinals];
            let mut ropFor = vec![Dual64::from(0.0); surf.nReac()];
            let mut ropRev = vec![Dual64::from(0.0); surf.nReac()];
            RateOfProgressSurfaceInd(
                td,
                pd,
                density,
                &Ykd,
                &lift(&zSurf),
                &mut ropFor,
                &mut ropRev,
                &mut values,
                &mut ordinals,
                &gas,
                &surf,
            )?;
            rates_table(
                &surf,
                &[
                    ("ropFor", ropFor.iter().map(|x| x.re).collect()),
                    ("d ropFor/dT", ropFor.iter().map(|x| x.eps).collect()),
                    ("ropRev", ropRev.iter().map(|x| x.re).collect()),
                    ("d ropRev/dT", ropRev.iter().map(|x| x.eps).collect()),
                ],
            )
            .printstd();
        }
        _ => {
            println!("Wrong task number");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mechanism_sizes() {
        let (gas, surf) = h2_pt_mechanism().unwrap();
        assert_eq!(gas.nSpec(), 2);
        assert_eq!(surf.nSpec(), 2);
        assert_eq!(surf.nReac(), 2);
        assert!(surf.reactions.iter().all(|r| !r.reversible));
    }

    #[test]
    fn test_examples_run() {
        assert!(surface_examples(0).is_ok());
        assert!(surface_examples(1).is_ok());
        assert!(surface_examples(7).is_ok());
    }
}
