//! Human-readable dumps of kernel inputs and outputs for single-threaded debugging.
//!
//! Compiled in only with the `serial-test-output` feature; otherwise every function here is
//! an empty inline stub. Dumps are appended to fixed file names in the working directory.
//! A failed write is logged and otherwise ignored.
#![allow(non_snake_case)]
#![cfg_attr(not(feature = "serial-test-output"), allow(unused_variables))]
use crate::Kinetics::model_data::{GasKineticModel, SurfaceKineticModel};
use crate::Utils::scalar::Scalar;

pub const RHO_MIX_MS_FILE: &str = "RhoMixMs.team_invoke.test.out";
pub const SURFACE_ROP_FILE: &str = "RateOfProgressSurfaceInd.team_invoke.test.out";

#[cfg(feature = "serial-test-output")]
fn append(file_name: &str, text: &str) {
    use std::io::Write;
    let result = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_name)
        .and_then(|mut file| file.write_all(text.as_bytes()));
    if let Err(e) = result {
        log::warn!("could not write diagnostic dump '{}': {}", file_name, e);
    }
}

#[cfg(feature = "serial-test-output")]
pub fn rho_mix_ms_report<V: Scalar>(
    t: V,
    p: V,
    Ys: &[V],
    kmcd: &GasKineticModel,
    rho: V,
) -> String {
    let mut s = String::from(":: RhoMixMs::team_invoke\n:::: input\n");
    s += &format!(
        "     nSpec {:3}, t {:e}, p {:e}, kmcd.Runiv {:e}\n",
        kmcd.nSpec(),
        t.value(),
        p.value(),
        kmcd.Runiv
    );
    for (i, (y, mass)) in Ys.iter().zip(kmcd.sMass.iter()).enumerate() {
        s += &format!("     i {:3}, Ys {:e}, sMass {:e}\n", i, y.value(), mass);
    }
    s += &format!(":::: output\n     rhomix {:e}\n", rho.value());
    s
}

#[inline]
pub fn dump_rho_mix_ms<V: Scalar>(t: V, p: V, Ys: &[V], kmcd: &GasKineticModel, rho: V) {
    #[cfg(feature = "serial-test-output")]
    append(RHO_MIX_MS_FILE, &rho_mix_ms_report(t, p, Ys, kmcd, rho));
}

/// everything the surface pipeline reads and writes in one invocation
pub struct SurfaceRopDump<'a, V> {
    pub t: V,
    pub p: V,
    pub density: V,
    pub Yk: &'a [V],
    pub zSurf: &'a [V],
    pub ropFor: &'a [V],
    pub ropRev: &'a [V],
}

#[cfg(feature = "serial-test-output")]
pub fn surface_rop_report<V: Scalar>(
    dump: &SurfaceRopDump<V>,
    kmcd: &GasKineticModel,
    kmcdSurf: &SurfaceKineticModel,
) -> String {
    let mut s = String::from(":: RateOfProgressSurfaceInd::team_invoke\n:::: input\n");
    s += &format!(
        "     nSpec {:3}, nSpecSurf {:3}, nReacSurf {:3}, t {:e}, p {:e}, density {:e}, sitedensity {:e}\n",
        kmcd.nSpec(),
        kmcdSurf.nSpec(),
        kmcdSurf.nReac(),
        dump.t.value(),
        dump.p.value(),
        dump.density.value(),
        kmcdSurf.sitedensity
    );
    for (i, y) in dump.Yk.iter().enumerate() {
        s += &format!("     i {:3}, Yk {:e}\n", i, y.value());
    }
    for (i, z) in dump.zSurf.iter().enumerate() {
        s += &format!("     i {:3}, zSurf {:e}\n", i, z.value());
    }
    s += ":::: output\n";
    for (i, (f, r)) in dump.ropFor.iter().zip(dump.ropRev.iter()).enumerate() {
        s += &format!("     i {:3}, ropFor {:e}, ropRev {:e}\n", i, f.value(), r.value());
    }
    s
}

#[inline]
pub fn dump_surface_rop<V: Scalar>(
    dump: SurfaceRopDump<V>,
    kmcd: &GasKineticModel,
    kmcdSurf: &SurfaceKineticModel,
) {
    #[cfg(feature = "serial-test-output")]
    append(SURFACE_ROP_FILE, &surface_rop_report(&dump, kmcd, kmcdSurf));
}

#[cfg(all(test, feature = "serial-test-output"))]
mod tests {
    use super::*;
    use crate::Kinetics::model_data::NASA7;

    #[test]
    fn test_rho_mix_ms_report() {
        let kmcd = GasKineticModel::new(
            vec!["N2".to_string()],
            vec![28.0134],
            vec![NASA7::single_range(300.0, 3000.0, [3.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])],
        )
        .unwrap();
        let report = rho_mix_ms_report(1000.0, 101325.0, &[1.0], &kmcd, 0.34);
        assert!(report.starts_with(":: RhoMixMs::team_invoke"));
        assert!(report.contains("Ys 1e0, sMass 2.80134e1"));
        assert!(report.ends_with("rhomix 3.4e-1\n"));
    }

    #[test]
    fn test_append_creates_and_extends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.out");
        let name = path.to_str().unwrap();
        append(name, "a\n");
        append(name, "b\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
    }
}
