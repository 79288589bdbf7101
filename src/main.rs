#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Kinetics;
#[allow(non_snake_case)]
pub mod Thermodynamics;
#[allow(non_snake_case)]
pub mod Utils;
pub mod errors;
pub mod settings;

use Examples::surface_examples::surface_examples;
use settings::KineticsSettings;

pub fn main() {
    let settings = KineticsSettings::with_config_file("kinetics_config.json");
    if let Err(e) = settings.init_logger() {
        eprintln!("logger not initialized: {}", e);
    }
    let task: usize = 0;
    if let Err(e) = surface_examples(task) {
        eprintln!("{}", e);
    }
}
