/// H2 adsorption and desorption on platinum, plain and dual number runs
pub mod surface_examples;
