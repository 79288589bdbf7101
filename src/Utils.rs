/// numeric trait shared by plain and dual numbers
pub mod scalar;
/// scratch arena over caller-owned stores
pub mod workspace;
/// optional dumps of kernel inputs and outputs (`serial-test-output` feature)
pub mod diagnostics;
