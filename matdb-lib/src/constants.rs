/// Ideal gas constant (L·atm·K^-1·mol^-1)
pub const GAS_CONSTANT: f64 = 0.0821;

/// Standard temperature (K)
pub const STP_TEMPERATURE: f64 = 273.15;

/// Standard pressure (atm)
pub const STP_PRESSURE: f64 = 1.0;

/// Approximate molar volume assumed for liquids and crystalline solids (L/mol)
pub const CONDENSED_MOLAR_VOLUME: f64 = 24.465;

/// Longest formula a stored material may carry
pub const MAX_FORMULA_LEN: usize = 255;
