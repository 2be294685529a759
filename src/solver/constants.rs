/// The value every solution must reach
pub const TARGET: f64 = 24.0;
