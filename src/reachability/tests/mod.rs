mod fixed_points;
#[cfg(feature = "serde")]
mod serialization;
