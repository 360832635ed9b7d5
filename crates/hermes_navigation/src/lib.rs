pub mod error;
pub mod geo;
pub mod instructions;
pub mod params;
pub mod position;
pub mod routing;
pub mod session;
pub mod speech;

#[cfg(test)]
pub(crate) mod test_utils;
