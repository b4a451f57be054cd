pub mod omega;
pub mod params;
