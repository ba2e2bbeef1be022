pub mod pallas;
pub mod vesta;

pub use pallas::{Pallas, PallasConfig, ProjectivePallas};
pub use vesta::{ProjectiveVesta, Vesta, VestaConfig};
