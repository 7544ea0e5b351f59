pub mod device;
pub mod provider;
pub mod simulation;
