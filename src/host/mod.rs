pub mod fitter;
pub mod rect;
