pub mod insets;
pub mod modes;
pub mod placement;
