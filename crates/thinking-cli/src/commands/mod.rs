pub mod frameworks;
pub mod session;
pub mod step;
