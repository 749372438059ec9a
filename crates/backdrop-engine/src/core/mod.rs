pub mod clock;
pub mod driver;
pub mod rng;
pub mod viewport;
