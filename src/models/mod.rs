pub mod model;
pub mod random_walk;
