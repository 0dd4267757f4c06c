pub mod careful;
pub mod random;

pub use careful::CarefulStrategy;
pub use random::RandomStrategy;
