pub mod evaluator;
pub mod policy;
pub mod store;

pub use evaluator::{evaluate, Evaluation};
pub use store::{AddOutcome, BuildStore};
