pub mod names;
pub mod orchestrator;

pub use names::{NamePool, FIRST_NAMES, LAST_NAMES};
pub use orchestrator::HelloService;
