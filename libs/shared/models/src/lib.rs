pub mod error;
pub mod queue;
pub mod stack;

pub use error::*;
pub use queue::Queue;
pub use stack::Stack;
