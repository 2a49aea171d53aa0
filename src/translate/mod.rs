pub mod interface;
pub mod languages;
pub mod pipeline;
pub mod prompts;

pub use interface::*;
pub use pipeline::*;
