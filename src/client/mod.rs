pub mod form;
pub mod relay;

pub use form::*;
pub use relay::*;
