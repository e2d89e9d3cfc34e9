pub mod libs;

pub use crate::libs::error::Error;
pub use crate::libs::io::*;
