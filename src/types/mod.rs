pub mod resume;
pub mod response;

pub use resume::*;
