pub mod backend;
pub mod repository;

pub use backend::*;
pub use repository::*;
