pub mod attribute;
pub mod entity;
pub mod errors;
pub mod mode;
pub mod record;
pub mod result;

// Re-export all types
pub use attribute::*;
pub use entity::*;
pub use errors::*;
pub use mode::*;
pub use record::*;
pub use result::*;
