pub mod catalog;
pub mod compare;
pub mod events;
pub mod modes;
pub mod reset;
pub mod scoring;
pub mod selector;
pub mod session;

// Re-export main components
pub use catalog::*;
pub use compare::*;
pub use events::*;
pub use modes::*;
pub use reset::*;
pub use scoring::*;
pub use selector::*;
pub use session::*;
