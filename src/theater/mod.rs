pub mod error;
pub mod handlers;
pub mod pagination;
pub mod types;

pub use error::*;
pub use handlers::*;
pub use pagination::*;
pub use types::*;
