pub mod error;
pub mod handlers;
pub mod types;

pub use handlers::create_router;
pub use types::AppState;
