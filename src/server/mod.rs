pub mod panic;
pub mod router;
pub mod state;

pub use panic::handle_panic;
pub use router::build_router;
pub use state::AppState;
