pub mod api;
pub mod captioner;
pub mod config;
pub mod data_uri;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
