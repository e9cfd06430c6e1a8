mod generator;
mod state;

pub use generator::PlaylistGenerator;
pub use state::AppState;
