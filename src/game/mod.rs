// Game engine modules

pub mod placement;
pub mod pool;
pub mod rack;
pub mod scorer;
pub mod session;

pub use placement::Placement;
pub use pool::TilePool;
pub use rack::RackGenerator;
pub use scorer::Scorer;
pub use session::{GameSession, SessionPhase, SubmitOutcome};
