pub mod game_loop;
pub mod statistics;

pub use game_loop::{GameLoop, GameState};
pub use statistics::{Statistics, StatisticsSummary};
