use std::time::Instant;

/// Session counters. Kept in memory only; reported via `log`.
#[derive(Debug, Clone)]
pub struct Statistics {
    pub wins: u32,
    pub losses: u32,
    pub cars_spawned: u32,
    /// Cars that drove off the field.
    pub cars_removed: u32,
    /// Cars still on the road when a round was reset.
    pub cars_cleared: u32,
    pub max_congestion: usize,
    pub current_streak: u32,
    pub best_streak: u32,
    pub max_difficulty: f32,
    session_start: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    pub rounds_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f32,
    pub cars_spawned: u32,
    pub cars_removed: u32,
    pub cars_cleared: u32,
    pub max_congestion: usize,
    pub best_streak: u32,
    pub max_difficulty: f32,
    pub duration_secs: f32,
}

impl Statistics {
    pub fn new(initial_difficulty: f32) -> Self {
        Statistics {
            wins: 0,
            losses: 0,
            cars_spawned: 0,
            cars_removed: 0,
            cars_cleared: 0,
            max_congestion: 0,
            current_streak: 0,
            best_streak: 0,
            max_difficulty: initial_difficulty,
            session_start: Instant::now(),
        }
    }

    pub fn record_spawn(&mut self, live_cars: usize) {
        self.cars_spawned += 1;
        self.max_congestion = self.max_congestion.max(live_cars);
    }

    pub fn record_removals(&mut self, count: usize) {
        self.cars_removed += count as u32;
    }

    pub fn record_cleared(&mut self, count: usize) {
        self.cars_cleared += count as u32;
    }

    pub fn record_win(&mut self) {
        self.wins += 1;
        self.current_streak += 1;
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
        self.current_streak = 0;
    }

    pub fn record_difficulty(&mut self, difficulty: f32) {
        self.max_difficulty = self.max_difficulty.max(difficulty);
    }

    pub fn summary(&self) -> StatisticsSummary {
        let rounds_played = self.wins + self.losses;
        let win_rate = if rounds_played > 0 {
            self.wins as f32 / rounds_played as f32 * 100.0
        } else {
            0.0
        };

        StatisticsSummary {
            rounds_played,
            wins: self.wins,
            losses: self.losses,
            win_rate,
            cars_spawned: self.cars_spawned,
            cars_removed: self.cars_removed,
            cars_cleared: self.cars_cleared,
            max_congestion: self.max_congestion,
            best_streak: self.best_streak,
            max_difficulty: self.max_difficulty,
            duration_secs: self.session_start.elapsed().as_secs_f32(),
        }
    }

    pub fn log_summary(&self) {
        let s = self.summary();
        log::info!("Session: {:.1}s, {} rounds", s.duration_secs, s.rounds_played);
        log::info!("Wins: {} | Losses: {} | Win rate: {:.1}%", s.wins, s.losses, s.win_rate);
        log::info!("Best streak: {} | Highest difficulty: {:.2}", s.best_streak, s.max_difficulty);
        log::info!(
            "Cars spawned: {} | Drove off: {} | Cleared on reset: {} | Max on screen: {}",
            s.cars_spawned,
            s.cars_removed,
            s.cars_cleared,
            s.max_congestion
        );
    }
}
