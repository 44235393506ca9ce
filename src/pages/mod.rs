//! Page components for CodeArena.

mod contests;
mod dashboard;
mod leaderboard;
mod problems;

pub use contests::Contests;
pub use dashboard::Dashboard;
pub use leaderboard::Leaderboard;
pub use problems::Problems;
