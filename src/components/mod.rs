//! Page-level components for CodeArena.

mod contest_card;
mod nav_header;
mod problem_card;
mod stat_card;
mod typing_subtitle;

pub use contest_card::ContestCard;
pub use nav_header::NavHeader;
pub use problem_card::ProblemCard;
pub use stat_card::StatCard;
pub use typing_subtitle::TypingSubtitle;
