pub mod chat;
pub mod dashboard;
pub mod mood;
pub mod recipes;
pub mod shared;

pub use chat::CoachView;
pub use dashboard::DashboardView;
pub use mood::MoodView;
pub use recipes::RecipesView;
