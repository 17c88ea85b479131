// Dioxus GUI Components Module

pub mod chat_panel;
pub mod gamification_panel;
pub mod home_section;
pub mod main_window;
pub mod mood_check_in;
pub mod quiz_generator;
pub mod robot_mascot;
pub mod role_selector;
pub mod section_navigation;
pub mod student_dashboard;
pub mod teacher_dashboard;
pub mod user_stats;

// Re-exports for convenience
pub use chat_panel::ChatPanel;
pub use gamification_panel::GamificationPanel;
pub use home_section::HomeSection;
pub use main_window::MainWindow;
pub use mood_check_in::MoodCheckIn;
pub use quiz_generator::QuizGenerator;
pub use robot_mascot::RobotMascot;
pub use role_selector::RoleSelector;
pub use section_navigation::{SectionContent, SectionNavigation};
pub use student_dashboard::StudentDashboard;
pub use teacher_dashboard::TeacherDashboard;
pub use user_stats::UserStatsBar;
