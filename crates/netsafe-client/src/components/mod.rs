//! UI Components for the explorer page.

mod intro_modal;
mod layout;
mod level_header;
mod scene_container;
mod score;
mod sidebar;
mod start_button;

pub use intro_modal::IntroModal;
pub use layout::Layout;
pub use level_header::LevelHeader;
pub use scene_container::{SCENE_CANVAS_ID, SceneContainer};
pub use score::ScoreDisplay;
pub use sidebar::Sidebar;
pub use start_button::StartButton;
