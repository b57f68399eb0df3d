pub mod history;
pub mod navigation;
pub mod ui;

pub use history::{History, Router};
pub use navigation::NavigationController;
pub use ui::UIState;
