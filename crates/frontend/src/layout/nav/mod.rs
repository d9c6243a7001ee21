pub mod drawer;
pub mod state;

pub use drawer::NavDrawer;
pub use state::{GroupId, NavState, PanelId};
