pub mod state;
pub mod views;

pub use state::AppState;
pub use views::{render_comparison_page, render_error_page, render_form_page};
