//! Widget components for the form

mod generate_button;
mod header;
mod requirements_input;
mod result_view;
mod status_bar;
mod test_type_selector;

pub use generate_button::GenerateButton;
pub use header::MainHeader;
pub use requirements_input::RequirementsInput;
pub use result_view::ResultView;
pub use status_bar::StatusBar;
pub use test_type_selector::TestTypeSelector;
