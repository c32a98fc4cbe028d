// ABOUTME: UI components for the wizard TUI: wizard body, help overlay and layout

pub mod help;
pub mod layout;
pub mod theme;
pub mod wizard;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use wizard::WizardComponent;
