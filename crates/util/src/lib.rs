pub mod path_processing;
pub mod preferences;
pub mod status_template;
pub mod text_processing;

pub use path_processing::*;
pub use preferences::{PreferencesError, PreferencesPayload, UserPreferences};
pub use status_template::{DEFAULT_STATUS_TEMPLATE, StatusTemplate, StatusTemplateError};
pub use text_processing::*;
