//! Settings app slice: setting definitions, stored values, and the
//! in-progress edits of the settings page.
//!
//! - `state.rs` - definitions / values / settings page parts and their selectors
//! - `action.rs` - fetch results and page events
//! - `reducer.rs` - one reducer per part, combined by the slice reducer
//! - `utils.rs` - editor seeds, fallback texts, page links

mod action;
mod reducer;
mod state;
mod types;
mod utils;

pub use action::SettingsAppAction;
pub use reducer::SettingsAppReducer;
pub use state::{
    DefinitionsState, SettingsAppState, SettingsPageState, ValuesState, DEFAULT_CATEGORY,
};
pub use types::{
    FieldValues, Setting, SettingDefinition, SettingFieldDefinition, SettingType, SettingValue,
};
pub use utils::{build_setting_link, default_value, empty_value, SettingLink};
