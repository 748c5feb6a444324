use crate::config::model::{NameValuePair, SetupConfig};
use crate::foundation::math::Rate;
use crate::timing::table::{TIMING, text_len};

/// Frame where the extension name starts typing.
pub const NAME_BASE: u64 = 25;
pub const NAME_RATE: Rate = Rate::new(5, 2);
/// Shared by commands and endpoints.
pub const COMMAND_RATE: Rate = Rate::new(9, 5);
/// Name field done -> main field starts.
pub const GAP: u64 = 15;
/// Main field done -> first env/header row.
pub const GAP_BEFORE_ROWS: u64 = 20;
pub const ROW_TIME: u64 = 80;
/// Last row (or main field, when there are no rows) -> "Extension Added!".
pub const ROW_PAD: u64 = 30;
/// Button settle + "Extension Added!" for the variants without rows.
pub const SAVE_PAD: u64 = 30;
pub const TAIL_HOLD: u64 = 90;
pub const BUILTIN_DURATION: u64 = 150;
/// No setup scene is ever shorter than this.
pub const FLOOR_DURATION: u64 = TIMING.setup;

/// Frames the setup scene needs for `setup`, never below [`FLOOR_DURATION`].
pub fn compute_setup_duration(setup: &SetupConfig) -> u64 {
    let raw = match setup {
        SetupConfig::Builtin { .. } => BUILTIN_DURATION,
        SetupConfig::Stdio {
            extension_name,
            extension_command,
        } => main_field_done(extension_name, extension_command) + SAVE_PAD + TAIL_HOLD,
        SetupConfig::Http {
            extension_name,
            endpoint,
        } => main_field_done(extension_name, endpoint) + SAVE_PAD + TAIL_HOLD,
        SetupConfig::StdioWithEnv {
            extension_name,
            extension_command,
            env_vars,
        } => with_rows(main_field_done(extension_name, extension_command), env_vars),
        SetupConfig::HttpWithHeaders {
            extension_name,
            endpoint,
            request_headers,
        } => with_rows(main_field_done(extension_name, endpoint), request_headers),
    };
    raw.max(FLOOR_DURATION)
}

/// Frame where the extension name has finished typing.
pub(crate) fn name_typing_done(extension_name: &str) -> u64 {
    NAME_BASE + NAME_RATE.ceil_mul(text_len(extension_name))
}

fn main_field_done(extension_name: &str, main_field: &str) -> u64 {
    name_typing_done(extension_name) + GAP + COMMAND_RATE.ceil_mul(text_len(main_field))
}

fn with_rows(main_done: u64, rows: &[NameValuePair]) -> u64 {
    let added_at = if rows.is_empty() {
        main_done + ROW_PAD
    } else {
        main_done + GAP_BEFORE_ROWS + (rows.len() as u64).saturating_mul(ROW_TIME) + ROW_PAD
    };
    added_at.saturating_add(TAIL_HOLD)
}

#[cfg(test)]
#[path = "../../tests/unit/timing/setup.rs"]
mod tests;
