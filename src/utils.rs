//! Common utility functions shared across the codebase.

use std::panic::Location;
use std::path::Path;

/// Returns the file name of the calling code, without its extension.
///
/// Rules use this to label their findings and log output after the source
/// file that produced them: a call from `skip_rules.rs` returns
/// `"skip_rules"`. The base name is cut at the first `.`, so a call from
/// `rules.test.rs` would return `"rules"`. If the caller's location has no
/// usable file name, a warning is logged and an empty string returned.
#[track_caller]
pub fn caller_file_name() -> String {
    let file = Location::caller().file();
    match Path::new(file).file_name().and_then(|name| name.to_str()) {
        Some(base) => base.split('.').next().unwrap_or_default().to_string(),
        None => {
            tracing::warn!(file = %file, "failed to resolve caller file name");
            String::new()
        }
    }
}
