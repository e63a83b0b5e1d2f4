/// Marker placed between the source id and the date of a detached occurrence.
pub const SINGLE_EDIT_MARKER: &str = "single-edit";

/// Separator used when composing derived record ids.
pub const ID_SEPARATOR: &str = "-";

/// Infix that joins a source id to the detached occurrence date, e.g. `1-single-edit-2025-01-06`.
pub const SINGLE_EDIT_INFIX: &str = const_str::concat!(ID_SEPARATOR, SINGLE_EDIT_MARKER, ID_SEPARATOR);

/// Canonical `chrono` format string for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a canonical `YYYY-MM-DD` date string.
pub const DATE_TEXT_LEN: usize = 10;

/// Prefix for environment variables read by the configuration loader.
pub const ENV_PREFIX: &str = "CADENCE";

/// Optional configuration file, looked up relative to the working directory.
pub const CONFIG_FILE: &str = "cadence.toml";
