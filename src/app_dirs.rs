//! Resolve configuration and data directories for `contacts`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "contacts";

const CONFIG_DIR_ENV: &str = "CONTACTS_CONFIG_DIR";
const DATA_DIR_ENV: &str = "CONTACTS_DATA_DIR";

const LOG_FILE_NAME: &str = "contacts.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for contacts"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory for the log file and other runtime output.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Log file used when none is configured.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_override_is_ignored() {
		assert_eq!(dir_from_env("CONTACTS_TEST_UNSET_DIR_VARIABLE"), None);
	}

	#[test]
	fn default_log_file_lives_in_the_data_dir() {
		if let (Ok(data), Ok(log)) = (get_data_dir(), default_log_file()) {
			assert_eq!(log.parent(), Some(data.as_path()));
			assert!(log.ends_with(LOG_FILE_NAME));
		}
	}
}
