/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::config::config_file::Config;
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::process::Command;

pub struct Filesystem;

impl Filesystem {
	pub fn new() -> Self {
		Self
	}

	/// Resolves the ledger state file location: the -f override if given,
	/// else ~/.local/share/bida/ledger.json. The parent directory is
	/// created for the default path so a first save cannot fail on it.
	pub fn state_path(
		&self,
		custom_path: Option<&String>,
	) -> Result<PathBuf, Error> {
		match custom_path {
			Some(p) => Ok(PathBuf::from(p)),
			None => {
				let home = home_dir().unwrap_or_else(|| {
					panic!("Unable to determine home directory")
				});

				let path = home.join(".local/share/bida/ledger.json");
				if let Some(parent) = path.parent() {
					fs::create_dir_all(parent)?;
				}
				Ok(path)
			},
		}
	}

	/// Fetches the config from the given path, or default path if none.
	/// The boolean argument indicates whether it is necessary to inspect
	/// the config for authentication, i.e. for talking to a remote store.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
		expand_auth: bool,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => {
				let home_dir = home_dir().unwrap_or_else(|| {
					panic!("Unable to determine home directory")
				});
				home_dir.join(".config/bida/config.toml")
			},
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		let content = fs::read_to_string(config_path)?;
		let mut config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		// Execute api_key_cmd if applicable, and put result in api_key
		if !expand_auth {
			return Ok(config);
		}

		if let Some(remote) = &mut config.remote {
			if remote.api_key_cmd.is_some() && remote.api_key.is_some() {
				bail!("Only one of remote.api_key and remote.api_key_cmd may be specified")
			}

			if let Some(api_key_cmd) = &remote.api_key_cmd {
				let output = Command::new("sh")
					.arg("-c")
					.arg(api_key_cmd)
					.output()
					.map_err(|e| {
						anyhow!("failed to execute api_key_cmd: {}", e)
					})?;

				if output.status.success() {
					remote.api_key = Some(
						String::from_utf8(output.stdout)
							.map_err(|e| {
								anyhow!(
									"failed to parse command output: {}",
									e
								)
							})?
							.trim()
							.to_string(),
					);
				} else {
					bail!(
						"remote api_key_cmd failed with status {}: {}",
						output.status,
						String::from_utf8_lossy(&output.stderr)
					);
				}
			}
		}

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_custom_state_path_is_used_verbatim() {
		let fs = Filesystem::new();
		let path = fs
			.state_path(Some(&"/tmp/bida_state.json".to_string()))
			.unwrap();
		assert_eq!(path, PathBuf::from("/tmp/bida_state.json"));
	}

	#[test]
	fn test_config_parses_roster_and_remote() {
		let content = r#"
roster = ["Minh", "Toan", "Hai"]

[remote]
api_url = "http://localhost:3000/api"
fetch_limit = 200
"#;
		let config: Config = toml::from_str(content).unwrap();
		assert_eq!(config.roster.unwrap().len(), 3);

		let remote = config.remote.unwrap();
		assert_eq!(
			remote.api_url.as_deref(),
			Some("http://localhost:3000/api")
		);
		assert_eq!(remote.fetch_limit, Some(200));
	}

	#[test]
	fn test_empty_config_is_fine() {
		let config: Config = toml::from_str("").unwrap();
		assert!(config.roster.is_none());
		assert!(config.remote.is_none());
	}
}
