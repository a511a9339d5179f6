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
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	/// Players in rotation order, used to seed a fresh local ledger.
	/// Ignored once a state file exists; there is no roster editing.
	pub roster: Option<Vec<String>>,

	pub remote: Option<Remote>,
}

/// Remote backing store. When api_url is set, the ledger lives on the
/// server: mutations go over the wire and reads always refetch.
#[derive(Debug, Default, Deserialize)]
pub struct Remote {
	pub api_url: Option<String>,
	pub api_key: Option<String>,
	pub api_key_cmd: Option<String>,

	/// Cap on how many matches to pull when a report needs the whole
	/// history. Defaults to 500.
	pub fetch_limit: Option<usize>,
}
