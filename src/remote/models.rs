/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
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
use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};

/// The envelope the backing API wraps every payload in
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
	pub success: bool,
	pub data: Option<T>,
	pub error: Option<String>,
	pub message: Option<String>,
}

impl<T> Envelope<T> {
	/// Unwraps the payload, turning an unsuccessful envelope into an
	/// error carrying whatever explanation the server offered.
	pub fn into_data(self, context: &str) -> Result<T, Error> {
		self.check(context)?;
		match self.data {
			Some(d) => Ok(d),
			None => bail!("{}: response carried no data", context),
		}
	}

	/// Like into_data, for endpoints whose success carries no payload
	pub fn check(&self, context: &str) -> Result<(), Error> {
		if self.success {
			return Ok(());
		}

		let reason = self
			.error
			.as_deref()
			.or(self.message.as_deref())
			.unwrap_or("unknown error");
		bail!("{}: {}", context, reason)
	}
}

#[derive(Debug, Deserialize)]
pub struct Player {
	pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NextPayer {
	pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CreateMatchBody {
	pub winner: String,
	pub loser: String,
	pub cost: u64,
}

#[derive(Debug, Serialize)]
pub struct RecentMatchesParams {
	pub limit: usize,
}
