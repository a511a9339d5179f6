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
use crate::config::config_file::Remote;
use crate::ledger::match_record::MatchRecord;
use crate::remote::http::Client;
use crate::remote::models::{
	CreateMatchBody, Envelope, NextPayer, Player, RecentMatchesParams,
};
use anyhow::{bail, Error};
use serde_json::Value;

/// Matches the page-size guard on the server; reports that need the
/// whole history fetch at most this many records.
const DEFAULT_FETCH_LIMIT: usize = 500;

/// The remote backing store: the server owns the ledger, the rotation
/// cursor and id/date/payer assignment. Every call here is an
/// independent request; nothing is cached or applied optimistically, so
/// a failed call leaves no local state to roll back.
pub struct RemoteStore {
	http: Client,
	fetch_limit: usize,
}

impl RemoteStore {
	pub fn new(config: Remote) -> Result<Self, Error> {
		let api_url = match config.api_url {
			Some(url) => url,
			None => bail!("no api_url in remote config"),
		};

		Ok(RemoteStore {
			http: Client::new(&api_url, config.api_key),
			fetch_limit: config
				.fetch_limit
				.unwrap_or(DEFAULT_FETCH_LIMIT),
		})
	}

	pub fn players(&self) -> Result<Vec<String>, Error> {
		let resp: Envelope<Vec<Player>> =
			self.http.get("players", None::<()>)?;
		Ok(resp
			.into_data("fetching players")?
			.into_iter()
			.map(|p| p.name)
			.collect())
	}

	/// Most recent first, capped at the given count by the server
	pub fn recent_matches(
		&self,
		limit: usize,
	) -> Result<Vec<MatchRecord>, Error> {
		let resp: Envelope<Vec<MatchRecord>> = self.http.get(
			"matches/recent",
			Some(RecentMatchesParams { limit }),
		)?;
		resp.into_data("fetching matches")
	}

	/// The bounded fetch backing stats and expense reports
	pub fn matches_for_aggregation(
		&self,
	) -> Result<Vec<MatchRecord>, Error> {
		self.recent_matches(self.fetch_limit)
	}

	pub fn next_payer(&self) -> Result<String, Error> {
		let resp: Envelope<NextPayer> =
			self.http.get("matches/payer/next", None::<()>)?;
		Ok(resp.into_data("fetching next payer")?.name)
	}

	/// Asks the server to record a match; it assigns id, date and payer.
	/// The winner/loser check runs here too so a doomed submission never
	/// leaves the machine.
	pub fn create_match(
		&self,
		winner: &str,
		loser: &str,
		cost: u64,
	) -> Result<MatchRecord, Error> {
		if winner == loser {
			bail!("Winner and loser must be different players");
		}

		let resp: Envelope<MatchRecord> = self.http.post(
			"matches",
			&CreateMatchBody {
				winner: winner.to_string(),
				loser: loser.to_string(),
				cost,
			},
		)?;
		resp.into_data("creating match")
	}

	pub fn delete_match(&self, id: &str) -> Result<(), Error> {
		let resp: Envelope<Value> =
			self.http.delete(&format!("matches/{}", id))?;
		resp.check("deleting match")
	}
}
