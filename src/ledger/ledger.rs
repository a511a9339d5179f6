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
use crate::ledger::match_record::MatchRecord;
use anyhow::{bail, Error};
use chrono::Utc;
use rand::Rng;

/// The central data structure of this system: the full ordered collection
/// of match records plus the player roster and the payer rotation cursor.
///
/// The roster is an ordered sequence; its order is the rotation order.
/// Matches are kept most recent first. The cursor indexes the roster
/// member whose turn it is to pay; it only ever moves forward, one step
/// per recorded match, wrapping at the end of the roster.
#[derive(Debug)]
pub struct Ledger {
	roster: Vec<String>,
	/// Most recent first
	matches: Vec<MatchRecord>,
	payer_index: usize,
}

impl Ledger {
	pub fn new(
		roster: Vec<String>,
		matches: Vec<MatchRecord>,
		payer_index: usize,
	) -> Self {
		Self {
			roster,
			matches,
			payer_index,
		}
	}

	/// The roster member whose turn it is to pay for the next match
	pub fn next_payer(&self) -> Result<&str, Error> {
		if self.roster.is_empty() {
			bail!("Roster is empty");
		}

		match self.roster.get(self.payer_index) {
			Some(p) => Ok(p),
			None => bail!("Payer rotation cursor is out of range"),
		}
	}

	/// Records a completed match. The payer is assigned from the rotation
	/// cursor, which then advances by one position modulo roster length.
	/// All validation happens before any mutation, so a rejected
	/// submission leaves both the match list and the cursor untouched.
	pub fn record_match(
		&mut self,
		winner: &str,
		loser: &str,
		cost: u64,
	) -> Result<MatchRecord, Error> {
		let payer = self.next_payer()?.to_string();

		if winner == loser {
			bail!("Winner and loser must be different players");
		}
		self.check_member(winner)?;
		self.check_member(loser)?;

		let record = MatchRecord {
			id: generate_id(),
			date: Utc::now(),
			winner: winner.to_string(),
			loser: loser.to_string(),
			payer,
			cost,
		};

		self.matches.insert(0, record.clone());
		self.payer_index = (self.payer_index + 1) % self.roster.len();

		Ok(record)
	}

	/// Removes the match with the given id, reporting whether anything was
	/// removed. The rotation cursor is left alone either way: a deletion
	/// is a correction to history, not an undo of turn-taking.
	pub fn remove_match(&mut self, id: &str) -> bool {
		let before = self.matches.len();
		self.matches.retain(|m| m.id != id);
		self.matches.len() < before
	}

	fn check_member(&self, player: &str) -> Result<(), Error> {
		if !self.roster.iter().any(|p| p == player) {
			bail!("{} is not on the roster", player);
		}
		Ok(())
	}

	pub fn roster(&self) -> &[String] {
		&self.roster
	}

	pub fn matches(&self) -> &[MatchRecord] {
		&self.matches
	}

	pub fn payer_index(&self) -> usize {
		self.payer_index
	}

	pub fn into_parts(self) -> (Vec<String>, Vec<MatchRecord>, usize) {
		(self.roster, self.matches, self.payer_index)
	}
}

/// Matches carry an opaque unique id; hex from a thread-local RNG is
/// plenty for a roster of friends logging a handful of games a week.
fn generate_id() -> String {
	let mut rng = rand::thread_rng();
	format!("{:016x}", rng.gen::<u64>())
}
