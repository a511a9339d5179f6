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
use crate::util::money::format_vnd;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single completed game between two roster members. Assembled by the
/// Ledger at creation time and never edited afterward; the id and date are
/// assigned by whoever owns the ledger (locally or by the remote store),
/// and the payer comes from the rotation cursor, not from user input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
	pub id: String,
	pub date: DateTime<Utc>,
	pub winner: String,
	pub loser: String,
	pub payer: String,
	pub cost: u64,
}

impl MatchRecord {
	/// Whether the named player took part in this match as a competitor.
	/// Paying for a match you did not play does not count as playing it.
	pub fn played_by(&self, player: &str) -> bool {
		self.winner == player || self.loser == player
	}

	/// Whether the named player appears on this match in any role
	pub fn involves(&self, player: &str) -> bool {
		self.played_by(player) || self.payer == player
	}
}

impl fmt::Display for MatchRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {} def. {}, {} paid by {} [{}]",
			self.date.format("%Y-%m-%d %H:%M"),
			self.winner,
			self.loser,
			format_vnd(self.cost),
			self.payer,
			self.id
		)
	}
}
