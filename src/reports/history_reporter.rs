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
use crate::reports::table::Table;
use crate::util::money::format_vnd;

pub struct HistoryReporter {
	matches: Vec<MatchRecord>,
}

impl HistoryReporter {
	/// Expects matches most recent first, as the ledger keeps them
	pub fn new(matches: Vec<MatchRecord>) -> Self {
		Self { matches }
	}

	/// Prints the match log, optionally narrowed to matches involving
	/// the named player (in any role) and capped at a row count.
	pub fn print_history(
		&self,
		player: Option<&String>,
		limit: Option<usize>,
	) {
		let rows: Vec<&MatchRecord> = self
			.matches
			.iter()
			.filter(|m| match player {
				Some(p) => m.involves(p),
				None => true,
			})
			.take(limit.unwrap_or(usize::MAX))
			.collect();

		if rows.is_empty() {
			println!("No matches");
			return;
		}

		let mut table = Table::new(6);
		table.right_align(vec![4]);

		table.add_header(vec![
			"Date", "Winner", "Loser", "Payer", "Cost", "Id",
		]);
		table.add_separator();

		for m in rows {
			table.add_row(vec![
				&m.date.format("%Y-%m-%d %H:%M").to_string(),
				&m.winner,
				&m.loser,
				&m.payer,
				&format_vnd(m.cost),
				&m.id,
			]);
		}

		table.print();
	}
}
