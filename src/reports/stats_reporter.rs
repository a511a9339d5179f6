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
use crate::reports::table::Table;
use crate::stats::aggregator::PlayerStat;
use crate::util::money::format_vnd;

pub struct StatsReporter {
	stats: Vec<PlayerStat>,
}

impl StatsReporter {
	/// Expects stats already in leaderboard order (wins descending,
	/// roster order between ties), as compute_stats produces them.
	pub fn new(stats: Vec<PlayerStat>) -> Self {
		Self { stats }
	}

	pub fn print_leaderboard(&self) {
		if self.stats.is_empty() {
			println!("No players");
			return;
		}

		let mut table = Table::new(7);
		table.right_align(vec![0, 2, 3, 4, 5, 6]);

		table.add_header(vec![
			"#", "Player", "W", "L", "Played", "Win %", "Spent",
		]);
		table.add_separator();

		for (i, s) in self.stats.iter().enumerate() {
			table.add_row(vec![
				&(i + 1).to_string(),
				&s.name,
				&s.wins.to_string(),
				&s.losses.to_string(),
				&s.matches_played.to_string(),
				&format!("{}%", s.win_rate()),
				&format_vnd(s.total_spent),
			]);
		}

		table.print();
	}
}
