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

/// A roster member's win/loss/spend record, derived in full from the
/// match list on every read. Nothing here is ever stored.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerStat {
	pub name: String,
	pub wins: usize,
	pub losses: usize,
	pub matches_played: usize,
	pub total_spent: u64,
}

impl PlayerStat {
	/// Win percentage over matches played, truncated to whole percent.
	/// A player with no games has a rate of zero, not a division error.
	pub fn win_rate(&self) -> u64 {
		if self.matches_played == 0 {
			return 0;
		}
		(self.wins * 100 / self.matches_played) as u64
	}
}

/// Tabulates one PlayerStat per roster member from the match list. The
/// result is ordered by wins descending; the sort is stable, so players
/// tied on wins keep their roster order. The data volume here is tens to
/// low thousands of matches, so a fresh pass per read is fine.
pub fn compute_stats(
	roster: &[String],
	matches: &[MatchRecord],
) -> Vec<PlayerStat> {
	let mut stats: Vec<PlayerStat> = roster
		.iter()
		.map(|name| PlayerStat {
			name: name.clone(),
			wins: matches.iter().filter(|m| &m.winner == name).count(),
			losses: matches.iter().filter(|m| &m.loser == name).count(),
			matches_played: matches
				.iter()
				.filter(|m| m.played_by(name))
				.count(),
			total_spent: matches
				.iter()
				.filter(|m| &m.payer == name)
				.map(|m| m.cost)
				.sum(),
		})
		.collect();

	stats.sort_by(|a, b| b.wins.cmp(&a.wins));
	stats
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};

	fn mk(winner: &str, loser: &str, payer: &str, cost: u64) -> MatchRecord {
		MatchRecord {
			id: format!("{}-{}-{}", winner, loser, cost),
			date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
			winner: winner.to_string(),
			loser: loser.to_string(),
			payer: payer.to_string(),
			cost,
		}
	}

	fn trio() -> Vec<String> {
		vec!["Minh".to_string(), "Toan".to_string(), "Hai".to_string()]
	}

	#[test]
	fn test_two_match_scenario() {
		let matches = vec![
			mk("Hai", "Minh", "Toan", 50000),
			mk("Minh", "Toan", "Minh", 100000),
		];

		let stats = compute_stats(&trio(), &matches);

		// Minh and Hai are tied on wins; Minh is first on the roster
		assert_eq!(stats[0].name, "Minh");
		assert_eq!((stats[0].wins, stats[0].losses), (1, 1));
		assert_eq!(stats[0].matches_played, 2);
		assert_eq!(stats[0].total_spent, 100000);

		assert_eq!(stats[1].name, "Hai");
		assert_eq!((stats[1].wins, stats[1].losses), (1, 0));
		assert_eq!(stats[1].total_spent, 0);

		assert_eq!(stats[2].name, "Toan");
		assert_eq!((stats[2].wins, stats[2].losses), (0, 1));
		assert_eq!(stats[2].total_spent, 50000);
	}

	#[test]
	fn test_spend_is_conserved() {
		let matches = vec![
			mk("Minh", "Toan", "Minh", 100000),
			mk("Hai", "Minh", "Toan", 50000),
			mk("Toan", "Hai", "Hai", 75000),
		];

		let stats = compute_stats(&trio(), &matches);

		let spent: u64 = stats.iter().map(|s| s.total_spent).sum();
		let cost: u64 = matches.iter().map(|m| m.cost).sum();
		assert_eq!(spent, cost);
	}

	#[test]
	fn test_wins_plus_losses_equals_played() {
		let matches = vec![
			mk("Minh", "Toan", "Minh", 100000),
			mk("Hai", "Minh", "Toan", 50000),
			mk("Minh", "Hai", "Hai", 75000),
		];

		for s in compute_stats(&trio(), &matches) {
			assert_eq!(s.wins + s.losses, s.matches_played, "{}", s.name);
		}
	}

	#[test]
	fn test_empty_match_list_yields_zeroes_in_roster_order() {
		let stats = compute_stats(&trio(), &[]);
		let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
		assert_eq!(names, vec!["Minh", "Toan", "Hai"]);
		for s in &stats {
			assert_eq!((s.wins, s.losses, s.matches_played), (0, 0, 0));
			assert_eq!(s.total_spent, 0);
			assert_eq!(s.win_rate(), 0);
		}
	}

	#[test]
	fn test_idempotent() {
		let matches = vec![
			mk("Minh", "Toan", "Minh", 100000),
			mk("Hai", "Minh", "Toan", 50000),
		];
		assert_eq!(
			compute_stats(&trio(), &matches),
			compute_stats(&trio(), &matches)
		);
	}

	#[test]
	fn test_win_rate() {
		let matches = vec![
			mk("Minh", "Toan", "Minh", 100000),
			mk("Hai", "Minh", "Toan", 50000),
		];
		let stats = compute_stats(&trio(), &matches);
		assert_eq!(stats[0].win_rate(), 50); // Minh, 1 of 2
		assert_eq!(stats[1].win_rate(), 100); // Hai, 1 of 1
		assert_eq!(stats[2].win_rate(), 0); // Toan, 0 of 1
	}
}
