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
use chrono::{DateTime, Datelike, Utc};
use clap::ValueEnum;
use std::collections::BTreeMap;
use std::fmt;

/// The window used to filter matches for expense reporting
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Timeframe {
	Week,
	Month,
	Year,
	All,
}

impl fmt::Display for Timeframe {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Timeframe::Week => "week",
			Timeframe::Month => "month",
			Timeframe::Year => "year",
			Timeframe::All => "all time",
		};
		write!(f, "{}", label)
	}
}

/// Cost totals over the matches inside a timeframe. by_payer only carries
/// entries for payers with at least one included match.
#[derive(Debug, Default, PartialEq)]
pub struct ExpenseSummary {
	pub total: u64,
	pub by_payer: BTreeMap<String, u64>,
}

/// Sums match costs inside the given window, overall and per payer. An
/// empty match list or an empty window yields a zeroed summary, never an
/// error. Pure function of its inputs; now is passed in rather than read
/// from the clock so windows are reproducible.
pub fn compute_expenses(
	matches: &[MatchRecord],
	timeframe: Timeframe,
	now: DateTime<Utc>,
) -> ExpenseSummary {
	let mut summary = ExpenseSummary::default();

	for m in matches {
		if !in_window(&m.date, timeframe, &now) {
			continue;
		}
		summary.total += m.cost;
		*summary.by_payer.entry(m.payer.clone()).or_insert(0) += m.cost;
	}

	summary
}

fn in_window(
	date: &DateTime<Utc>,
	timeframe: Timeframe,
	now: &DateTime<Utc>,
) -> bool {
	match timeframe {
		Timeframe::Week => {
			// A plain recency window measured in rounded absolute days,
			// not an ISO calendar week. The absolute value means a match
			// dated slightly in the future also counts.
			let secs = (*now - *date).num_seconds().abs();
			(secs + 43_200) / 86_400 <= 7
		},
		Timeframe::Month => {
			date.year() == now.year() && date.month() == now.month()
		},
		Timeframe::Year => date.year() == now.year(),
		Timeframe::All => true,
	}
}
