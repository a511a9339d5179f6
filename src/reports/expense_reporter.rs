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
use crate::stats::expenses::{ExpenseSummary, Timeframe};
use crate::util::money::format_vnd;

pub struct ExpenseReporter {
	summary: ExpenseSummary,
	timeframe: Timeframe,
}

impl ExpenseReporter {
	pub fn new(summary: ExpenseSummary, timeframe: Timeframe) -> Self {
		Self { summary, timeframe }
	}

	/// Per-payer totals for the window, grand total last. Payers with no
	/// matches in the window simply do not appear.
	pub fn print_summary(&self) {
		println!("Expenses ({})", self.timeframe);

		if self.summary.by_payer.is_empty() {
			println!("No matches in window");
			return;
		}

		let mut table = Table::new(2);
		table.right_align(vec![1]);

		table.add_header(vec!["Payer", "Paid"]);
		table.add_separator();

		for (payer, paid) in &self.summary.by_payer {
			table.add_row(vec![payer, &format_vnd(*paid)]);
		}

		table.add_separator();
		table.add_row(vec!["Total", &format_vnd(self.summary.total)]);

		table.print();
	}
}
