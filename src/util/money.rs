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

/// Formats an integer đồng amount with comma thousand separators. VND has
/// no minor unit in practice, so there is never a fractional part.
pub fn format_vnd(amount: u64) -> String {
	let digits = amount.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);

	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_small_amounts_unchanged() {
		assert_eq!(format_vnd(0), "0");
		assert_eq!(format_vnd(7), "7");
		assert_eq!(format_vnd(999), "999");
	}

	#[test]
	fn test_grouping() {
		assert_eq!(format_vnd(1000), "1,000");
		assert_eq!(format_vnd(85000), "85,000");
		assert_eq!(format_vnd(1250000), "1,250,000");
		assert_eq!(format_vnd(1000000000), "1,000,000,000");
	}
}
