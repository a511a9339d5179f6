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
use regex::Regex;

/// Line markers for the bill total, English plus unaccented Vietnamese.
/// OCR output for Vietnamese receipts tends to drop diacritics, so the
/// bare forms are what we actually see ("Tong", "Thanh toan", "Cong").
const TOTAL_KEYWORDS: [&str; 7] = [
	"total",
	"tong",
	"amount",
	"due",
	"thanh toan",
	"thanh tien",
	"cong",
];

/// Below this many digits, a number on a total line is more likely a
/// quantity or a page number than a đồng amount.
const MIN_DIGITS: usize = 4;

/// Best-effort extractor of a monetary total from recognized receipt
/// text. It never fails; when nothing on the receipt looks like a total,
/// the caller is expected to ask the user for the amount instead.
pub struct ReceiptParser {
	number_regex: Regex,
}

impl ReceiptParser {
	pub fn new() -> Self {
		// digit runs, possibly with thousand separators mixed in
		let re = Regex::new(r"[\d.,]+").unwrap();
		Self { number_regex: re }
	}

	/// Scans lines in order for one containing a total keyword, then
	/// takes the last numeric substring on that line; labels and
	/// quantities precede the amount on real receipts, so rightmost wins.
	/// Dots and commas are VND thousand separators, never decimal points,
	/// so stripping every non-digit yields the raw amount. Lines whose
	/// amount fails the digit-count filter are skipped and the scan
	/// continues with later keyword lines.
	pub fn extract_total(&self, raw_text: &str) -> Option<u64> {
		for line in raw_text.lines() {
			let lower = line.to_lowercase();
			if !TOTAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
				continue;
			}

			let last = match self.number_regex.find_iter(line).last() {
				Some(m) => m.as_str(),
				None => continue,
			};

			let digits: String =
				last.chars().filter(|c| c.is_ascii_digit()).collect();
			if digits.len() < MIN_DIGITS {
				continue;
			}

			if let Ok(amount) = digits.parse::<u64>() {
				return Some(amount);
			}
		}

		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_vietnamese_total_line() {
		let parser = ReceiptParser::new();
		let text = "BIDA CLUB 79\n2x Tiger 44,000\nTong: 1,250,000\n";
		assert_eq!(parser.extract_total(text), Some(1250000));
	}

	#[test]
	fn test_last_number_on_line_wins() {
		let parser = ReceiptParser::new();
		assert_eq!(parser.extract_total("Qty 2 Total 85000"), Some(85000));
	}

	#[test]
	fn test_keyword_match_is_case_insensitive() {
		let parser = ReceiptParser::new();
		assert_eq!(
			parser.extract_total("TONG CONG: 460.000"),
			Some(460000)
		);
	}

	#[test]
	fn test_no_keyword_line_is_a_miss() {
		let parser = ReceiptParser::new();
		let text = "Bia Saigon 18,000\nTra da 5,000\n";
		assert_eq!(parser.extract_total(text), None);
	}

	#[test]
	fn test_short_numbers_are_noise() {
		let parser = ReceiptParser::new();
		assert_eq!(parser.extract_total("Total 2\nPage 12 of 30"), None);
	}

	#[test]
	fn test_scan_continues_past_noisy_total_line() {
		let parser = ReceiptParser::new();
		let text = "Sub total x2\nThanh toan: 120,000\n";
		assert_eq!(parser.extract_total(text), Some(120000));
	}

	#[test]
	fn test_keyword_line_without_numbers_is_skipped() {
		let parser = ReceiptParser::new();
		let text = "Tong cong\nAmount due: 95.000\n";
		assert_eq!(parser.extract_total(text), Some(95000));
	}

	#[test]
	fn test_empty_input() {
		let parser = ReceiptParser::new();
		assert_eq!(parser.extract_total(""), None);
	}
}
