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
use anyhow::{bail, Error};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Seam for the OCR engine. Any engine that can turn a source into
/// recognized text while reporting incremental progress satisfies this;
/// the receipt parser only ever sees the text, so engines are
/// interchangeable.
pub trait Recognizer {
	/// Produces recognized text from the given source. Progress is
	/// reported as 0-100; returning false from the callback cancels the
	/// recognition, which then resolves as an error.
	fn recognize(
		&self,
		source: &str,
		on_progress: &mut dyn FnMut(u8) -> bool,
	) -> Result<String, Error>;
}

/// Replays text some external OCR engine already produced, straight from
/// a file on disk. Progress is byte-accurate against the file size.
pub struct PlainTextRecognizer;

impl Recognizer for PlainTextRecognizer {
	fn recognize(
		&self,
		source: &str,
		on_progress: &mut dyn FnMut(u8) -> bool,
	) -> Result<String, Error> {
		let file = File::open(source)?;
		let total = file.metadata()?.len().max(1);
		let mut reader = BufReader::new(file);

		let mut text = String::new();
		let mut seen: u64 = 0;
		loop {
			let read = reader.read_line(&mut text)?;
			if read == 0 {
				break;
			}

			seen += read as u64;
			let pct = ((seen * 100) / total).min(100) as u8;
			if !on_progress(pct) {
				bail!("Recognition cancelled");
			}
		}

		Ok(text)
	}
}
