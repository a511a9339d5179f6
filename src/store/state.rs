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
use crate::ledger::ledger::Ledger;
use crate::ledger::match_record::MatchRecord;
use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// The founding trio. Used only when neither a state file nor a config
/// roster exists, so a bare install still does something sensible.
pub const DEFAULT_ROSTER: [&str; 3] = ["Minh", "Toàn", "Hải"];

#[derive(
	Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
	#[default]
	Dark,
	Light,
}

impl Theme {
	pub fn toggle(self) -> Theme {
		match self {
			Theme::Dark => Theme::Light,
			Theme::Light => Theme::Dark,
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Theme::Dark => write!(f, "dark"),
			Theme::Light => write!(f, "light"),
		}
	}
}

/// Everything the tool persists, in one explicitly owned object: the
/// roster, the match history, the payer rotation cursor and the theme
/// preference. Loaded once on start and written back after every
/// mutation; derived values (stats, expenses) are never part of it.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AppState {
	pub players: Vec<String>,
	/// Most recent first
	pub matches: Vec<MatchRecord>,
	pub payer_index: usize,
	#[serde(default)]
	pub theme: Theme,
}

impl AppState {
	/// A fresh ledger seeded with the given roster, cursor at the top
	pub fn fresh(roster: Vec<String>) -> Self {
		Self {
			players: roster,
			matches: vec![],
			payer_index: 0,
			theme: Theme::default(),
		}
	}

	/// Loads the state file. A missing file means a fresh ledger; a
	/// malformed one is an error, so match history is never silently
	/// dropped and rebuilt from nothing.
	pub fn load(
		path: &Path,
		default_roster: Vec<String>,
	) -> Result<AppState, Error> {
		if !path.exists() {
			return Ok(AppState::fresh(default_roster));
		}

		let content = fs::read_to_string(path)?;
		serde_json::from_str(&content)
			.map_err(|e| anyhow!("failed to parse state file: {}", e))
	}

	pub fn save(&self, path: &Path) -> Result<(), Error> {
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(path, serde_json::to_string_pretty(self)?)?;
		Ok(())
	}

	/// Hands the ledger data to the rotation engine for mutation
	pub fn to_ledger(&self) -> Ledger {
		Ledger::new(
			self.players.clone(),
			self.matches.clone(),
			self.payer_index,
		)
	}

	/// Takes a mutated ledger back in ahead of a save
	pub fn absorb(&mut self, ledger: Ledger) {
		let (players, matches, payer_index) = ledger.into_parts();
		self.players = players;
		self.matches = matches;
		self.payer_index = payer_index;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{TimeZone, Utc};

	fn sample_state() -> AppState {
		AppState {
			players: vec!["Minh".to_string(), "Toan".to_string()],
			matches: vec![MatchRecord {
				id: "9b27de04".to_string(),
				date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
				winner: "Minh".to_string(),
				loser: "Toan".to_string(),
				payer: "Minh".to_string(),
				cost: 100000,
			}],
			payer_index: 1,
			theme: Theme::Light,
		}
	}

	#[test]
	fn test_json_round_trip() {
		let state = sample_state();
		let json = serde_json::to_string_pretty(&state).unwrap();
		let back: AppState = serde_json::from_str(&json).unwrap();
		assert_eq!(state, back);
	}

	#[test]
	fn test_theme_defaults_to_dark_when_absent() {
		let json = r#"{
			"players": ["Minh"],
			"matches": [],
			"payer_index": 0
		}"#;
		let state: AppState = serde_json::from_str(json).unwrap();
		assert_eq!(state.theme, Theme::Dark);
	}

	#[test]
	fn test_theme_toggle() {
		assert_eq!(Theme::Dark.toggle(), Theme::Light);
		assert_eq!(Theme::Light.toggle(), Theme::Dark);
	}

	#[test]
	fn test_missing_file_yields_fresh_state() {
		let roster: Vec<String> =
			DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect();
		let state = AppState::load(
			Path::new("/no/such/bida/ledger.json"),
			roster.clone(),
		)
		.unwrap();

		assert_eq!(state.players, roster);
		assert!(state.matches.is_empty());
		assert_eq!(state.payer_index, 0);
	}

	#[test]
	fn test_ledger_round_trip() {
		let mut state = sample_state();
		let mut ledger = state.to_ledger();
		ledger.record_match("Toan", "Minh", 50000).unwrap();
		state.absorb(ledger);

		assert_eq!(state.matches.len(), 2);
		assert_eq!(state.matches[0].payer, "Toan");
		assert_eq!(state.payer_index, 0);
	}
}
