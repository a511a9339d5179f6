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
use crate::config::config_file::Config;
use crate::receipt::parser::ReceiptParser;
use crate::receipt::recognizer::{PlainTextRecognizer, Recognizer};
use crate::remote::api::RemoteStore;
use crate::reports::expense_reporter::ExpenseReporter;
use crate::reports::history_reporter::HistoryReporter;
use crate::reports::stats_reporter::StatsReporter;
use crate::stats::aggregator::compute_stats;
use crate::stats::expenses::{compute_expenses, Timeframe};
use crate::store::filesystem::Filesystem;
use crate::store::state::{AppState, DEFAULT_ROSTER};
use crate::util::money::format_vnd;
use anyhow::{bail, Error};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::fs;

mod config;
mod ledger;
mod receipt;
mod remote;
mod reports;
mod stats;
mod store;
mod util;

/// How many matches the history view shows by default when the ledger
/// lives on a remote store and every read is a bounded fetch
const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Parser)]
#[command(
	name = "bida",
	version = "1.0",
	about = "Pool match ledger and expense tracker"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	/// Player filter for Hist, match id for Rm, recognized-text file
	/// for Scan
	#[arg(required = false)]
	term: Option<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Custom state file location (default: ~/.local/share/bida/ledger.json)
	#[arg(short)]
	file: Option<String>,

	/// Custom config file location (default: ~/.config/bida/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Window for the expense report
	#[arg(short, long, value_enum, default_value_t = Timeframe::Month)]
	timeframe: Timeframe,

	/// Winner of the match being logged
	#[arg(short, long)]
	winner: Option<String>,

	/// Loser of the match being logged
	#[arg(short, long)]
	loser: Option<String>,

	/// Table cost of the match being logged, in đồng
	#[arg(short, long)]
	cost: Option<u64>,

	/// Maximum number of matches to show in history
	#[arg(long)]
	limit: Option<usize>,

	/// Skips confirmation of destructive commands
	#[arg(long)]
	force: bool,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if self.command == Directive::Reset && !self.force {
			bail!("Reset wipes all match history; pass --force to confirm");
		}

		Ok(())
	}
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Lb,   // leaderboard of wins, losses and spend
	Ex,   // expense summary for a timeframe
	Hist, // match history

	Log, // record a match result
	Rm,  // delete a match by id

	Payer, // show whose turn it is to pay

	Scan, // extract a bill total from recognized receipt text

	Theme, // toggle dark/light theme
	Reset, // wipe all stored data
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	args.validate()?;

	let fs = Filesystem::new();
	let mut config = fs.get_config(args.config.as_ref(), true)?;

	// Scanning is stateless, and theme/reset act on the local state
	// file, so none of them go over the wire even when a remote store
	// is configured.
	let remote = match args.command {
		Directive::Scan | Directive::Theme | Directive::Reset => None,
		_ => config.remote.take().filter(|r| r.api_url.is_some()),
	};

	match remote {
		Some(cfg) => run_remote(args, RemoteStore::new(cfg)?),
		None => run_local(args, config, fs),
	}
}

/// Runs a command against the local state file: load on start, mutate
/// through the ledger, persist on change.
fn run_local(args: Cli, config: Config, fs: Filesystem) -> Result<(), Error> {
	if args.command == Directive::Scan {
		return match &args.term {
			Some(source) => scan(source),
			None => bail!("No recognized-text file specified"),
		};
	}

	let state_path = fs.state_path(args.file.as_ref())?;

	// Reset must work even when the state file no longer parses
	if args.command == Directive::Reset {
		if state_path.exists() {
			fs::remove_file(&state_path)?;
		}
		println!("All data cleared");
		return Ok(());
	}

	let default_roster = config.roster.unwrap_or_else(|| {
		DEFAULT_ROSTER.iter().map(|s| s.to_string()).collect()
	});
	let mut state = AppState::load(&state_path, default_roster)?;

	match args.command {
		Directive::Lb => {
			let stats = compute_stats(&state.players, &state.matches);
			StatsReporter::new(stats).print_leaderboard();
		},
		Directive::Ex => {
			let summary =
				compute_expenses(&state.matches, args.timeframe, Utc::now());
			ExpenseReporter::new(summary, args.timeframe).print_summary();
		},
		Directive::Hist => {
			HistoryReporter::new(state.matches.clone())
				.print_history(args.term.as_ref(), args.limit);
		},
		Directive::Payer => {
			println!("Next payer: {}", state.to_ledger().next_payer()?);
		},
		Directive::Log => {
			let (winner, loser, cost) = log_fields(&args)?;

			let mut ledger = state.to_ledger();
			let record = ledger.record_match(winner, loser, cost)?;
			let next = ledger.next_payer()?.to_string();

			state.absorb(ledger);
			state.save(&state_path)?;

			println!("Logged: {}", record);
			println!("Next payer: {}", next);
		},
		Directive::Rm => {
			let id = match &args.term {
				Some(id) => id,
				None => bail!("No match id specified"),
			};

			let mut ledger = state.to_ledger();
			if ledger.remove_match(id) {
				state.absorb(ledger);
				state.save(&state_path)?;
				println!("Removed match {}", id);
			} else {
				println!("No match with id {}; nothing removed", id);
			}
		},
		Directive::Theme => {
			state.theme = state.theme.toggle();
			state.save(&state_path)?;
			println!("Theme set to {}", state.theme);
		},
		// handled above, before the state file is touched
		Directive::Scan | Directive::Reset => {},
	}

	Ok(())
}

/// Runs a command against the remote store. Reads always refetch and
/// mutations are single requests; a failure surfaces as an error with
/// nothing applied locally.
fn run_remote(args: Cli, store: RemoteStore) -> Result<(), Error> {
	match args.command {
		Directive::Lb => {
			let roster = store.players()?;
			let matches = store.matches_for_aggregation()?;
			StatsReporter::new(compute_stats(&roster, &matches))
				.print_leaderboard();
		},
		Directive::Ex => {
			let matches = store.matches_for_aggregation()?;
			let summary =
				compute_expenses(&matches, args.timeframe, Utc::now());
			ExpenseReporter::new(summary, args.timeframe).print_summary();
		},
		Directive::Hist => {
			let matches = store.recent_matches(
				args.limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
			)?;
			HistoryReporter::new(matches)
				.print_history(args.term.as_ref(), None);
		},
		Directive::Payer => {
			println!("Next payer: {}", store.next_payer()?);
		},
		Directive::Log => {
			let (winner, loser, cost) = log_fields(&args)?;
			let record = store.create_match(winner, loser, cost)?;
			println!("Logged: {}", record);
		},
		Directive::Rm => {
			let id = match &args.term {
				Some(id) => id,
				None => bail!("No match id specified"),
			};
			store.delete_match(id)?;
			println!("Removed match {}", id);
		},
		// always routed to the local runner
		Directive::Scan | Directive::Theme | Directive::Reset => {},
	}

	Ok(())
}

fn log_fields(args: &Cli) -> Result<(&String, &String, u64), Error> {
	match (&args.winner, &args.loser, args.cost) {
		(Some(w), Some(l), Some(c)) => Ok((w, l, c)),
		_ => bail!("Log requires --winner, --loser and --cost"),
	}
}

/// Replays recognized receipt text through the parser and reports the
/// detected total, if any. Progress goes to stderr so the result line
/// stays the only thing on stdout.
fn scan(source: &str) -> Result<(), Error> {
	let text = PlainTextRecognizer.recognize(source, &mut |pct| {
		eprint!("\rScanning... {}%", pct);
		true
	})?;
	eprintln!();

	match ReceiptParser::new().extract_total(&text) {
		Some(amount) => {
			println!("Detected total: {}", format_vnd(amount))
		},
		None => println!(
			"Could not find a total; please enter the amount manually"
		),
	}

	Ok(())
}
