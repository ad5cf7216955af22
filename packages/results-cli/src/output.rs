//! Rendering and export of stored games.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use scorekeeper::{GameOverview, GameSummary, StoredGame};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::ExportFormat;

pub fn write_export(
    summary: &GameSummary,
    format: &ExportFormat,
    out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let writer: Box<dyn Write> = match out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };
    match format {
        ExportFormat::Csv => write_csv(summary, writer),
        ExportFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, summary)?;
            writeln!(writer)?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// Cumulative totals, one row per round, one column per player.
pub fn write_csv<W: Write>(
    summary: &GameSummary,
    writer: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut header = vec!["round".to_string()];
    header.extend(summary.players.iter().cloned());
    csv_writer.write_record(&header)?;
    for row in &summary.cumulative {
        let mut record = vec![row.round.to_string()];
        record.extend(row.totals.iter().map(i32::to_string));
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn format_date(date: OffsetDateTime) -> String {
    date.format(&Rfc3339).unwrap_or_else(|_| "unknown".to_string())
}

pub fn render_overview(games: &[GameOverview]) -> String {
    if games.is_empty() {
        return "No completed games.\n".to_string();
    }
    let mut out = format!(
        "{:<36}  {:>7}  {:<25}  {}\n",
        "id", "players", "finished", "location"
    );
    for game in games {
        let finished = game
            .end_date
            .map(format_date)
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<36}  {:>7}  {:<25}  {}",
            game.id, game.player_count, finished, game.location
        );
    }
    out
}

/// Scoreboard: per cell the running total, the round's change and actual/prediction.
pub fn render_scoreboard(game: &StoredGame, summary: &GameSummary) -> String {
    const CELL: usize = 18;
    let mut out = String::new();
    let _ = writeln!(out, "Game {}", game.id);
    let _ = writeln!(
        out,
        "Played {} at {}",
        format_date(game.start_date),
        game.location
    );

    let _ = write!(out, "{:>5} ", "round");
    for name in &game.players {
        let _ = write!(out, "{name:>CELL$}");
    }
    out.push('\n');

    for (round, row) in game.rounds.iter().zip(&summary.cumulative) {
        let _ = write!(out, "{:>5} ", row.round);
        for player in 0..game.player_count() {
            let change = cell(&round.score_changes, player)
                .map(|c| format!("{c:+}"))
                .unwrap_or_else(|| "-".to_string());
            let actual = cell(&round.actuals, player);
            let prediction = cell(&round.predictions, player);
            let entry = match (actual, prediction) {
                (Some(a), Some(p)) => format!("{a}/{p}"),
                (Some(a), None) => format!("{a}/-"),
                (None, Some(p)) => format!("-/{p}"),
                (None, None) => "-/-".to_string(),
            };
            let total = row.totals.get(player).copied().unwrap_or(0);
            let text = format!("{total} ({change}) {entry}");
            let _ = write!(out, "{text:>CELL$}");
        }
        out.push('\n');
    }

    let _ = write!(out, "{:>5} ", "final");
    for score in &summary.final_scores {
        let _ = write!(out, "{score:>CELL$}");
    }
    out.push_str("\n\n");

    out.push_str("Round diffs (predicted - taken):");
    for diff in &summary.round_diffs {
        match diff.diff {
            Some(d) => {
                let _ = write!(out, " {}:{d:+}", diff.round);
            }
            None => {
                let _ = write!(out, " {}:-", diff.round);
            }
        }
    }
    let _ = writeln!(out, "\nLargest diff: {}", summary.largest_diff);

    out.push_str("Accuracy:\n");
    for (name, accuracy) in game.players.iter().zip(&summary.accuracy) {
        let _ = writeln!(
            out,
            "  {name}: {:.2}% ({}/{})",
            accuracy.percent, accuracy.hits, accuracy.total
        );
    }
    out
}

/// A stored round may be shorter than the player list; missing slots read as unset.
fn cell<T: Copy>(column: &[Option<T>], player: usize) -> Option<T> {
    column.get(player).copied().flatten()
}
