//! Text rendering of an analysis.

use std::fmt::{self, Write};

use engine_core::GameMetadata;
use engine_games::Analysis;

/// Render the starting position and the solved result for a terminal.
pub fn render(
    analysis: &Analysis,
    metadata: &GameMetadata,
    start: &str,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, analysis, metadata, start)?;
    Ok(out)
}

fn write_report(
    out: &mut impl Write,
    analysis: &Analysis,
    metadata: &GameMetadata,
    start: &str,
) -> fmt::Result {
    writeln!(out, "{}", analysis.display_name)?;
    if !metadata.description.is_empty() {
        writeln!(out, "{}", metadata.description)?;
    }
    writeln!(out)?;
    out.write_str(start)?;
    if !start.ends_with('\n') {
        writeln!(out)?;
    }
    writeln!(out)?;

    writeln!(out, "{} moves first", metadata.side_label(analysis.first))?;
    writeln!(out, "Predicted winner: {}", analysis.predicted_winner)?;
    writeln!(out, "Root value: {}", analysis.root_value)?;
    match &analysis.best_move {
        Some(mv) => writeln!(out, "Best move: {mv}")?,
        None => writeln!(out, "Best move: none, the game is already over")?,
    }
    if !analysis.principal_variation.is_empty() {
        writeln!(out, "Best play:")?;
        for (ply, mv) in analysis.principal_variation.iter().enumerate() {
            writeln!(out, "  {}. {mv}", ply + 1)?;
        }
    }

    let stats = &analysis.stats;
    writeln!(
        out,
        "Tree: {} nodes, {} terminal, depth {}",
        analysis.size, stats.terminal_nodes, stats.max_depth
    )?;
    writeln!(
        out,
        "Terminal outcomes: {} {} wins, {} {} wins, {} draws",
        stats.maximizer_wins,
        metadata.maximizing_label,
        stats.minimizer_wins,
        metadata.minimizing_label,
        stats.draws
    )?;
    if analysis.verified {
        writeln!(out, "Verified against the game")?;
    }

    Ok(())
}
