//! Handler for the `stats` command.
//!
//! Prints three blocks for a board: the column layout counts, one line per
//! column with its card counts, and the performance report.

use serde_json::json;
use tabled::Tabled;

use crate::adapter::inbound::cli::output;
use crate::domain::{BoardStatistics, ColumnStatistics, PerformanceReport};
use crate::domain::{Board, BoardId, ColumnId};
use crate::error::Result;
use crate::infrastructure::bootstrap::Services;

#[derive(Tabled)]
struct ColumnStatsRow {
    #[tabled(rename = "ID")]
    id: ColumnId,
    #[tabled(rename = "Column")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Position")]
    position: i32,
    #[tabled(rename = "Cards")]
    cards: usize,
    #[tabled(rename = "Blocked")]
    blocked: usize,
}

/// Execute `stats`.
pub fn execute(services: &Services, id: BoardId) -> Result<()> {
    let board = services.boards.require(id)?;
    render_board(services, &board)
}

/// Gather and print every statistics block for `board`.
pub(crate) fn render_board(services: &Services, board: &Board) -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    let layout = services.statistics.board_statistics(board);
    let columns = services.statistics.column_statistics(board)?;
    let report = services.statistics.performance_report(board)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "stats",
            "board": layout,
            "columns": columns,
            "performance": report,
            "completion_rate": report.completion_rate(),
        }));
        return Ok(());
    }

    print_layout(&layout);
    print_columns(&columns);
    print_report(&report);
    Ok(())
}

fn print_layout(layout: &BoardStatistics) {
    output::section("Board statistics");
    output::field("Board", layout.board_id);
    output::field("Columns", layout.total_columns);
    output::field("Initial", layout.initial_columns);
    output::field("Pending", layout.pending_columns);
    output::field("Final", layout.final_columns);
    output::field("Cancel", layout.cancel_columns);
}

fn print_columns(columns: &[ColumnStatistics]) {
    output::section("Column statistics");
    let rows: Vec<_> = columns
        .iter()
        .map(|c| ColumnStatsRow {
            id: c.column_id,
            name: c.name.clone(),
            kind: c.kind.to_string(),
            position: c.position,
            cards: c.cards,
            blocked: c.blocked_cards,
        })
        .collect();
    output::table(&rows);
}

fn print_report(report: &PerformanceReport) {
    output::section("Performance report");
    output::field("Generated", output::timestamp(&report.generated_at));
    output::field("Board", report.board_id);
    output::field("Cards", report.total_cards);
    output::field("Active", report.active_cards);
    output::field("Finished", report.finished_cards);
    output::field("Canceled", report.canceled_cards);
    output::field("Blocked", report.blocked_cards);
    output::field("Blocks", report.total_blocks);
    output::field("Completion", format!("{:.1}%", report.completion_rate()));
}
