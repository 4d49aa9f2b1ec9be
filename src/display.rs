//! Table construction and in-place frame replacement.

use crate::{fmt, host::HostGauges, model::RoomRecord};
use chrono::{DateTime, Local};
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Fixed column headers of the room table, matching the recorder's operator
/// conventions.
const ROOM_HEADERS: [&str; 10] = [
    "行号",
    "房间ID",
    "主播",
    "直播标题",
    "直播状态",
    "开播时间",
    "录制时间",
    "转码用时",
    "上传用时",
    "当前状态",
];

const HOST_HEADERS: [&str; 4] = ["CPU", "Memory", "NetSent", "NetRecv"];

fn styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );
    table
}

/// Builds the room table. Expects records already sorted for display; `now`
/// pins the wall clock for the elapsed-time columns.
pub fn room_table(now: DateTime<Local>, records: &[RoomRecord]) -> Table {
    let mut table = styled_table(&ROOM_HEADERS);
    for record in records {
        let info = &record.info;
        table.add_row(vec![
            record.row_id.to_string(),
            info.room_id.clone(),
            info.uname.clone(),
            info.title.clone(),
            info.live_status.to_string(),
            fmt::timestamp_to_local(info.live_start_time),
            fmt::stage_elapsed(now, info.record_start_time, info.record_end_time),
            fmt::stage_elapsed(now, info.decode_start_time, info.decode_end_time),
            fmt::stage_elapsed(now, info.upload_start_time, info.upload_end_time),
            record.state_label().to_string(),
        ]);
    }
    table
}

/// Builds the single-row host gauge table.
pub fn host_table(gauges: &HostGauges) -> Table {
    let mut table = styled_table(&HOST_HEADERS);
    table.add_row(vec![
        format!("{:.1}%", gauges.cpu_percent),
        format!(
            "{:.1}%  {}/{}",
            gauges.memory_percent,
            fmt::bytes_to_human(gauges.memory_used_bytes as f64),
            fmt::bytes_to_human(gauges.memory_total_bytes as f64),
        ),
        format!("{}/s", fmt::bytes_to_human(gauges.send_rate_bytes_per_sec)),
        format!("{}/s", fmt::bytes_to_human(gauges.recv_rate_bytes_per_sec)),
    ]);
    table
}

/// Repaints the frame in place: cursor home, clear everything below, then
/// the wall-clock title line and both tables.
pub fn paint<W: Write>(
    out: &mut W,
    now: DateTime<Local>,
    records: &[RoomRecord],
    gauges: &HostGauges,
) -> io::Result<()> {
    execute!(out, MoveTo(0, 0), Clear(ClearType::FromCursorDown))?;
    writeln!(out, "{}", now.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out, "{}", room_table(now, records))?;
    writeln!(out, "{}", host_table(gauges))?;
    out.flush()
}
