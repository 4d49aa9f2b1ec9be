//! Wire-level room records and the pipeline-state label mapping.

use serde::Deserialize;

/// One room as reported by the recorder's `/api/infos` payload. Field names
/// match the wire keys exactly; every key is required, and a missing or
/// mis-typed key fails decoding of the whole snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomInfo {
    #[serde(rename = "RoomID")]
    pub room_id: String,
    pub start_time: String,
    pub end_time: String,
    pub auto_record: bool,
    pub auto_upload: bool,
    pub live_status: i64,
    pub lock_status: i64,
    pub uname: String,
    pub title: String,
    /// Epoch seconds; 0 means the room never went live.
    pub live_start_time: i64,
    pub record_status: i64,
    pub record_start_time: i64,
    pub record_end_time: i64,
    pub decode_status: i64,
    pub decode_start_time: i64,
    pub decode_end_time: i64,
    pub upload_status: i64,
    pub upload_start_time: i64,
    pub upload_end_time: i64,
    pub need_upload: bool,
    /// Overall pipeline-state code; see [`PipelineState`].
    pub state: i64,
}

/// Overall lifecycle stage of a room's pipeline, as coded by the recorder.
/// Codes outside `0..=10` carry no label and render as an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Init,
    Start,
    Running,
    Waiting,
    Restart,
    Decoding,
    DecodeEnd,
    UpdateWait,
    Updating,
    UpdateEnd,
    Stop,
}

impl PipelineState {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Init),
            1 => Some(Self::Start),
            2 => Some(Self::Running),
            3 => Some(Self::Waiting),
            4 => Some(Self::Restart),
            5 => Some(Self::Decoding),
            6 => Some(Self::DecodeEnd),
            7 => Some(Self::UpdateWait),
            8 => Some(Self::Updating),
            9 => Some(Self::UpdateEnd),
            10 => Some(Self::Stop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            // "iinit" is the label the recorder itself reports; kept verbatim.
            PipelineState::Init => "iinit",
            PipelineState::Start => "start",
            PipelineState::Running => "running",
            PipelineState::Waiting => "waiting",
            PipelineState::Restart => "restart",
            PipelineState::Decoding => "decoding",
            PipelineState::DecodeEnd => "decodeEnd",
            PipelineState::UpdateWait => "updateWait",
            PipelineState::Updating => "updating",
            PipelineState::UpdateEnd => "updateEnd",
            PipelineState::Stop => "stop",
        }
    }
}

/// A [`RoomInfo`] pinned to its position in the upstream mapping's key order.
/// `row_id` is recomputed on every poll from the current iteration order; it
/// is a display ordinal, not a stable identifier.
#[derive(Debug, Clone)]
pub struct RoomRecord {
    pub row_id: usize,
    pub info: RoomInfo,
}

impl RoomRecord {
    /// Display sort key: higher pipeline states first, ties broken with the
    /// earlier iteration position first.
    pub fn sort_key(&self) -> i64 {
        self.info.state * 10 - self.row_id as i64
    }

    pub fn state_label(&self) -> &'static str {
        PipelineState::from_code(self.info.state)
            .map(|state| state.as_str())
            .unwrap_or("")
    }
}

/// Sorts records descending by [`RoomRecord::sort_key`].
pub fn sort_records(records: &mut [RoomRecord]) {
    records.sort_by_key(|r| std::cmp::Reverse(r.sort_key()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(state: i64, row_id: usize) -> RoomRecord {
        let info: RoomInfo = serde_json::from_value(serde_json::json!({
            "RoomID": format!("room-{row_id}"),
            "StartTime": "00:00",
            "EndTime": "23:59",
            "AutoRecord": true,
            "AutoUpload": false,
            "LiveStatus": 1,
            "LockStatus": 0,
            "Uname": "streamer",
            "Title": "title",
            "LiveStartTime": 0,
            "RecordStatus": 0,
            "RecordStartTime": 0,
            "RecordEndTime": 0,
            "DecodeStatus": 0,
            "DecodeStartTime": 0,
            "DecodeEndTime": 0,
            "UploadStatus": 0,
            "UploadStartTime": 0,
            "UploadEndTime": 0,
            "NeedUpload": false,
            "State": state,
        }))
        .unwrap();
        RoomRecord { row_id, info }
    }

    #[test]
    fn state_labels() {
        assert_eq!(PipelineState::from_code(2).unwrap().as_str(), "running");
        assert_eq!(PipelineState::from_code(10).unwrap().as_str(), "stop");
        assert_eq!(PipelineState::from_code(0).unwrap().as_str(), "iinit");
        assert_eq!(PipelineState::from_code(11), None);
        assert_eq!(PipelineState::from_code(-1), None);
        assert_eq!(record(11, 0).state_label(), "");
    }

    #[test]
    fn sort_is_descending_by_state_then_later_row() {
        let mut records = vec![record(2, 0), record(2, 1), record(1, 5)];
        sort_records(&mut records);
        let order: Vec<(i64, usize)> = records.iter().map(|r| (r.info.state, r.row_id)).collect();
        // Keys: (2,0) -> 20, (2,1) -> 19, (1,5) -> 5.
        assert_eq!(order, vec![(2, 0), (2, 1), (1, 5)]);
    }

    #[test]
    fn equal_states_put_earlier_rows_first() {
        // 3*10-2 = 28 beats 3*10-7 = 23.
        let mut records = vec![record(3, 7), record(3, 2)];
        sort_records(&mut records);
        let order: Vec<usize> = records.iter().map(|r| r.row_id).collect();
        assert_eq!(order, vec![2, 7]);
    }
}
