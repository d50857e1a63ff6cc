//! Run/rest interval stopwatch.
//!
//! A group cycles `Idle -> Run -> Rest -> Run -> ... -> Idle`. Every
//! transition out of `Run` or `Rest` records a [`TimerSegment`] whose
//! duration is the timestamp delta, so the sampled display value never
//! leaks into recorded history.

use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u32);

/// The two active phases of an interval session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Run,
    Rest,
}

impl Phase {
    pub fn flipped(self) -> Self {
        match self {
            Phase::Run => Phase::Rest,
            Phase::Rest => Phase::Run,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Run => "Run",
            Phase::Rest => "Rest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    #[default]
    Idle,
    Run,
    Rest,
}

impl TimerMode {
    pub fn phase(self) -> Option<Phase> {
        match self {
            TimerMode::Idle => None,
            TimerMode::Run => Some(Phase::Run),
            TimerMode::Rest => Some(Phase::Rest),
        }
    }

    pub fn label(self) -> &'static str {
        self.phase().map_or("Idle", Phase::label)
    }
}

impl From<Phase> for TimerMode {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Run => TimerMode::Run,
            Phase::Rest => TimerMode::Rest,
        }
    }
}

/// One completed run or rest interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSegment {
    pub id: u64,
    pub phase: Phase,
    pub duration_ms: u64,
    pub completed_at_ms: u64,
}

/// A display row pairing a run with the rest that followed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRow<'a> {
    pub run: Option<&'a TimerSegment>,
    pub rest: Option<&'a TimerSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimerGroup {
    id: GroupId,
    name: String,
    mode: TimerMode,
    segment_start_ms: Option<u64>,
    history: Vec<TimerSegment>,
    elapsed_ms: u64,
    history_visible: bool,
}

impl TimerGroup {
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mode: TimerMode::Idle,
            segment_start_ms: None,
            history: Vec::new(),
            elapsed_ms: 0,
            history_visible: true,
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn history(&self) -> &[TimerSegment] {
        &self.history
    }

    /// Last sampled elapsed time of the open segment.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn history_visible(&self) -> bool {
        self.history_visible
    }

    pub fn is_active(&self) -> bool {
        self.mode != TimerMode::Idle
    }

    pub fn can_reset(&self) -> bool {
        !self.is_active() && !self.history.is_empty()
    }

    /// Begin a run segment. Ignored unless idle.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.is_active() {
            debug!("{}: start ignored while {}", self.name, self.mode.label());
            return false;
        }
        self.mode = TimerMode::Run;
        self.segment_start_ms = Some(now_ms);
        self.elapsed_ms = 0;
        info!("{}: started", self.name);
        true
    }

    /// Close the current segment and switch between run and rest.
    pub fn lap(&mut self, now_ms: u64) -> Option<TimerSegment> {
        let segment = self.close_segment(now_ms)?;
        self.mode = segment.phase.flipped().into();
        self.segment_start_ms = Some(now_ms);
        self.elapsed_ms = 0;
        Some(segment)
    }

    /// Close the current segment and go idle.
    pub fn stop(&mut self, now_ms: u64) -> Option<TimerSegment> {
        let segment = self.close_segment(now_ms)?;
        self.mode = TimerMode::Idle;
        self.segment_start_ms = None;
        self.elapsed_ms = 0;
        info!("{}: stopped with {} segments", self.name, self.history.len());
        Some(segment)
    }

    /// Clear history. Only allowed when idle with something to clear.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.history.clear();
        true
    }

    /// Refresh the displayed elapsed time. Display only.
    pub fn tick(&mut self, now_ms: u64) {
        self.elapsed_ms = self.elapsed_at(now_ms);
    }

    pub fn elapsed_at(&self, now_ms: u64) -> u64 {
        self.segment_start_ms
            .map_or(0, |start| now_ms.saturating_sub(start))
    }

    /// Blank names are ignored.
    pub fn rename(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.name = trimmed.to_string();
        true
    }

    pub fn toggle_history(&mut self) {
        self.history_visible = !self.history_visible;
    }

    pub fn total_ms(&self, phase: Phase) -> u64 {
        self.history
            .iter()
            .filter(|segment| segment.phase == phase)
            .map(|segment| segment.duration_ms)
            .sum()
    }

    /// Pair segments for display: a run opens a row, the next rest closes it.
    pub fn history_rows(&self) -> Vec<HistoryRow<'_>> {
        let mut rows: Vec<HistoryRow<'_>> = Vec::new();
        for segment in &self.history {
            match segment.phase {
                Phase::Run => rows.push(HistoryRow {
                    run: Some(segment),
                    rest: None,
                }),
                Phase::Rest => match rows.last_mut() {
                    Some(row) if row.run.is_some() && row.rest.is_none() => {
                        row.rest = Some(segment);
                    }
                    _ => rows.push(HistoryRow {
                        run: None,
                        rest: Some(segment),
                    }),
                },
            }
        }
        rows
    }

    fn close_segment(&mut self, now_ms: u64) -> Option<TimerSegment> {
        let phase = self.mode.phase()?;
        let start = self.segment_start_ms?;
        let segment = TimerSegment {
            id: self.next_segment_id(),
            phase,
            duration_ms: now_ms.saturating_sub(start),
            completed_at_ms: now_ms,
        };
        debug!(
            "{}: {} segment of {} ms",
            self.name,
            phase.label(),
            segment.duration_ms
        );
        self.history.push(segment.clone());
        Some(segment)
    }

    fn next_segment_id(&self) -> u64 {
        loop {
            let id = rand::random::<u64>();
            if !self.history.iter().any(|segment| segment.id == id) {
                return id;
            }
        }
    }
}
