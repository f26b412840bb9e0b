//! Per-vessel route analysis: transit segments, totals, and idle time.

mod analyzer;

pub use analyzer::{analyze_vessel_schedule, ScheduleAnalyzer, DEFAULT_MIN_SEGMENT_NM};
