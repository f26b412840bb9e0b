//! Fleet optimizer that combines analysis, sequencing, and scoring.
//!
//! # Phases
//!
//! 0. Join assignments to the rosters and analyze every vessel (baseline).
//! 1. Resequence each vessel's visits with nearest-neighbor + 2-opt.
//! 2. Move projects to clearly better-suited, closer vessels.
//! 3. Re-analyze every vessel on its new working list.
//! 4. Compute original-minus-optimized deltas.
//! 5. Derive a confidence score and warnings.
//!
//! Phases 1 and 2 each run once; a vessel that gains a project in phase 2
//! is not resequenced again.

use std::collections::HashMap;
use std::time::Instant;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use super::OptimizerConfig;
use crate::distance::{fuel_liters, fuel_rate, transit_hours};
use crate::error::ConfigError;
use crate::evaluation::ScheduleAnalyzer;
use crate::models::{
    ChangeImpact, ChangeKind, FleetMetrics, FleetOptimizationResult, GeoPoint, OptimizationChange,
    OptimizationInput, OptimizationSummary, Positioned, ProjectLocation, ScheduledVisit,
    SkipReason, SkippedAssignment, VesselPosition, VesselSchedule,
};
use crate::scoring::{score_vessel_for_project, SuitabilityScore};
use crate::sequencing::SequenceOptimizer;

const BASE_CONFIDENCE: f64 = 70.0;
const MAX_CONFIDENCE: f64 = 95.0;
const MANY_CHANGES: usize = 3;
const LARGE_SAVING_NM: f64 = 100.0;
const MEDIUM_SAVING_NM: f64 = 50.0;
const LARGE_COST_SAVING: f64 = 5_000.0;
const MINIMAL_SAVING_NM: f64 = 10.0;
const SEQUENCE_SEPARATOR: &str = " → ";
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Optimizes vessel schedules across a fleet.
///
/// Holds only configuration; every call to [`optimize`](Self::optimize)
/// works on fresh state, so one optimizer can serve many threads.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fleet_routing::fleet::FleetOptimizer;
/// use fleet_routing::models::{
///     OptimizationInput, ProjectLocation, VesselAssignment, VesselPosition, VesselType,
/// };
///
/// let day = |d| Utc.with_ymd_and_hms(2026, 3, d, 0, 0, 0).unwrap();
/// let input = OptimizationInput {
///     vessels: vec![VesselPosition::new("v1", "Falcon", VesselType::Tugboat, 24.0, 54.0)],
///     projects: vec![
///         ProjectLocation::new("p1", "Jetty", 24.1, 54.0, day(1), day(28))
///             .with_required_type(VesselType::Tugboat),
///     ],
///     current_assignments: vec![VesselAssignment::new("v1", "p1", day(2), day(4))],
/// };
///
/// let result = FleetOptimizer::default().optimize_at(&input, day(1));
/// assert!(result.changes.is_empty());
/// assert!(result.confidence >= 70.0 && result.confidence <= 95.0);
/// assert!(!result.warnings.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FleetOptimizer {
    config: OptimizerConfig,
    analyzer: ScheduleAnalyzer,
    sequencer: SequenceOptimizer,
}

impl FleetOptimizer {
    /// Creates an optimizer after validating `config`.
    pub fn new(config: OptimizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let analyzer = ScheduleAnalyzer::new(config.min_segment_nm)
            .with_default_speed(config.default_speed_knots);
        let sequencer = SequenceOptimizer::new(config.two_opt_max_passes);
        Ok(Self {
            config,
            analyzer,
            sequencer,
        })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes the fleet using the current time as the utilization origin.
    pub fn optimize(&self, input: &OptimizationInput) -> FleetOptimizationResult {
        self.optimize_at(input, Utc::now())
    }

    /// Optimizes the fleet, measuring utilization from `now`.
    ///
    /// Never fails: dangling references are reported in `skipped`, and a
    /// fleet with nothing to improve yields no changes plus warnings.
    #[tracing::instrument(
        level = "debug",
        name = "fleet optimize",
        skip_all,
        fields(
            vessels = input.vessels.len(),
            projects = input.projects.len(),
            assignments = input.current_assignments.len()
        )
    )]
    pub fn optimize_at(
        &self,
        input: &OptimizationInput,
        now: DateTime<Utc>,
    ) -> FleetOptimizationResult {
        let deadline = self.config.time_limit.map(|limit| Instant::now() + limit);
        let mut run = Run {
            optimizer: self,
            input,
            deadline,
            timed_out: false,
        };

        // Phase 0: baseline.
        let (mut working, holders, skipped) = run.join();
        for list in &mut working {
            // Same stable order the analyzer visits them in.
            list.sort_by_key(|p| p.visit.start_date);
        }
        let original_schedules: Vec<VesselSchedule> = input
            .vessels
            .iter()
            .zip(&working)
            .map(|(vessel, list)| self.analyze(vessel, list))
            .collect();
        let original_metrics = self.metrics(&original_schedules, now);

        let mut changes = Vec::new();

        // Phase 1: resequence.
        run.resequence(&mut working, &original_schedules, &mut changes);

        // Phase 2: reassign.
        run.reassign(&mut working, &holders, &mut changes);

        // Phase 3: recompute.
        let optimized_schedules: Vec<VesselSchedule> = input
            .vessels
            .iter()
            .zip(&working)
            .map(|(vessel, list)| self.analyze(vessel, list))
            .collect();
        let optimized_metrics = self.metrics(&optimized_schedules, now);

        // Phase 4: summary.
        let fuel_saved =
            original_metrics.total_fleet_fuel_liters - optimized_metrics.total_fleet_fuel_liters;
        let summary = OptimizationSummary {
            distance_saved_nm: original_metrics.total_fleet_distance_nm
                - optimized_metrics.total_fleet_distance_nm,
            fuel_saved_liters: fuel_saved,
            time_saved_hours: original_metrics.total_fleet_hours
                - optimized_metrics.total_fleet_hours,
            cost_saved: fuel_saved * self.config.fuel_price_per_liter,
            utilization_gain_percent: optimized_metrics.average_utilization
                - original_metrics.average_utilization,
        };

        // Phase 5: confidence and warnings.
        let confidence = confidence(changes.len(), &summary);
        let mut warnings = Vec::new();
        if changes.is_empty() {
            warnings.push("Current schedule is near-optimal, no improvements found".to_string());
        }
        if summary.distance_saved_nm < MINIMAL_SAVING_NM {
            warnings.push(format!(
                "Savings minimal: less than {} nm of transit saved",
                MINIMAL_SAVING_NM
            ));
        }
        if run.timed_out {
            warnings.push(
                "Time limit reached; remaining vessels and projects were left unchanged"
                    .to_string(),
            );
        }
        if !skipped.is_empty() {
            warnings.push(format!(
                "{} assignment(s) skipped: unknown vessel or project",
                skipped.len()
            ));
        }

        info!(
            "Fleet optimized: {} changes, {:.1} nm saved, confidence {:.0}",
            changes.len(),
            summary.distance_saved_nm,
            confidence
        );

        FleetOptimizationResult {
            original_schedules,
            original_metrics,
            optimized_schedules,
            optimized_metrics,
            changes,
            summary,
            confidence,
            warnings,
            skipped,
        }
    }

    /// Sums schedules into fleet metrics, with utilization measured from `now`.
    fn metrics(&self, schedules: &[VesselSchedule], now: DateTime<Utc>) -> FleetMetrics {
        let mut metrics = FleetMetrics::default();
        for s in schedules {
            metrics.total_fleet_distance_nm += s.total_transit_distance_nm;
            metrics.total_fleet_fuel_liters += s.total_fuel_liters;
            metrics.total_fleet_hours += s.total_transit_hours;
            metrics.total_idle_days += s.idle_days;
        }
        metrics.average_utilization =
            average_utilization(schedules, now, self.config.utilization_window_days);
        metrics
    }

    fn speed_of(&self, vessel: &VesselPosition) -> f64 {
        self.analyzer.speed_of(vessel)
    }

    fn analyze(&self, vessel: &VesselPosition, list: &[Planned]) -> VesselSchedule {
        let visits: Vec<ScheduledVisit> = list.iter().map(|p| p.visit.clone()).collect();
        self.analyzer.analyze(vessel, &visits)
    }
}

impl Default for FleetOptimizer {
    fn default() -> Self {
        let config = OptimizerConfig::default();
        Self {
            analyzer: ScheduleAnalyzer::new(config.min_segment_nm)
                .with_default_speed(config.default_speed_knots),
            sequencer: SequenceOptimizer::new(config.two_opt_max_passes),
            config,
        }
    }
}

/// Optimizes a fleet with default settings, measuring utilization from now.
pub fn optimize_fleet(input: &OptimizationInput) -> FleetOptimizationResult {
    FleetOptimizer::default().optimize(input)
}

/// State of one optimization call.
struct Run<'a> {
    optimizer: &'a FleetOptimizer,
    input: &'a OptimizationInput,
    deadline: Option<Instant>,
    timed_out: bool,
}

/// A start and end date pair.
type Slot = (DateTime<Utc>, DateTime<Utc>);

/// A visit in a working list together with the dates it was booked for.
///
/// Resequencing moves `visit` between its vessel's calendar slots; `booked`
/// always keeps the assignment's own dates.
#[derive(Debug, Clone)]
struct Planned {
    visit: ScheduledVisit,
    booked: Slot,
}

impl Planned {
    fn new(visit: ScheduledVisit) -> Self {
        let booked = (visit.start_date, visit.end_date);
        Self { visit, booked }
    }

    fn set_slot(&mut self, (start, end): Slot) {
        self.visit.start_date = start;
        self.visit.end_date = end;
    }
}

impl Positioned for Planned {
    fn position(&self) -> GeoPoint {
        self.visit.location
    }
}

/// Per-vessel visit lists in start-date order, indexed like `input.vessels`.
type Working = Vec<Vec<Planned>>;

impl<'a> Run<'a> {
    fn out_of_time(&mut self) -> bool {
        if !self.timed_out && self.deadline.is_some_and(|d| Instant::now() >= d) {
            warn!("Optimization time limit reached");
            self.timed_out = true;
        }
        self.timed_out
    }

    /// Joins assignments to the rosters.
    ///
    /// Returns the per-vessel visit lists, the vessels holding each project
    /// (in assignment order), and the assignments that could not be joined.
    fn join(&self) -> (Working, HashMap<&'a str, Vec<usize>>, Vec<SkippedAssignment>) {
        let input = self.input;
        let mut vessel_index: HashMap<&str, usize> = HashMap::new();
        for (idx, v) in input.vessels.iter().enumerate() {
            vessel_index.entry(v.id()).or_insert(idx);
        }
        let mut project_index: HashMap<&str, &ProjectLocation> = HashMap::new();
        for p in &input.projects {
            project_index.entry(p.id()).or_insert(p);
        }

        let mut working: Working = vec![Vec::new(); input.vessels.len()];
        let mut holders: HashMap<&'a str, Vec<usize>> = HashMap::new();
        let mut skipped = Vec::new();

        for a in &input.current_assignments {
            let vessel = vessel_index.get(a.vessel_id.as_str());
            let project = project_index.get(a.project_id.as_str());
            match (vessel, project) {
                (Some(&v), Some(&p)) => {
                    working[v].push(Planned::new(ScheduledVisit::from_assignment(a, p)));
                    let entry = holders.entry(p.id()).or_default();
                    if !entry.contains(&v) {
                        entry.push(v);
                    }
                }
                _ => {
                    let reason = if vessel.is_none() {
                        SkipReason::UnknownVessel
                    } else {
                        SkipReason::UnknownProject
                    };
                    warn!(
                        "Skipping assignment {} -> {}: {:?}",
                        a.vessel_id, a.project_id, reason
                    );
                    skipped.push(SkippedAssignment {
                        assignment_id: a.id.clone(),
                        vessel_id: a.vessel_id.clone(),
                        project_id: a.project_id.clone(),
                        reason,
                    });
                }
            }
        }

        (working, holders, skipped)
    }

    /// Phase 1: reorders each vessel's visits to shorten its route.
    fn resequence(
        &mut self,
        working: &mut Working,
        baseline: &[VesselSchedule],
        changes: &mut Vec<OptimizationChange>,
    ) {
        let optimizer = self.optimizer;
        let config = &optimizer.config;
        let input = self.input;

        for (idx, vessel) in input.vessels.iter().enumerate() {
            if working[idx].len() < 2 {
                continue;
            }
            if self.out_of_time() {
                return;
            }

            let list = &working[idx];
            let result = optimizer.sequencer.optimize(vessel.position(), list);
            if !result.is_reordered() {
                continue;
            }

            let candidate = redeal(list, &result.order);
            let before = &baseline[idx];
            let after = optimizer.analyze(vessel, &candidate);
            if after.total_transit_distance_nm > before.total_transit_distance_nm {
                // Short legs the analyzer ignores can make a shorter path
                // record more distance; keep the original order then.
                debug!("Resequence of {} rejected: recorded distance grows", vessel.id());
                continue;
            }

            let saved = before.total_transit_distance_nm - after.total_transit_distance_nm;
            if saved >= config.resequence_min_saving_nm {
                let fuel_saved = before.total_fuel_liters - after.total_fuel_liters;
                let change = OptimizationChange {
                    kind: ChangeKind::Resequence,
                    description: format!("Resequence {} visits", vessel.name()),
                    reasoning: format!(
                        "Nearest-neighbor construction with 2-opt improvement shortens transit \
                         from {:.1} nm to {:.1} nm",
                        before.total_transit_distance_nm, after.total_transit_distance_nm
                    ),
                    impact: ChangeImpact {
                        distance_saved_nm: saved,
                        fuel_saved_liters: fuel_saved,
                        time_saved_hours: before.total_transit_hours - after.total_transit_hours,
                        cost_saved: fuel_saved * config.fuel_price_per_liter,
                    },
                    affected_vessels: vec![vessel.id().to_string()],
                    before: sequence_summary(list),
                    after: sequence_summary(&candidate),
                };
                debug!("{}", change.description);
                changes.push(change);
            }

            // Adopted even below the reporting gate; it is never longer.
            working[idx] = candidate;
        }
    }

    /// Phase 2: moves projects to better-suited vessels.
    fn reassign(
        &mut self,
        working: &mut Working,
        holders: &HashMap<&str, Vec<usize>>,
        changes: &mut Vec<OptimizationChange>,
    ) {
        let optimizer = self.optimizer;
        let config = &optimizer.config;
        let input = self.input;
        let vessels = &input.vessels;

        for project in &input.projects {
            let Some(held_by) = holders.get(project.id()) else {
                continue;
            };
            let Some(&current_idx) = held_by.first() else {
                continue;
            };
            if self.out_of_time() {
                return;
            }

            let scores: Vec<SuitabilityScore> = vessels
                .iter()
                .map(|v| score_vessel_for_project(v, project, &input.current_assignments))
                .collect();

            let Some(best_idx) = best_eligible(&scores) else {
                continue;
            };
            if held_by.contains(&best_idx) {
                continue;
            }

            let best = &scores[best_idx];
            let current = &scores[current_idx];
            let score_gap = best.score - current.score;
            let distance_gain = current.distance_nm - best.distance_nm;
            if score_gap <= config.reassign_min_score_gap
                || distance_gain < config.reassign_min_distance_gain_nm
            {
                continue;
            }

            let Some(pos) = working[current_idx]
                .iter()
                .position(|p| p.visit.project_id == project.id())
            else {
                continue;
            };

            let from_vessel = &vessels[current_idx];
            let to_vessel = &vessels[best_idx];
            let before_from = optimizer.analyze(from_vessel, &working[current_idx]);
            let before_to = optimizer.analyze(to_vessel, &working[best_idx]);

            let mut from_list = working[current_idx].clone();
            let moved = release(&mut from_list, pos);
            let mut to_list = working[best_idx].clone();
            to_list.push(moved);
            to_list.sort_by_key(|p| p.visit.start_date);

            let after_from = optimizer.analyze(from_vessel, &from_list);
            let after_to = optimizer.analyze(to_vessel, &to_list);
            if after_from.total_transit_distance_nm + after_to.total_transit_distance_nm
                > before_from.total_transit_distance_nm + before_to.total_transit_distance_nm
            {
                debug!(
                    "Reassign of {} to {} rejected: fleet distance grows",
                    project.id(),
                    to_vessel.id()
                );
                continue;
            }

            let old_fuel = fuel_liters(current.distance_nm, from_vessel.vessel_type());
            let new_fuel = fuel_liters(best.distance_nm, to_vessel.vessel_type());
            let old_hours = transit_hours(current.distance_nm, optimizer.speed_of(from_vessel));
            let new_hours = transit_hours(best.distance_nm, optimizer.speed_of(to_vessel));
            let fuel_saved = (old_fuel - new_fuel).max(0.0);

            let change = OptimizationChange {
                kind: ChangeKind::Reassign,
                description: format!(
                    "Reassign {} from {} to {}",
                    project.name(),
                    from_vessel.name(),
                    to_vessel.name()
                ),
                reasoning: format!(
                    "{} scores {:.0} vs {:.0} for {} and is {:.1} nm closer \
                     ({} L/nm vs {} L/nm): {}",
                    to_vessel.name(),
                    best.score,
                    current.score,
                    from_vessel.name(),
                    distance_gain,
                    fuel_rate(to_vessel.vessel_type()),
                    fuel_rate(from_vessel.vessel_type()),
                    best.reasons.join("; ")
                ),
                impact: ChangeImpact {
                    distance_saved_nm: distance_gain.max(0.0),
                    fuel_saved_liters: fuel_saved,
                    time_saved_hours: (old_hours - new_hours).max(0.0),
                    cost_saved: fuel_saved * config.fuel_price_per_liter,
                },
                affected_vessels: vec![from_vessel.id().to_string(), to_vessel.id().to_string()],
                before: format!("{}: {}", from_vessel.name(), project.name()),
                after: format!("{}: {}", to_vessel.name(), project.name()),
            };
            debug!("{}", change.description);
            changes.push(change);

            working[current_idx] = from_list;
            working[best_idx] = to_list;
        }
    }
}

/// Index of the highest eligible score; the first one wins ties.
fn best_eligible(scores: &[SuitabilityScore]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, s) in scores.iter().enumerate() {
        if !s.is_eligible() {
            continue;
        }
        if best.map_or(true, |b| s.score > scores[b].score) {
            best = Some(idx);
        }
    }
    best
}

/// Applies a new visiting order while keeping the vessel's calendar.
///
/// The k-th time slot (in start-date order) goes to the k-th visit of the
/// new order, so a later sort by start date reproduces that order.
fn redeal(list: &[Planned], order: &[usize]) -> Vec<Planned> {
    order
        .iter()
        .zip(list)
        .map(|(&idx, slot)| {
            let mut planned = list[idx].clone();
            planned.set_slot((slot.visit.start_date, slot.visit.end_date));
            planned
        })
        .collect()
}

/// Takes the visit at `pos` out of a vessel's list.
///
/// The removed visit goes back to its booked dates. The remaining visits
/// keep their order and are dealt onto the slots still booked on the vessel.
fn release(list: &mut Vec<Planned>, pos: usize) -> Planned {
    let mut moved = list.remove(pos);
    moved.set_slot(moved.booked);

    let mut slots: Vec<Slot> = list.iter().map(|p| p.booked).collect();
    slots.sort();
    for (planned, slot) in list.iter_mut().zip(slots) {
        planned.set_slot(slot);
    }
    moved
}

fn sequence_summary(list: &[Planned]) -> String {
    list.iter()
        .map(|p| p.visit.project_name.as_str())
        .collect::<Vec<_>>()
        .join(SEQUENCE_SEPARATOR)
}

fn confidence(num_changes: usize, summary: &OptimizationSummary) -> f64 {
    let mut confidence = BASE_CONFIDENCE;
    if num_changes >= MANY_CHANGES {
        confidence += 10.0;
    } else if num_changes >= 1 {
        confidence += 5.0;
    }
    if summary.distance_saved_nm > LARGE_SAVING_NM {
        confidence += 10.0;
    } else if summary.distance_saved_nm > MEDIUM_SAVING_NM {
        confidence += 5.0;
    }
    if summary.cost_saved > LARGE_COST_SAVING {
        confidence += 5.0;
    }
    confidence.clamp(BASE_CONFIDENCE, MAX_CONFIDENCE)
}

/// Percentage of vessel-days in `[now, now + window_days)` covered by assignments.
///
/// Each vessel contributes at most the full window, even with overlapping
/// assignments.
fn average_utilization(schedules: &[VesselSchedule], now: DateTime<Utc>, window_days: u32) -> f64 {
    if schedules.is_empty() || window_days == 0 {
        return 0.0;
    }
    let window = f64::from(window_days);
    let window_end = now + Duration::days(i64::from(window_days));

    let assigned: f64 = schedules
        .iter()
        .map(|s| {
            let days: f64 = s
                .assignments
                .iter()
                .map(|a| {
                    let start = a.start_date.max(now);
                    let end = a.end_date.min(window_end);
                    ((end - start).num_milliseconds() as f64 / MILLIS_PER_DAY).max(0.0)
                })
                .sum();
            days.min(window)
        })
        .sum();

    assigned / (schedules.len() as f64 * window) * 100.0
}
