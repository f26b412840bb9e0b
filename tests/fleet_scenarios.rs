use chrono::{DateTime, TimeZone, Utc};
use fleet_routing::evaluation::analyze_vessel_schedule;
use fleet_routing::fleet::{FleetOptimizer, OptimizerConfig};
use fleet_routing::models::{
    ChangeKind, OptimizationInput, ProjectLocation, VesselAssignment, VesselPosition, VesselType,
};
use fleet_routing::report::format_currency;
use fleet_routing::scoring::score_vessel_for_project;

/// Degrees of latitude per nautical mile.
const DEG_PER_NM: f64 = 1.0 / 60.0405;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 9, d, 0, 0, 0)
        .single()
        .expect("valid date")
}

/// A vessel `nm` nautical miles due north of (24.0, 54.0).
fn north(id: &str, name: &str, t: VesselType, nm: f64) -> VesselPosition {
    VesselPosition::new(id, name, t, 24.0 + nm * DEG_PER_NM, 54.0)
}

fn project(id: &str, name: &str, lat: f64, lng: f64, t: VesselType) -> ProjectLocation {
    ProjectLocation::new(id, name, lat, lng, day(1), day(28)).with_required_type(t)
}

fn resequence_input() -> OptimizationInput {
    OptimizationInput {
        vessels: vec![
            VesselPosition::new("v", "Falcon", VesselType::Tugboat, 24.0, 54.0).with_speed(10.0),
        ],
        projects: vec![
            project("c", "C", 24.8, 54.8, VesselType::Tugboat),
            project("a", "A", 24.5, 54.0, VesselType::Tugboat),
            project("b", "B", 24.0, 54.5, VesselType::Tugboat),
        ],
        current_assignments: vec![
            VesselAssignment::new("v", "c", day(1), day(2)),
            VesselAssignment::new("v", "a", day(3), day(4)),
            VesselAssignment::new("v", "b", day(5), day(6)),
        ],
    }
}

#[test]
fn resequences_single_vessel_route() {
    let result = FleetOptimizer::default().optimize_at(&resequence_input(), day(1));

    assert_eq!(result.changes.len(), 1);
    let change = &result.changes[0];
    assert_eq!(change.kind, ChangeKind::Resequence);
    assert_eq!(change.affected_vessels, vec!["v".to_string()]);
    assert_eq!(change.before, "C → A → B");
    assert_eq!(change.after, "B → A → C");

    let impact = change.impact;
    assert!(impact.distance_saved_nm > 30.0);
    assert!((impact.fuel_saved_liters - impact.distance_saved_nm * 25.0).abs() < 1e-6);
    assert!((impact.time_saved_hours - impact.distance_saved_nm / 10.0).abs() < 1e-9);
    assert!((impact.cost_saved - impact.fuel_saved_liters * 0.85).abs() < 1e-6);

    let optimized = result.optimized_schedule("v").expect("vessel present");
    assert_eq!(optimized.project_names(), vec!["B", "A", "C"]);
    // Calendar slots stay with the vessel.
    assert_eq!(optimized.assignments[0].start_date, day(1));
    assert!(
        result.optimized_metrics.total_fleet_distance_nm
            < result.original_metrics.total_fleet_distance_nm
    );
    assert!((result.summary.distance_saved_nm - impact.distance_saved_nm).abs() < 1e-6);
    assert_eq!(result.confidence, 75.0);
    assert!(result.warnings.is_empty());
}

#[test]
fn resequence_impact_matches_recorded_totals() {
    // Berth and Pier sit 0.3 nm apart, a leg the schedules never record.
    let input = OptimizationInput {
        vessels: vec![VesselPosition::new("v", "Falcon", VesselType::Tugboat, 24.0, 54.0)],
        projects: vec![
            project("a", "Berth", 24.0, 54.5, VesselType::Tugboat),
            project("b", "Buoy", 24.5, 54.0, VesselType::Tugboat),
            project("c", "Pier", 24.005, 54.5, VesselType::Tugboat),
        ],
        current_assignments: vec![
            VesselAssignment::new("v", "a", day(1), day(2)),
            VesselAssignment::new("v", "b", day(3), day(4)),
            VesselAssignment::new("v", "c", day(5), day(6)),
        ],
    };
    let result = FleetOptimizer::default().optimize_at(&input, day(1));

    assert_eq!(result.changes.len(), 1);
    let impact = result.changes[0].impact;
    let original = &result.original_schedules[0];
    let optimized = &result.optimized_schedules[0];
    assert_eq!(optimized.project_names(), vec!["Berth", "Pier", "Buoy"]);
    assert!(optimized.routes.iter().all(|r| r.distance_nm > 1.0));
    assert_eq!(
        impact.distance_saved_nm,
        original.total_transit_distance_nm - optimized.total_transit_distance_nm
    );
    assert_eq!(
        impact.fuel_saved_liters,
        original.total_fuel_liters - optimized.total_fuel_liters
    );
    assert!((result.summary.distance_saved_nm - impact.distance_saved_nm).abs() < 1e-9);
}

#[test]
fn small_saving_is_adopted_but_not_reported() {
    let config = OptimizerConfig::default().with_resequence_min_saving_nm(1_000.0);
    let result = FleetOptimizer::new(config)
        .expect("valid config")
        .optimize_at(&resequence_input(), day(1));

    assert!(result.changes.is_empty());
    let optimized = result.optimized_schedule("v").expect("vessel present");
    assert_eq!(optimized.project_names(), vec!["B", "A", "C"]);
    assert!(result.summary.distance_saved_nm > 30.0);
}

#[test]
fn dredger_takes_dredging_project_from_tugboat() {
    let input = OptimizationInput {
        vessels: vec![
            north("tug", "Hauler", VesselType::Tugboat, 40.0),
            north("dredger", "Digger", VesselType::Dredger, 5.0),
        ],
        projects: vec![project("p", "Channel", 24.0, 54.0, VesselType::Dredger)],
        current_assignments: vec![VesselAssignment::new("tug", "p", day(2), day(10))],
    };

    // At the same spot, the type term alone puts the dredger well ahead.
    let p = &input.projects[0];
    let at_same_spot = north("t2", "Twin", VesselType::Tugboat, 5.0);
    let tug_score = score_vessel_for_project(&at_same_spot, p, &input.current_assignments);
    let dredger_score = score_vessel_for_project(&input.vessels[1], p, &input.current_assignments);
    assert!(dredger_score.score - tug_score.score >= 30.0);

    let result = FleetOptimizer::default().optimize_at(&input, day(1));
    let reassigns: Vec<_> = result.changes_of(ChangeKind::Reassign).collect();
    assert_eq!(reassigns.len(), 1);
    let change = reassigns[0];
    assert_eq!(change.affected_vessels, vec!["tug".to_string(), "dredger".to_string()]);
    assert_eq!(change.description, "Reassign Channel from Hauler to Digger");
    assert!(change.reasoning.contains("Type match: dredger"));
    assert!((change.impact.distance_saved_nm - 35.0).abs() < 0.01);
    // 40 nm at 25 L/nm versus 5 nm at 85 L/nm.
    assert!((change.impact.fuel_saved_liters - 575.0).abs() < 0.5);

    let tug = result.optimized_schedule("tug").expect("tug present");
    let dredger = result.optimized_schedule("dredger").expect("dredger present");
    assert!(tug.assignments.is_empty());
    assert_eq!(dredger.project_names(), vec!["Channel"]);
    assert!(
        result.optimized_metrics.total_fleet_distance_nm
            <= result.original_metrics.total_fleet_distance_nm
    );
}

#[test]
fn resequenced_vessel_hands_over_project_on_its_own_dates() {
    let input = OptimizationInput {
        vessels: vec![
            VesselPosition::new("tug", "Hauler", VesselType::Tugboat, 24.0, 54.0),
            VesselPosition::new("dredger", "Digger", VesselType::Dredger, 24.0, 54.45),
        ],
        projects: vec![
            project("q", "Quay", 25.0, 54.0, VesselType::Tugboat),
            project("p", "Channel", 24.0, 54.4, VesselType::Dredger),
        ],
        current_assignments: vec![
            VesselAssignment::new("tug", "q", day(1), day(3)),
            VesselAssignment::new("tug", "p", day(10), day(12)),
        ],
    };
    let result = FleetOptimizer::default().optimize_at(&input, day(1));

    let kinds: Vec<ChangeKind> = result.changes.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![ChangeKind::Resequence, ChangeKind::Reassign]);
    assert_eq!(result.changes[0].before, "Quay → Channel");
    assert_eq!(result.changes[0].after, "Channel → Quay");
    assert_eq!(result.changes[1].description, "Reassign Channel from Hauler to Digger");

    // Channel moves with its own booking, not the slot it was dealt.
    let dredger = result.optimized_schedule("dredger").expect("dredger present");
    assert_eq!(dredger.project_names(), vec!["Channel"]);
    assert_eq!(dredger.assignments[0].start_date, day(10));
    assert_eq!(dredger.assignments[0].end_date, day(12));

    // Quay falls back onto the slot the tug still holds.
    let tug = result.optimized_schedule("tug").expect("tug present");
    assert_eq!(tug.project_names(), vec!["Quay"]);
    assert_eq!(tug.assignments[0].start_date, day(1));
    assert_eq!(tug.assignments[0].end_date, day(3));
    assert_eq!(tug.idle_days, 0.0);

    assert!(
        result.optimized_metrics.total_fleet_distance_nm
            < result.original_metrics.total_fleet_distance_nm
    );
    assert_eq!(
        result.optimized_metrics.average_utilization,
        result.original_metrics.average_utilization
    );
}

#[test]
fn reassignment_respects_score_gap() {
    let input = OptimizationInput {
        vessels: vec![
            north("t1", "Far", VesselType::Tugboat, 60.0),
            north("t2", "Nearer", VesselType::Tugboat, 5.0),
        ],
        projects: vec![project("p", "Jetty", 24.0, 54.0, VesselType::Tugboat)],
        current_assignments: vec![VesselAssignment::new("t1", "p", day(2), day(10))],
    };
    // 90 vs 100: a 10-point lead is not enough.
    let result = FleetOptimizer::default().optimize_at(&input, day(1));
    assert_eq!(result.changes_of(ChangeKind::Reassign).count(), 0);

    let loose = OptimizerConfig::default().with_reassign_min_score_gap(5.0);
    let result = FleetOptimizer::new(loose)
        .expect("valid config")
        .optimize_at(&input, day(1));
    assert_eq!(result.changes_of(ChangeKind::Reassign).count(), 1);
}

#[test]
fn conflicting_vessel_is_not_preferred() {
    let input = OptimizationInput {
        vessels: vec![
            north("t1", "Far", VesselType::Tugboat, 60.0),
            north("t2", "Busy", VesselType::Tugboat, 5.0),
        ],
        projects: vec![
            project("p", "Jetty", 24.0, 54.0, VesselType::Tugboat),
            project("q", "Quay", 24.0 + 5.0 * DEG_PER_NM, 54.0, VesselType::Tugboat),
        ],
        current_assignments: vec![
            VesselAssignment::new("t1", "p", day(2), day(10)),
            VesselAssignment::new("t2", "q", day(5), day(12)),
        ],
    };
    // Busy: 50 + 30 + 20 - 50 = 50; Far: 50 + 30 + 10 = 90.
    let result = FleetOptimizer::default().optimize_at(&input, day(1));
    assert_eq!(result.changes_of(ChangeKind::Reassign).count(), 0);
}

#[test]
fn empty_vessel_schedule() {
    let v = VesselPosition::new("v", "Idle", VesselType::SurveyVessel, 10.0, 10.0);
    let s = analyze_vessel_schedule(&v, &[]);
    assert_eq!(s.total_transit_distance_nm, 0.0);
    assert_eq!(s.idle_days, 0.0);
    assert!(s.routes.is_empty());
}

#[test]
fn optimal_fleet_reports_near_optimal() {
    let input = OptimizationInput {
        vessels: vec![
            VesselPosition::new("v1", "North", VesselType::Tugboat, 24.0, 54.0),
            VesselPosition::new("v2", "South", VesselType::CraneBarge, 25.0, 55.0),
        ],
        projects: vec![
            project("p1", "Jetty", 24.1, 54.0, VesselType::Tugboat),
            project("p2", "Quay", 25.1, 55.0, VesselType::CraneBarge),
        ],
        current_assignments: vec![
            VesselAssignment::new("v1", "p1", day(2), day(20)),
            VesselAssignment::new("v2", "p2", day(2), day(20)),
        ],
    };
    let result = FleetOptimizer::default().optimize_at(&input, day(1));

    assert!(result.changes.is_empty());
    assert!(result.warnings.iter().any(|w| w.contains("near-optimal")));
    assert!(result.warnings.iter().any(|w| w.contains("Savings minimal")));
    assert_eq!(result.confidence, 70.0);
    assert_eq!(result.original_metrics, result.optimized_metrics);
    // 18 of 30 days for both vessels.
    assert!((result.original_metrics.average_utilization - 60.0).abs() < 1e-9);
    assert_eq!(result.summary.utilization_gain_percent, 0.0);
}

#[test]
fn empty_input_still_produces_result() {
    let result = FleetOptimizer::default().optimize_at(&OptimizationInput::default(), day(1));
    assert!(result.original_schedules.is_empty());
    assert!(result.changes.is_empty());
    assert_eq!(result.optimized_metrics.average_utilization, 0.0);
    assert_eq!(result.confidence, 70.0);
}

#[test]
fn currency_formats() {
    assert_eq!(format_currency(1_250_000.0), "$1.3M");
    assert_eq!(format_currency(4_200.0), "$4K");
    assert_eq!(format_currency(850.0), "$850");
}

#[test]
fn input_parses_from_api_json() {
    let json = r#"{
        "vessels": [
            {"id": "v1", "name": "Falcon", "type": "tugboat", "lat": 24.0, "lng": 54.0, "speed": 0},
            {"id": "v2", "name": "Odd", "type": "pilot_boat", "lat": 24.5, "lng": 54.5}
        ],
        "projects": [
            {"id": "p1", "name": "Jetty", "lat": 24.1, "lng": 54.0,
             "requiredVesselTypes": ["tugboat", "supply_vessel"], "priority": "high",
             "startDate": "2026-09-01T00:00:00Z", "endDate": "2026-09-28T00:00:00Z"}
        ],
        "currentAssignments": [
            {"vesselId": "v1", "projectId": "p1",
             "startDate": "2026-09-02T00:00:00Z", "endDate": "2026-09-04T00:00:00Z"}
        ]
    }"#;
    let input: OptimizationInput = serde_json::from_str(json).expect("valid input");
    assert_eq!(input.vessels[0].speed(), Some(0.0));
    assert_eq!(input.vessels[1].vessel_type(), &VesselType::Other("pilot_boat".into()));
    assert!(input.projects[0].requires(&VesselType::SupplyVessel));

    let result = FleetOptimizer::default().optimize_at(&input, day(1));
    // Zero speed is kept: distance is recorded, transit time is not.
    let s = &result.original_schedules[0];
    assert!(s.total_transit_distance_nm > 1.0);
    assert_eq!(s.total_transit_hours, 0.0);

    let out = serde_json::to_value(&result).expect("serializable");
    assert!(out["optimizedMetrics"]["totalFleetDistanceNm"].is_number());
    assert_eq!(out["originalSchedules"][1]["vesselType"], "pilot_boat");
}
