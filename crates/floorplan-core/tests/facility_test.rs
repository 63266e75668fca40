use floorplan_core::{Department, Error, FacilityState, Point, point};

fn square(x0: f64, y0: f64, side: f64) -> Vec<Point> {
    vec![
        point(x0, y0),
        point(x0 + side, y0),
        point(x0 + side, y0 + side),
        point(x0, y0 + side),
    ]
}

fn record(source: &str, destination: &str, quantity: i64) -> floorplan_core::TransportRecord {
    floorplan_core::TransportRecord {
        source: source.to_string(),
        destination: destination.to_string(),
        quantity,
        timestamp: floorplan_core::time::parse_timestamp("2015-05-25 18:00:00").unwrap(),
        distance_hint: None,
        time_hint: None,
    }
}

/// Three 2x2 departments: A centred at (1, 1), B at (4, 5), C at (9, 1).
fn three_departments() -> FacilityState {
    let mut f = FacilityState::new(20.0, 10.0).unwrap();
    f.add_department(Department::new("A", square(0.0, 0.0, 2.0)).unwrap())
        .unwrap();
    f.add_department(Department::new("B", square(3.0, 4.0, 2.0)).unwrap())
        .unwrap();
    f.add_department(Department::new("C", square(8.0, 0.0, 2.0)).unwrap())
        .unwrap();
    f
}

#[test]
fn bounds_must_be_positive_and_finite() {
    for (x, y) in [(0.0, 10.0), (10.0, -1.0), (f64::INFINITY, 1.0)] {
        assert!(matches!(
            FacilityState::new(x, y),
            Err(Error::NonPositiveBounds { .. })
        ));
    }
}

#[test]
fn departments_must_fit_the_facility() {
    let mut f = FacilityState::new(5.0, 5.0).unwrap();
    assert!(matches!(
        f.add_department(Department::new("Big", square(0.0, 0.0, 6.0)).unwrap()),
        Err(Error::OutOfBounds { .. })
    ));
    // Touching the bounds is fine.
    f.add_department(Department::new("Edge", square(0.0, 0.0, 5.0)).unwrap())
        .unwrap();
    assert_eq!(f.department_count(), 1);
}

#[test]
fn duplicate_departments_are_rejected() {
    let mut f = three_departments();
    assert_eq!(
        f.add_department(Department::new("A", square(12.0, 0.0, 2.0)).unwrap()),
        Err(Error::DuplicateDepartment {
            label: "A".to_string()
        })
    );
    assert_eq!(f.department_count(), 3);
}

#[test]
fn every_named_point_becomes_a_vertex() {
    let mut f = FacilityState::new(10.0, 10.0).unwrap();
    let dept =
        Department::with_points("Lathe", square(0.0, 0.0, 4.0), [("dock", point(1.0, 1.0))]).unwrap();
    f.add_department(dept).unwrap();
    f.register_point("Lathe", "bench", point(3.0, 1.0)).unwrap();

    let g = f.graph();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.coordinates("Lathe.centroid").unwrap(), Some(point(2.0, 2.0)));
    assert_eq!(g.coordinates("Lathe.dock").unwrap(), Some(point(1.0, 1.0)));
    assert_eq!(g.coordinates("Lathe.bench").unwrap(), Some(point(3.0, 1.0)));
    assert_eq!(
        f.department("Lathe").unwrap().point("bench"),
        Some(point(3.0, 1.0))
    );
}

#[test]
fn register_point_on_unknown_department_fails() {
    let mut f = three_departments();
    assert!(matches!(
        f.register_point("Z", "dock", point(1.0, 1.5)),
        Err(Error::UnknownDepartment { .. })
    ));
}

#[test]
fn overlapping_centroids_leave_the_facility_untouched() {
    let mut f = FacilityState::new(10.0, 10.0).unwrap();
    f.add_department(Department::new("A", square(0.0, 0.0, 4.0)).unwrap())
        .unwrap();
    let err = f.add_department(Department::new("B", square(1.0, 1.0, 2.0)).unwrap());
    assert!(matches!(err, Err(Error::Graph(_))));
    assert_eq!(f.department_count(), 1);
    assert_eq!(f.graph().vertex_count(), 1);
}

#[test]
fn department_labels_are_sorted() {
    let mut f = FacilityState::new(20.0, 20.0).unwrap();
    for (label, x) in [("Zinc", 0.0), ("Assembly", 4.0), ("Milling", 8.0)] {
        f.add_department(Department::new(label, square(x, 0.0, 2.0)).unwrap())
            .unwrap();
    }
    assert_eq!(f.department_labels(), vec!["Assembly", "Milling", "Zinc"]);
    let registered: Vec<&str> = f.departments().map(Department::label).collect();
    assert_eq!(registered, vec!["Zinc", "Assembly", "Milling"]);
}

#[test]
fn transport_records_aggregate_into_centroid_edges() {
    let mut f = three_departments();
    f.add_transport_record(record("A", "B", 10)).unwrap();
    f.add_transport_record(record("B", "A", 5)).unwrap();

    let g = f.graph();
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge_weight("A.centroid", "B.centroid").unwrap(), 15.0);
    assert_eq!(g.edge_weight("B.centroid", "A.centroid").unwrap(), 15.0);
    assert_eq!(g.edge("A.centroid", "B.centroid").unwrap().data.times.len(), 2);
}

#[test]
fn self_loops_are_tallied_not_stored() {
    let mut f = three_departments();
    let outcome = f.add_transport_record(record("C", "C", 7)).unwrap();
    assert_eq!(
        outcome,
        floorplan_core::TransportOutcome::SelfLoop { quantity: 7 }
    );
    assert_eq!(f.self_loop_quantity(), 7);
    assert_eq!(f.graph().edge_count(), 0);
}

#[test]
fn records_must_reference_known_departments() {
    let mut f = three_departments();
    assert_eq!(
        f.add_transport_record(record("A", "Q", 1)),
        Err(Error::UnknownDepartment {
            label: "Q".to_string()
        })
    );
    assert!(f.records().is_empty());
}

#[test]
fn cost_matrices_follow_sorted_department_labels() {
    let mut f = three_departments();
    f.add_transport_record(record("A", "B", 10)).unwrap();

    let dist = f.distance_matrix().unwrap();
    assert_eq!(dist.index.labels(), &["A", "B", "C"]);
    assert_eq!(dist.get("A", "B"), Some(&5.0));
    assert_eq!(dist.get("B", "A"), Some(&5.0));
    assert_eq!(dist.get("A", "C"), Some(&8.0));
    assert_eq!(dist.get("C", "C"), Some(&0.0));

    let flow = f.flow_matrix().unwrap();
    assert_eq!(flow.get("A", "B"), Some(&10.0));
    assert_eq!(flow.get("B", "A"), Some(&10.0));
    assert_eq!(flow.get("A", "C"), Some(&0.0));
}

#[test]
fn swapping_departments_moves_flow_with_identity() {
    let mut f = three_departments();
    f.add_transport_record(record("A", "B", 10)).unwrap();
    f.add_transport_record(record("C", "C", 3)).unwrap();

    f.swap_departments("B", "C").unwrap();

    // B now sits at (9, 1), C at (4, 5).
    assert_eq!(f.department("B").unwrap().centroid(), point(9.0, 1.0));
    assert_eq!(f.department("C").unwrap().centroid(), point(4.0, 5.0));
    assert_eq!(
        f.graph().coordinates("B.centroid").unwrap(),
        Some(point(9.0, 1.0))
    );

    // The A-B flow follows B to its new spot.
    let dist = f.distance_matrix().unwrap();
    assert_eq!(dist.get("A", "B"), Some(&8.0));
    assert_eq!(f.flow_matrix().unwrap().get("A", "B"), Some(&10.0));
    assert_eq!(f.flow_matrix().unwrap().get("A", "C"), Some(&0.0));
    assert_eq!(f.self_loop_quantity(), 3);
    assert_eq!(f.records().len(), 2);
}

#[test]
fn swapping_carries_named_points_with_the_slot() {
    let mut f = FacilityState::new(20.0, 10.0).unwrap();
    let a = Department::with_points("A", square(0.0, 0.0, 4.0), [("dock", point(1.0, 1.0))])
        .unwrap();
    f.add_department(a).unwrap();
    f.add_department(Department::new("B", square(10.0, 0.0, 4.0)).unwrap())
        .unwrap();

    f.swap_departments("A", "B").unwrap();

    assert_eq!(f.graph().coordinates("B.dock").unwrap(), Some(point(1.0, 1.0)));
    assert!(!f.graph().has_vertex("A.dock"));
    assert_eq!(f.department("B").unwrap().point("dock"), Some(point(1.0, 1.0)));
}

#[test]
fn swapping_unknown_departments_fails() {
    let mut f = three_departments();
    assert!(matches!(
        f.swap_departments("A", "Nope"),
        Err(Error::UnknownDepartment { .. })
    ));
    f.swap_departments("A", "A").unwrap();
    assert_eq!(f.department("A").unwrap().centroid(), point(1.0, 1.0));
}
