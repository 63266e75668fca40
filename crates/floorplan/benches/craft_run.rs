use criterion::{Criterion, criterion_group, criterion_main};
use floorplan::optimize::{Craft, CraftOptions};
use floorplan::{Department, FacilityState, TransportRecord, point};
use std::hint::black_box;

/// `n x n` slots of 2x2 departments with a ring of flows between consecutive departments.
fn facility(n: usize) -> FacilityState {
    let side = (n * 4) as f64;
    let mut state = FacilityState::new(side, side).expect("bounds");
    let mut labels = Vec::new();
    for row in 0..n {
        for col in 0..n {
            let (x0, y0) = ((col * 4) as f64, (row * 4) as f64);
            let label = format!("D{row}{col}");
            let boundary = vec![
                point(x0, y0),
                point(x0 + 2.0, y0),
                point(x0 + 2.0, y0 + 2.0),
                point(x0, y0 + 2.0),
            ];
            state
                .add_department(Department::new(label.clone(), boundary).expect("department"))
                .expect("add");
            labels.push(label);
        }
    }
    let timestamp = floorplan::time::parse_timestamp("2015-05-25 18:00:00").expect("timestamp");
    for (i, source) in labels.iter().enumerate() {
        let destination = &labels[(i * 7 + 3) % labels.len()];
        state
            .add_transport_record(TransportRecord {
                source: source.clone(),
                destination: destination.clone(),
                quantity: (i as i64 % 5) + 1,
                timestamp,
                distance_hint: None,
                time_hint: None,
            })
            .expect("record");
    }
    state
}

fn bench_craft(c: &mut Criterion) {
    let state = facility(4);
    let craft = Craft::new(state, CraftOptions::default());

    let mut group = c.benchmark_group("craft");
    group.sample_size(10);
    group.bench_function("default_schedule_16_departments", |b| {
        b.iter(|| black_box(craft.optimize().expect("optimize")));
    });
    group.finish();
}

criterion_group!(benches, bench_craft);
criterion_main!(benches);
