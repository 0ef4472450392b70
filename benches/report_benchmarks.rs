//! Benchmarks for payroll report rendering and scripted sessions.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_tracker::models::{Employee, Roster};
use payroll_tracker::report::render_report;
use payroll_tracker::session::Session;

/// Builds a roster cycling through the three employment types.
fn create_roster(size: usize) -> Roster {
    let mut roster = Roster::new();
    for i in 0..size {
        let id = i.to_string();
        let employee = match i % 3 {
            0 => Employee::full_time(id, "Ann Lee", Decimal::new(300_000, 2)),
            1 => Employee::part_time(id, "Bo Chan", Decimal::new(2250, 2), Decimal::from(38)),
            _ => Employee::contractual(id, "Cy Dee", Decimal::from(1200), Decimal::from(4)),
        }
        .expect("valid employee");
        roster.add(employee).expect("unique id");
    }
    roster
}

/// Builds a session script that adds `size` employees and prints the report.
fn create_script(size: usize) -> String {
    let mut script = String::new();
    for i in 0..size {
        match i % 3 {
            0 => script.push_str(&format!("1\n{i}\nAnn Lee\n3000\n")),
            1 => script.push_str(&format!("2\n{i}\nBo Chan\n22.50\n38\n")),
            _ => script.push_str(&format!("3\n{i}\nCy Dee\n1200\n4\n")),
        }
    }
    script.push_str("4\n5\n");
    script
}

fn bench_render_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_report");
    for size in [10, 100, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| render_report(black_box(roster)))
        });
    }
    group.finish();
}

fn bench_scripted_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("scripted_session");
    for size in [10, 100] {
        let script = create_script(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &script, |b, script| {
            b.iter(|| {
                let mut session = Session::new(Cursor::new(script.as_bytes()), Vec::new());
                session.run().expect("session runs");
                black_box(session.into_roster())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render_report, bench_scripted_session);
criterion_main!(benches);
