use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swipekit_cell::{Action, ExpansionStyle, Orientation, SwipeOptions};
use swipekit_graphics::Point;
use swipekit_testing::{RecordingDelegate, SwipeRobot};

const ROW_COUNT_SAMPLES: &[usize] = &[8, 64, 512];

fn delegate(expansion: bool) -> RecordingDelegate {
    let options = if expansion {
        SwipeOptions::default().with_expansion_style(ExpansionStyle::destructive())
    } else {
        SwipeOptions::default()
    };
    RecordingDelegate::new()
        .with_actions(
            Orientation::Right,
            vec![
                Action::destructive("delete", "Delete"),
                Action::new("archive", "Archive"),
                Action::new("more", "More"),
            ],
        )
        .with_options(Orientation::Right, options)
}

/// Pan-changed dispatch while one row is being dragged.
fn bench_pan_changed(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_changed");
    for &rows in ROW_COUNT_SAMPLES {
        for (label, expansion) in [("plain", false), ("expansion", true)] {
            group.bench_with_input(BenchmarkId::new(label, rows), &rows, |b, &rows| {
                let mut robot = SwipeRobot::new(delegate(expansion), rows);
                let start = robot.row_center(rows / 2);
                robot.drag_from(start, Point::new(start.x - 60.0, start.y), 4);
                let mut toggle = false;
                b.iter(|| {
                    toggle = !toggle;
                    let dx = if toggle { -140.0 } else { -100.0 };
                    robot.move_to(Point::new(start.x + dx, start.y));
                    black_box(robot.offset(rows / 2));
                });
            });
        }
    }
    group.finish();
}

/// A full open, settle, close cycle including hit testing and frames.
fn bench_swipe_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_cycle");
    for &rows in ROW_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, &rows| {
            let mut robot = SwipeRobot::new(delegate(false), rows);
            let index = rows / 2;
            b.iter(|| {
                robot.swipe(index, -120.0);
                robot.wait_for_idle();
                robot.swipe(index, 120.0);
                robot.wait_for_idle();
                black_box(robot.state(index));
            });
        });
    }
    group.finish();
}

criterion_group!(pan_dispatch, bench_pan_changed, bench_swipe_cycle);
criterion_main!(pan_dispatch);
