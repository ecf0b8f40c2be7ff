use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reel_foundation::{Adapter, ItemInstance, MeasureConstraint, Viewport, WindowManager};

const ITEM_COUNT: usize = 10_000;
const SCROLL_STEP: i32 = 37;
const VIEWPORT: Viewport = Viewport::new(1080, 200);

struct Tile {
    width: i32,
}

impl ItemInstance for Tile {
    fn measure(&mut self, width: MeasureConstraint, _height: MeasureConstraint) {
        self.width = width.resolve(self.width);
    }

    fn measured_width(&self) -> i32 {
        self.width
    }

    fn measured_height(&self) -> i32 {
        200
    }
}

struct Tiles {
    count: usize,
}

impl Adapter for Tiles {
    type Item = Tile;

    fn count(&self) -> usize {
        self.count
    }

    fn view_type(&self, index: usize) -> usize {
        index % 3
    }

    fn type_count(&self) -> usize {
        3
    }

    fn materialize(&mut self, index: usize, recycled: Option<Tile>, _: &Viewport) -> Tile {
        let mut tile = recycled.unwrap_or(Tile { width: 0 });
        tile.width = 60 + (index % 7) as i32 * 15;
        tile
    }
}

fn scroll_through(frames: usize) -> usize {
    let mut adapter = Tiles { count: ITEM_COUNT };
    let mut window = WindowManager::new(adapter.type_count(), 4);
    window.reconcile(&mut adapter, &VIEWPORT, 0);
    for _ in 0..frames {
        window.reconcile(&mut adapter, &VIEWPORT, -SCROLL_STEP);
    }
    window.stats().reuses
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_reconcile");
    for frames in [120usize, 1_200] {
        group.bench_with_input(BenchmarkId::from_parameter(frames), &frames, |b, &frames| {
            b.iter(|| black_box(scroll_through(black_box(frames))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reconcile);
criterion_main!(benches);
