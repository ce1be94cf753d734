// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::catalog::{Catalog, CatalogItem};
use folio::ui::gallery::subcomponents::disclosure::DisclosureController;
use folio::ui::state::BatchSize;
use std::hint::black_box;
use std::sync::Arc;

fn large_catalog(len: u32) -> Arc<Catalog> {
    let items = (1..=len)
        .map(|id| CatalogItem::new(id, format!("Certificate {id}"), "Bench", format!("{id}.png")))
        .collect();
    Arc::new(Catalog::new(items).expect("ids are unique"))
}

fn full_reveal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("disclosure");

    for len in [100_u32, 1_000] {
        let catalog = large_catalog(len);
        group.bench_with_input(BenchmarkId::new("reveal_all", len), &catalog, |b, catalog| {
            b.iter(|| {
                let mut controller =
                    DisclosureController::from_prefix(Arc::clone(catalog), 4, BatchSize::new(12))
                        .expect("seed fits");
                while !controller.is_exhausted() {
                    controller.reveal_now();
                }
                black_box(controller.count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, full_reveal_benchmark);
criterion_main!(benches);
