//! Conjunctive-combination benchmark over growing candidate sets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geomatch_core::MassTriple;
use geomatch_engine::combine::combine;
use geomatch_engine::mass::{criterion_mass_function, MassFunction};
use geomatch_engine::DiscernmentFrame;

fn make_evidence(candidates: usize, criteria: usize) -> Vec<MassFunction> {
    let frame =
        DiscernmentFrame::new((0..candidates).map(|i| format!("c{i}")).collect()).unwrap();
    (0..criteria)
        .flat_map(|criterion| {
            let frame = &frame;
            (0..candidates).map(move |candidate| {
                // Mildly candidate-dependent masses to keep focal sets varied.
                let matched = 0.3 + 0.4 * ((candidate + criterion) % 3) as f64 / 3.0;
                let unmatched = (1.0 - matched) * 0.6;
                let ignorance = 1.0 - matched - unmatched;
                criterion_mass_function(
                    frame,
                    candidate,
                    &MassTriple::new(matched, unmatched, ignorance),
                )
            })
        })
        .collect()
}

fn bench_global_combination(c: &mut Criterion) {
    let mut group = c.benchmark_group("global_combination");
    for (candidates, criteria) in [(5, 3), (20, 3), (50, 4)] {
        let evidence = make_evidence(candidates, criteria);
        group.bench_function(format!("{candidates}cand_{criteria}crit"), |b| {
            b.iter(|| combine(black_box(&evidence).iter()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_global_combination);
criterion_main!(benches);
