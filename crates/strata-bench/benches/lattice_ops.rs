//! Criterion micro-benchmarks for lattice construction and classification.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strata_bench::{reference_config, stress_config};
use strata_core::SiteId;
use strata_lattice::{Bcc, Lattice};
use strata_test_utils::coordination_registry;

/// Benchmark: build and link a 64x64 surface.
fn bench_build_reference(c: &mut Criterion) {
    let config = reference_config();
    c.bench_function("build_bcc_4k", |b| {
        b.iter(|| black_box(Bcc::build(&config).unwrap()));
    });
}

/// Benchmark: build a 256x256 stepped surface.
fn bench_build_stress(c: &mut Criterion) {
    let config = stress_config();
    c.bench_function("build_bcc_stepped_65k", |b| {
        b.iter(|| black_box(Bcc::build(&config).unwrap()));
    });
}

/// Benchmark: coordination of every site of a 64x64 surface.
fn bench_coordination_all(c: &mut Criterion) {
    let lattice = Bcc::build(&reference_config()).unwrap();
    c.bench_function("coordination_4k", |b| {
        b.iter(|| {
            for site in lattice.sites() {
                black_box(lattice.coordination(site.id()).unwrap());
            }
        });
    });
}

/// Benchmark: adsorb then desorb on one site, reclassifying each time.
fn bench_adsorb_desorb(c: &mut Criterion) {
    let mut lattice = Bcc::build(&reference_config()).unwrap();
    let mut registry = coordination_registry();
    let site = SiteId(2080);
    c.bench_function("adsorb_desorb_cycle", |b| {
        b.iter(|| {
            lattice.adsorb(site, None, &mut registry).unwrap();
            lattice.desorb(site, &mut registry).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_build_reference,
    bench_build_stress,
    bench_coordination_all,
    bench_adsorb_desorb
);
criterion_main!(benches);
