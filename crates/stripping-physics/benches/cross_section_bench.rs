// ─────────────────────────────────────────────────────────────────────
// SCPN Beam Stripping — Cross Section Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use stripping_physics::material::Material;
use stripping_physics::particle::Particle;
use stripping_types::species::Species;
use stripping_types::substance::StrippingModel;

fn bench_cross_section(c: &mut Criterion) {
    let ion = Particle::from_kinetic_energy(3.0, Species::HMinus).expect("valid beam");
    let helium = Material::new("gaseous_helium", 10.0).expect("known substance");
    let mut carbon_foil = Material::new("carbon", 10.0).expect("known substance");
    carbon_foil.set_model(StrippingModel::Saha);

    let mut group = c.benchmark_group("cross_section");
    group.bench_function("nakai_helium_3mev", |b| {
        b.iter(|| black_box(helium.cross_section(black_box(&ion)).unwrap()))
    });
    group.bench_function("saha_carbon_3mev", |b| {
        b.iter(|| black_box(carbon_foil.cross_section(black_box(&ion)).unwrap()))
    });
    group.finish();
}

fn bench_thickness_inversion(c: &mut Criterion) {
    let ion = Particle::from_kinetic_energy(3.0, Species::HMinus).expect("valid beam");
    let foil = Material::new("carbon", 10.0).expect("known substance");

    c.bench_function("thickness_for_999", |b| {
        b.iter(|| {
            let (thickness, fraction) = foil
                .thickness_for_fraction(black_box(&ion), 0.999, 1e-5)
                .expect("bracket covers target");
            black_box((thickness, fraction));
        })
    });
}

criterion_group!(benches, bench_cross_section, bench_thickness_inversion);
criterion_main!(benches);
