use classifier::{Measurements, assess, categorize_bmi, compute_bmi, risk_from_bmi_and_smoker};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_compute_bmi(c: &mut Criterion) {
    c.bench_function("classifier/compute_bmi", |b| {
        b.iter(|| compute_bmi(black_box(70.0), black_box(1.75)).unwrap());
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classifier/category_and_risk", |b| {
        b.iter(|| {
            let bmi = black_box(27.4);
            (
                categorize_bmi(bmi),
                risk_from_bmi_and_smoker(bmi, black_box(true)),
            )
        });
    });
}

fn bench_full_assessment(c: &mut Criterion) {
    let measurements = Measurements {
        age: 42,
        height: 1.68,
        weight: 81.5,
        smoker: true,
    };

    c.bench_function("classifier/assess", |b| {
        b.iter(|| assess(black_box(&measurements)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_compute_bmi,
    bench_classify,
    bench_full_assessment
);
criterion_main!(benches);
