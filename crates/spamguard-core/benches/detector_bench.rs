use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spamguard_core::{dataset, DetectorConfig, Normalizer, SpamDetector};

fn bench_detector(c: &mut Criterion) {
    let normalizer = Normalizer::new().unwrap();
    let samples = dataset::builtin();
    let detector = SpamDetector::fit(&samples, &DetectorConfig::default()).unwrap();

    let inputs = vec![
        "Selamat! Anda memenangkan hadiah! Klik link ini sekarang: https://bit.ly/xyz",
        "Rapat jam 10 pagi besok.",
        "Promo pulsa gratis! Isi ulang 5 ribu dapat 100 ribu!",
        "Hai, apakah Anda sibuk akhir pekan ini?",
        "Langganan Anda telah kedaluwarsa. Perbarui detail pembayaran di www.contoh.biz",
    ];

    c.bench_function("normalize_single", |b| {
        b.iter(|| normalizer.normalize(black_box(inputs[0])));
    });

    c.bench_function("predict_single", |b| {
        b.iter(|| detector.predict(black_box(inputs[0])).unwrap());
    });

    c.bench_function("predict_batch_5", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = detector.predict(black_box(input)).unwrap();
            }
        });
    });

    c.bench_function("fit_builtin", |b| {
        b.iter(|| SpamDetector::fit(black_box(&samples), &DetectorConfig::default()).unwrap());
    });
}

criterion_group!(benches, bench_detector);
criterion_main!(benches);
