use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_core::MeanMotionEphemeris;
use panchang_search::{
    DaySequence, Element, PanchangConfig, UgadiCache, element_end, lunar_month_at,
    panchang_for_date,
};

fn ephemeris() -> MeanMotionEphemeris {
    MeanMotionEphemeris {
        epoch: Utc.with_ymd_and_hms(2026, 3, 18, 12, 0, 0).unwrap(),
        sun_longitude_deg: 4.0,
        sun_rate_deg_per_day: 0.9856,
        moon_longitude_deg: 4.0,
        moon_rate_deg_per_day: 0.9856 + 360.0 / 29.7526,
        ayanamsa_deg: 24.0,
        ayanamsa_rate_deg_per_day: 0.0,
        ..MeanMotionEphemeris::default()
    }
}

fn transition_bench(c: &mut Criterion) {
    let eph = ephemeris();
    let config = PanchangConfig::default();
    let t0 = Utc.with_ymd_and_hms(2026, 3, 19, 0, 46, 0).unwrap();

    let mut group = c.benchmark_group("search_transition");
    group.bench_function("tithi_end", |b| {
        b.iter(|| {
            element_end(black_box(&eph), Element::Tithi, black_box(t0), &config.solver)
                .expect("search should succeed")
        })
    });
    group.bench_function("lunar_month_at", |b| {
        b.iter(|| lunar_month_at(black_box(&eph), black_box(t0), &config).expect("month"))
    });
    group.finish();
}

fn panchang_bench(c: &mut Criterion) {
    let eph = ephemeris();
    let config = PanchangConfig::default();
    let date = NaiveDate::from_ymd_opt(2026, 11, 11).unwrap();

    let mut group = c.benchmark_group("search_panchang");
    group.sample_size(20);
    group.bench_function("panchang_for_date", |b| {
        let mut cache = UgadiCache::new();
        b.iter(|| {
            panchang_for_date(black_box(&eph), &config, &mut cache, black_box(date), None)
                .expect("day should derive")
        })
    });
    group.bench_function("sequence_30_days", |b| {
        let start = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 4, 30).unwrap();
        b.iter(|| {
            let mut seq = DaySequence::new(&eph, &config);
            seq.range(black_box(start), end).expect("range should derive")
        })
    });
    group.finish();
}

criterion_group!(benches, transition_bench, panchang_bench);
criterion_main!(benches);
