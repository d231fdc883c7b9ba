use chart_resolve::{
    ChartKind, ChartSpec, HistoryPoint, ResultScales, ScaleHistories, ScaleResult, StyleProfile,
    resolve_batch, resolve_chart,
};
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

fn multi_bar_spec(marker_count: usize) -> (ChartSpec, ResultScales) {
    let mut series = vec![
        json!({ "type": "bar", "stack": "a", "data": [40, 30, 20] }),
        json!({ "type": "bar", "stack": "a", "data": [20, 25, 30] }),
    ];
    let mut scales = ResultScales::new();
    let mut identifiers = Vec::with_capacity(marker_count);

    for index in 0..marker_count {
        series.push(json!({
            "type": "scatter",
            "data": [[0, 0]],
            "label": { "formatter": "" }
        }));
        let identifier = format!("scale-{index}");
        scales.insert(
            identifier.clone(),
            ScaleResult::with_band(index as f64, "mittel"),
        );
        identifiers.push(identifier);
    }

    let template = json!({
        "xAxis": { "min": 0, "max": 100 },
        "series": series
    });
    let spec = ChartSpec::new(ChartKind::MultiBar, template).with_scales(identifiers);

    (spec, scales)
}

fn bench_multi_bar_resolution(c: &mut Criterion) {
    let (spec, scales) = multi_bar_spec(16);
    let histories = ScaleHistories::new();
    let style = StyleProfile::default();

    c.bench_function("multi_bar_resolution_16_markers", |b| {
        b.iter(|| {
            let resolved = resolve_chart(
                black_box(&spec),
                black_box(&scales),
                black_box(&histories),
                black_box(&style),
            )
            .expect("resolution should succeed");
            let _ = black_box(resolved);
        })
    });
}

fn bench_line_history_batch_100(c: &mut Criterion) {
    let template = json!({
        "series": [{ "type": "line", "data": [] }]
    });

    let mut histories = ScaleHistories::new();
    let points: Vec<HistoryPoint> = (0..36)
        .map(|month| {
            HistoryPoint::new(
                format!("01.{:02}.{}", month % 12 + 1, 2021 + month / 12),
                month as f64 * 0.5,
            )
        })
        .collect();
    histories.insert("verlauf", points);

    let specs: Vec<ChartSpec> = (0..100)
        .map(|_| ChartSpec::new(ChartKind::Line, template.clone()).with_scales(["verlauf"]))
        .collect();
    let scales = ResultScales::new();
    let style = StyleProfile::default();

    c.bench_function("line_history_batch_100", |b| {
        b.iter(|| {
            let outcomes = resolve_batch(
                black_box(&specs),
                black_box(&scales),
                black_box(&histories),
                black_box(&style),
            );
            let _ = black_box(outcomes);
        })
    });
}

criterion_group!(benches, bench_multi_bar_resolution, bench_line_history_batch_100);
criterion_main!(benches);
