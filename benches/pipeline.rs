use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use csv_average::ingestion::load_csv_from_reader;
use csv_average::processing::{average, convert_to_float, extract_column, remove_row};

fn synthetic_csv(rows: usize) -> String {
    let mut out = String::from("id,score\n");
    for i in 0..rows {
        out.push_str(&format!("{i},{}.5\n", i % 100));
    }
    out
}

fn bench_stages(c: &mut Criterion) {
    let input = synthetic_csv(10_000);
    let mut group = c.benchmark_group("pipeline_10k");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("load", |b| {
        b.iter(|| load_csv_from_reader(black_box(input.as_bytes())).unwrap())
    });

    let table = load_csv_from_reader(input.as_bytes()).unwrap();
    group.bench_function("extract_strip_convert_average", |b| {
        b.iter(|| {
            let column = extract_column(1, black_box(&table)).unwrap();
            let data = remove_row(1, &column).unwrap();
            let values = convert_to_float(&data).unwrap();
            average(&values).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_stages);
criterion_main!(benches);
