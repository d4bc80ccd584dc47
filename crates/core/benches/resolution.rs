use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use feedbrief_core::{ExtractConfig, extract_main_text, is_summary_only, normalize, truncate};

fn sample_html(paragraphs: usize) -> String {
    let paragraph = "<p>The committee released its <a href=\"/findings\">findings</a> on Monday after a year of hearings, \
        interviews and document review . Officials said the report would shape policy for years to come !</p>";
    format!(
        "<html><head><script>var x = 1;</script></head><body><nav>Menu</nav><article>{}</article><footer>Footer</footer></body></html>",
        paragraph.repeat(paragraphs)
    )
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for paragraphs in [1, 10, 100] {
        let html = sample_html(paragraphs);
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &html, |b, html| {
            b.iter(|| normalize(black_box(Some(html.as_str()))))
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let teaser = "<p>Brief summary of the story.</p>";
    let article = sample_html(10);

    c.bench_function("classify_teaser", |b| b.iter(|| is_summary_only(black_box(Some(teaser)))));
    c.bench_function("classify_article", |b| {
        b.iter(|| is_summary_only(black_box(Some(article.as_str()))))
    });
}

fn bench_extract(c: &mut Criterion) {
    let html = sample_html(50);
    let config = ExtractConfig::default();

    c.bench_function("extract_main_text", |b| b.iter(|| extract_main_text(black_box(&html), &config)));
}

fn bench_truncate(c: &mut Criterion) {
    let html = sample_html(20);
    let text = normalize(Some(html.as_str()));

    c.bench_function("truncate", |b| b.iter(|| truncate(black_box(&text), 500)));
}

criterion_group!(benches, bench_normalize, bench_classify, bench_extract, bench_truncate);
criterion_main!(benches);
