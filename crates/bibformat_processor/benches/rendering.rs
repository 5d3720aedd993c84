use bibformat_core::embedded::get_embedded_style;
use bibformat_core::{
    CitationOccurrence, CompiledStyle, CreatorList, CreatorName, Library, Resource,
};
use bibformat_processor::{Processor, RenderSession};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn library() -> Library {
    (0..10)
        .map(|i| {
            Resource::new(format!("item{}", i), "book")
                .with_creators(
                    "creator1",
                    CreatorList::from(vec![
                        CreatorName::new(format!("Author{}", i % 4), "Jane"),
                        CreatorName::new("Doe", "John"),
                    ]),
                )
                .with_field("year1", (2000 + i % 3).to_string())
                .with_field("title", format!("A study of things, part {}", i))
                .with_field("publisherLocation", "London")
                .with_field("publisherName", "Verso")
        })
        .collect()
}

fn bench_rendering(c: &mut Criterion) {
    let style = get_embedded_style("author-date")
        .expect("author-date is embedded")
        .expect("failed to parse author-date style");
    let library = library();

    c.bench_function("Compile Style (author-date)", |b| {
        b.iter(|| CompiledStyle::compile(black_box(&style)))
    });

    let citations: Vec<CitationOccurrence> = library
        .iter()
        .map(|resource| {
            CitationOccurrence::new(resource.id.clone())
                .with_text_before("As shown ")
                .with_pages("12-19")
        })
        .collect();

    c.bench_function("Render Citations (author-date, 10 items)", |b| {
        let processor = Processor::new(style.clone(), library.clone());
        b.iter(|| {
            let mut session = RenderSession::new();
            processor
                .sequencer()
                .render(black_box(&citations), "", &mut session)
        })
    });

    c.bench_function("Render Bibliography (author-date, 10 items)", |b| {
        let processor = Processor::new(style.clone(), library.clone());
        b.iter(|| {
            let mut session = RenderSession::new();
            processor.render_bibliography(&mut session)
        })
    });
}

criterion_group!(benches, bench_rendering);
criterion_main!(benches);
