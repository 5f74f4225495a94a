use criterion::{criterion_group, criterion_main, Criterion};
use tableau_chase::chase::{
    bounder::RoundLimit,
    cover::minimal_cover,
    decide,
    preprocessor::{Seeder, SimpleSeeder},
    PreProcessor,
};
use std::fs;
use tableau_deps::{
    document::Document,
    syntax::{Query, Relation},
};

fn read_documents() -> Vec<Document> {
    fs::read_dir("../demos")
        .unwrap()
        .map(|item| {
            fs::read_to_string(item.unwrap().path())
                .unwrap()
                .parse()
                .unwrap()
        })
        .collect()
}

fn seeder_benchmark(c: &mut Criterion) {
    let documents = &read_documents();
    c.bench_function("seeder", |b| b.iter(|| time_decide(documents, &Seeder)));
}

fn simple_seeder_benchmark(c: &mut Criterion) {
    let documents: &Vec<Document> = &read_documents()
        .into_iter()
        .filter(|d| match &d.query {
            Query::LosslessJoin(fragments) => fragments.len() == 2,
            _ => false,
        })
        .collect();
    c.bench_function("simple_seeder", |b| {
        b.iter(|| time_decide(documents, &SimpleSeeder))
    });
}

fn minimal_cover_benchmark(c: &mut Criterion) {
    let relations: &Vec<Relation> = &read_documents()
        .into_iter()
        .map(|d| d.relation)
        .collect();
    c.bench_function("minimal_cover", |b| b.iter(|| time_minimal_cover(relations)));
}

fn time_decide<P: PreProcessor>(documents: &Vec<Document>, pre_processor: &P) {
    for document in documents {
        if let Query::MinimalCover = document.query {
            continue;
        }
        decide(
            pre_processor,
            &document.relation,
            &document.query,
            &RoundLimit::default(),
            |_, _| {},
        )
        .unwrap();
    }
}

fn time_minimal_cover(relations: &Vec<Relation>) {
    for relation in relations {
        minimal_cover(relation, &RoundLimit::default(), |_| {}).unwrap();
    }
}

criterion_group!(
    benches,
    seeder_benchmark,
    simple_seeder_benchmark,
    minimal_cover_benchmark
);
criterion_main!(benches);
