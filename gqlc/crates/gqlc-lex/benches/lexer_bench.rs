//! Lexer Benchmarks
//!
//! Measures throughput of the GraphQL lexer.
//! Run with: `cargo bench --package gqlc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gqlc_lex::{tokenize, Lexer};

fn lexer_token_count(source: &[char]) -> usize {
    Lexer::new(source).count()
}

fn chars(source: &str) -> Vec<char> {
    source.chars().collect()
}

fn bench_lexer_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let small = "{ hero { name } }";
    let source = r#"
        query HeroNameAndFriends($episode: Episode = JEDI, $withFriends: Boolean!) {
          hero(episode: $episode) {
            name
            friends @include(if: $withFriends) {
              name
              ... on Droid { primaryFunction }
            }
          }
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    let small_chars = chars(small);
    group.bench_function("small_query", |b| {
        b.iter(|| lexer_token_count(black_box(&small_chars)))
    });

    let source_chars = chars(source);
    group.bench_function("query_with_variables", |b| {
        b.iter(|| lexer_token_count(black_box(&source_chars)))
    });

    group.bench_function("tokenize_from_str", |b| b.iter(|| tokenize(black_box(source))));

    group.finish();
}

fn bench_lexer_schema(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_schema");

    let source = r#"
        """
        A character in the Star Wars trilogy
        """
        interface Character {
          id: ID!
          name: String!
          friends: [Character]
          appearsIn: [Episode]!
        }

        type Human implements Character {
          id: ID!
          name: String!
          height(unit: LengthUnit = METER): Float
          mass: Float
        }

        union SearchResult = Human | Droid | Starship

        # Entry points
        type Query {
          hero(episode: Episode): Character
          search(text: String, first: Int = 10, ratio: Float = 1.5e-2): [SearchResult]
        }
    "#;
    let source_chars = chars(source);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("schema", |b| {
        b.iter(|| lexer_token_count(black_box(&source_chars)))
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    let numbers = chars("[0, -1, 42, 3.14159, -2.5e10, 6.0221E23, 1234567890]");
    group.bench_function("numbers", |b| b.iter(|| lexer_token_count(black_box(&numbers))));

    let string = chars(&format!("\"{}\"", "benchmark text ".repeat(20)));
    group.bench_function("long_string", |b| b.iter(|| lexer_token_count(black_box(&string))));

    let block = chars(&format!("\"\"\"{}\"\"\"", "line with \"quotes\"\n".repeat(20)));
    group.bench_function("block_string", |b| b.iter(|| lexer_token_count(black_box(&block))));

    group.finish();
}

fn bench_lexer_trivia(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_trivia");

    let source = chars(&"# a comment line\n  ,, name\n".repeat(50));
    group.bench_function("comments_and_commas", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.bench_function("with_trivia", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(black_box(&source)).with_trivia();
            let tokens = lexer.by_ref().count();
            tokens + lexer.take_trivia().len()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_query,
    bench_lexer_schema,
    bench_lexer_literals,
    bench_lexer_trivia
);
criterion_main!(benches);
