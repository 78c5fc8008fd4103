use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use minimax_chess::search::board_scoring::MaterialPositionScorer;
use minimax_chess::search::minimax::{alpha_beta_search, minimax_search, SearchConfig};
use minimax_chess::Board;

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    moves: &'static [&'static str],
    depth: u8,
    expected_move: &'static str,
}

const CASES_QUICK: &[SearchCase] = &[
    SearchCase {
        name: "fools_mate",
        moves: &["f2f3", "e7e5", "g2g4"],
        depth: 2,
        expected_move: "d8h4",
    },
    SearchCase {
        name: "after_e4",
        moves: &["e2e4"],
        depth: 3,
        expected_move: "g8f6",
    },
];

const CASES_STANDARD: &[SearchCase] = &[
    SearchCase {
        name: "fools_mate",
        moves: &["f2f3", "e7e5", "g2g4"],
        depth: 4,
        expected_move: "d8h4",
    },
    SearchCase {
        name: "scholars_mate",
        moves: &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6"],
        depth: 4,
        expected_move: "h5f7",
    },
    SearchCase {
        name: "after_e4",
        moves: &["e2e4"],
        depth: 3,
        expected_move: "g8f6",
    },
];

fn suite_name() -> &'static str {
    match std::env::var("CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [SearchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn position(case: &SearchCase) -> Board {
    let mut board = Board::new_game();
    for mv in case.moves {
        board
            .apply_long_algebraic(mv)
            .expect("benchmark move should be legal");
    }
    board
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("search_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in selected_cases() {
        let board = position(case);
        let config = SearchConfig {
            max_depth: case.depth,
            ..SearchConfig::default()
        };

        let warmup = alpha_beta_search(&board, &MaterialPositionScorer, config)
            .expect("search should run");
        assert_eq!(warmup.best_move.to_long_algebraic(), case.expected_move);

        group.bench_with_input(
            BenchmarkId::new("alpha_beta", format!("{}_d{}", case.name, case.depth)),
            &board,
            |b, board| {
                b.iter(|| {
                    let result = alpha_beta_search(black_box(board), &MaterialPositionScorer, config)
                        .expect("search benchmark run should succeed");
                    black_box(result.nodes)
                });
            },
        );

        if case.depth <= 3 {
            group.bench_with_input(
                BenchmarkId::new("minimax", format!("{}_d{}", case.name, case.depth)),
                &board,
                |b, board| {
                    b.iter(|| {
                        let result = minimax_search(black_box(board), &MaterialPositionScorer, config)
                            .expect("search benchmark run should succeed");
                        black_box(result.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
