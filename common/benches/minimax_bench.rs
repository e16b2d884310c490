use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, BotType, Direction, GameEngine, Label, Move, Scoring, calculate_move, search,
    winning_combinations,
};

const PLAYERS: [Label; 2] = [Label::X, Label::O];

fn bench_search_empty_board(scoring: Scoring) {
    let combos = winning_combinations(3);
    let mut board = Board::new(3);
    let result = search(&mut board, &combos, PLAYERS, Label::X, Direction::Maximize, scoring);
    black_box(result.ok());
}

fn bench_full_game_bot_vs_bot() {
    let mut engine = GameEngine::default();
    let mut rng = SessionRng::new(0);
    while !engine.status().is_over() {
        let Ok(mv) = calculate_move(BotType::MinimaxWithLength, &engine, &mut rng) else {
            break;
        };
        match engine.process_move(mv) {
            Ok(status) if !status.is_over() => engine.toggle_active_player(),
            _ => {}
        }
    }
    black_box(engine.outcome());
}

fn bench_single_move_mid_game() {
    let mut engine = GameEngine::default();
    for (row, col) in [(1, 1), (0, 0), (2, 2)] {
        let mv = Move::new(row, col, engine.current_player().label);
        if engine.process_move(mv).is_ok() {
            engine.toggle_active_player();
        }
    }
    let mut rng = SessionRng::new(0);
    black_box(calculate_move(BotType::Minimax, &engine, &mut rng).ok());
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    group.bench_function("empty_board_plain", |b| {
        b.iter(|| bench_search_empty_board(Scoring::Plain))
    });

    group.bench_function("empty_board_depth_weighted", |b| {
        b.iter(|| bench_search_empty_board(Scoring::DepthWeighted))
    });

    group.bench_function("single_move_mid_game", |b| b.iter(bench_single_move_mid_game));

    group.bench_function("full_game_bot_vs_bot", |b| b.iter(bench_full_game_bot_vs_bot));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
