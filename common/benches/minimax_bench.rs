use common::games::SessionRng;
use common::games::tictactoe::{
    Board, BotInput, DEFAULT_INTERMEDIATE_DEPTH, Difficulty, Mark, calculate_move,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_hard_single_move_empty_board() {
    let mut board = Board::new();
    let mut rng = SessionRng::new(0);
    black_box(calculate_move(
        Difficulty::Hard,
        BotInput::new(&mut board, DEFAULT_INTERMEDIATE_DEPTH),
        &mut rng,
    ));
}

fn bench_hard_reply_to_corner() {
    let mut board = Board::from_rows(["X  ", "   ", "   "]);
    let mut rng = SessionRng::new(0);
    black_box(calculate_move(
        Difficulty::Hard,
        BotInput::new(&mut board, DEFAULT_INTERMEDIATE_DEPTH),
        &mut rng,
    ));
}

fn bench_intermediate_mid_game() {
    let mut board = Board::from_rows(["X O", " X ", "   "]);
    let mut rng = SessionRng::new(0);
    black_box(calculate_move(
        Difficulty::Intermediate,
        BotInput::new(&mut board, DEFAULT_INTERMEDIATE_DEPTH),
        &mut rng,
    ));
}

fn bench_hard_self_play() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;
    let mut rng = SessionRng::new(0);

    while !board.terminal_status().is_over() {
        // X takes the first free cell; the search answers as O.
        let pos = if current_mark == Mark::O {
            calculate_move(
                Difficulty::Hard,
                BotInput::new(&mut board, DEFAULT_INTERMEDIATE_DEPTH),
                &mut rng,
            )
        } else {
            board.empty_cells().first().copied()
        };
        let Some(pos) = pos else {
            break;
        };
        if board.place(pos, current_mark).is_err() {
            break;
        }
        current_mark = current_mark.opponent().unwrap_or(Mark::X);
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("hard_single_move_empty", |b| {
        b.iter(bench_hard_single_move_empty_board)
    });

    group.bench_function("hard_reply_to_corner", |b| b.iter(bench_hard_reply_to_corner));

    group.bench_function("intermediate_mid_game", |b| {
        b.iter(bench_intermediate_mid_game)
    });

    group.bench_function("hard_full_game", |b| b.iter(bench_hard_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
