use criterion::{criterion_group, criterion_main, Criterion, black_box};
use abprune::search::minimax;
use abprune::tictactoe::{Board, TicTacToe};

fn bench_minimax(c: &mut Criterion) {
    let b = Board::from_cells("X.. ... ...").unwrap();
    c.bench_function("minimax_tictactoe_one_move", |ben| {
        ben.iter(|| black_box(minimax::minimax_decision(black_box(&b), &TicTacToe).unwrap().nodes))
    });
    c.bench_function("minimax_parallel_tictactoe_one_move", |ben| {
        ben.iter(|| black_box(minimax::minimax_decision_parallel(black_box(&b), &TicTacToe).unwrap().nodes))
    });
}

criterion_group!(benches, bench_minimax);
criterion_main!(benches);
