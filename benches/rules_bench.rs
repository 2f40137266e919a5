use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use ashwood_rules::board::{all_positions, ALL_CLASSES};
use ashwood_rules::combat::board_bonuses;
use ashwood_rules::movegen::{cavalry_rays, legal_actions};
use ashwood_rules::protocol::parse_bfen;
use ashwood_rules::{
    can_move, legal_deployments, legal_moves, Board, Position, Side, Unit, UnitClass,
};

const SKIRMISH_BFEN: &str =
    "9/ii1:5.4.3.0,ic5:6.2.6.0,ie9:8.8.8.0,ia12:4.2.3.0,ds8:1.3.2.4,dp29:3.7.1.0,dc31:6.2.6.0,ds32:1.3.1.0,di47:4.4.4.0";

/// A board with `count` random units on distinct cells.
fn random_board(rng: &mut SmallRng, count: usize) -> Board {
    let mut board = Board::empty();
    while board.len() < count {
        let p = Position::new(rng.gen_range(1..=54)).unwrap();
        let side = if rng.gen_bool(0.5) { Side::Invader } else { Side::Defender };
        let class = ALL_CLASSES[rng.gen_range(0..ALL_CLASSES.len())];
        let unit = Unit::new(class, rng.gen_range(0..10), rng.gen_range(0..10), rng.gen_range(0..10));
        board.place(p, side, unit);
    }
    board
}

fn bench_cavalry_rays(c: &mut Criterion) {
    c.bench_function("cavalry_rays_all_positions", |b| {
        b.iter(|| {
            for p in all_positions() {
                black_box(cavalry_rays(black_box(p)));
            }
        })
    });
}

fn bench_can_move_cavalry(c: &mut Criterion) {
    let snapshot = parse_bfen(SKIRMISH_BFEN).unwrap();
    let from = Position::new(5).unwrap();
    c.bench_function("can_move_cavalry_all_targets", |b| {
        b.iter(|| {
            for to in all_positions() {
                let _ = black_box(can_move(
                    UnitClass::Cavalry,
                    from,
                    to,
                    Side::Invader,
                    black_box(&snapshot.board),
                ));
            }
        })
    });
}

fn bench_legal_moves_random(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let boards: Vec<Board> = (0..32).map(|_| random_board(&mut rng, 24)).collect();
    c.bench_function("legal_moves_random_boards", |b| {
        b.iter(|| {
            for board in &boards {
                for (p, _) in board.occupants() {
                    black_box(legal_moves(p, board));
                }
            }
        })
    });
}

fn bench_legal_deployments(c: &mut Criterion) {
    let snapshot = parse_bfen(SKIRMISH_BFEN).unwrap();
    c.bench_function("legal_deployments_both_sides", |b| {
        b.iter(|| {
            let _ = black_box(legal_deployments(Side::Invader, snapshot.turn, &snapshot.board));
            let _ = black_box(legal_deployments(Side::Defender, snapshot.turn, &snapshot.board));
        })
    });
}

fn bench_board_bonuses(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = random_board(&mut rng, 40);
    c.bench_function("board_bonuses_40_units", |b| {
        b.iter(|| black_box(board_bonuses(black_box(&board))))
    });
}

fn bench_legal_actions(c: &mut Criterion) {
    let snapshot = parse_bfen(SKIRMISH_BFEN).unwrap();
    c.bench_function("legal_actions_invader", |b| {
        b.iter(|| black_box(legal_actions(Side::Invader, snapshot.turn, black_box(&snapshot.board))))
    });
}

criterion_group!(
    benches,
    bench_cavalry_rays,
    bench_can_move_cavalry,
    bench_legal_moves_random,
    bench_legal_deployments,
    bench_board_bonuses,
    bench_legal_actions,
);
criterion_main!(benches);
