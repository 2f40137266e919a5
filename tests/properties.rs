//! Property-based tests for board geometry and rule invariants.

use proptest::prelude::*;

use ashwood_rules::board::{
    all_positions, cross_sector_link, from_coords, full_neighbors, in_sector_neighbors,
    is_available, is_in_zone, to_coords, ALL_CLASSES, ALL_SEASONS, PRIME_POSITIONS,
};
use ashwood_rules::movegen::{walk_ray, ALL_DIRECTIONS};
use ashwood_rules::protocol::{encode_bfen, parse_bfen};
use ashwood_rules::{
    can_deploy, can_move, can_move_unit, compute_bonuses, legal_moves, Board, DeployError,
    MoveError, Position, Season, Side, Unit, UnitClass,
};

fn position() -> impl Strategy<Value = Position> {
    (1u32..=54).prop_map(|n| Position::new(n).unwrap())
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Invader), Just(Side::Defender)]
}

fn unit() -> impl Strategy<Value = Unit> {
    (0usize..ALL_CLASSES.len(), 0u32..12, 0u32..12, 0u32..12, 0u32..5).prop_map(
        |(c, atk, def, spd, spc)| Unit::new(ALL_CLASSES[c], atk, def, spd).with_special(spc),
    )
}

fn board() -> impl Strategy<Value = Board> {
    prop::collection::vec((position(), side(), unit()), 0..24).prop_map(|units| {
        let mut board = Board::empty();
        for (p, s, u) in units {
            board.place(p, s, u);
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_coords_bijection(p in position()) {
        let c = to_coords(p);
        prop_assert_eq!(from_coords(c.sector, c.row, c.col), Ok(p));
    }

    #[test]
    fn prop_neighbour_symmetry(p in position()) {
        for q in in_sector_neighbors(p) {
            prop_assert!(in_sector_neighbors(q).contains(&p));
        }
        for q in full_neighbors(p) {
            prop_assert!(full_neighbors(q).contains(&p));
        }
    }

    #[test]
    fn prop_link_symmetry(p in position()) {
        if let Some(q) = cross_sector_link(p) {
            prop_assert_ne!(p.sector(), q.sector());
            prop_assert_eq!(cross_sector_link(q), Some(p));
        }
    }

    #[test]
    fn prop_cavalry_cannot_jump(
        from in position(),
        dir in 0usize..8,
        blocker_side in side(),
        blocker in unit(),
    ) {
        let ray = walk_ray(from, ALL_DIRECTIONS[dir]);
        prop_assume!(ray.cells.len() == 2);

        let mut board = Board::empty();
        board.place(from, Side::Invader, Unit::new(UnitClass::Cavalry, 5, 5, 5));
        board.place(ray.cells[0], blocker_side, blocker);

        let verdict = can_move(UnitClass::Cavalry, from, ray.cells[1], Side::Invader, &board);
        prop_assert_eq!(
            verdict,
            Err(MoveError::PathBlocked { from, to: ray.cells[1], at: ray.cells[0] })
        );
    }

    #[test]
    fn prop_first_unit_in_sector_has_supply(
        board in board(),
        p in position(),
        s in side(),
        turn in 1u32..200,
    ) {
        prop_assume!(board.count_in_sector(p.sector(), s) == 0);
        prop_assert_ne!(
            can_deploy(p, s, turn, &board),
            Err(DeployError::SupplyChainBroken(p))
        );
    }

    #[test]
    fn prop_deployments_stay_in_zone(board in board(), p in position(), s in side(), turn in 1u32..200) {
        if can_deploy(p, s, turn, &board).is_ok() {
            prop_assert!(is_in_zone(p, s));
            prop_assert!(!board.is_occupied(p));
        }
    }

    #[test]
    fn prop_bonuses_bounded(board in board(), p in position()) {
        let b = compute_bonuses(p, &board);
        if !board.is_occupied(p) {
            prop_assert_eq!(b.total(), 0);
        }
        // Nine neighbours at most, each worth at most +10 attack.
        prop_assert!(b.attack <= 90);
        prop_assert!(b.defense <= 90);
        prop_assert!(b.speed <= 45);
    }

    #[test]
    fn prop_legal_moves_agree_with_can_move(board in board(), from in position()) {
        let side = board.side_at(from);
        for (to, effect) in legal_moves(from, &board) {
            let side = side.unwrap();
            prop_assert_eq!(can_move_unit(from, to, side, &board), Ok(effect));
            prop_assert_ne!(board.side_at(to), Some(side));
        }
    }

    #[test]
    fn prop_bfen_encoding_is_stable(board in board(), turn in 1u32..500) {
        let text = encode_bfen(turn, &board);
        let snapshot = parse_bfen(&text).unwrap();
        prop_assert_eq!(snapshot.turn, turn);
        prop_assert_eq!(&snapshot.board, &board);
    }
}

#[test]
fn odd_and_even_partition_the_board() {
    for p in all_positions() {
        let odd = is_available(p, Season::Odd);
        let even = is_available(p, Season::Even);
        assert!(odd != even, "position {} must open in exactly one of Odd/Even", p);
        if is_available(p, Season::Prime) {
            assert!(PRIME_POSITIONS.contains(&p.get()));
            assert!(odd || p.get() == 2);
        }
    }
    let prime_count = all_positions()
        .filter(|p| is_available(*p, Season::Prime))
        .count();
    assert_eq!(prime_count, 16);
    assert_eq!(ALL_SEASONS.len(), 3);
}
