extern crate std;

use std::{vec, vec::Vec};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::node_list::{NodeList, NodeListError, Position};

/// Checks both traversal directions against the expected sequence.
fn assert_matches(list: &NodeList<i64>, model: &[(Position, i64)]) {
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert_eq!(list.is_empty(), list.begin() == list.end());

    let mut it = list.begin();
    for &(pos, value) in model {
        assert_eq!(it, pos);
        assert_eq!(list.get(it), Ok(&value));
        it.move_next(list).unwrap();
    }
    assert_eq!(it, list.end());

    for &(pos, value) in model.iter().rev() {
        it.move_prev(list).unwrap();
        assert_eq!(it, pos);
        assert_eq!(list[it], value);
    }
    assert_eq!(it, list.begin());
}

#[test]
fn test_random_operations_against_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut list = NodeList::new();
    let mut model: Vec<(Position, i64)> = vec![];
    let mut stale: Vec<Position> = vec![];
    let mut inserted = 0usize;
    let mut erased = 0usize;

    for step in 0..4000i64 {
        match rng.random_range(0..6) {
            0 => {
                let pos = list.insert_front(step);
                model.insert(0, (pos, step));
                inserted += 1;
            }
            1 => {
                let pos = list.insert_back(step);
                model.push((pos, step));
                inserted += 1;
            }
            2 => {
                let at = rng.random_range(0..=model.len());
                let before = model.get(at).map_or(list.end(), |&(pos, _)| pos);
                let pos = list.insert(before, step).unwrap();
                model.insert(at, (pos, step));
                inserted += 1;
            }
            3 if !model.is_empty() => {
                let at = rng.random_range(0..model.len());
                let (pos, value) = model.remove(at);
                assert_eq!(list.erase(pos), Ok(value));
                stale.push(pos);
                erased += 1;
            }
            4 => match model.first().copied() {
                Some((pos, value)) => {
                    assert_eq!(list.erase_front(), Ok(value));
                    model.remove(0);
                    stale.push(pos);
                    erased += 1;
                }
                None => assert_eq!(list.erase_front(), Err(NodeListError::Empty)),
            },
            _ => match model.pop() {
                Some((pos, value)) => {
                    assert_eq!(list.erase_back(), Ok(value));
                    stale.push(pos);
                    erased += 1;
                }
                None => assert_eq!(list.erase_back(), Err(NodeListError::Empty)),
            },
        }

        assert_eq!(list.len(), inserted - erased);
        if step % 97 == 0 {
            assert_matches(&list, &model);
        }
    }

    assert_matches(&list, &model);
    for pos in stale {
        assert_eq!(list.get(pos), Err(NodeListError::Stale(pos)));
        assert!(!list.contains(pos));
    }
    for &(pos, _) in &model {
        assert!(list.contains(pos));
    }
}

#[test]
fn test_random_erase_until_empty() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut list: NodeList<i64> = (0..256).collect();
    let mut model: Vec<(Position, i64)> = list.positions().zip(0..256).collect();

    while !model.is_empty() {
        let at = rng.random_range(0..model.len());
        let (pos, value) = model.remove(at);
        assert_eq!(list.erase(pos), Ok(value));
    }

    assert_matches(&list, &model);
    assert_eq!(list.begin(), list.end());
}
