use std::collections::VecDeque;

use hooklist::{impl_linked, List, ListHook};
use proptest::prelude::*;

const POOL: usize = 8;

struct Node {
    id: usize,
    hook: ListHook,
}

impl_linked!(Node, hook);

#[derive(Debug, Clone)]
enum Op {
    PushBack(usize),
    PushFront(usize),
    PopBack,
    PopFront,
    Unlink(usize),
    MoveToOther(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..POOL).prop_map(Op::PushBack),
        3 => (0..POOL).prop_map(Op::PushFront),
        2 => Just(Op::PopBack),
        2 => Just(Op::PopFront),
        2 => (0..POOL).prop_map(Op::Unlink),
        1 => (0..POOL).prop_map(Op::MoveToOther),
    ]
}

fn forget(model: &mut VecDeque<usize>, id: usize) {
    model.retain(|&other| other != id);
}

fn ids(list: &List<Node>) -> Vec<usize> {
    list.iter().map(|node| node.id).collect()
}

proptest! {
    #[test]
    fn list_matches_deque_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let pool: Vec<Node> = (0..POOL)
            .map(|id| Node { id, hook: ListHook::new() })
            .collect();
        let list = List::new();
        let other = List::new();
        let mut model: VecDeque<usize> = VecDeque::new();
        let mut other_model: VecDeque<usize> = VecDeque::new();

        for op in ops {
            match op {
                Op::PushBack(id) => {
                    forget(&mut model, id);
                    forget(&mut other_model, id);
                    list.push_back(&pool[id]);
                    model.push_back(id);
                }
                Op::PushFront(id) => {
                    forget(&mut model, id);
                    forget(&mut other_model, id);
                    list.push_front(&pool[id]);
                    model.push_front(id);
                }
                Op::PopBack => {
                    prop_assert_eq!(list.try_pop_back().ok().map(|node| node.id), model.pop_back());
                }
                Op::PopFront => {
                    prop_assert_eq!(list.try_pop_front().ok().map(|node| node.id), model.pop_front());
                }
                Op::Unlink(id) => {
                    pool[id].hook.unlink();
                    forget(&mut model, id);
                    forget(&mut other_model, id);
                }
                Op::MoveToOther(id) => {
                    forget(&mut model, id);
                    forget(&mut other_model, id);
                    other.push_back(&pool[id]);
                    other_model.push_back(id);
                }
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(ids(&list), model.iter().copied().collect::<Vec<_>>());
            prop_assert_eq!(ids(&other), other_model.iter().copied().collect::<Vec<_>>());
            for node in &pool {
                prop_assert_eq!(list.contains(node), model.contains(&node.id));
                prop_assert_eq!(node.hook.is_linked(), model.contains(&node.id) || other_model.contains(&node.id));
            }
        }
    }

    #[test]
    fn ring_closes_in_both_directions(pushes in prop::collection::vec((0..POOL, any::<bool>()), 0..64)) {
        let pool: Vec<Node> = (0..POOL)
            .map(|id| Node { id, hook: ListHook::new() })
            .collect();
        let list = List::new();
        for (id, back) in pushes {
            if back {
                list.push_back(&pool[id]);
            } else {
                list.push_front(&pool[id]);
            }
        }

        let steps = list.len() + 1;
        let mut forward = list.cursor_end();
        let mut backward = list.cursor_end();
        for step in 1..=steps {
            forward.move_next();
            backward.move_prev();
            prop_assert_eq!(forward.is_end(), step == steps);
            prop_assert_eq!(backward.is_end(), step == steps);
        }

        let forward_ids = ids(&list);
        let mut backward_ids: Vec<usize> = list.iter().rev().map(|node| node.id).collect();
        backward_ids.reverse();
        prop_assert_eq!(forward_ids, backward_ids);
    }

    #[test]
    fn cursor_survives_unrelated_removals(removals in prop::collection::vec(0..POOL, 0..16), anchor in 0..POOL) {
        let pool: Vec<Node> = (0..POOL)
            .map(|id| Node { id, hook: ListHook::new() })
            .collect();
        let list = List::new();
        for node in &pool {
            list.push_back(node);
        }

        let cursor = list.cursor_to(&pool[anchor]);
        for id in removals.into_iter().filter(|&id| id != anchor) {
            list.remove(&pool[id]);
        }

        prop_assert!(cursor.is_attached());
        prop_assert_eq!(cursor.current().map(|node| node.id), Some(anchor));
        let expected_next = pool[anchor + 1..].iter().find(|node| list.contains(node)).map(|node| node.id);
        prop_assert_eq!(cursor.peek_next().map(|node| node.id), expected_next);
    }
}
