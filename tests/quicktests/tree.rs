use movie_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.remove(k);
                set.remove(k);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        set.iter().all(|key| tree.search(key) == Some(key)) && tree.iter().eq(set.iter())
    }

    fn in_order_is_strictly_increasing(ops: Vec<Op<i32>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        let keys: Vec<_> = tree.iter().collect();
        keys.windows(2).all(|w| w[0] < w[1])
    }

    fn len_matches_traversal(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == tree.iter().count() && tree.len() == set.len()
    }

    fn duplicate_insert_is_idempotent(xs: Vec<i16>) -> bool {
        let once: Tree<_> = xs.iter().copied().collect();
        let twice: Tree<_> = xs.iter().flat_map(|&x| [x, x]).collect();

        once.len() == twice.len() && once.iter().eq(twice.iter()) && once.height() == twice.height()
    }

    fn remove_then_search_misses(xs: Vec<i8>, key: i8) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let was_present = tree.contains(&key);

        tree.remove(&key) == was_present.then_some(key) && tree.search(&key).is_none()
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }

    fn round_trip_ignores_insertion_order(xs: Vec<i32>) -> bool {
        let forward: Tree<_> = xs.iter().copied().collect();
        let backward: Tree<_> = xs.iter().rev().copied().collect();
        let sorted: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        forward.into_iter().eq(sorted.iter().copied()) && backward.iter().eq(sorted.iter())
    }
}
