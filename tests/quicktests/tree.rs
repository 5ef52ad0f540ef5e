use balanced_bst::tree::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and an ordered set.
/// This way we can ensure that after a random smattering of inserts,
/// deletes, and rebalances we hold the same values as the oracle.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Copy,
{
    for op in ops {
        match op {
            Op::Insert(value) => {
                tree.insert(*value);
                set.insert(*value);
            }
            Op::Delete(value) => {
                tree.delete(value);
                set.remove(value);
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.inorder_map(|v| *v) == set.iter().copied().collect::<Vec<_>>()
        && set.iter().all(|value| tree.find(value).is_some())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());

    xs.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());

    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::from_values(xs.clone());
    for delete in &deletes {
        tree.delete(delete);
    }

    let deleted: HashSet<_> = deletes.into_iter().collect();
    let still_present: HashSet<_> = xs
        .into_iter()
        .filter(|x| !deleted.contains(x))
        .collect();

    deleted.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn inorder_is_sorted_unique_input(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.inorder_map(|v| *v) == expected
}

#[quickcheck]
fn duplicate_insert_preserves_inorder(xs: Vec<i8>, dup: i8) -> bool {
    let mut tree = Tree::from_values(xs);
    tree.insert(dup);
    let before = tree.inorder_map(|v| *v);

    tree.insert(dup);

    tree.inorder_map(|v| *v) == before
}

#[quickcheck]
fn depth_is_consistent_with_find(xs: Vec<i8>, probe: i8) -> bool {
    let tree = Tree::from_values(xs);

    (tree.depth(&probe) >= 0) == tree.find(&probe).is_some()
}

#[quickcheck]
fn built_tree_is_balanced_with_logarithmic_height(xs: Vec<i16>) -> bool {
    let unique: BTreeSet<_> = xs.iter().copied().collect();
    let tree = Tree::from_values(xs);

    // A tree of height `h` holds at most `2^(h+1) - 1` values.
    let n = unique.len();
    let expected_height = if n == 0 {
        -1
    } else {
        let mut height = 0isize;
        while (1usize << (height + 1)) - 1 < n {
            height += 1;
        }
        height
    };

    tree.balanced() && tree.height() == expected_height
}

#[quickcheck]
fn rebalance_restores_balance_and_preserves_contents(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let before = tree.inorder_map(|v| *v);

    tree.rebalance();

    tree.balanced() && tree.inorder_map(|v| *v) == before
}

#[quickcheck]
fn rebalance_is_idempotent(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    tree.rebalance();
    let first = tree.level_order_map(|v| *v);

    tree.rebalance();

    tree.level_order_map(|v| *v) == first
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.clone());
    let unique: HashSet<_> = xs.into_iter().collect();
    let n = unique.len();

    let as_set = |values: Vec<i8>| values.into_iter().collect::<HashSet<_>>();

    tree.level_order().len() == n
        && tree.preorder().len() == n
        && tree.postorder().len() == n
        && as_set(tree.level_order_map(|v| *v)) == unique
        && as_set(tree.preorder_map(|v| *v)) == unique
        && as_set(tree.postorder_map(|v| *v)) == unique
}
