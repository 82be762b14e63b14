use ::avl::Tree;

use quickcheck_macros::quickcheck;
use std::collections::HashSet;

use crate::{init_tracing, Op};

/// Applies a set of operations to a tree and a sorted vector.
/// This way we can ensure that after a random smattering of inserts
/// the tree holds exactly the keys the vector does, and stays balanced
/// along the way.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, model: &mut Vec<K>) -> bool
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.clone());
                let pos = model.partition_point(|x| x <= k);
                model.insert(pos, k.clone());

                if let Err(violation) = tree.check_invariants() {
                    eprintln!("after inserting {:?}: {}", k, violation);
                    return false;
                }
            }
            Op::Search(k) => {
                if tree.search(k) != model.binary_search(k).is_ok() {
                    return false;
                }
            }
            Op::Traverse => {
                if !tree.inorder_traversal().into_iter().eq(model.iter()) {
                    return false;
                }
            }
        }
    }

    tree.len() == model.len()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_tracing();

    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model)
}

#[quickcheck]
fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn inorder_is_sorted_input(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.inorder_traversal().into_iter().eq(sorted.iter()) && tree.iter().eq(sorted.iter())
}

#[quickcheck]
fn traversals_agree_on_root(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let pre = tree.preorder_traversal();
    let post = tree.postorder_traversal();
    let root = tree.root().map(|n| n.key());

    let mut pre_sorted = pre.clone();
    pre_sorted.sort_unstable();
    let mut post_sorted = post.clone();
    post_sorted.sort_unstable();

    pre.len() == xs.len()
        && pre_sorted == post_sorted
        && pre.first().copied() == root
        && post.last().copied() == root
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<u16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let bound = 1.45 * ((xs.len() + 2) as f64).log2();

    (tree.height() as f64) <= bound
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}
