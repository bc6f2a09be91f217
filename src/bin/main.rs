use avl_arena::AvlTree;

fn main() {
    let mut tree: AvlTree<u32, &str> = AvlTree::new();

    let entries = [
        (2, "two"),
        (0, "zero"),
        (3, "three"),
        (4, "four"),
        (5, "five"),
        (1, "one"),
        (6, "six"),
    ];

    for (key, name) in entries {
        tree.insert(key, name);
        tree.assert_invariants();
        println!("{:?}", tree.iter().map(|(&key, _)| key).collect::<Vec<_>>());
    }

    println!("root: {:?}", tree.root());

    let mut dot = String::new();
    tree.dotgraph("demo", &mut dot).expect("writing to a String cannot fail");
    println!("{dot}");

    let zero = tree.pop_first().expect("tree is not empty");
    assert_eq!(zero, (0, "zero"));
    tree.assert_invariants();

    println!("{tree:?}");
}
