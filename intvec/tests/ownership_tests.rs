use intvec::{int_vec, IntVec};

#[test]
fn test_clone_is_independent() {
    let mut a = int_vec![1, 2, 3];
    let mut b = a.clone();

    b[0] = 10;
    b.push(4);
    a[2] = 30;

    assert_eq!(a.as_slice(), &[1, 2, 30]);
    assert_eq!(b.as_slice(), &[10, 2, 3, 4]);
}

#[test]
fn test_clone_copies_only_live_values() {
    let mut a = int_vec![1, 2, 3, 4];
    a.pop();
    let b = a.clone();

    assert_eq!(b.len(), 3);
    assert_eq!(b.capacity(), 4);
    assert_eq!(b.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_clone_of_empty() {
    let a = IntVec::new();
    let b = a.clone();

    assert_eq!(b.capacity(), 0);
    assert!(b.is_empty());
}

#[test]
fn test_take_leaves_source_empty() {
    let mut a = int_vec![1, 2, 3];
    let b = a.take();

    assert_eq!(b.as_slice(), &[1, 2, 3]);
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 0);

    a.push(5);
    assert_eq!(a.as_slice(), &[5]);
}

#[test]
fn test_mem_take_leaves_source_empty() {
    let mut a = int_vec![7];
    let b = std::mem::take(&mut a);

    assert_eq!(b.as_slice(), &[7]);
    assert_eq!(a.capacity(), 0);
}

#[test]
fn test_move_assignment_replaces_contents() {
    let mut a = int_vec![1, 2, 3];
    let mut b = int_vec![9];
    b.reserve(16);
    assert_eq!(a.len(), 3);

    a = b.take();

    assert_eq!(a.as_slice(), &[9]);
    assert_eq!(a.capacity(), 16);
    assert_eq!(b.capacity(), 0);
}

#[test]
fn test_swap_exchanges_everything() {
    let mut a = int_vec![1, 2, 3];
    let mut b = IntVec::new();
    b.reserve(10);
    b.push(4);

    a.swap(&mut b);

    assert_eq!(a.as_slice(), &[4]);
    assert_eq!(a.capacity(), 10);
    assert_eq!(b.as_slice(), &[1, 2, 3]);
    assert_eq!(b.capacity(), 3);
}

#[test]
fn test_swap_with_empty() {
    let mut a = IntVec::new();
    let mut b = int_vec![1];

    a.swap(&mut b);

    assert_eq!(a.as_slice(), &[1]);
    assert!(b.is_empty());
    assert_eq!(b.capacity(), 0);
}
