use circdeque::{Arbitrary, CircularDeque, DequeError};

fn contents<P: circdeque::CapacityPolicy>(deque: &CircularDeque<i32, P>) -> Vec<i32> {
    (0..deque.len()).map(|i| deque[i]).collect()
}

/// Ring of 8 holding -3,-2,-1,0,1,2 with the first element at slot 5.
fn wrapped_deque() -> CircularDeque<i32> {
    let mut deque = CircularDeque::new();
    for i in 0..3 {
        deque.push_back(i).unwrap();
    }
    for i in 1..=3 {
        deque.push_front(-i).unwrap();
    }
    assert_eq!(deque.capacity(), 8);
    assert_eq!(deque.offset(), 5);
    deque
}

#[test]
fn test_insert_into_empty() {
    let mut deque = CircularDeque::new();
    deque.insert(0, 5).unwrap();
    assert_eq!(contents(&deque), vec![5]);
}

#[test]
fn test_insert_at_len_appends() {
    let mut deque = CircularDeque::new();
    deque.push_back(1).unwrap();
    deque.push_back(2).unwrap();
    deque.insert(2, 3).unwrap();
    assert_eq!(contents(&deque), vec![1, 2, 3]);
}

#[test]
fn test_insert_at_front_of_wrapped_range() {
    let mut deque = wrapped_deque();
    deque.insert(0, 100).unwrap();
    assert_eq!(contents(&deque), vec![100, -3, -2, -1, 0, 1, 2]);
    assert_eq!(deque.offset(), 5);
}

#[test]
fn test_insert_in_head_segment_moves_prefix() {
    let mut deque = wrapped_deque();
    deque.insert(2, 100).unwrap();
    assert_eq!(contents(&deque), vec![-3, -2, 100, -1, 0, 1, 2]);
    assert_eq!(deque.offset(), 4);
}

#[test]
fn test_insert_in_wrapped_tail_moves_suffix() {
    let mut deque = wrapped_deque();
    deque.insert(4, 100).unwrap();
    assert_eq!(contents(&deque), vec![-3, -2, -1, 0, 100, 1, 2]);
    assert_eq!(deque.offset(), 5);
}

#[test]
fn test_insert_with_zero_offset_moves_suffix() {
    let mut deque = CircularDeque::new();
    for i in 0..6 {
        deque.push_back(i).unwrap();
    }
    deque.insert(3, 100).unwrap();
    assert_eq!(deque.offset(), 0);
    assert_eq!(contents(&deque), vec![0, 1, 2, 100, 3, 4, 5]);
}

#[test]
fn test_insert_grows_full_wrapped_deque() {
    let mut deque = wrapped_deque();
    deque.push_front(-4).unwrap();
    deque.push_back(3).unwrap();
    assert_eq!(deque.len(), 8);

    deque.insert(5, 100).unwrap();
    assert_eq!(deque.capacity(), 16);
    assert_eq!(contents(&deque), vec![-4, -3, -2, -1, 0, 100, 1, 2, 3]);
}

#[test]
fn test_insert_every_position() {
    for index in 0..=20 {
        let mut deque = CircularDeque::new();
        for i in 0..10 {
            deque.push_back(2 * i + 1).unwrap();
            deque.push_front(-(2 * i)).unwrap();
        }
        let mut expected = contents(&deque);

        deque.insert(index, 1000).unwrap();
        expected.insert(index, 1000);

        assert_eq!(deque.get(index), Some(&1000));
        assert_eq!(contents(&deque), expected);
    }
}

#[test]
fn test_insert_out_of_range() {
    let mut deque = CircularDeque::new();
    deque.push_back(1).unwrap();

    assert_eq!(
        deque.insert(2, 5),
        Err(DequeError::IndexOutOfBounds {
            index: 2,
            length: 1
        })
    );
    assert_eq!(contents(&deque), vec![1]);
}

#[test]
fn test_insert_with_arbitrary_policy() {
    let mut deque = CircularDeque::with_policy(Arbitrary);
    for i in 0..20 {
        deque.push_front(i).unwrap();
    }
    let mut expected = contents(&deque);

    for (index, value) in [(0, -1), (7, -2), (15, -3), (23, -4)] {
        deque.insert(index, value).unwrap();
        expected.insert(index, value);
    }
    assert_eq!(contents(&deque), expected);
}
