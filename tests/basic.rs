use ringkit::{DynamicRing, FixedRing, LinkedRing, ResultCode, RingBuffer, RingError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Raw size 3, usable capacity 2.
fn run_size_three_scenario<R: RingBuffer<i32>>(rb: &mut R) {
    assert_eq!(rb.try_write(1), Ok(()));
    assert_eq!(rb.try_write(2), Ok(()));
    assert_eq!(rb.try_write(3), Err(RingError::Full));
    assert_eq!(rb.try_read(), Ok(1));
    assert_eq!(rb.try_write(3), Ok(()));
    assert_eq!(rb.try_read(), Ok(2));
    assert_eq!(rb.try_read(), Ok(3));
    assert_eq!(rb.try_read(), Err(RingError::Empty));
}

#[test]
fn fixed_size_three_scenario() {
    let mut rb: FixedRing<i32, 3> = FixedRing::new();
    assert_eq!(rb.capacity(), 3);
    run_size_three_scenario(&mut rb);
}

#[test]
fn dynamic_size_three_scenario() {
    init_logging();
    let mut rb = DynamicRing::new(3).unwrap();
    run_size_three_scenario(&mut rb);
}

#[test]
fn linked_two_nodes_match_size_three_scenario() {
    init_logging();
    // Every linked node is usable, so two nodes give the same capacity.
    let mut rb = LinkedRing::new(2).unwrap();
    run_size_three_scenario(&mut rb);
}

#[test]
fn status_codes_through_public_api() {
    let mut rb: FixedRing<u8, 2> = FixedRing::new();
    assert_eq!(ResultCode::of(&rb.try_read()), ResultCode::BufferEmpty);
    assert_eq!(ResultCode::of(&rb.try_write(1)), ResultCode::Success);
    assert_eq!(ResultCode::of(&rb.try_write(2)), ResultCode::BufferFull);

    let mut none: DynamicRing<u8> = DynamicRing::unallocated();
    assert_eq!(ResultCode::of(&none.try_write(1)), ResultCode::BufferNotInited);
    assert_eq!(ResultCode::of(&none.create_storage(0)), ResultCode::InvalidArgument);
    assert_eq!(ResultCode::of(&LinkedRing::<u8>::new(0)).as_i32(), -3);
}

#[test]
fn fresh_rings_are_empty_and_fill_to_limit() {
    for n in 2..12usize {
        let mut dynamic = DynamicRing::new(n).unwrap();
        let mut linked = LinkedRing::new(n).unwrap();
        assert_eq!(dynamic.try_read(), Err(RingError::Empty));
        assert_eq!(linked.try_read(), Err(RingError::Empty));

        for i in 0..n - 1 {
            assert_eq!(dynamic.try_write(i), Ok(()));
        }
        assert_eq!(dynamic.try_write(n), Err(RingError::Full));

        for i in 0..n {
            assert_eq!(linked.try_write(i), Ok(()));
        }
        assert_eq!(linked.try_write(n), Err(RingError::Full));
    }
}

#[test]
fn failed_write_keeps_contents() {
    let mut rb = LinkedRing::new(2).unwrap();
    rb.try_write("a".to_string()).unwrap();
    rb.try_write("b".to_string()).unwrap();
    assert_eq!(rb.try_write("c".to_string()), Err(RingError::Full));
    assert_eq!(rb.len(), 2);
    assert_eq!(rb.iter().map(String::as_str).collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn erase_twice_is_harmless() {
    init_logging();
    let mut dynamic: DynamicRing<Vec<u8>> = DynamicRing::new(4).unwrap();
    dynamic.try_write(vec![1, 2, 3]).unwrap();
    dynamic.erase_storage();
    dynamic.erase_storage();
    assert_eq!(dynamic.try_read(), Err(RingError::NotInited));

    let mut linked: LinkedRing<Vec<u8>> = LinkedRing::new(4).unwrap();
    linked.try_write(vec![1, 2, 3]).unwrap();
    linked.push_prev(vec![4]);
    linked.erase_buf();
    linked.erase_buf();
    assert_eq!(linked.capacity(), 0);
    assert_eq!(linked.try_write(vec![]), Err(RingError::NotInited));
}

#[test]
fn round_trip_restores_occupancy() {
    let mut fixed: FixedRing<u64> = FixedRing::new();
    let mut dynamic: DynamicRing<u64> = DynamicRing::default();
    let mut linked = LinkedRing::new(10).unwrap();

    let rings: [&mut dyn RingBuffer<u64>; 3] = [&mut fixed, &mut dynamic, &mut linked];
    for rb in rings {
        rb.try_write(5).unwrap();
        let before = rb.len();
        rb.try_write(42).unwrap();
        assert_eq!(rb.try_read(), Ok(5));
        rb.try_write(7).unwrap();
        assert_eq!(rb.try_read(), Ok(42));
        assert_eq!(rb.len(), before);
    }
}

#[test]
fn linked_growth_between_reads() {
    init_logging();
    let mut rb = LinkedRing::new(3).unwrap();
    rb.try_write(1).unwrap();
    rb.try_write(2).unwrap();
    rb.push_next(0);
    rb.push_prev(3);
    assert_eq!(rb.capacity(), 5);
    assert_eq!(rb.len(), 3);

    rb.try_write(4).unwrap();
    rb.try_write(5).unwrap();
    assert_eq!(rb.try_write(6), Err(RingError::Full));

    let drained: Vec<_> = std::iter::from_fn(|| rb.try_read().ok()).collect();
    assert_eq!(drained, vec![1, 2, 3, 4, 5]);
}
