use epicycles::WaveTraceBuffer;

#[test]
fn length_is_min_of_pushes_and_capacity() {
    let cap = 25;
    let mut b = WaveTraceBuffer::new(cap);
    assert!(b.is_empty());
    for pushes in 1..=100usize {
        b.push(pushes as f64);
        assert_eq!(b.len(), pushes.min(cap));
    }
    assert_eq!(b.capacity(), cap);
}

#[test]
fn newest_value_is_at_index_zero() {
    let mut b = WaveTraceBuffer::new(10);
    b.push(1.5);
    b.push(-2.5);
    assert_eq!(b.front(), Some(-2.5));
    assert_eq!(b.iter().collect::<Vec<_>>(), vec![-2.5, 1.5]);
}

#[test]
fn eviction_drops_the_oldest() {
    let mut b = WaveTraceBuffer::new(3);
    for v in [1.0, 2.0, 3.0, 4.0] {
        b.push(v);
    }
    assert_eq!(b.iter().collect::<Vec<_>>(), vec![4.0, 3.0, 2.0]);
    assert_eq!(b.get(3), None);
}

#[test]
fn default_capacity_is_1450_samples() {
    let b = WaveTraceBuffer::default();
    assert_eq!(b.capacity(), 1450);
}

#[test]
fn clear_empties_the_trace() {
    let mut b = WaveTraceBuffer::new(4);
    b.push(1.0);
    b.clear();
    assert!(b.is_empty());
    assert_eq!(b.front(), None);
}
