use super::*;

#[test]
fn test_heap_deref() {
    let h = Heap::new(42i64);
    assert_eq!(*h, 42);
}

#[test]
fn test_heap_clone_shares_allocation() {
    let h1 = Heap::new(vec![1, 2, 3]);
    let h2 = h1.clone();
    assert_eq!(*h1, *h2);
    assert!(Arc::ptr_eq(&h1.0, &h2.0));
}

#[test]
fn test_heap_eq_is_structural() {
    let h1 = Heap::new("hello".to_string());
    let h2 = Heap::new("hello".to_string());
    let h3 = Heap::new("world".to_string());
    assert_eq!(h1, h2);
    assert_ne!(h1, h3);
    assert!(!Arc::ptr_eq(&h1.0, &h2.0));
}

#[test]
fn test_heap_debug_is_transparent() {
    let h = Heap::new(vec![1, 2]);
    assert_eq!(format!("{h:?}"), "[1, 2]");
}
