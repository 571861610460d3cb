use proptest::prelude::*;
use simple_vec::DynamicArray;

const MAX_LEN: usize = 64;

fn array_of(values: &[i32]) -> DynamicArray<i32> {
	values.iter().copied().collect()
}

proptest! {
	/// Capacity goes 0, 1, 2, 4, 8... and only changes on the push that overflows it.
	#[test]
	fn push_back_doubles_capacity(values in prop::collection::vec(any::<i32>(), 0..MAX_LEN)) {
		let mut array = DynamicArray::new();
		prop_assert_eq!(array.capacity(), 0);

		for (i, &value) in values.iter().enumerate() {
			let before = array.capacity();
			array.push_back(value);

			prop_assert_eq!(array.len(), i + 1);
			let expected = if i < before {
				before
			} else if before == 0 {
				1
			} else {
				before * 2
			};
			prop_assert_eq!(array.capacity(), expected);
		}

		prop_assert_eq!(array.as_slice(), values.as_slice());
	}

	/// Shrinking then growing back keeps the common prefix and fills with defaults.
	#[test]
	fn resize_round_trip(values in prop::collection::vec(any::<i32>(), 0..MAX_LEN), k in 0..2 * MAX_LEN) {
		let mut array = array_of(&values);
		let len = array.len();

		array.resize(k);
		prop_assert_eq!(array.len(), k);
		prop_assert!(array.capacity() >= k);

		array.resize(len);
		prop_assert_eq!(array.len(), len);

		let kept = k.min(len);
		prop_assert_eq!(&array[..kept], &values[..kept]);
		prop_assert!(array[kept..].iter().all(|&value| value == 0));
	}

	/// Insertion shifts the tail by one and keeps the head.
	#[test]
	fn insert_shifts_tail((values, index) in prop::collection::vec(any::<i32>(), 0..MAX_LEN).prop_flat_map(|values| {
		let len = values.len();
		(Just(values), 0..=len)
	}), value in any::<i32>()) {
		let mut array = array_of(&values);
		let capacity = array.capacity();
		let full = array.len() == capacity;

		prop_assert_eq!(array.insert(index, value), Ok(index));
		prop_assert_eq!(array.len(), values.len() + 1);
		prop_assert_eq!(&array[..index], &values[..index]);
		prop_assert_eq!(array[index], value);
		prop_assert_eq!(&array[index + 1..], &values[index..]);

		let expected_capacity = match (full, capacity) {
			(true, 0) => 1,
			(true, capacity) => capacity * 2,
			(false, capacity) => capacity
		};
		prop_assert_eq!(array.capacity(), expected_capacity);
	}

	/// Erasure removes exactly one element, keeping order and capacity.
	#[test]
	fn erase_keeps_order((values, index) in prop::collection::vec(any::<i32>(), 1..MAX_LEN).prop_flat_map(|values| {
		let len = values.len();
		(Just(values), 0..len)
	})) {
		let mut array = array_of(&values);
		let capacity = array.capacity();

		prop_assert_eq!(array.erase(index), Ok(index));

		let mut expected = values.clone();
		expected.remove(index);
		prop_assert_eq!(array.as_slice(), expected.as_slice());
		prop_assert_eq!(array.capacity(), capacity);
	}

	/// Comparisons agree with the ones of slices.
	#[test]
	fn ordering_matches_slices(a in prop::collection::vec(0..4i32, 0..8), b in prop::collection::vec(0..4i32, 0..8)) {
		let (x, y) = (array_of(&a), array_of(&b));

		prop_assert_eq!(x == y, a == b);
		prop_assert_eq!(x < y, a < b);
		prop_assert_eq!(x.cmp(&y), a.cmp(&b));
		prop_assert_eq!(x == y, !(x < y) && !(y < x));
	}

	/// A copy is equal to its source and independent from it.
	#[test]
	fn copy_is_independent(values in prop::collection::vec(any::<i32>(), 1..MAX_LEN)) {
		let source = array_of(&values);
		let mut copy = source.clone();
		prop_assert_eq!(&copy, &source);
		prop_assert_eq!(copy.capacity(), source.capacity());

		copy[0] = copy[0].wrapping_add(1);
		prop_assert_ne!(&copy, &source);
		prop_assert_eq!(source.as_slice(), values.as_slice());
	}
}
