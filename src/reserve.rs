/// Request for a preallocated, empty array.
///
/// Converting it into a [`DynamicArray`](crate::DynamicArray) allocates room for
/// `capacity` elements without creating any of them.
///
/// ```
/// # use simple_vec::{reserve, DynamicArray};
/// let array: DynamicArray<u32> = reserve(16).into();
/// assert_eq!(array.len(), 0);
/// assert_eq!(array.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveRequest {
	/// Number of slots to allocate.
	pub capacity: usize
}

impl ReserveRequest {
	/// Requests room for `capacity` elements.
	#[inline]
	pub const fn new(capacity: usize) -> Self {
		ReserveRequest {
			capacity
		}
	}
}

/// Shorthand for [`ReserveRequest::new`].
#[inline]
pub const fn reserve(capacity: usize) -> ReserveRequest {
	ReserveRequest::new(capacity)
}
