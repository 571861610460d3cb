use core::{
	cmp,
	fmt,
	hash::{
		Hash,
		Hasher
	},
	iter::FusedIterator,
	mem::{
		self,
		ManuallyDrop
	},
	ops::{
		Deref,
		DerefMut
	},
	ptr,
	slice
};
use crate::{
	error::{
		Error,
		Result
	},
	raw::{
		RawBuffer,
		capacity_overflow
	},
	reserve::ReserveRequest,
	trace::trace
};

/// Contiguous growable array type with a fixed, doubling growth policy.
///
/// A `DynamicArray` owns a single buffer of `capacity` slots, the first `len` of which
/// hold the elements.
/// The buffer is never grown in place: whenever the capacity must change, a new buffer
/// is allocated, the elements are relocated into it and the old buffer is released.
///
/// Appending to a full array doubles its capacity (an empty array grows to a capacity of 1),
/// so that `n` successive pushes cost `O(n)` overall.
/// The explicit capacity operations ([`reserve`](DynamicArray::reserve),
/// [`resize`](DynamicArray::resize)) allocate exactly what is asked for.
///
/// # Examples
///
/// ```
/// # use simple_vec::DynamicArray;
/// let mut array = DynamicArray::new();
/// array.push_back(1);
/// array.push_back(2);
/// array.push_back(3);
/// assert_eq!(array, [1, 2, 3]);
/// assert_eq!(array.capacity(), 4);
///
/// array.insert(1, 99).unwrap();
/// assert_eq!(array, [1, 99, 2, 3]);
///
/// array.erase(0).unwrap();
/// assert_eq!(array, [99, 2, 3]);
/// assert!(array.at(10).is_err());
/// ```
pub struct DynamicArray<T> {
	/// Owned storage.
	buf: RawBuffer<T>,

	/// Number of initialized elements at the start of `buf`.
	len: usize
}

impl<T> Drop for DynamicArray<T> {
	fn drop(&mut self) {
		unsafe {
			// drop every element, the buffer frees the memory itself.
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len))
		}
	}
}

impl<T> DynamicArray<T> {
	/// Creates a new empty `DynamicArray`.
	///
	/// The array will not allocate until elements are pushed onto it.
	#[inline]
	pub const fn new() -> Self {
		DynamicArray {
			buf: RawBuffer::new(),
			len: 0
		}
	}

	/// Creates a new empty `DynamicArray` with room for exactly `capacity` elements.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		DynamicArray {
			buf: RawBuffer::allocate(capacity),
			len: 0
		}
	}

	/// Creates a new empty `DynamicArray` preallocated as requested.
	///
	/// Same as [`with_capacity`](DynamicArray::with_capacity), see [`reserve`](crate::reserve).
	#[inline]
	pub fn with_reserve(request: ReserveRequest) -> Self {
		Self::with_capacity(request.capacity)
	}

	/// Creates an array of `len` default values.
	///
	/// The length and capacity are both `len`.
	pub fn with_len(len: usize) -> Self where T: Default {
		let mut array = Self::with_capacity(len);
		array.extend_with(len, ExtendDefault);
		array
	}

	/// Creates an array of `len` clones of `value`.
	///
	/// The length and capacity are both `len`.
	///
	/// ```
	/// # use simple_vec::DynamicArray;
	/// let array = DynamicArray::from_elem(3, 7);
	/// assert_eq!(array, [7, 7, 7]);
	/// assert_eq!(array.capacity(), 3);
	/// ```
	pub fn from_elem(len: usize, value: T) -> Self where T: Clone {
		let mut array = Self::with_capacity(len);
		array.extend_with(len, ExtendElement(value));
		array
	}

	/// Returns the number of elements in the array.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns the number of elements the array can hold without reallocating.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Returns `true` if the array contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns a raw pointer to the array's buffer.
	///
	/// The caller must ensure that the array outlives the pointer this
	/// function returns, or else it will end up pointing to garbage.
	/// Modifying the array may cause its buffer to be reallocated,
	/// which would also make any pointers to it invalid.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.buf.as_ptr()
	}

	/// Returns an unsafe mutable pointer to the array's buffer.
	///
	/// The same invalidation rules as [`as_ptr`](DynamicArray::as_ptr) apply.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.buf.as_mut_ptr()
	}

	/// Extracts a slice containing the entire array.
	///
	/// Equivalent to `&s[..]`.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.as_ptr(), self.len)
		}
	}

	/// Extracts a mutable slice of the entire array.
	///
	/// Equivalent to `&mut s[..]`.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			slice::from_raw_parts_mut(self.as_mut_ptr(), self.len)
		}
	}

	/// Returns a reference to the element at `index`.
	///
	/// Unlike indexing with `array[index]`, an out of range index is reported
	/// instead of panicking.
	#[inline]
	pub fn at(&self, index: usize) -> Result<&T> {
		let len = self.len;
		self.as_slice().get(index).ok_or(Error::IndexOutOfRange { index, len })
	}

	/// Returns a mutable reference to the element at `index`.
	///
	/// Unlike indexing with `array[index]`, an out of range index is reported
	/// instead of panicking.
	#[inline]
	pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
		let len = self.len;
		self.as_mut_slice().get_mut(index).ok_or(Error::IndexOutOfRange { index, len })
	}

	/// Shortens the array, keeping the first `len` elements and dropping
	/// the rest.
	///
	/// If `len` is greater or equal to the array's current length, this has no
	/// effect.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the array.
	#[inline]
	pub fn truncate(&mut self, len: usize) {
		if len >= self.len {
			return;
		}

		let remaining_len = self.len - len;
		unsafe {
			let s = ptr::slice_from_raw_parts_mut(self.as_mut_ptr().add(len), remaining_len);
			// length first, so that a panicking destructor cannot cause a double drop.
			self.len = len;
			ptr::drop_in_place(s);
		}
	}

	/// Clears the array, removing all values.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the array: subsequent pushes reuse the buffer.
	#[inline]
	pub fn clear(&mut self) {
		self.truncate(0)
	}

	/// Makes sure the array can hold `new_capacity` elements.
	///
	/// If the current capacity is smaller, the buffer is reallocated to exactly
	/// `new_capacity` slots. Otherwise this is a no-op: the capacity never shrinks.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	pub fn reserve(&mut self, new_capacity: usize) {
		if new_capacity > self.capacity() {
			self.relocate(new_capacity, "reserve")
		}
	}

	/// Resizes the array in-place so that its length is equal to `new_len`.
	///
	/// If `new_len` is less than `len`, the array is simply truncated.
	/// Otherwise the array is extended by the difference, each additional slot being filled
	/// with `T::default()`.
	/// If `new_len` exceeds the capacity, the buffer is reallocated to exactly `new_len`
	/// slots (no doubling).
	///
	/// ```
	/// # use simple_vec::DynamicArray;
	/// let mut array = DynamicArray::from_elem(3, 7);
	/// array.resize(5);
	/// assert_eq!(array, [7, 7, 7, 0, 0]);
	/// assert_eq!(array.capacity(), 5);
	/// ```
	pub fn resize(&mut self, new_len: usize) where T: Default {
		self.resize_using(new_len, ExtendDefault)
	}

	/// Same as [`resize`](DynamicArray::resize), but each additional slot is filled
	/// with a clone of `value`.
	pub fn resize_value(&mut self, new_len: usize, value: T) where T: Clone {
		self.resize_using(new_len, ExtendElement(value))
	}

	/// Same as [`resize`](DynamicArray::resize), but each additional slot is filled
	/// with the value returned by calling `f`, in order.
	pub fn resize_with<F>(&mut self, new_len: usize, f: F) where F: FnMut() -> T {
		self.resize_using(new_len, ExtendFunc(f))
	}

	/// Appends an element to the back of the array.
	///
	/// If the array is full its capacity is doubled, or set to 1 if it was 0.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	#[inline]
	pub fn push_back(&mut self, value: T) {
		if self.len == self.capacity() {
			self.grow_amortized("push_back");
		}

		unsafe {
			self.push_unchecked(value)
		}
	}

	/// Appends a clone of `value` to the back of the array.
	///
	/// See [`push_back`](DynamicArray::push_back).
	#[inline]
	pub fn push_back_cloned(&mut self, value: &T) where T: Clone {
		self.push_back(value.clone())
	}

	/// Removes the last element of the array and returns it.
	///
	/// # Panics
	///
	/// Panics if the array is empty.
	#[inline]
	pub fn pop_back(&mut self) -> T {
		assert!(self.len != 0, "pop_back on an empty array");
		self.len -= 1;
		unsafe {
			ptr::read(self.as_ptr().add(self.len))
		}
	}

	/// Removes the last element from the array and returns it, or [`None`] if it
	/// is empty.
	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		if self.len == 0 {
			None
		} else {
			Some(self.pop_back())
		}
	}

	/// Inserts an element at position `index` within the array, shifting all
	/// elements after it to the right.
	///
	/// If the array is full its capacity is doubled (or set to 1 if it was 0) and the
	/// elements are relocated around the new one.
	/// Returns the position of the inserted element, that is `index`.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] without touching the array if `index > len`.
	pub fn insert(&mut self, index: usize, value: T) -> Result<usize> {
		self.check_insert_position(index)?;
		let len = self.len;

		unsafe {
			if len == self.capacity() {
				let new_capacity = self.grown_capacity();
				let mut buf = RawBuffer::allocate(new_capacity);
				let src = self.buf.as_ptr();
				let dst = buf.as_mut_ptr();

				ptr::copy_nonoverlapping(src, dst, index);
				ptr::write(dst.add(index), value);
				ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);

				trace!("insert: relocating {} elements, capacity {} -> {}", len, self.capacity(), new_capacity);
				// the old buffer is released without dropping anything.
				self.buf.swap(&mut buf);
			} else {
				let p = self.as_mut_ptr().add(index);
				// Shift everything over to make space. (Duplicating the
				// `index`th element into two consecutive places.)
				ptr::copy(p, p.add(1), len - index);
				// Write it in, overwriting the first copy of the `index`th
				// element.
				ptr::write(p, value);
			}

			self.len = len + 1;
		}

		Ok(index)
	}

	/// Inserts a clone of `value` at position `index`.
	///
	/// See [`insert`](DynamicArray::insert).
	#[inline]
	pub fn insert_cloned(&mut self, index: usize, value: &T) -> Result<usize> where T: Clone {
		// checked before cloning, so that a rejected position clones nothing.
		self.check_insert_position(index)?;
		self.insert(index, value.clone())
	}

	/// Removes and returns the element at position `index` within the array,
	/// shifting all elements after it to the left.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] without touching the array if `index >= len`.
	pub fn remove(&mut self, index: usize) -> Result<T> {
		let len = self.len;
		if index >= len {
			return Err(Error::IndexOutOfRange { index, len })
		}

		unsafe {
			// the place we are taking from.
			let p = self.as_mut_ptr().add(index);
			// copy it out, unsafely having a copy of the value on
			// the stack and in the array at the same time.
			let value = ptr::read(p);

			// Shift everything down to fill in that spot.
			ptr::copy(p.add(1), p, len - index - 1);
			self.len = len - 1;
			Ok(value)
		}
	}

	/// Drops the element at position `index`, shifting all elements after it to the left.
	///
	/// The capacity is unchanged.
	/// Returns the position of the element that now occupies the erased slot,
	/// that is `index` (equal to the new length if the erased element was the last one).
	///
	/// The end position (`index == len`) is accepted on a non-empty array,
	/// and erases the last element.
	///
	/// ```
	/// # use simple_vec::dynarray;
	/// let mut array = dynarray![1, 2, 3];
	/// assert_eq!(array.erase(3), Ok(2));
	/// assert_eq!(array, [1, 2]);
	/// ```
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] without touching the array if `index > len`,
	/// or if the array is empty.
	#[inline]
	pub fn erase(&mut self, index: usize) -> Result<usize> {
		if index != 0 && index == self.len {
			mem::drop(self.pop_back());
			return Ok(self.len)
		}

		mem::drop(self.remove(index)?);
		Ok(index)
	}

	/// Exchanges the content of the two arrays, without copying or moving any element.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		self.buf.swap(&mut other.buf);
		mem::swap(&mut self.len, &mut other.len);
	}

	/// Takes the content of this array, leaving it empty with no capacity.
	///
	/// ```
	/// # use simple_vec::dynarray;
	/// let mut source = dynarray![1, 2, 3];
	/// let target = source.take();
	/// assert_eq!(target, [1, 2, 3]);
	/// assert!(source.is_empty());
	/// assert_eq!(source.capacity(), 0);
	/// ```
	#[inline]
	pub fn take(&mut self) -> Self {
		mem::replace(self, Self::new())
	}

	/// Replaces the content of this array with the content of `source`,
	/// leaving `source` empty with no capacity.
	///
	/// The previous elements of this array are dropped.
	#[inline]
	pub fn move_from(&mut self, source: &mut Self) {
		*self = source.take()
	}

	/// Replaces the content of this array with clones of the elements of `source`.
	///
	/// If `source` is empty this array is cleared and keeps its capacity.
	/// Otherwise a full copy of `source` (with the same capacity) is built and swapped in,
	/// so that this array is left untouched if cloning an element panics.
	pub fn assign_from(&mut self, source: &Self) where T: Clone {
		if source.is_empty() {
			self.clear();
			return
		}

		let mut copy = source.clone();
		self.swap(&mut copy)
	}

	/// Clones and appends all elements in a slice to the array.
	///
	/// The usual push growth policy applies for each element.
	#[inline]
	pub fn extend_from_slice(&mut self, other: &[T]) where T: Clone {
		self.extend(other.iter().cloned())
	}
}

impl<T> DynamicArray<T> {
	/// Insertion positions range from `0` to `len` included.
	#[inline]
	fn check_insert_position(&self, index: usize) -> Result<()> {
		if index > self.len {
			Err(Error::IndexOutOfRange { index, len: self.len })
		} else {
			Ok(())
		}
	}

	/// Capacity after one step of the growth policy.
	#[inline]
	fn grown_capacity(&self) -> usize {
		match self.capacity() {
			0 => 1,
			capacity => match capacity.checked_mul(2) {
				Some(capacity) => capacity,
				None => capacity_overflow()
			}
		}
	}

	/// Doubles the capacity, or sets it to 1 if it is 0.
	#[inline(never)]
	fn grow_amortized(&mut self, op: &'static str) {
		let new_capacity = self.grown_capacity();
		self.relocate(new_capacity, op)
	}

	/// Moves the elements into a new buffer of exactly `new_capacity` slots.
	fn relocate(&mut self, new_capacity: usize, op: &'static str) {
		debug_assert!(new_capacity >= self.len);

		let mut buf = RawBuffer::allocate(new_capacity);
		unsafe {
			ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr(), self.len);
		}

		trace!("{}: relocating {} elements, capacity {} -> {}", op, self.len, self.capacity(), new_capacity);
		// the old buffer is released without dropping anything.
		self.buf.swap(&mut buf);
	}

	/// Writes `value` in the first free slot.
	///
	/// ## Safety
	///
	/// The array must not be full.
	#[inline]
	unsafe fn push_unchecked(&mut self, value: T) {
		debug_assert!(self.len < self.capacity());
		ptr::write(self.as_mut_ptr().add(self.len), value);
		self.len += 1;
	}

	fn resize_using<E: ExtendWith<T>>(&mut self, new_len: usize, value: E) {
		let len = self.len;

		if new_len > len {
			self.reserve(new_len);
			self.extend_with(new_len - len, value)
		} else {
			self.truncate(new_len)
		}
	}

	/// Extend the array by `n` values, using the given generator.
	///
	/// The capacity must already be large enough.
	fn extend_with<E: ExtendWith<T>>(&mut self, n: usize, mut value: E) {
		assert!(n <= self.capacity() - self.len);

		unsafe {
			let mut ptr = self.buf.as_mut_ptr().add(self.len);
			// Use SetLenOnDrop to work around bug where compiler
			// may not realize the store through `ptr` through self.len
			// don't alias.
			let mut local_len = SetLenOnDrop::new(&mut self.len);

			// Write all elements except the last one
			for _ in 1..n {
				ptr::write(ptr, value.next());
				ptr = ptr.add(1);
				// Increment the length in every step in case next() panics
				local_len.increment_len(1);
			}

			if n > 0 {
				// We can write the last element directly without cloning needlessly
				ptr::write(ptr, value.last());
				local_len.increment_len(1);
			}

			// len set by scope guard
		}
	}
}

// Set the length of the array when the `SetLenOnDrop` value goes out of scope.
//
// The idea is: The length field in SetLenOnDrop is a local variable
// that the optimizer will see does not alias with any stores through the array's data
// pointer. This is a workaround for alias analysis issue #32155
struct SetLenOnDrop<'a> {
	len: &'a mut usize,
	local_len: usize,
}

impl<'a> SetLenOnDrop<'a> {
	#[inline]
	fn new(len: &'a mut usize) -> Self {
		SetLenOnDrop { local_len: *len, len }
	}

	#[inline]
	fn increment_len(&mut self, increment: usize) {
		self.local_len += increment;
	}
}

impl Drop for SetLenOnDrop<'_> {
	#[inline]
	fn drop(&mut self) {
		*self.len = self.local_len;
	}
}

// This code generalizes `extend_with_{element,default,func}`.
trait ExtendWith<T> {
	fn next(&mut self) -> T;
	fn last(self) -> T;
}

struct ExtendElement<T>(T);
impl<T: Clone> ExtendWith<T> for ExtendElement<T> {
	fn next(&mut self) -> T {
		self.0.clone()
	}
	fn last(self) -> T {
		self.0
	}
}

struct ExtendDefault;
impl<T: Default> ExtendWith<T> for ExtendDefault {
	fn next(&mut self) -> T {
		Default::default()
	}
	fn last(self) -> T {
		Default::default()
	}
}

struct ExtendFunc<F>(F);
impl<T, F: FnMut() -> T> ExtendWith<T> for ExtendFunc<F> {
	fn next(&mut self) -> T {
		(self.0)()
	}
	fn last(mut self) -> T {
		(self.0)()
	}
}

impl<T> Default for DynamicArray<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> Clone for DynamicArray<T> {
	/// Deep copy, with the same capacity as the original.
	fn clone(&self) -> Self {
		let mut copy = Self::with_capacity(self.capacity());
		for value in self.iter() {
			unsafe {
				copy.push_unchecked(value.clone())
			}
		}

		copy
	}

	#[inline]
	fn clone_from(&mut self, source: &Self) {
		self.assign_from(source)
	}
}

impl<T> Deref for DynamicArray<T> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T> DerefMut for DynamicArray<T> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<T> AsRef<[T]> for DynamicArray<T> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self
	}
}

impl<T> AsMut<[T]> for DynamicArray<T> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self
	}
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&**self, f)
	}
}

impl<T: Hash> Hash for DynamicArray<T> {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) {
		Hash::hash(&**self, state)
	}
}

impl<'v, T> IntoIterator for &'v DynamicArray<T> {
	type Item = &'v T;
	type IntoIter = slice::Iter<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'v, T> IntoIterator for &'v mut DynamicArray<T> {
	type Item = &'v mut T;
	type IntoIter = slice::IterMut<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

/// An iterator that moves out of a [`DynamicArray`].
///
/// Elements that are not consumed are dropped along with the iterator.
pub struct IntoIter<T> {
	buf: RawBuffer<T>,
	start: usize,
	end: usize
}

impl<T> IntoIter<T> {
	/// Returns the remaining items of this iterator as a slice.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start)
		}
	}
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		if self.start == self.end {
			None
		} else {
			let i = self.start;
			self.start += 1;
			unsafe {
				Some(ptr::read(self.buf.as_ptr().add(i)))
			}
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.end - self.start;
		(len, Some(len))
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		if self.start == self.end {
			None
		} else {
			self.end -= 1;
			unsafe {
				Some(ptr::read(self.buf.as_ptr().add(self.end)))
			}
		}
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
	fn drop(&mut self) {
		unsafe {
			// only drop remaining elements.
			let remaining = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().add(self.start), self.end - self.start);
			ptr::drop_in_place(remaining)
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
	}
}

impl<T> IntoIterator for DynamicArray<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		// the elements now belong to the iterator.
		let mut array = ManuallyDrop::new(self);
		let buf = mem::take(&mut array.buf);

		IntoIter {
			buf,
			start: 0,
			end: array.len
		}
	}
}

impl<T> Extend<T> for DynamicArray<T> {
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
		for value in iterator {
			self.push_back(value)
		}
	}
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
	#[inline]
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iterator: I) {
		self.extend(iterator.into_iter().copied())
	}
}

impl<T> FromIterator<T> for DynamicArray<T> {
	#[inline]
	fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
		let mut array = Self::new();
		array.extend(iterator);
		array
	}
}

impl<T> From<ReserveRequest> for DynamicArray<T> {
	#[inline]
	fn from(request: ReserveRequest) -> Self {
		Self::with_reserve(request)
	}
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
	fn from(values: [T; N]) -> Self {
		let mut array = Self::with_capacity(N);
		for value in values {
			unsafe {
				array.push_unchecked(value)
			}
		}

		array
	}
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
	fn from(values: &[T]) -> Self {
		let mut array = Self::with_capacity(values.len());
		for value in values {
			unsafe {
				array.push_unchecked(value.clone())
			}
		}

		array
	}
}

impl<T> From<Vec<T>> for DynamicArray<T> {
	fn from(values: Vec<T>) -> Self {
		let mut array = Self::with_capacity(values.len());
		for value in values {
			unsafe {
				array.push_unchecked(value)
			}
		}

		array
	}
}

impl<T> From<DynamicArray<T>> for Vec<T> {
	#[inline]
	fn from(array: DynamicArray<T>) -> Vec<T> {
		array.into_iter().collect()
	}
}

macro_rules! impl_slice_eq1 {
	([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
		impl<$($vars)*> PartialEq<$rhs> for $lhs where T: PartialEq<U> {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
			#[inline]
			#[allow(clippy::partialeq_ne_impl)]
			fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
		}
	}
}

impl_slice_eq1! { [T, U] DynamicArray<T>, DynamicArray<U> }
impl_slice_eq1! { [T, U] DynamicArray<T>, Vec<U> }
impl_slice_eq1! { [T, U] Vec<T>, DynamicArray<U> }
impl_slice_eq1! { [T, U] DynamicArray<T>, &[U] }
impl_slice_eq1! { [T, U] DynamicArray<T>, &mut [U] }
impl_slice_eq1! { [T, U] &[T], DynamicArray<U> }
impl_slice_eq1! { [T, U] &mut [T], DynamicArray<U> }
impl_slice_eq1! { [T, U, const N: usize] DynamicArray<T>, [U; N] }
impl_slice_eq1! { [T, U, const N: usize] DynamicArray<T>, &[U; N] }
impl_slice_eq1! { [T, U, const N: usize] [T; N], DynamicArray<U> }
impl_slice_eq1! { [T, U, const N: usize] &[T; N], DynamicArray<U> }

impl<T: Eq> Eq for DynamicArray<T> {}

/// Lexicographic comparison: elements are compared in order and, on a common prefix,
/// the shorter array is the lesser.
impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
		PartialOrd::partial_cmp(&**self, &**other)
	}
}

impl<T: Ord> Ord for DynamicArray<T> {
	#[inline]
	fn cmp(&self, other: &Self) -> cmp::Ordering {
		Ord::cmp(&**self, &**other)
	}
}

/// Creates a [`DynamicArray`] containing the arguments.
///
/// The length and capacity of the array are both the number of elements.
///
/// ```
/// # use simple_vec::dynarray;
/// let array = dynarray![1, 2, 3];
/// assert_eq!(array, [1, 2, 3]);
/// assert_eq!(array.capacity(), 3);
///
/// let zeros = dynarray![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarray {
	() => (
		$crate::DynamicArray::new()
	);
	($elem:expr; $n:expr) => (
		$crate::DynamicArray::from_elem($n, $elem)
	);
	($($x:expr),+ $(,)?) => (
		$crate::DynamicArray::from([$($x),+])
	);
}
