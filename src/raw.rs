use core::{
	alloc::Layout,
	marker::PhantomData,
	mem,
	ptr::NonNull
};
use std::alloc::{
	self,
	handle_alloc_error
};

/// A low-level owning handle over a block of `capacity` element slots.
///
/// This type does not in anyway inspect the memory that it manages. When dropped it *will*
/// free its memory, but it *won't* try to drop its contents. It is up to the user of `RawBuffer`
/// to handle the actual things *stored* inside of a `RawBuffer`.
///
/// The capacity of a buffer never changes: growing means allocating a new buffer,
/// relocating the elements and swapping the two buffers.
pub struct RawBuffer<T> {
	/// Pointer to the first slot, dangling if nothing is allocated.
	ptr: NonNull<T>,

	/// Number of slots.
	capacity: usize,

	/// The buffer logically owns values of type `T`.
	marker: PhantomData<T>
}

// SAFETY: the buffer uniquely owns its memory.
unsafe impl<T: Send> Send for RawBuffer<T> {}
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
	/// Creates a buffer with no slot.
	///
	/// This does not allocate.
	#[inline]
	pub const fn new() -> Self {
		RawBuffer {
			ptr: NonNull::dangling(),
			capacity: 0,
			marker: PhantomData
		}
	}

	/// Allocates a buffer of exactly `capacity` uninitialized slots.
	///
	/// Nothing is allocated if `capacity` is 0 or if `T` is zero-sized.
	///
	/// # Panics
	///
	/// Panics if the required memory size overflows `isize::MAX` bytes.
	pub fn allocate(capacity: usize) -> Self {
		if capacity == 0 {
			return Self::new()
		}

		if mem::size_of::<T>() == 0 {
			return RawBuffer {
				ptr: NonNull::dangling(),
				capacity,
				marker: PhantomData
			}
		}

		let layout = match Layout::array::<T>(capacity) {
			Ok(layout) => layout,
			Err(_) => capacity_overflow(),
		};
		alloc_guard(layout.size());

		// SAFETY: `layout` has a non-zero size.
		let ptr = unsafe { alloc::alloc(layout) };
		let ptr = match NonNull::new(ptr as *mut T) {
			Some(ptr) => ptr,
			None => handle_alloc_error(layout),
		};

		RawBuffer {
			ptr,
			capacity,
			marker: PhantomData
		}
	}

	/// Number of slots in the buffer.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Returns a raw pointer to the first slot.
	///
	/// The pointer is dangling (but well aligned) if the buffer has no memory.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.ptr.as_ptr()
	}

	/// Returns an unsafe mutable pointer to the first slot.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.ptr.as_ptr()
	}

	/// Exchanges the memory of the two buffers.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(self, other)
	}

	/// Returns the current allocated memory and layout.
	///
	/// Returns `None` if nothing is allocated, or if the size of `T` is 0.
	fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
		if self.capacity == 0 || mem::size_of::<T>() == 0 {
			None
		} else {
			// We have an allocated chunk of memory, so we can bypass runtime
			// checks to get our current layout.
			unsafe {
				let align = mem::align_of::<T>();
				let size = mem::size_of::<T>() * self.capacity;
				let layout = Layout::from_size_align_unchecked(size, align);
				Some((self.ptr.cast(), layout))
			}
		}
	}
}

impl<T> Default for RawBuffer<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Drop for RawBuffer<T> {
	fn drop(&mut self) {
		if let Some((ptr, layout)) = self.current_memory() {
			unsafe {
				alloc::dealloc(ptr.as_ptr(), layout)
			}
		}
	}
}

// We need to guarantee the following:
// * We don't ever allocate `> isize::MAX` byte-size objects.
// * We don't overflow `usize::MAX` and actually allocate too little.
//
// On 64-bit we just need to check for overflow since trying to allocate
// `> isize::MAX` bytes will surely fail. On 32-bit and 16-bit we need to add
// an extra guard for this in case we're running on a platform which can use
// all 4GB in user-space, e.g., PAE or x32.
#[inline]
fn alloc_guard(alloc_size: usize) {
	if usize::BITS < 64 && alloc_size > isize::MAX as usize {
		capacity_overflow()
	}
}

// One central function responsible for reporting capacity overflows. This'll
// ensure that the code generation related to these panics is minimal as there's
// only one location which panics rather than a bunch throughout the crate.
pub(crate) fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}
