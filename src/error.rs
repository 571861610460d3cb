/// Failure reported by the checked operations of a [`DynamicArray`](crate::DynamicArray).
///
/// When one of these is returned the array has not been modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// The given position does not designate an element (or, for insertion, the end) of the array.
	#[error("index {index} out of range for length {len}")]
	IndexOutOfRange {
		index: usize,
		len: usize
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
