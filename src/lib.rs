//! This crate provides the [`DynamicArray`] data structure,
//! a contiguous growable array that keeps its growth policy explicit.
//! Its length (the number of elements) and its capacity (the number of
//! allocated slots) are managed independently:
//! the capacity only changes when an operation needs it to,
//! and always by reallocating a new buffer.
//!
//! ## Basic usage
//!
//! Pushing onto a full array doubles its capacity,
//! an empty array growing to a capacity of 1.
//! ```rust
//! use simple_vec::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! let mut capacities = Vec::new();
//! for i in 0..5 {
//! 	array.push_back(i);
//! 	capacities.push(array.capacity());
//! }
//! assert_eq!(capacities, [1, 2, 4, 4, 8]);
//! ```
//!
//! The explicit capacity operations allocate exactly what is asked for:
//! ```rust
//! # use simple_vec::{dynarray, reserve, DynamicArray};
//! let array: DynamicArray<u32> = reserve(10).into(); // room for 10 elements, none created.
//! assert_eq!((array.len(), array.capacity()), (0, 10));
//!
//! let mut array = dynarray![7; 3];
//! array.resize(5); // grows to exactly 5, new elements take the default value.
//! assert_eq!(array, [7, 7, 7, 0, 0]);
//! assert_eq!(array.capacity(), 5);
//! ```
//!
//! Positional operations report out of range positions instead of panicking:
//! ```rust
//! # use simple_vec::{dynarray, Error};
//! let mut array = dynarray![1, 2, 3];
//! assert_eq!(array.insert(1, 99), Ok(1));
//! assert_eq!(array.erase(7), Err(Error::IndexOutOfRange { index: 7, len: 4 }));
//! assert_eq!(array, [1, 99, 2, 3]);
//! ```
//!
//! Plain indexing (`array[i]`) and [`DynamicArray::pop_back`] treat
//! an invalid position as a programming error and panic.
//!
//! ## Logging
//!
//! With the `log` feature enabled every reallocation is reported
//! at the `trace` level, under the `simple_vec` target.

pub mod raw;
pub mod vec;
pub mod error;
pub mod reserve;
mod trace;

pub use vec::{
	DynamicArray,
	IntoIter
};
pub use error::{
	Error,
	Result
};
pub use reserve::{
	reserve,
	ReserveRequest
};
