//! Reallocation tracing.
//!
//! Forwards to `log::trace!` when the `log` feature is enabled, and compiles to
//! nothing otherwise.

#[cfg(feature = "log")]
macro_rules! trace {
	($($arg:tt)*) => {
		::log::trace!(target: "simple_vec", $($arg)*)
	};
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
	($($arg:tt)*) => {
		if false {
			::std::mem::drop(::std::format!($($arg)*))
		}
	};
}

pub(crate) use trace;
