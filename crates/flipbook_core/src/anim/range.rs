//! Linear range mapping.
//!
//! Every effect curve in this module's siblings is built on one primitive:
//! mapping a fractional progress value from one numeric interval to another.

/// Maps `value` from the `source` interval onto the `target` interval.
///
/// Given `value` in `[a, b]` and a target `[c, d]`, returns
/// `c + (value - a) * (d - c) / (b - a)`. The mapping is affine in `value`
/// and exact at both endpoints: `a` maps to `c` and `b` maps to `d`.
///
/// No clamping is performed; callers guarantee `value` lies in the source
/// interval. A degenerate source interval (`a == b`) is a programming error,
/// not a recoverable condition.
///
/// # Examples
///
/// ```
/// use flipbook_core::anim::map_range;
///
/// // halfway through a fade from alpha 1.0 down to 0.5
/// assert_eq!(map_range(0.5, (0.0, 1.0), (1.0, 0.5)), 0.75);
///
/// // endpoints are exact
/// assert_eq!(map_range(0.0, (0.0, 1.0), (3.0, 9.0)), 3.0);
/// assert_eq!(map_range(1.0, (0.0, 1.0), (3.0, 9.0)), 9.0);
/// ```
#[inline]
pub fn map_range(value: f64, source: (f64, f64), target: (f64, f64)) -> f64 {
	let (a, b) = source;
	let (c, d) = target;
	debug_assert!(a != b, "degenerate source interval");
	c + (value - a) * (d - c) / (b - a)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_endpoints_are_exact() {
		assert_eq!(map_range(2.0, (2.0, 8.0), (-1.0, 1.0)), -1.0);
		assert_eq!(map_range(8.0, (2.0, 8.0), (-1.0, 1.0)), 1.0);
	}

	#[test]
	fn test_affine_in_value() {
		// map(x) - map(0) must be proportional to x
		let f = |v: f64| map_range(v, (0.0, 4.0), (10.0, 30.0));
		let base = f(0.0);
		assert_eq!(f(1.0) - base, 5.0);
		assert_eq!(f(2.0) - base, 10.0);
		assert_eq!(f(3.0) - base, 15.0);
	}

	#[test]
	fn test_inverted_target_interval() {
		assert_eq!(map_range(0.25, (0.0, 1.0), (1.0, 0.0)), 0.75);
	}

	#[test]
	fn test_no_clamping() {
		// out-of-range input extrapolates, by contract
		assert_eq!(map_range(2.0, (0.0, 1.0), (0.0, 10.0)), 20.0);
	}
}
