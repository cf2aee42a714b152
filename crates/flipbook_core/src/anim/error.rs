//! Error types for the animation engine.

use thiserror::Error;

/// Errors that can occur when configuring or ticking sprites.
///
/// All errors are fail-fast: the engine never retries internally, and a
/// failed setup call leaves no partially-constructed state behind.
#[derive(Debug, Error)]
pub enum AnimError {
	/// A clip label was referenced that has never been registered
	#[error("Unknown clip label: {label:?}")]
	UnknownClip {
		/// The label that failed to resolve
		label: String,
	},

	/// A clip was registered with zero frames
	#[error("Clip {label:?} must have at least one frame")]
	InvalidFrameCount {
		/// Label of the rejected clip
		label: String,
	},

	/// A clip's image strip is too small to cut the requested frames from
	#[error(
		"Clip {label:?} has a degenerate strip: {width}x{height} pixels cannot hold {frame_count} frames"
	)]
	EmptyImage {
		/// Label of the rejected clip
		label: String,
		/// Strip width in pixels
		width: u32,
		/// Strip height in pixels
		height: u32,
		/// Requested number of frames
		frame_count: u32,
	},

	/// An effect slot index was out of range for the clip's stack
	#[error("Effect slot {index} out of range (stack holds {len} slots)")]
	SlotOutOfRange {
		/// Slot index that was requested
		index: usize,
		/// Number of slots in the stack
		len: usize,
	},
}
