//! Ordered, per-clip effect stacks.
//!
//! Slots are append-only: adding a new configuration appends, and a
//! repeating effect's own next cycle re-arms in place, so the stack length
//! counts distinct configurations, never cycles. Evaluation order is
//! insertion order; when several effects write the same attribute within one
//! tick, the last one wins.

use std::time::Instant;

use log::trace;

use crate::anim::error::AnimError;
use crate::anim::transform::Transform;

use super::options::EffectCallback;
use super::runtime::{Effect, Evaluation};

/// One stack slot: the runtime effect plus its optional per-cycle callback.
struct Slot<I> {
	effect: Effect,
	callback: Option<EffectCallback<I>>,
}

/// The ordered collection of concurrently active effects of one clip.
///
/// Stopping a single effect means overwriting its slot via
/// [`replace`](Self::replace); stopping the owning clip clears the whole
/// stack. There is no other cancellation primitive.
pub struct EffectStack<I> {
	slots: Vec<Slot<I>>,
}

impl<I> EffectStack<I> {
	/// Creates an empty stack.
	pub fn new() -> Self {
		Self {
			slots: Vec::new(),
		}
	}

	/// Returns the number of slots (distinct configurations ever added).
	#[inline]
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// Returns `true` if no effect was ever added.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	/// Returns the effect occupying `index`, if any.
	pub fn effect(&self, index: usize) -> Option<&Effect> {
		self.slots.get(index).map(|slot| &slot.effect)
	}

	/// Appends a new effect, returning its slot index.
	pub(crate) fn add(&mut self, effect: Effect, callback: Option<EffectCallback<I>>) -> usize {
		self.slots.push(Slot {
			effect,
			callback,
		});
		self.slots.len() - 1
	}

	/// Overwrites the slot at `index` with a new effect.
	pub(crate) fn replace(
		&mut self,
		index: usize,
		effect: Effect,
		callback: Option<EffectCallback<I>>,
	) -> Result<(), AnimError> {
		let len = self.slots.len();
		let slot = self.slots.get_mut(index).ok_or(AnimError::SlotOutOfRange {
			index,
			len,
		})?;
		*slot = Slot {
			effect,
			callback,
		};
		Ok(())
	}

	/// Drops every slot.
	pub(crate) fn clear(&mut self) {
		self.slots.clear();
	}

	/// Evaluates every slot in insertion order against `now`.
	///
	/// A slot whose cycle completed is re-armed in place when it repeats, so
	/// insertion order — and with it the paint order of compounded
	/// transforms — survives any number of cycles. Returns the indices of
	/// slots that completed a cycle on this tick, for the sprite to fire
	/// their callbacks.
	pub(crate) fn apply(&mut self, transform: &mut Transform, now: Instant) -> Vec<usize> {
		let mut completed = Vec::new();

		for (index, slot) in self.slots.iter_mut().enumerate() {
			match slot.effect.evaluate(transform, now) {
				Evaluation::Applied | Evaluation::Inert => {}
				Evaluation::CycleComplete => {
					trace!("effect cycle complete in slot {index}: {}", slot.effect);
					if slot.effect.repeats() {
						slot.effect = slot.effect.regenerate();
					}
					completed.push(index);
				}
			}
		}

		completed
	}

	pub(crate) fn take_callback(&mut self, index: usize) -> Option<EffectCallback<I>> {
		self.slots.get_mut(index).and_then(|slot| slot.callback.take())
	}

	pub(crate) fn restore_callback(&mut self, index: usize, callback: EffectCallback<I>) {
		if let Some(slot) = self.slots.get_mut(index) {
			slot.callback.get_or_insert(callback);
		}
	}
}

impl<I> Default for EffectStack<I> {
	fn default() -> Self {
		Self::new()
	}
}

impl<I> std::fmt::Display for EffectStack<I> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "EffectStack({} slots)", self.slots.len())
	}
}
