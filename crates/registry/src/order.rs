//! Placement resolution: turns a raw registration list into the one
//! well-defined group order.
//!
//! Entries are first sorted lexicographically by owner name. Placements are
//! then applied one at a time, in that same base order, each one sliding its
//! single entry to the requested position within the list as patched so far.
//! Relative placements look their anchor up in the *current* list, so an
//! anchor that has already been moved is found at its new position. Absent
//! anchors and self-references leave the entry where it is.
//!
//! The patch pass is deterministic and idempotent: resolving an already
//! resolved list reproduces the identical order.

use crate::placement::Placement;
use crate::symbol::Entry;

/// Sorts `entries` into resolved group order in place.
pub(crate) fn resolve<T>(entries: &mut [Entry<T>]) {
	entries.sort_by(|a, b| a.owner.cmp(&b.owner));

	// Snapshot the directives in base order; the loop below shuffles the
	// working list, so positions have to be looked up per directive.
	let directives: Vec<(String, Placement)> = entries
		.iter()
		.filter(|e| e.placement != Placement::Anywhere)
		.map(|e| (e.owner.clone(), e.placement.clone()))
		.collect();

	for (owner, placement) in &directives {
		let index = position_of(entries, owner).unwrap_or_else(|| {
			unreachable!("entry {owner:?} vanished while resolving placements")
		});
		let target = match placement {
			Placement::Anywhere => continue,
			Placement::Front => 0,
			Placement::Back => entries.len(),
			// A missing anchor keeps the entry at its current position.
			Placement::Before(anchor) => match position_of(entries, anchor) {
				Some(anchor_index) => anchor_index,
				None => continue,
			},
			Placement::After(anchor) => match position_of(entries, anchor) {
				Some(anchor_index) => anchor_index + 1,
				None => continue,
			},
		};
		move_entry(entries, index, target);
	}
}

fn position_of<T>(entries: &[Entry<T>], owner: &str) -> Option<usize> {
	entries.iter().position(|e| e.owner == owner)
}

/// Slides the element at `from` so that it ends up at the slot described by
/// `to`, shifting only the elements in between.
///
/// `to` is a pre-removal index and may be `slice.len()`, meaning "after the
/// last element". Moving forward therefore lands the element at `to - 1`
/// once the gap left at `from` has been compacted; moving backward lands it
/// at `to` exactly. All untouched elements keep their relative order.
pub(crate) fn move_entry<T>(slice: &mut [T], from: usize, to: usize) {
	if from < to {
		slice[from..to].rotate_left(1);
	} else if from > to {
		slice[to..=from].rotate_right(1);
	}
}
