//! Three fixed slots with rotating current/next/previous roles.

use crate::roles::Roles;

/// Borrowed view of all three slots for the duration of one step.
///
/// `current` and `previous` are read-only; `next` is the only writable
/// slot. The borrow checker rules out aliasing between them.
pub struct Stage<'a, T> {
    /// The published state the step reads from.
    pub current: &'a T,
    /// The state one step before `current`.
    pub previous: &'a T,
    /// The write target for this step.
    pub next: &'a mut T,
}

/// Triple-buffered storage.
///
/// # Buffer layout
///
/// ```text
/// slots[0] ─┐
/// slots[1] ─┼── roles: { current, next, previous }, rotated once per step
/// slots[2] ─┘
/// ```
///
/// Callers write into [`Stage::next`] and then call
/// [`rotate`](TripleBuffer::rotate). Between rotations only
/// [`current`](TripleBuffer::current) holds a complete state.
#[derive(Clone, Debug)]
pub struct TripleBuffer<T> {
    slots: [T; 3],
    roles: Roles,
    rotations: u64,
}

impl<T> TripleBuffer<T> {
    /// Wrap three slots, starting from [`Roles::INITIAL`].
    pub fn new(slots: [T; 3]) -> Self {
        Self {
            slots,
            roles: Roles::INITIAL,
            rotations: 0,
        }
    }

    /// Build each slot with `f(slot_index)`.
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::new(std::array::from_fn(f))
    }

    /// Current role assignment.
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// Number of completed rotations since construction or reset.
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    /// The published slot.
    pub fn current(&self) -> &T {
        &self.slots[self.roles.current()]
    }

    /// Mutable access to the published slot.
    ///
    /// Used for out-of-band writes between steps (e.g. injecting a
    /// disturbance) that must take part in the next step.
    pub fn current_mut(&mut self) -> &mut T {
        &mut self.slots[self.roles.current()]
    }

    /// The slot one step behind `current`.
    pub fn previous(&self) -> &T {
        &self.slots[self.roles.previous()]
    }

    /// Split the slots by role for one step.
    pub fn stage(&mut self) -> Stage<'_, T> {
        let roles = self.roles;
        let mut slots = self.slots.each_mut().map(Some);
        match (
            slots[roles.current()].take(),
            slots[roles.previous()].take(),
            slots[roles.next()].take(),
        ) {
            (Some(current), Some(previous), Some(next)) => Stage {
                current,
                previous,
                next,
            },
            _ => unreachable!("buffer roles are a permutation of 0..3"),
        }
    }

    /// Publish `next` as the new `current`.
    pub fn rotate(&mut self) {
        self.roles = self.roles.rotated();
        self.rotations += 1;
    }

    /// Replace all slots and return to [`Roles::INITIAL`].
    pub fn reset(&mut self, slots: [T; 3]) {
        self.slots = slots;
        self.roles = Roles::INITIAL;
        self.rotations = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stage_splits_by_role() {
        let mut buf = TripleBuffer::new(['a', 'b', 'c']);
        let stage = buf.stage();
        assert_eq!(*stage.current, 'a');
        assert_eq!(*stage.next, 'b');
        assert_eq!(*stage.previous, 'c');
    }

    #[test]
    fn written_next_becomes_current() {
        let mut buf = TripleBuffer::from_fn(|_| 0u32);
        {
            let stage = buf.stage();
            *stage.next = *stage.current + 10;
        }
        buf.rotate();
        assert_eq!(*buf.current(), 10);
        assert_eq!(*buf.previous(), 0);
        assert_eq!(buf.rotations(), 1);
    }

    #[test]
    fn stale_previous_is_reused_as_next() {
        let mut buf = TripleBuffer::new([0, 1, 2]);
        buf.rotate();
        let stage = buf.stage();
        assert_eq!(*stage.next, 2);
    }

    #[test]
    fn current_mut_is_visible_to_stage() {
        let mut buf = TripleBuffer::new([0, 0, 0]);
        *buf.current_mut() = 5;
        assert_eq!(*buf.stage().current, 5);
    }

    #[test]
    fn reset_restores_initial_roles() {
        let mut buf = TripleBuffer::new([1, 2, 3]);
        buf.rotate();
        buf.rotate();
        buf.reset([7, 8, 9]);
        assert_eq!(buf.roles(), Roles::INITIAL);
        assert_eq!(buf.rotations(), 0);
        assert_eq!(*buf.current(), 7);
    }

    proptest! {
        #[test]
        fn current_slot_cycles_with_period_three(n in 0u64..200) {
            let mut buf = TripleBuffer::from_fn(|i| i);
            for _ in 0..n {
                buf.rotate();
            }
            prop_assert_eq!(*buf.current(), (n % 3) as usize);
            prop_assert_eq!(*buf.previous(), ((n + 2) % 3) as usize);
        }
    }
}
