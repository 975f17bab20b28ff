//! Buffer role assignment.

/// Which physical slot holds each role.
///
/// The three indices are always a permutation of `0..3`. Rotation is
/// cyclic with period 3:
///
/// ```text
///            current  next  previous
/// initial       0       1       2
/// rotate 1      1       2       0
/// rotate 2      2       0       1
/// rotate 3      0       1       2
/// ```
///
/// # Examples
///
/// ```
/// use ripple_arena::Roles;
///
/// let r = Roles::INITIAL.rotated().rotated().rotated();
/// assert_eq!(r, Roles::INITIAL);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Roles {
    current: usize,
    next: usize,
    previous: usize,
}

impl Roles {
    /// Slot 0 current, slot 1 next, slot 2 previous.
    pub const INITIAL: Roles = Roles {
        current: 0,
        next: 1,
        previous: 2,
    };

    /// Slot holding the published state.
    pub fn current(self) -> usize {
        self.current
    }

    /// Slot being written during a step.
    pub fn next(self) -> usize {
        self.next
    }

    /// Slot holding the state before `current`.
    pub fn previous(self) -> usize {
        self.previous
    }

    /// Roles after one step: the written slot becomes current, the old
    /// current becomes previous, and the stale previous slot is reused as
    /// the next write target.
    #[must_use]
    pub fn rotated(self) -> Roles {
        Roles {
            current: self.next,
            next: self.previous,
            previous: self.current,
        }
    }
}

impl Default for Roles {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(r: Roles) -> bool {
        let mut seen = [false; 3];
        for i in [r.current(), r.next(), r.previous()] {
            if i >= 3 || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    #[test]
    fn rotation_moves_each_role() {
        let r = Roles::INITIAL.rotated();
        assert_eq!(r.current(), 1);
        assert_eq!(r.next(), 2);
        assert_eq!(r.previous(), 0);
    }

    #[test]
    fn rotation_has_period_three() {
        let mut r = Roles::INITIAL;
        for step in 1..=9 {
            r = r.rotated();
            assert!(is_permutation(r));
            assert_eq!(r == Roles::INITIAL, step % 3 == 0, "step {step}");
        }
    }

    #[test]
    fn default_is_initial() {
        assert_eq!(Roles::default(), Roles::INITIAL);
    }
}
