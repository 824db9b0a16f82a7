/// Which FAQ entry is expanded, if any. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Closes `index` if it is the open entry, otherwise opens it and closes
    /// whichever entry was open before.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    pub fn toggled(mut self, index: usize) -> Self {
        self.toggle(index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = AccordionState::default();
        assert_eq!(state.open_index(), None);
        assert!((0..5).all(|i| !state.is_open(i)));
    }

    #[test]
    fn toggling_twice_closes_again() {
        let state = AccordionState::default().toggled(2).toggled(2);
        assert_eq!(state, AccordionState::default());
    }

    #[test]
    fn opening_another_closes_the_first() {
        let state = AccordionState::default().toggled(1).toggled(3);
        assert_eq!(state.open_index(), Some(3));
        assert!(!state.is_open(1));
    }
}
