//! Scratch arena handing out non-overlapping views of caller-owned memory.
//!
//! The kernels never allocate. The caller owns one flat store per element type and the
//! kernel carves it into named sub-views with a cursor that only moves forward, so two views
//! can never alias and the order of `take` calls is the memory layout.
use crate::errors::KineticsError;
use log::debug;

/// cursor-advancing allocator over a borrowed flat store
#[derive(Debug)]
pub struct ScratchArena<'a, T> {
    store: &'static str,
    rest: &'a mut [T],
    consumed: usize,
}

impl<'a, T> ScratchArena<'a, T> {
    /// wraps `buffer`; `store` names it in error messages
    pub fn new(store: &'static str, buffer: &'a mut [T]) -> Self {
        Self {
            store,
            rest: buffer,
            consumed: 0,
        }
    }
    /// next `len` elements as an exclusive view
    pub fn take(&mut self, len: usize) -> Result<&'a mut [T], KineticsError> {
        if len > self.rest.len() {
            return Err(KineticsError::WorkspaceTooSmall {
                store: self.store,
                required: self.consumed + len,
                available: self.consumed + self.rest.len(),
            });
        }
        let rest = std::mem::take(&mut self.rest);
        let (head, tail) = rest.split_at_mut(len);
        self.rest = tail;
        self.consumed += len;
        Ok(head)
    }
    /// fails before anything is carved if the store cannot hold `required` elements
    pub fn reserve(&self, required: usize) -> Result<(), KineticsError> {
        if required > self.rest.len() {
            return Err(KineticsError::WorkspaceTooSmall {
                store: self.store,
                required: self.consumed + required,
                available: self.consumed + self.rest.len(),
            });
        }
        debug!(
            "workspace '{}': reserving {} of {} elements",
            self.store,
            required,
            self.rest.len()
        );
        Ok(())
    }
    pub fn consumed(&self) -> usize {
        self.consumed
    }
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_sequential_and_disjoint() {
        let mut buffer = [0.0_f64; 6];
        {
            let mut arena = ScratchArena::new("values", &mut buffer);
            let a = arena.take(2).unwrap();
            let b = arena.take(3).unwrap();
            a.fill(1.0);
            b.fill(2.0);
            assert_eq!(arena.consumed(), 5);
            assert_eq!(arena.remaining(), 1);
        }
        assert_eq!(buffer, [1.0, 1.0, 2.0, 2.0, 2.0, 0.0]);
    }

    #[test]
    fn test_zero_length_views() {
        let mut buffer: [usize; 0] = [];
        let mut arena = ScratchArena::new("ordinals", &mut buffer);
        assert!(arena.take(0).unwrap().is_empty());
        assert!(arena.reserve(0).is_ok());
    }

    #[test]
    fn test_overdraw_reports_totals() {
        let mut buffer = [0_usize; 4];
        let mut arena = ScratchArena::new("ordinals", &mut buffer);
        arena.take(3).unwrap();
        let err = arena.take(2).unwrap_err();
        assert!(matches!(
            err,
            KineticsError::WorkspaceTooSmall {
                store: "ordinals",
                required: 5,
                available: 4
            }
        ));
        assert!(arena.reserve(2).is_err());
        assert_eq!(arena.remaining(), 1);
    }
}
