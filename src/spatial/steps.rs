/// Walks the integers strictly after `start` up to and including `end`,
/// stepping toward `end`. Yields nothing when `start == end`.
#[derive(Clone, Debug)]
pub struct IntegerSteps {
    current: i32,
    end: i32,
    step: i32,
}

impl IntegerSteps {
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            current: start,
            end,
            step: if end >= start { 1 } else { -1 },
        }
    }
}

impl Iterator for IntegerSteps {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.current == self.end {
            return None;
        }
        self.current += self.step;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.end - self.current).unsigned_abs() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for IntegerSteps {}
impl std::iter::FusedIterator for IntegerSteps {}

/// Shorthand for [`IntegerSteps::new`].
pub fn integers_between(start: i32, end: i32) -> IntegerSteps {
    IntegerSteps::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_start_includes_end() {
        let v: Vec<i32> = integers_between(2, 5).collect();
        assert_eq!(v, vec![3, 4, 5]);
    }

    #[test]
    fn test_walks_backwards() {
        let v: Vec<i32> = integers_between(1, -2).collect();
        assert_eq!(v, vec![0, -1, -2]);
    }

    #[test]
    fn test_equal_bounds_yield_nothing() {
        let mut steps = integers_between(7, 7);
        assert_eq!(steps.len(), 0);
        assert_eq!(steps.next(), None);
        assert_eq!(steps.next(), None);
    }
}
