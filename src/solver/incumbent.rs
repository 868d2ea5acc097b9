//! Best-so-far route tracking.

/// The shortest complete route found so far, as an index order.
///
/// Only strict improvements replace it; the order is copied on every
/// replacement so the caller may keep mutating its working route.
#[derive(Debug, Clone, Default)]
pub(crate) struct Incumbent {
    order: Option<Vec<usize>>,
    length: f64,
}

impl Incumbent {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Length of the incumbent, if one exists.
    pub(crate) fn length(&self) -> Option<f64> {
        self.order.as_ref().map(|_| self.length)
    }

    /// Returns `true` if a route of `length` would be a strict improvement.
    pub(crate) fn improves(&self, length: f64) -> bool {
        self.order.is_none() || length < self.length
    }

    /// Offers a candidate; returns `true` if it became the incumbent.
    pub(crate) fn offer(&mut self, order: &[usize], length: f64) -> bool {
        if !self.improves(length) {
            return false;
        }
        match &mut self.order {
            Some(best) => {
                best.clear();
                best.extend_from_slice(order);
            }
            None => self.order = Some(order.to_vec()),
        }
        self.length = length;
        true
    }

    pub(crate) fn into_order(self) -> Option<Vec<usize>> {
        self.order
    }
}
