//! Floor rotation state
//!
//! A floor holding several carts cycles which one is "currently displayed"
//! on a fixed wall-clock interval. The state here is purely positional;
//! the timer driving it lives with the view that owns the board, and the
//! state is rebuilt from scratch whenever the floor's cart set is
//! refreshed from storage.

/// Rotation position for a single floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
}

impl Rotation {
    /// Fresh rotation over `len` carts, starting at the first.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Index of the currently displayed cart.
    #[must_use]
    pub fn current(&self) -> usize {
        self.index
    }

    /// Whether this floor rotates at all. Floors with at most one cart
    /// never do.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.len > 1
    }

    /// Advance one position, wrapping modulo the cart count.
    pub fn advance(&mut self) {
        if self.is_rotating() {
            self.index = (self.index + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_carts_two_ticks_lands_on_the_third() {
        let mut rotation = Rotation::new(3);

        rotation.advance();
        rotation.advance();

        assert_eq!(rotation.current(), 2);
    }

    #[test]
    fn third_tick_wraps_to_the_first_cart() {
        let mut rotation = Rotation::new(3);

        rotation.advance();
        rotation.advance();
        rotation.advance();

        assert_eq!(rotation.current(), 0);
    }

    #[test]
    fn single_cart_floor_never_rotates() {
        let mut rotation = Rotation::new(1);

        rotation.advance();

        assert!(!rotation.is_rotating());
        assert_eq!(rotation.current(), 0);
    }

    #[test]
    fn empty_floor_never_rotates() {
        let mut rotation = Rotation::new(0);

        rotation.advance();

        assert_eq!(rotation.current(), 0);
    }
}
