//! Floor status aggregation
//!
//! Maps carts onto building floors via the digits in their free-text
//! location, and derives the single status and display name each floor
//! shows on the wall board.

use crate::{carts::Cart, status::FloorStatus};

/// Number of floors on the default board.
pub const FLOOR_COUNT: usize = 24;

/// Floor label shown when no cart is registered on a floor.
pub const EMPTY_FLOOR_LABEL: &str = "(Vazio)";

/// Extract the floor number from a location string: the first maximal run
/// of decimal digits. `"Floor 12B"` is floor 12; a location without digits
/// has no floor.
#[must_use]
pub fn floor_number(location: &str) -> Option<u32> {
    let digits: String = location
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse().ok()
}

/// Group carts by floor, `floors[0]` holding floor 1.
///
/// Carts whose location has no digits, or whose floor falls outside
/// `[1, floor_count]`, are dropped from the grouping. Order within a floor
/// is the input order.
#[must_use]
pub fn group_by_floor(carts: &[Cart], floor_count: usize) -> Vec<Vec<&Cart>> {
    let mut floors: Vec<Vec<&Cart>> = vec![Vec::new(); floor_count];

    for cart in carts {
        let Some(floor) = floor_number(&cart.location) else {
            continue;
        };

        if let Some(slot) = usize::try_from(floor)
            .ok()
            .and_then(|floor| floor.checked_sub(1))
            .and_then(|index| floors.get_mut(index))
        {
            slot.push(cart);
        }
    }

    floors
}

/// Derive the single display status for a floor.
///
/// An empty floor is [`FloorStatus::Empty`]; otherwise the highest-priority
/// status among the floor's carts wins, starting from `Closed` as the
/// non-empty baseline. A cart without a status counts as `Restock`.
#[must_use]
pub fn floor_status(carts: &[&Cart]) -> FloorStatus {
    if carts.is_empty() {
        return FloorStatus::Empty;
    }

    carts.iter().fold(FloorStatus::Closed, |winning, cart| {
        winning.min(FloorStatus::from(cart.status))
    })
}

/// The cart name a floor card displays.
///
/// Empty floors show [`EMPTY_FLOOR_LABEL`]; a single cart shows its own
/// name; with several carts, the first cart achieving the floor's winning
/// status names the floor.
#[must_use]
pub fn display_name(carts: &[&Cart]) -> String {
    match carts {
        [] => EMPTY_FLOOR_LABEL.to_string(),
        [only] => only.name.clone(),
        several => several
            .iter()
            .min_by_key(|cart| FloorStatus::from(cart.status))
            .map(|cart| cart.name.clone())
            .unwrap_or_else(|| EMPTY_FLOOR_LABEL.to_string()),
    }
}
