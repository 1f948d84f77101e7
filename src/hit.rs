#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::ITEM_RAISE_RATIO;
use crate::doc::{ItemId, ItemStore};
use crate::geometry::Point;

/// What a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// An existing item (the topmost one if several overlap).
    Item(ItemId),
    /// The plank itself, away from any item.
    Plank,
    /// Neither the plank nor an item.
    Outside,
}

/// Classify a plank-local point.
///
/// Items are circles of [`crate::doc::Item::visual_size`] diameter resting on
/// the plank, raised so most of the circle sits above the centre line. Later
/// items are drawn over earlier ones, so they are tested first.
#[must_use]
pub fn hit_test(local: Point, items: &ItemStore, half_plank_length: f64, plank_half_height: f64) -> HitTarget {
    for item in items.items().iter().rev() {
        let size = item.visual_size();
        let centre = Point::new(item.position, -size * ITEM_RAISE_RATIO + size / 2.0);
        if local.distance_to(centre) <= size / 2.0 {
            return HitTarget::Item(item.id);
        }
    }

    if local.x.abs() <= half_plank_length && local.y.abs() <= plank_half_height {
        HitTarget::Plank
    } else {
        HitTarget::Outside
    }
}
