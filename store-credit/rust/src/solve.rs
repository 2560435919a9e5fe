use thiserror::Error;

use crate::store::{Item, Pair, Store};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("could not find solution")]
pub struct NotFound;

/// The store's items ordered by ascending value, without moving the items themselves.
///
/// Holds indices into the original slice, so each item keeps its position.
pub struct SortedView<'a> {
    items: &'a [Item],
    order: Vec<usize>,
}

impl<'a> SortedView<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        let mut order = (0..items.len()).collect::<Vec<_>>();
        // Stable, equal values stay in input order.
        order.sort_by_key(|&idx| items[idx].value());
        Self { items, order }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> &'a Item {
        &self.items[self.order[index]]
    }

    /// Lowest sorted index whose value is `>= target`, `len()` if there is none.
    pub fn lower_bound(&self, target: i64) -> usize {
        self.order.partition_point(|&idx| self.items[idx].value() < target)
    }
}

/// Finds two distinct items whose values add up to the store's credit.
///
/// Walks the sorted view in ascending order and, for each item, looks up the lowest
/// sorted index holding at least the complement. The first item whose complement is
/// found at another index wins.
pub fn find_pair(store: &Store) -> Result<Pair, NotFound> {
    let view = SortedView::new(store.items());

    for i in 0..view.len() {
        let item = view.get(i);
        // Out of range complements can't match any item.
        let Some(complement) = store.credit().checked_sub(item.value()) else {
            continue;
        };

        let j = view.lower_bound(complement);
        if j < view.len() && j != i && view.get(j).value() == complement {
            return Ok(Pair::ordered(item.position(), view.get(j).position()));
        }
    }

    Err(NotFound)
}
