/// A single item on the store's shelf: its price and where it appeared in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    value: i64,
    position: usize,
}

impl Item {
    pub const fn new(value: i64, position: usize) -> Self {
        Self { value, position }
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// 0-based index in the original values line.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// One test case: a credit to spend and the items available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    credit: i64,
    items: Vec<Item>,
}

impl Store {
    pub fn new(credit: i64, items: Vec<Item>) -> Self {
        Self { credit, items }
    }

    /// Tags each value with its index in `values`.
    pub fn from_values(credit: i64, values: &[i64]) -> Self {
        let items = values
            .iter()
            .enumerate()
            .map(|(position, &value)| Item::new(value, position))
            .collect();

        Self::new(credit, items)
    }

    #[inline]
    pub fn credit(&self) -> i64 {
        self.credit
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Two distinct item positions (0-based), `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    first: usize,
    second: usize,
}

impl Pair {
    pub(crate) fn ordered(a: usize, b: usize) -> Self {
        debug_assert!(a != b);
        if a < b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    #[inline]
    pub fn second(&self) -> usize {
        self.second
    }

    /// Positions as reported to the user.
    pub fn one_based(&self) -> (usize, usize) {
        (self.first + 1, self.second + 1)
    }
}
