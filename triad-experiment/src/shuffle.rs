use rand::Rng;

/// Fisher-Yates shuffle in place. Returns the same slice for chaining.
pub fn shuffle<'a, T, R: Rng>(items: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
    items
}
