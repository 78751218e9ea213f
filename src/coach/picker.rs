use rand::seq::index;
use rand::Rng;

/// Source of uniform choices for tips and fallback messages.
pub trait Picker: Send + Sync {
    /// Index in `0..len`. Callers never pass zero.
    fn pick(&self, len: usize) -> usize;

    /// `amount` distinct indices in `0..len`, in draw order.
    fn pick_distinct(&self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut remaining: Vec<usize> = (0..len).collect();
        (0..amount)
            .map(|_| remaining.remove(self.pick(remaining.len())))
            .collect()
    }
}

/// Thread-local RNG backed picker used by the running service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl Picker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn pick_distinct(&self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut rand::thread_rng(), len, amount.min(len)).into_vec()
    }
}

/// Always takes the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl Picker for FirstPicker {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}

/// Chooses an element of `items`, or `None` when there is nothing to choose from.
pub fn choose<'a, T, P>(picker: &P, items: &'a [T]) -> Option<&'a T>
where
    P: Picker + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(picker.pick(items.len()))
}
