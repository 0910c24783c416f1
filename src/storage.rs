use std::cmp::min;

/// Slot arena with reuse of freed cells.
///
/// Values are addressed by the index returned from [`Storage::add`]. A freed index may be
/// handed out again by a later allocation, so callers must not keep indices of dropped cells.
#[derive(Debug, Clone)]
pub struct Storage<T>
where
    T: Copy,
{
    data: Vec<Option<T>>,
    /// Index of the first *possibly* free (non-occupied) cell.
    min_free: usize,
    /// Number of occupied cells.
    real_size: usize,
}

impl<T> Storage<T>
where
    T: Copy,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            min_free: 0,
            real_size: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
    /// Number of cells ever allocated, occupied or not.
    pub fn size(&self) -> usize {
        self.data.len()
    }
    pub fn real_size(&self) -> usize {
        self.real_size
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.data.get(index), Some(Some(_)))
    }
    pub fn value(&self, index: usize) -> T {
        match self.data.get(index) {
            Some(Some(value)) => *value,
            _ => panic!("Index {} is not occupied", index),
        }
    }
    pub fn set_value(&mut self, index: usize, value: T) {
        assert!(self.is_occupied(index), "Index {} is not occupied", index);
        self.data[index] = Some(value);
    }

    pub fn add(&mut self, value: T) -> usize {
        let index = (self.min_free..self.data.len())
            .find(|&i| self.data[i].is_none())
            .unwrap_or_else(|| {
                self.data.push(None);
                self.data.len() - 1
            });

        self.data[index] = Some(value);
        self.min_free = index + 1;
        self.real_size += 1;

        index
    }

    pub fn drop(&mut self, index: usize) {
        assert!(self.is_occupied(index), "Index {} is not occupied", index);

        self.data[index] = None;
        self.min_free = min(self.min_free, index);
        self.real_size -= 1;
    }
}

impl<T> Default for Storage<T>
where
    T: Copy,
{
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut storage = Storage::new(2);
        let index = storage.add(42);
        assert_eq!(storage.value(index), 42);
        assert_eq!(storage.real_size(), 1);
    }

    #[test]
    fn test_drop() {
        let mut storage = Storage::new(2);
        let index = storage.add(42);
        assert!(storage.is_occupied(index));
        storage.drop(index);
        assert!(!storage.is_occupied(index));
        assert_eq!(storage.real_size(), 0);
    }

    #[test]
    fn test_reuse_after_drop() {
        let mut storage = Storage::new(4);
        let a = storage.add(1);
        let b = storage.add(2);
        let c = storage.add(3);
        storage.drop(b);
        assert_eq!(storage.add(4), b);
        assert_eq!(storage.add(5), c + 1);
        assert_eq!(storage.value(a), 1);
        assert_eq!(storage.size(), 4);
    }

    #[test]
    fn test_set_value() {
        let mut storage = Storage::new(1);
        let index = storage.add(10);
        storage.set_value(index, 20);
        assert_eq!(storage.value(index), 20);
    }

    #[test]
    #[should_panic(expected = "is not occupied")]
    fn test_value_of_dropped() {
        let mut storage = Storage::new(1);
        let index = storage.add(10);
        storage.drop(index);
        storage.value(index);
    }
}
