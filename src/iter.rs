use crate::core::SentVec;

/// Iterator over the live elements of a `SentVec`.
///
/// This iterator implements `Clone`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T: Default + Clone> {
    vec: &'a SentVec<T>,
    position: usize,
}

impl<'a, T: Default + Clone> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.vec.as_slice().get(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T: Default + Clone> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Default + Clone> IntoIterator for &'a SentVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            vec: self,
            position: 0,
        }
    }
}
