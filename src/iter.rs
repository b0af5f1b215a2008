use core::slice;

/// Iterator over the key-value pairs of a [`Map`](crate::Map)
///
/// This iterator implements `Clone`.
pub struct MapIter<'a, K, V> {
    pairs: slice::Iter<'a, (K, V)>,
}

impl<K, V> Clone for MapIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }
}

impl<'a, K, V> MapIter<'a, K, V> {
    pub(crate) fn new(pairs: &'a [(K, V)]) -> Self {
        Self {
            pairs: pairs.iter(),
        }
    }
}

impl<'a, K, V> Iterator for MapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.pairs.next()?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl<K, V> ExactSizeIterator for MapIter<'_, K, V> {}

/// Iterator over the pairs of a [`Map`](crate::Map) with mutable values
///
/// Keys stay shared so the map's lookup order cannot be broken.
pub struct MapIterMut<'a, K, V> {
    pairs: slice::IterMut<'a, (K, V)>,
}

impl<'a, K, V> MapIterMut<'a, K, V> {
    pub(crate) fn new(pairs: &'a mut [(K, V)]) -> Self {
        Self {
            pairs: pairs.iter_mut(),
        }
    }
}

impl<'a, K, V> Iterator for MapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.pairs.next()?;
        Some((&*key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pairs.size_hint()
    }
}

impl<K, V> ExactSizeIterator for MapIterMut<'_, K, V> {}

/// Iterator over the keys of a [`Map`](crate::Map)
pub struct Keys<'a, K, V> {
    iter: MapIter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(iter: MapIter<'a, K, V>) -> Self {
        Self { iter }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, _value)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`Map`](crate::Map)
pub struct Values<'a, K, V> {
    iter: MapIter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(iter: MapIter<'a, K, V>) -> Self {
        Self { iter }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_key, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
