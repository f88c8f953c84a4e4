use array_init::array_init;
use std::iter::FusedIterator;

/// Number of ways to choose `k` elements out of `n`. `None` if the result overflows `usize`.
///
/// ```rust
/// # use segment_triangles::algorithms::combinations::binomial;
/// assert_eq!(binomial(20, 10), Some(184_756));
/// assert_eq!(binomial(3, 4), Some(0));
/// assert_eq!(binomial(200, 100), None);
/// ```
pub fn binomial(n: usize, k: usize) -> Option<usize> {
  if k > n {
    return Some(0);
  }
  let k = k.min(n - k);
  let mut acc: u128 = 1;
  for i in 0..k {
    // acc == C(n, i) and C(n, i) * (n-i) == C(n, i+1) * (i+1), so the division is exact.
    acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
    if acc > usize::MAX as u128 {
      return None;
    }
  }
  usize::try_from(acc).ok()
}

///////////////////////////////////////////////////////////////////////////////
// Index state machine

// Step `indices` to the next strictly increasing selection out of `0..n` in lexicographic
// order. Returns false once the last selection has been passed.
fn advance(indices: &mut [usize], n: usize) -> bool {
  let m = indices.len();
  for i in (0..m).rev() {
    if indices[i] < n - m + i {
      indices[i] += 1;
      for j in i + 1..m {
        indices[j] = indices[j - 1] + 1;
      }
      return true;
    }
  }
  false
}

// Number of selections strictly after `indices`.
fn after(indices: &[usize], n: usize) -> Option<usize> {
  let m = indices.len();
  indices.iter().enumerate().try_fold(0usize, |acc, (i, &idx)| {
    acc.checked_add(binomial(n - 1 - idx, m - i)?)
  })
}

#[derive(Debug, Clone)]
struct Cursor<I> {
  n: usize,
  indices: I,
  started: bool,
  done: bool,
}

impl<I: AsMut<[usize]> + AsRef<[usize]>> Cursor<I> {
  fn new(n: usize, indices: I) -> Self {
    let done = indices.as_ref().len() > n;
    Cursor {
      n,
      indices,
      started: false,
      done,
    }
  }

  fn step(&mut self) -> Option<&[usize]> {
    if self.done {
      return None;
    }
    if !self.started {
      self.started = true;
    } else if !advance(self.indices.as_mut(), self.n) {
      self.done = true;
      return None;
    }
    Some(self.indices.as_ref())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    if self.done {
      return (0, Some(0));
    }
    let pending = usize::from(!self.started);
    match after(self.indices.as_ref(), self.n).and_then(|n| n.checked_add(pending)) {
      Some(n) => (n, Some(n)),
      None => (usize::MAX, None),
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Combinations

/// Lazy sequence of every `m`-element selection from `elements`.
///
/// Selections are positional: each set of `m` *indices* is produced exactly once and the
/// elements of a selection keep their source order. Nothing is materialized up front, so
/// huge selection spaces can be walked one item at a time. Clone the iterator (or call
/// [`combinations`] again) to walk the sequence more than once.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
  elements: &'a [T],
  cursor: Cursor<Vec<usize>>,
}

/// ```rust
/// # use segment_triangles::algorithms::combinations;
/// let pairs: Vec<Vec<&char>> = combinations(&['A', 'B', 'C'], 2).collect();
/// assert_eq!(pairs, vec![vec![&'A', &'B'], vec![&'A', &'C'], vec![&'B', &'C']]);
/// assert_eq!(combinations(&['A', 'B'], 0).count(), 1);
/// assert_eq!(combinations(&['A', 'B'], 3).count(), 0);
/// ```
pub fn combinations<T>(elements: &[T], m: usize) -> Combinations<'_, T> {
  Combinations {
    elements,
    cursor: Cursor::new(elements.len(), (0..m).collect()),
  }
}

impl<'a, T> Iterator for Combinations<'a, T> {
  type Item = Vec<&'a T>;

  fn next(&mut self) -> Option<Self::Item> {
    let elements = self.elements;
    let indices = self.cursor.step()?;
    Some(indices.iter().map(|&i| &elements[i]).collect())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.cursor.size_hint()
  }
}

impl<'a, T> FusedIterator for Combinations<'a, T> {}

///////////////////////////////////////////////////////////////////////////////
// ArrayCombinations

/// [`Combinations`] with the selection size fixed at compile time.
#[derive(Debug, Clone)]
pub struct ArrayCombinations<'a, T, const K: usize> {
  elements: &'a [T],
  cursor: Cursor<[usize; K]>,
}

pub fn array_combinations<T, const K: usize>(elements: &[T]) -> ArrayCombinations<'_, T, K> {
  ArrayCombinations {
    elements,
    cursor: Cursor::new(elements.len(), array_init(|i| i)),
  }
}

impl<'a, T, const K: usize> Iterator for ArrayCombinations<'a, T, K> {
  type Item = [&'a T; K];

  fn next(&mut self) -> Option<Self::Item> {
    let elements = self.elements;
    let indices = self.cursor.step()?;
    Some(array_init(|i| &elements[indices[i]]))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.cursor.size_hint()
  }
}

impl<'a, T, const K: usize> FusedIterator for ArrayCombinations<'a, T, K> {}
