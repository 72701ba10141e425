//! The two location lists and the summaries computed over them.


use arrayvec::ArrayVec;

use crate::error::LengthMismatch;
use crate::input::{ErrorKind, IStr, IStrError};
use crate::Counter;

/// A pair of location lists of equal length, in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl Lists {
    /// Construct from two columns, which must be of the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::Lists;
    ///
    /// let lists = Lists::new(vec![3, 4, 2, 1, 3, 3], vec![4, 3, 5, 3, 9, 3])?;
    /// assert_eq!(lists.total_distance(), 11);
    /// assert_eq!(lists.similarity_score(), 31);
    ///
    /// assert!(Lists::new(vec![1, 2], vec![1]).is_err());
    /// # Ok::<_, lib::LengthMismatch>(())
    /// ```
    pub fn new(left: Vec<i64>, right: Vec<i64>) -> Result<Self, LengthMismatch> {
        if left.len() != right.len() {
            return Err(LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }

        Ok(Self { left, right })
    }

    /// Parse lists from input, one pair of whitespace-separated integers per
    /// line.
    ///
    /// Blank lines are skipped. Any other line which does not hold exactly two
    /// integers is an error.
    pub fn parse(input: &mut IStr<'_>) -> Result<Self, IStrError> {
        let mut left = Vec::new();
        let mut right = Vec::new();

        loop {
            let start = input.index();

            let Some(columns) = input.try_line::<ArrayVec<i64, 2>>()? else {
                break;
            };

            match columns[..] {
                [] => continue,
                [a, b] => {
                    left.push(a);
                    right.push(b);
                }
                _ => {
                    return Err(IStrError::new(
                        start..input.index(),
                        ErrorKind::BadArray(2, columns.len()),
                    ));
                }
            }
        }

        Ok(Self { left, right })
    }

    /// The left list in input order.
    #[inline]
    pub fn left(&self) -> &[i64] {
        &self.left
    }

    /// The right list in input order.
    #[inline]
    pub fn right(&self) -> &[i64] {
        &self.right
    }

    /// Number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Test if there are no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Sum of distances between the lists after sorting both.
    pub fn total_distance(&self) -> u128 {
        sorted_distance(&self.left, &self.right)
    }

    /// Sum of each left value times its number of occurrences in the right
    /// list.
    pub fn similarity_score(&self) -> i128 {
        similarity_score(&self.left, &self.right)
    }
}

/// Sum of `|left[i] - right[i]|` after sorting both sides ascending.
///
/// The inputs are left untouched, sorting happens on copies. The sum is
/// accumulated as `u128` so that no sequence of `i64` pairs can overflow it.
pub fn total_distance(left: &[i64], right: &[i64]) -> Result<u128, LengthMismatch> {
    if left.len() != right.len() {
        return Err(LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    Ok(sorted_distance(left, right))
}

fn sorted_distance(left: &[i64], right: &[i64]) -> u128 {
    let mut a = left.to_vec();
    let mut b = right.to_vec();

    a.sort_unstable();
    b.sort_unstable();

    a.iter()
        .zip(b.iter())
        .map(|(l, r)| u128::from(l.abs_diff(*r)))
        .sum()
}

/// Sum of `v * count(v in right)` for every `v` in `left`.
///
/// Products and the sum are computed as `i128`, which cannot overflow for
/// fewer than 2^32 pairs of `i64` values.
pub fn similarity_score(left: &[i64], right: &[i64]) -> i128 {
    let counts = right.iter().copied().collect::<Counter<i64>>();

    left.iter()
        .map(|&v| i128::from(v) * counts.get(&v) as i128)
        .sum()
}
