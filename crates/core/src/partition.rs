//! Splitting a list into groups.
//!
//! Both functions borrow the input and return consecutive, non-overlapping
//! sub-slices that together cover every item in order.

use thiserror::Error;

/// Errors that can occur when partitioning a list.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    #[error("group size must be at least one")]
    ZeroGroupSize,

    #[error("number of groups must be at least one")]
    ZeroGroups,

    #[error("cannot split {items} items into {groups} non-empty groups")]
    TooFewItems { items: usize, groups: usize },
}

/// Splits `items` into consecutive groups of `size`.
///
/// The last group is shorter when `size` does not divide the length.
/// An empty input yields no groups.
///
/// # Errors
///
/// Returns [`GroupError::ZeroGroupSize`] if `size` is zero.
pub fn groups_of<T>(items: &[T], size: usize) -> Result<Vec<&[T]>, GroupError> {
    if size == 0 {
        return Err(GroupError::ZeroGroupSize);
    }
    Ok(items.chunks(size).collect())
}

/// Splits `items` into exactly `groups` groups of near-equal size.
///
/// Group sizes differ by at most one. When the length is not a multiple of
/// `groups`, the leading `len % groups` groups each hold one extra item.
///
/// # Errors
///
/// Returns an error if `groups` is zero or if there are fewer items than
/// groups (which would force an empty group).
pub fn split_into<T>(items: &[T], groups: usize) -> Result<Vec<&[T]>, GroupError> {
    if groups == 0 {
        return Err(GroupError::ZeroGroups);
    }
    if items.len() < groups {
        return Err(GroupError::TooFewItems {
            items: items.len(),
            groups,
        });
    }

    let base = items.len() / groups;
    let extra = items.len() % groups;

    let (long, short) = items.split_at(extra * (base + 1));
    let mut out = groups_of(long, base + 1)?;
    out.extend(groups_of(short, base)?);
    Ok(out)
}
