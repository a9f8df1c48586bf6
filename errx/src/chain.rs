//! Error chain inspection
//!
//! A chain is an error followed by its successive `source()` links. Comparison
//! along the chain is by identity: two errors match only if they are the same
//! allocation, never because their codes or messages happen to be equal.

use crate::error::Error;
use std::error::Error as StdError;

/// Iterator over an error and every error in its `source()` chain
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Whether `a` and `b` are the same error instance
///
/// A value and its first field share an address, so equal addresses only count
/// when both sides are also the same concrete type. Foreign types are told apart
/// by their vtable, which matches when both references come from one shared
/// [`Cause`](crate::error::Cause) handle.
pub fn same_error(a: &(dyn StdError + 'static), b: &(dyn StdError + 'static)) -> bool {
    let a_ptr = a as *const dyn StdError;
    let b_ptr = b as *const dyn StdError;
    if !std::ptr::eq(a_ptr as *const (), b_ptr as *const ()) {
        return false;
    }

    match (a.is::<Error>(), b.is::<Error>()) {
        (true, true) => true,
        (false, false) => std::ptr::eq(a_ptr, b_ptr),
        _ => false,
    }
}

/// Whether `target` is `err` itself or any error in its chain
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    Chain::new(err).any(|node| same_error(node, target))
}

/// First error in the chain whose concrete type is `T`
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    Chain::new(err).find_map(|node| node.downcast_ref::<T>())
}

/// Out-parameter form of [`find`]
///
/// On success `target` is overwritten and `true` is returned; otherwise `target`
/// keeps its previous value.
pub fn as_into<'a, T>(err: &'a (dyn StdError + 'static), target: &mut Option<&'a T>) -> bool
where
    T: StdError + 'static,
{
    match find::<T>(err) {
        Some(found) => {
            *target = Some(found);
            true
        }
        None => false,
    }
}

/// The last error in the chain (the error itself when it has no source)
pub fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    Chain::new(err).last().unwrap_or(err)
}
