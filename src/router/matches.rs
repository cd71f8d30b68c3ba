use crate::route::Route;

use std::ops::Deref;

use smallvec::SmallVec;

/// The routes selected by a single `find` call, in registration order.
///
/// Derefs to a slice of route references; under the `single` policy it
/// holds at most one element.
#[derive(Debug)]
pub struct Matches<'a, T> {
    pub(super) buf: SmallVec<[&'a Route<T>; 4]>,
}

impl<'a, T> Matches<'a, T> {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }
}

impl<'a, T> Deref for Matches<'a, T> {
    type Target = [&'a Route<T>];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}
