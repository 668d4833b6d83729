//! Shared mutable handle for reference values.
//!
//! `String` and `Vector` values are handles: cloning a `Value` clones the
//! handle, and every clone observes mutations made through any other.
//! `Heap<T>` is the only way to hold such a buffer, and its constructor is
//! private to the value module so all allocations go through the `Value`
//! factory methods.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Reference-counted, interior-mutable buffer behind a `String` or
/// `Vector` value.
///
/// Single-threaded by construction (`Rc`, not `Arc`): the engine runs one
/// program on one thread, and mutation order is program order.
#[repr(transparent)]
pub struct Heap<T>(Rc<RefCell<T>>);

impl<T> Heap<T> {
    /// Allocate a new buffer. Only `Value` factories call this.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(RefCell::new(value)))
    }

    /// Borrow the buffer immutably.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the buffer mutably. The change is visible through every alias.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles point at the same buffer.
    #[inline]
    pub fn ptr_eq(&self, other: &Heap<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Buffer address, for identity sets over handles.
    #[inline]
    pub fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    /// Number of live handles to this buffer.
    #[inline]
    pub fn alias_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl<T> Clone for Heap<T> {
    /// Copies the handle, not the buffer.
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    /// Compares buffer contents.
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.borrow() == *other.borrow()
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.borrow(), f)
    }
}
