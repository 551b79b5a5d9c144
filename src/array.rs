use std::alloc::{alloc, dealloc, realloc, Layout};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::ptr;

use crate::error::{ArrayError, Result};

/// A growable, contiguous, zero-indexed sequence with an explicit logical
/// length, built on a raw buffer the instance exclusively owns.
///
/// Capacity doubles when full and never shrinks on removal. Insert and
/// remove preserve the relative order of untouched elements by shifting the
/// tail one slot. Single-threaded use only; the safe API hides all of the
/// unsafe buffer management.
pub struct DynamicArray<T> {
    ptr: *mut T,
    len: usize,
    cap: usize,
}

impl<T> DynamicArray<T> {
    /// First allocation size, to skip the smallest reallocations.
    const FIRST_ALLOC: usize = 4;

    /// Creates an empty array. No allocation happens until the first push.
    pub fn new() -> Self {
        debug_assert!(
            std::mem::size_of::<T>() != 0,
            "zero-sized element types are not supported"
        );
        DynamicArray {
            ptr: ptr::null_mut(), // Null is fine while cap == 0
            len: 0,
            cap: 0,
        }
    }

    /// Creates an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        if capacity > 0 {
            array.grow_to(capacity);
        }
        array
    }

    /// Logical length: the count of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Backing-buffer capacity, always >= `len`.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Appends `value` as the new last element.
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow();
        }
        unsafe {
            ptr::write(self.ptr.add(self.len), value);
        }
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            unsafe { Some(ptr::read(self.ptr.add(self.len))) }
        }
    }

    /// Inserts `value` at `index`, shifting every element at `index` and
    /// later one slot toward the end. `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.cap {
            self.grow();
        }
        unsafe {
            let slot = self.ptr.add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Overwrites the element at `index`, returning the replaced element.
    /// No other element moves and the length is unchanged.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        unsafe {
            let slot = self.ptr.add(index);
            let old = ptr::read(slot);
            ptr::write(slot, value);
            Ok(old)
        }
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element one slot toward the start. Capacity is left untouched.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        unsafe {
            let slot = self.ptr.add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        unsafe { Ok(&*self.ptr.add(index)) }
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        unsafe { Ok(&mut *self.ptr.add(index)) }
    }

    /// Drops every element. Capacity is left untouched.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    pub fn as_slice(&self) -> &[T] {
        if self.len == 0 {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.len == 0 {
            &mut []
        } else {
            unsafe { std::slice::from_raw_parts_mut(self.ptr, self.len) }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Doubles the capacity, or makes the first allocation.
    fn grow(&mut self) {
        let new_cap = if self.cap == 0 {
            Self::FIRST_ALLOC
        } else {
            self.cap * 2
        };
        self.grow_to(new_cap);
    }

    fn grow_to(&mut self, new_cap: usize) {
        let new_layout = Layout::array::<T>(new_cap).unwrap();

        let new_ptr = if self.cap == 0 {
            unsafe { alloc(new_layout) as *mut T }
        } else {
            let old_layout = Layout::array::<T>(self.cap).unwrap();
            unsafe { realloc(self.ptr as *mut u8, old_layout, new_layout.size()) as *mut T }
        };

        if new_ptr.is_null() {
            panic!("allocation failed for capacity {}", new_cap);
        }

        self.ptr = new_ptr;
        self.cap = new_cap;
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Linear search from the front: returns the lowest index whose element
    /// equals `value`, or `None` when no element matches.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // Drop all elements, then the buffer
        while self.pop().is_some() {}

        if self.cap != 0 {
            let layout = Layout::array::<T>(self.cap).unwrap();
            unsafe {
                dealloc(self.ptr as *mut u8, layout);
            }
        }
    }
}

// Safety: DynamicArray<T> owns its elements outright, so thread transfer
// and sharing follow T's own capabilities.
unsafe impl<T: Send> Send for DynamicArray<T> {}
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        for item in self.iter() {
            copy.push(item.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// Panicking sugar over `get`; use `get` to handle bad indices.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = Self::with_capacity(iter.size_hint().0);
        for item in iter {
            array.push(item);
        }
        array
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
