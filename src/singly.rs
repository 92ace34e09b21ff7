//! A singly-linked list. Each node owns the next one through its `next`
//! link; the list keeps a raw alias of the last node so appends don't
//! have to walk the chain.

use std::fmt;
use std::iter::FromIterator;
use std::ptr;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A forward-only linked list with `O(1)` pushes onto either end.
///
/// # Examples
///
/// ```
/// use ds::singly::List;
///
/// let mut list = List::new();
/// list.append(1);
/// list.append(2);
/// list.prepend(0);
///
/// assert_eq!(list.to_vec(), vec![0, 1, 2]);
///
/// // Deleting removes every node with a matching value.
/// list.delete_all(&2);
/// assert_eq!(list.to_vec(), vec![0, 1]);
/// ```
pub struct List<T> {
    head: Option<Box<Node<T>>>,
    /// Non-owning alias of the last node in the chain. Null iff the list
    /// is empty.
    tail: *mut Node<T>,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Generates a new, empty `List`.
    pub fn new() -> Self {
        List {
            head: None,
            tail: ptr::null_mut(),
            len: 0,
        }
    }

    /// Returns how many elements are in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes a value onto the end of the list in `O(1)`.
    pub fn append(&mut self, value: T) {
        let mut node = Box::new(Node { value, next: None });
        let raw_tail: *mut Node<T> = &mut *node;

        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // SAFETY: tail is non-null and points at the last node of the
            // chain, which is owned by this list and has no other borrows
            // while we hold `&mut self`.
            unsafe {
                (*self.tail).next = Some(node);
            }
        }

        self.tail = raw_tail;
        self.len += 1;
    }

    /// Pushes a value onto the front of the list in `O(1)`. An empty
    /// list's first element becomes head and tail at once.
    pub fn prepend(&mut self, value: T) {
        let mut node = Box::new(Node {
            value,
            next: self.head.take(),
        });

        if self.tail.is_null() {
            self.tail = &mut *node;
        }

        self.head = Some(node);
        self.len += 1;
    }

    /// Removes every node whose value equals `value`, in one `O(n)` pass.
    /// Removing a value that isn't present leaves the list untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds::singly::List;
    ///
    /// let mut list: List<_> = [5, 3, 5, 5].iter().copied().collect();
    /// list.delete_all(&5);
    ///
    /// assert_eq!(list.to_vec(), vec![3]);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn delete_all(&mut self, value: &T)
    where
        T: PartialEq,
    {
        // Walk a cursor over the owning links, splicing each match out of
        // the chain. Matching runs at the head fall out of the same loop
        // because the cursor starts at `self.head`. The last surviving
        // node the cursor passes is the new tail.
        let mut last: *mut Node<T> = ptr::null_mut();
        let mut cursor = &mut self.head;

        while cursor.is_some() {
            let matches = cursor
                .as_ref()
                .map_or(false, |node| node.value == *value);

            if matches {
                let mut removed = cursor.take().expect("Matching implies a node");
                *cursor = removed.next.take();
                self.len -= 1;
            } else {
                let node = cursor.as_mut().expect("Loop condition implies a node");
                last = &mut **node;
                cursor = &mut node.next;
            }
        }

        self.tail = last;
    }

    /// Returns a reference to the first element equal to `value`, or
    /// `None` if no element matches. `O(n)`.
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        self.iter().find(|v| *v == value)
    }

    /// Copies the values into a `Vec`, head to tail.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a lazy iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head.as_deref(),
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time so long lists don't recurse through
        // the nested `Box` drops.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

/// A borrowing iterator over a [`List`], front to back.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.value
        })
    }
}

/// An owning iterator over a [`List`], front to back.
pub struct IntoIter<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().map(|node| {
            self.head = node.next;
            node.value
        })
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter {
            head: self.head.take(),
        }
    }
}
