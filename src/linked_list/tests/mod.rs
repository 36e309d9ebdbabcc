extern crate std;

use std::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

use crate::linked_list::{
    list::List,
    traits::{NodeAllocator, ValuePolicy},
};

mod list;

/// A value that counts how often it is dropped.
#[derive(Debug, Default, Clone)]
pub(super) struct Tracked {
    pub id: u32,
    pub drops: Option<Rc<Cell<usize>>>,
}

impl Tracked {
    pub fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Some(Rc::clone(drops)),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(drops) = &self.drops {
            drops.set(drops.get() + 1);
        }
    }
}

pub(super) fn values<T, A, P>(list: &List<T, A, P>) -> Vec<T>
where
    T: Clone,
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    list.iter().cloned().collect()
}

pub(super) fn list_of(items: &[u32]) -> List<u32> {
    let mut list = List::new();
    for item in items {
        list.append(item).unwrap();
    }
    list
}
