//! In-memory stand-ins for DOM elements and `localStorage`.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use crate::dom::{Attributes, ClassList, KeyValueStore};
use crate::error::PageError;

#[derive(Debug, Default)]
pub struct FakeElement {
    classes: RefCell<BTreeSet<String>>,
    attributes: RefCell<BTreeMap<String, String>>,
}

impl FakeElement {
    pub fn with_classes(classes: &[&str]) -> Self {
        let el = Self::default();
        el.classes.borrow_mut().extend(classes.iter().map(|c| (*c).to_owned()));
        el
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ClassList for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<(), PageError> {
        self.classes.borrow_mut().insert(class.to_owned());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<(), PageError> {
        self.classes.borrow_mut().remove(class);
        Ok(())
    }
}

impl Attributes for FakeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), PageError> {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store whose writes always fail, like a full or disabled `localStorage`.
#[derive(Debug, Default)]
pub struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), PageError> {
        Err(PageError::Storage("quota exceeded".into()))
    }
}
