//! In-memory animal collection.
//!
//! `AnimalStore` is a plain synchronous struct. The router shares it as
//! [`Db`] and every method runs under that lock, so each operation is one
//! atomic step over the collection.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::StoreError;

/// Names loaded into a seeded store, in id order.
pub const SEED: [&str; 3] = ["panda", "racoon", "python"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: u64,
    pub name: String,
}

/// Issues strictly increasing ids starting at 1. Never reuses a value.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Last id handed out, or 0 if none has been issued yet.
    pub fn last(&self) -> u64 {
        self.last
    }
}

#[derive(Debug, Default)]
pub struct AnimalStore {
    animals: Vec<Animal>,
    ids: IdGenerator,
}

pub type Db = Arc<RwLock<AnimalStore>>;

impl AnimalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the three startup animals with ids 1 through 3.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for name in SEED {
            let id = store.ids.next();
            store.animals.push(Animal {
                id,
                name: name.to_string(),
            });
        }
        store
    }

    pub fn into_db(self) -> Db {
        Arc::new(RwLock::new(self))
    }

    pub fn list(&self) -> &[Animal] {
        &self.animals
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn last_id(&self) -> u64 {
        self.ids.last()
    }

    pub fn get(&self, id: u64) -> Result<&Animal, StoreError> {
        self.animals
            .iter()
            .find(|a| a.id == id)
            .ok_or(StoreError::NotFound)
    }

    pub fn create(&mut self, name: &str) -> Result<Animal, StoreError> {
        validate_name(name)?;
        if self.animals.iter().any(|a| a.name == name) {
            return Err(StoreError::DuplicateName);
        }
        let animal = Animal {
            id: self.ids.next(),
            name: name.to_string(),
        };
        self.animals.push(animal.clone());
        Ok(animal)
    }

    /// Renames the animal in place. Keeping its current name is allowed.
    pub fn update(&mut self, id: u64, name: &str) -> Result<(), StoreError> {
        validate_name(name)?;
        let pos = self.position(id)?;
        if self.animals.iter().any(|a| a.id != id && a.name == name) {
            return Err(StoreError::DuplicateName);
        }
        self.animals[pos].name = name.to_string();
        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> Result<Animal, StoreError> {
        let pos = self.position(id)?;
        Ok(self.animals.remove(pos))
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.animals
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::NotFound)
    }
}

fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation);
    }
    Ok(())
}
