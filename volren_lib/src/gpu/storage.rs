use std::marker::PhantomData;

use crate::error::StorageError;

use super::ElementId;

/// Table with exactly one element per id.
///
/// Completeness is checked once when the table is built, lookups afterwards
/// are plain indexing by the id's ordinal.
#[derive(Debug)]
pub struct ElementStorage<I, T> {
    elements: Vec<T>,
    id: PhantomData<I>,
}

impl<I, T> ElementStorage<I, T>
where
    I: ElementId,
{
    pub fn new<E>(entries: E) -> Result<Self, StorageError>
    where
        E: IntoIterator<Item = (I, T)>,
    {
        let mut slots: Vec<Option<T>> = I::ALL.iter().map(|_| None).collect();

        for (id, element) in entries {
            let slot = &mut slots[id.index()];
            if slot.is_some() {
                return Err(StorageError::Duplicate(id.name()));
            }
            *slot = Some(element);
        }

        let mut elements = Vec::with_capacity(slots.len());
        for (slot, id) in slots.into_iter().zip(I::ALL) {
            match slot {
                Some(element) => elements.push(element),
                None => return Err(StorageError::Missing(id.name())),
            }
        }

        Ok(ElementStorage {
            elements,
            id: PhantomData,
        })
    }

    /// Build by calling `make` for every id
    pub fn try_from_fn<F, Err>(mut make: F) -> Result<Self, Err>
    where
        F: FnMut(I) -> Result<T, Err>,
        Err: From<StorageError>,
    {
        let mut entries = Vec::with_capacity(I::ALL.len());
        for &id in I::ALL {
            entries.push((id, make(id)?));
        }
        Ok(ElementStorage::new(entries)?)
    }

    pub fn get(&self, id: I) -> &T {
        &self.elements[id.index()]
    }

    pub fn get_mut(&mut self, id: I) -> &mut T {
        &mut self.elements[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        I::ALL.iter().copied().zip(self.elements.iter())
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
