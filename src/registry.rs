use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use log::debug;

// Registry
//------------------------------------------------------------------------------

/// Owns at most one instance per type for the lifetime of the registry.
///
/// Instances are registered explicitly or built on first use, and are never replaced;
/// they are dropped together with the registry.
#[derive(Default)]
pub struct Registry {
    services: HashMap<TypeId, Box<dyn Any>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `service`, or hands it back if an instance of `T` is already registered.
    pub fn register<T: Any>(&mut self, service: T) -> Result<(), T> {
        let id = TypeId::of::<T>();
        if self.services.contains_key(&id) {
            return Err(service);
        }
        debug!("Registering {}", type_name::<T>());
        self.services.insert(id, Box::new(service));
        Ok(())
    }

    pub fn get<T: Any>(&self) -> Option<&T> {
        self.services.get(&TypeId::of::<T>()).and_then(|s| s.downcast_ref())
    }

    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.services.get_mut(&TypeId::of::<T>()).and_then(|s| s.downcast_mut())
    }

    pub fn get_or_insert_with<T: Any>(&mut self, f: impl FnOnce() -> T) -> &mut T {
        self.services
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                debug!("Creating {} on first use", type_name::<T>());
                Box::new(f())
            })
            .downcast_mut()
            .expect("registry entry keyed by its own TypeId")
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
