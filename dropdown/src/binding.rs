//! Two-way access to a value owned by a parent.

/// Accessor and mutation callback over a field of `S`.
///
/// A child component reads and writes state through the binding without
/// owning it, so the parent stays the single source of truth.
pub struct Binding<'a, S, T> {
    owner: &'a mut S,
    get: fn(&S) -> T,
    set: fn(&mut S, T),
}

impl<'a, S, T> Binding<'a, S, T> {
    pub fn new(owner: &'a mut S, get: fn(&S) -> T, set: fn(&mut S, T)) -> Self {
        Self { owner, get, set }
    }

    pub fn get(&self) -> T {
        (self.get)(&*self.owner)
    }

    pub fn set(&mut self, value: T) {
        (self.set)(&mut *self.owner, value);
    }
}

impl<S> Binding<'_, S, bool> {
    /// Flip the bound flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        let value = !self.get();
        self.set(value);
        value
    }
}
