//! Named-event dispatch.
//!
//! # Typenames
//!
//! Event types are fixed when the `Dispatch` is built (the simulation uses
//! `tick` and `end`).  A handler is registered under a *typename*: the type,
//! optionally followed by `.` and a namespace, e.g. `"tick.render"`.  Each
//! typename holds at most one handler and re-registering replaces it, so
//! several observers can listen to the same type under different names.
//!
//! `"tick"` on its own is the typename with an empty namespace.
//!
//! # Calling with the owner as payload
//!
//! The simulation owns its `Dispatch` and passes itself as the payload.  To
//! do that it [`detach`][Dispatch::detach]es a type's listeners, calls them
//! with `&Simulation`, and [`reattach`][Dispatch::reattach]es them.  Handlers
//! only ever see a shared reference, so they cannot touch the table while it
//! is detached.

use crate::{SimError, SimResult};

/// A registered event handler.
pub type Handler<P> = Box<dyn FnMut(&P) + Send + 'static>;

struct Listener<P> {
    name:    String,
    handler: Handler<P>,
}

/// The listeners of one event type, in registration order.
pub struct Listeners<P>(Vec<Listener<P>>);

impl<P> Listeners<P> {
    /// Invoke every listener with `payload`.  Returns how many ran.
    pub fn call_all(&mut self, payload: &P) -> usize {
        for listener in self.0.iter_mut() {
            (listener.handler)(payload);
        }
        self.0.len()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Map from typename to at most one handler.
pub struct Dispatch<P> {
    types: Vec<(&'static str, Vec<Listener<P>>)>,
}

impl<P> Dispatch<P> {
    /// A dispatch accepting exactly the given event types.
    pub fn new(types: &[&'static str]) -> Self {
        Self {
            types: types.iter().map(|&t| (t, Vec::new())).collect(),
        }
    }

    /// Register `handler` under `typename`, replacing any handler already
    /// registered there.
    pub fn on<F>(&mut self, typename: &str, handler: F) -> SimResult<()>
    where
        F: FnMut(&P) + Send + 'static,
    {
        let (slot, name) = self.parse(typename)?;
        let slot = slot.ok_or_else(|| SimError::UnknownEvent(typename.to_string()))?;
        let listeners = &mut self.types[slot].1;
        let handler: Handler<P> = Box::new(handler);
        match listeners.iter_mut().find(|l| l.name == name) {
            Some(existing) => existing.handler = handler,
            None => listeners.push(Listener { name: name.to_string(), handler }),
        }
        Ok(())
    }

    /// Remove the handler under `typename`.  A bare namespace (`".render"`)
    /// removes that namespace from every type.  Returns `true` if anything
    /// was removed.
    pub fn off(&mut self, typename: &str) -> SimResult<bool> {
        let (slot, name) = self.parse(typename)?;
        if slot.is_none() && name.is_empty() {
            return Err(SimError::UnknownEvent(typename.to_string()));
        }
        let mut removed = false;
        for (i, (_, listeners)) in self.types.iter_mut().enumerate() {
            if slot.is_some_and(|s| s != i) {
                continue;
            }
            let before = listeners.len();
            listeners.retain(|l| l.name != name);
            removed |= listeners.len() != before;
        }
        Ok(removed)
    }

    /// The handler registered under `typename`, if any.
    pub fn handler(&self, typename: &str) -> SimResult<Option<&Handler<P>>> {
        let (slot, name) = self.parse(typename)?;
        let slot = slot.ok_or_else(|| SimError::UnknownEvent(typename.to_string()))?;
        Ok(self.types[slot]
            .1
            .iter()
            .find(|l| l.name == name)
            .map(|l| &l.handler))
    }

    /// Synchronously invoke every handler of event type `ty` with `payload`.
    /// Returns how many handlers ran.
    pub fn call(&mut self, ty: &str, payload: &P) -> SimResult<usize> {
        let slot = self.type_slot(ty)?;
        let mut listeners = Listeners(std::mem::take(&mut self.types[slot].1));
        let ran = listeners.call_all(payload);
        self.types[slot].1 = listeners.0;
        Ok(ran)
    }

    /// Take the listeners of event type `ty` out of the table.
    ///
    /// Must be paired with [`reattach`][Self::reattach]; until then `ty`
    /// has no listeners.
    pub fn detach(&mut self, ty: &str) -> SimResult<Listeners<P>> {
        let slot = self.type_slot(ty)?;
        Ok(Listeners(std::mem::take(&mut self.types[slot].1)))
    }

    /// Put back listeners taken by [`detach`][Self::detach].  Listeners
    /// registered in the meantime are kept and win over detached ones with
    /// the same name.
    pub fn reattach(&mut self, ty: &str, listeners: Listeners<P>) -> SimResult<()> {
        let slot = self.type_slot(ty)?;
        let current = std::mem::take(&mut self.types[slot].1);
        let mut merged = listeners.0;
        merged.retain(|l| current.iter().all(|c| c.name != l.name));
        merged.extend(current);
        self.types[slot].1 = merged;
        Ok(())
    }

    /// Handler count for event type `ty`.
    pub fn listener_count(&self, ty: &str) -> SimResult<usize> {
        let slot = self.type_slot(ty)?;
        Ok(self.types[slot].1.len())
    }

    // ── Typename parsing ──────────────────────────────────────────────────

    /// Split `type.name` into (type slot, name).  An empty type yields
    /// `None` (matches every type); a non-empty unknown type is an error.
    fn parse<'a>(&self, typename: &'a str) -> SimResult<(Option<usize>, &'a str)> {
        let (ty, name) = typename.split_once('.').unwrap_or((typename, ""));
        if ty.is_empty() {
            return Ok((None, name));
        }
        Ok((Some(self.type_slot(ty)?), name))
    }

    fn type_slot(&self, ty: &str) -> SimResult<usize> {
        self.types
            .iter()
            .position(|(t, _)| *t == ty)
            .ok_or_else(|| SimError::UnknownEvent(ty.to_string()))
    }
}
