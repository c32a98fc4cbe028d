// ABOUTME: Wizard instance handle and the scope collaborators reach it through
// Owns the step store plus the step-change observer, shared on one thread via Rc

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use super::error::{StepperError, StepperResult};
use super::store::{StepState, StepStore};

/// Observer invoked after each committed step transition.
///
/// It carries no payload. Read the new step from the [`Stepper`] if needed.
#[cfg_attr(test, mockall::automock)]
pub trait StepObserver {
    fn step_changed(&mut self);
}

impl<F: FnMut()> StepObserver for F {
    fn step_changed(&mut self) {
        self()
    }
}

/// Construction options for a wizard instance
pub struct StepperOptions {
    pub initial_step: usize,
    on_step_change: Option<Box<dyn StepObserver>>,
}

impl StepperOptions {
    pub fn new() -> Self {
        Self {
            initial_step: 1,
            on_step_change: None,
        }
    }

    pub const fn initial_step(mut self, step: usize) -> Self {
        self.initial_step = step;
        self
    }

    pub fn on_step_change(mut self, observer: impl StepObserver + 'static) -> Self {
        self.on_step_change = Some(Box::new(observer));
        self
    }
}

impl Default for StepperOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One wizard instance.
///
/// Navigation takes `&self` so every collaborator holding the shared handle can
/// drive it. The observer runs after the store borrow is released, so it may
/// read (or even navigate) the same instance.
pub struct Stepper {
    store: RefCell<StepStore>,
    observer: RefCell<Option<Box<dyn StepObserver>>>,
    notifying: Cell<bool>,
}

impl Stepper {
    pub fn new(options: StepperOptions) -> Rc<Self> {
        Rc::new(Self {
            store: RefCell::new(StepStore::new(options.initial_step)),
            observer: RefCell::new(options.on_step_change),
            notifying: Cell::new(false),
        })
    }

    /// Instance with default options and no observer
    pub fn with_defaults() -> Rc<Self> {
        Self::new(StepperOptions::default())
    }

    pub fn state(&self) -> StepState {
        self.store.borrow().state()
    }

    pub fn current_step(&self) -> usize {
        self.store.borrow().current_step()
    }

    pub fn total_steps(&self) -> usize {
        self.store.borrow().total_steps()
    }

    pub fn is_first_step(&self) -> bool {
        self.store.borrow().is_first_step()
    }

    pub fn is_last_step(&self) -> bool {
        self.store.borrow().is_last_step()
    }

    pub fn next_step(&self) {
        self.store.borrow_mut().next_step();
        self.flush();
    }

    pub fn prev_step(&self) {
        self.store.borrow_mut().prev_step();
        self.flush();
    }

    pub fn go_to(&self, index: usize) {
        self.store.borrow_mut().go_to(index);
        self.flush();
    }

    pub fn define_total_steps(&self, count: usize) {
        self.store.borrow_mut().define_total_steps(count);
        self.flush();
    }

    /// Deliver pending transitions to the observer.
    ///
    /// Transitions made from inside the observer are picked up by the outer
    /// loop once the observer returns.
    fn flush(&self) {
        if self.notifying.get() {
            return;
        }
        self.notifying.set(true);

        while self.store.borrow_mut().observe() {
            let mut guard = NotifyGuard {
                stepper: self,
                observer: self.observer.borrow_mut().take(),
            };
            if let Some(observer) = guard.observer.as_mut() {
                debug!("Step changed to {}", self.current_step());
                observer.step_changed();
            }
        }

        self.notifying.set(false);
    }
}

/// Puts the observer back after one notification, even when it unwinds.
struct NotifyGuard<'a> {
    stepper: &'a Stepper,
    observer: Option<Box<dyn StepObserver>>,
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        *self.stepper.observer.borrow_mut() = self.observer.take();
        if std::thread::panicking() {
            self.stepper.notifying.set(false);
        }
    }
}

impl fmt::Debug for Stepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper")
            .field("state", &self.state())
            .field("has_observer", &self.observer.borrow().is_some())
            .finish()
    }
}

/// Explicit slot through which collaborators reach their wizard instance.
///
/// There is no global stepper: a scope is either bound to one instance or
/// empty, and reading an empty scope is a wiring error.
#[derive(Debug, Clone, Default)]
pub struct StepperScope {
    stepper: Option<Rc<Stepper>>,
}

impl StepperScope {
    pub const fn unbound() -> Self {
        Self { stepper: None }
    }

    pub fn bound(stepper: Rc<Stepper>) -> Self {
        Self {
            stepper: Some(stepper),
        }
    }

    /// Create a new instance and a scope bound to it
    pub fn create(options: StepperOptions) -> Self {
        Self::bound(Stepper::new(options))
    }

    pub const fn is_bound(&self) -> bool {
        self.stepper.is_some()
    }

    pub fn stepper(&self) -> StepperResult<&Rc<Stepper>> {
        self.stepper.as_ref().ok_or(StepperError::ContextMissing)
    }

    pub fn state(&self) -> StepperResult<StepState> {
        Ok(self.stepper()?.state())
    }
}
