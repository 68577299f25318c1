//! Tokio runtime and Wiremock server shared across BDD steps.
//!
//! Steps run synchronously, so the runtime lives in a scenario slot and every
//! async call is driven through [`SharedRuntime::block_on`].

use std::cell::RefCell;
use std::future::Future;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Runtime handle that can be cloned between steps of one scenario.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn start() -> io::Result<Self> {
        Ok(Self(Rc::new(RefCell::new(Runtime::new()?))))
    }

    /// Drives `future` to completion on the shared runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Returns the scenario runtime, starting it and the mock GitHub server on
/// first use.
///
/// # Errors
///
/// Returns an error when the Tokio runtime cannot be created.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> io::Result<SharedRuntime> {
    let shared = match runtime.get() {
        Some(existing) => existing,
        None => {
            let started = SharedRuntime::start()?;
            runtime.set(started.clone());
            started
        }
    };

    if server.with_ref(|_| ()).is_none() {
        server.set(shared.block_on(MockServer::start()));
    }

    Ok(shared)
}
