#![allow(non_snake_case)]

mod app;

pub mod actions;
pub mod components;
pub mod domains;
pub mod environment;
pub mod routes;

pub use app::run;
pub use environment::{config::AppConfig, repo::Repo, Environment};

/// Handy macro for future localization
#[macro_export]
macro_rules! loc {
    ($x:expr $(,)?) => {
        $x
    };
}

/// Runs its handler when dropped
pub struct Defer(Box<dyn Fn()>);

impl Defer {
    pub fn action<A: Clone + 'static>(action: &A, handler: impl Fn(&A) + 'static) -> Self {
        let cloned = action.clone();
        let boxed = Box::new(move || handler(&cloned));
        Self(boxed)
    }
}

impl Drop for Defer {
    fn drop(&mut self) {
        (self.0)()
    }
}
