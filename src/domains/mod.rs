mod planets;

pub use planets::PlanetsDomain;

use crate::actions::PlanetAction;

/// A slice of application state together with the transitions that act on it.
///
/// `reduce` receives the current slice by reference and returns the next
/// one. It must leave the given slice untouched so that earlier snapshots
/// stay valid for whoever still holds them.
pub trait Domain {
    type State: Clone;

    fn initial_state(&self) -> Self::State;

    fn reduce(&self, state: &Self::State, action: &PlanetAction) -> Self::State;
}
