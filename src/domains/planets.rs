use im::Vector;

use super::Domain;
use crate::actions::PlanetAction;

#[derive(Clone, Copy, Debug, Default)]
pub struct PlanetsDomain;

impl PlanetsDomain {
    /// `planets` followed by `data`, as a new sequence
    pub fn append(planets: &Vector<String>, data: Vector<String>) -> Vector<String> {
        let mut next = planets.clone();
        next.append(data);
        next
    }
}

impl Domain for PlanetsDomain {
    type State = Vector<String>;

    fn initial_state(&self) -> Self::State {
        Vector::new()
    }

    fn reduce(&self, state: &Self::State, action: &PlanetAction) -> Self::State {
        match action {
            PlanetAction::GetPlanets | PlanetAction::AddPlanet(_) => {
                Self::append(state, action.payload())
            }
        }
    }
}
