use im::Vector;
use navicula::Effect;

use crate::actions::{PlanetAction, ALPHA_CENTAURI};
use crate::environment::repo::{AppState, Repo};
use crate::environment::Environment;

pub type ViewStore<'a> = navicula::ViewStore<'a, super::PlanetsPresenter>;

#[derive(Clone, Debug)]
pub enum Action {
    Initial,
    GetPlanets,
    AddPlanet,
    DataChanged,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PlanetsModel {
    pub planets: Vector<String>,
}

impl PlanetsModel {
    pub fn project(&mut self, state: &AppState) {
        self.planets = state.planets.clone();
    }
}

/// The "Add Planet" control always appends the same name
pub fn add_planet(repo: &Repo) {
    repo.dispatch(PlanetAction::add_planet(ALPHA_CENTAURI));
}

pub fn reduce<'a>(
    context: &'a impl navicula::types::MessageContext<Action, Action, ()>,
    action: Action,
    state: &'a mut PlanetsModel,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");
    let repo = &environment.repo;
    match action {
        Action::Initial => {
            state.project(&repo.state());
            let fetch = if environment.config.fetch_on_mount {
                Effect::action(Action::GetPlanets)
            } else {
                Effect::NONE
            };
            Effect::merge2(
                repo.storage
                    .subscribe("planets_presenter", context, |_| Action::DataChanged),
                fetch,
            )
        }
        Action::GetPlanets => {
            repo.dispatch(PlanetAction::get_planets());
            Effect::NONE
        }
        Action::AddPlanet => {
            add_planet(repo);
            Effect::NONE
        }
        Action::DataChanged => {
            state.project(&repo.state());
            Effect::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::CLASSICAL_PLANETS;
    use pretty_assertions::assert_eq;

    #[test]
    fn projection_follows_the_repo() {
        let repo = Repo::default();
        let mut model = PlanetsModel::default();
        model.project(&repo.state());
        assert_eq!(model, PlanetsModel::default());

        repo.dispatch(PlanetAction::get_planets());
        model.project(&repo.state());
        assert!(model
            .planets
            .iter()
            .zip(CLASSICAL_PLANETS)
            .all(|(a, b)| a == b));
        assert_eq!(model.planets.len(), 9);
    }

    #[test]
    fn add_planet_dispatches_one_alpha_centauri() {
        let repo = Repo::default();

        add_planet(&repo);
        repo.dispatch(PlanetAction::get_planets());
        add_planet(&repo);

        let adds: Vec<_> = repo
            .history()
            .into_iter()
            .map(|e| e.action)
            .filter(|a| matches!(a, PlanetAction::AddPlanet(_)))
            .collect();
        assert_eq!(
            adds,
            vec![
                PlanetAction::add_planet(ALPHA_CENTAURI),
                PlanetAction::add_planet(ALPHA_CENTAURI)
            ]
        );
        assert_eq!(
            repo.state().planets.last().map(String::as_str),
            Some(ALPHA_CENTAURI)
        );
    }
}
