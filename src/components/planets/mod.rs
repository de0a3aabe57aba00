mod presenter;
mod view;

pub use presenter::{add_planet, reduce, Action, PlanetsModel, ViewStore};
pub use view::{AddPlanetButton, PlanetList, PlanetsView};

pub struct PlanetsPresenter;
use navicula::reducer::Reducer;

impl Reducer for PlanetsPresenter {
    type Message = ();

    type DelegateMessage = Action;

    type Action = Action;

    type State = PlanetsModel;

    type Environment = crate::environment::Environment;

    fn reduce<'a, 'b>(
        context: &'a impl navicula::types::MessageContext<
            Self::Action,
            Self::DelegateMessage,
            Self::Message,
        >,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> navicula::effect::Effect<'b, Self::Action> {
        presenter::reduce(context, action, state, environment)
    }

    fn initial_action() -> Option<Self::Action> {
        Some(Action::Initial)
    }
}
