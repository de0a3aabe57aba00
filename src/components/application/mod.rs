mod presenter;
mod view;

pub use presenter::{reduce, Action, ApplicationModel, ViewStore};
pub use view::ApplicationView;

pub struct ApplicationPresenter;
use navicula::reducer::Reducer;

impl Reducer for ApplicationPresenter {
    type Message = ();

    type DelegateMessage = Action;

    type Action = Action;

    type State = ApplicationModel;

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
