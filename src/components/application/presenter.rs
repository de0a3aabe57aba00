use navicula::Effect;

use crate::environment::repo::AppState;
use crate::environment::Environment;

pub type ViewStore<'a> = navicula::ViewStore<'a, super::ApplicationPresenter>;

#[derive(Clone, Debug)]
pub enum Action {
    Initial,
    DataChanged,
}

/// The page header. Reads state, never dispatches.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApplicationModel {
    pub title: String,
    pub planet_count: usize,
}

impl ApplicationModel {
    pub fn project(&mut self, title: &str, state: &AppState) {
        self.title = title.to_string();
        self.planet_count = state.planets.len();
    }
}

pub fn reduce<'a>(
    context: &'a impl navicula::types::MessageContext<Action, Action, ()>,
    action: Action,
    state: &'a mut ApplicationModel,
    environment: &'a Environment,
) -> Effect<'static, Action> {
    log::trace!("{action:?}");
    let repo = &environment.repo;
    state.project(&environment.config.title, &repo.state());
    match action {
        Action::Initial => repo
            .storage
            .subscribe("application_presenter", context, |_| Action::DataChanged),
        Action::DataChanged => Effect::NONE,
    }
}
