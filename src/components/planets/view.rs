use dioxus::prelude::*;
use im::Vector;

use super::presenter::{Action, PlanetsModel, ViewStore};
use crate::environment::Environment;
use crate::loc;

#[inline_props]
pub fn PlanetsView<'a>(cx: Scope<'a>, environment: &'a Environment) -> Element<'a> {
    log::trace!("rerender planets");
    let environment: &Environment = environment;
    let store: ViewStore = navicula::root(cx, &[], environment, PlanetsModel::default);

    cx.render(rsx!(PlanetsContent { store: store }))
}

#[inline_props]
fn PlanetsContent<'a>(cx: Scope<'a>, store: ViewStore<'a>) -> Element<'a> {
    render! {
        div { class: "planets",
            PlanetList { planets: store.planets.clone() }
            AddPlanetButton {
                onclick: move |_| store.send(Action::AddPlanet)
            }
        }
    }
}

#[derive(Props, PartialEq)]
pub struct PlanetListProps {
    #[props(optional)]
    pub planets: Option<Vector<String>>,
}

/// One list item per planet. Names may repeat, so items are keyed by
/// position as well as name.
pub fn PlanetList(cx: Scope<PlanetListProps>) -> Element {
    let planets = cx.props.planets.clone().unwrap_or_default();
    render! {
        ul { class: "planet-list",
            planets.iter().enumerate().map(|(index, planet)| rsx!(
                li { key: "{index}-{planet}", "{planet}" }
            ))
        }
    }
}

#[derive(Props)]
pub struct AddPlanetButtonProps<'a> {
    pub onclick: EventHandler<'a, MouseEvent>,
}

pub fn AddPlanetButton<'a>(cx: Scope<'a, AddPlanetButtonProps<'a>>) -> Element<'a> {
    let title = loc!("Add Planet");
    render! {
        button {
            r#type: "button",
            class: "add-planet",
            onclick: move |e| cx.props.onclick.call(e),
            "{title}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{PlanetAction, ALPHA_CENTAURI, CLASSICAL_PLANETS};
    use crate::components::planets::add_planet;
    use crate::environment::config::AppConfig;
    use dioxus::core::{ScopeId, VirtualDom};

    fn render_list(planets: Option<Vector<String>>) -> String {
        let mut dom = VirtualDom::new_with_props(PlanetList, PlanetListProps { planets });
        let _ = dom.rebuild();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn empty_list_has_no_items() {
        let html = render_list(Some(Vector::new()));
        assert_eq!(html.matches("<li").count(), 0);
        assert!(html.contains("<ul"));
    }

    #[test]
    fn absent_list_renders_as_empty() {
        let html = render_list(None);
        assert_eq!(html.matches("<li").count(), 0);
    }

    #[test]
    fn renders_every_planet_in_order() {
        let planets = CLASSICAL_PLANETS.iter().map(|p| p.to_string()).collect();
        let html = render_list(Some(planets));
        assert_eq!(html.matches("<li").count(), 9);

        let positions: Vec<usize> = CLASSICAL_PLANETS
            .iter()
            .map(|p| html.find(&format!(">{p}</li>")).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    struct ListHostProps {
        environment: Environment,
    }

    fn ListHost(cx: Scope<ListHostProps>) -> Element {
        let planets = cx.props.environment.repo.state().planets;
        render!(PlanetList { planets: planets })
    }

    #[test]
    fn repeated_adds_rerender_with_duplicate_names() {
        let environment = Environment::new(AppConfig::default());
        environment.repo.dispatch(PlanetAction::get_planets());
        let mut dom = VirtualDom::new_with_props(
            ListHost,
            ListHostProps {
                environment: environment.clone(),
            },
        );
        let _ = dom.rebuild();

        for _ in 0..2 {
            add_planet(&environment.repo);
            dom.mark_dirty(ScopeId(0));
            let _ = dom.render_immediate();
        }

        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("<li").count(), 11);
        assert_eq!(html.matches(&format!(">{ALPHA_CENTAURI}</li>")).count(), 2);
    }

    fn ButtonHost(cx: Scope) -> Element {
        render!(AddPlanetButton { onclick: move |_| {} })
    }

    #[test]
    fn add_button_is_labelled() {
        let mut dom = VirtualDom::new(ButtonHost);
        let _ = dom.rebuild();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<button"));
        assert!(html.contains("Add Planet"));
    }
}
