use dioxus::prelude::*;

use crate::components::application::ApplicationView;
use crate::components::planets::PlanetsView;
use crate::environment::Environment;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Application,
    Planets,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Route {
    pub path: &'static str,
    pub screen: Screen,
}

/// Both screens live on the root path and therefore render together.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        screen: Screen::Application,
    },
    Route {
        path: "/",
        screen: Screen::Planets,
    },
];

impl Route {
    /// A route matches a location it equals, or one it prefixes up to a
    /// `/` boundary. `/` matches everything.
    pub fn matches(&self, location: &str) -> bool {
        let path = self.path.trim_end_matches('/');
        let Some(rest) = location.strip_prefix(path) else {
            return false;
        };
        rest.is_empty() || rest.starts_with('/')
    }
}

/// Every route matching `location`, in table order
pub fn matching<'a>(routes: &'a [Route], location: &'a str) -> impl Iterator<Item = &'a Route> {
    routes.iter().filter(move |route| route.matches(location))
}

#[inline_props]
pub fn Routes<'a>(cx: Scope<'a>, environment: &'a Environment) -> Element<'a> {
    let location = environment.config.route.as_str();
    log::trace!("rendering routes for {location}");
    let screens = matching(ROUTES, location)
        .enumerate()
        .map(|(index, route)| match route.screen {
            Screen::Application => rsx!(ApplicationView {
                key: "{index}",
                environment: environment
            }),
            Screen::Planets => rsx!(PlanetsView {
                key: "{index}",
                environment: environment
            }),
        });

    render! {
        div { class: "routes", screens }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn screens(routes: &[Route], location: &str) -> Vec<Screen> {
        matching(routes, location).map(|r| r.screen).collect()
    }

    #[test]
    fn root_renders_both_screens() {
        assert_eq!(
            screens(ROUTES, "/"),
            vec![Screen::Application, Screen::Planets]
        );
    }

    #[test]
    fn root_route_matches_nested_locations() {
        assert_eq!(screens(ROUTES, "/moons").len(), 2);
    }

    #[test]
    fn prefix_stops_at_segment_boundary() {
        let routes = [Route {
            path: "/planets",
            screen: Screen::Planets,
        }];
        assert_eq!(screens(&routes, "/planets"), vec![Screen::Planets]);
        assert_eq!(screens(&routes, "/planets/earth"), vec![Screen::Planets]);
        assert!(screens(&routes, "/planetsx").is_empty());
        assert!(screens(&routes, "/").is_empty());
    }
}
