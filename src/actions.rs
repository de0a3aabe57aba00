use im::Vector;

/// The nine classical planets, in order from the sun.
pub const CLASSICAL_PLANETS: [&str; 9] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

/// The value the "Add Planet" control appends
pub const ALPHA_CENTAURI: &str = "Alpha Centauri";

#[derive(Clone, Debug, Eq, PartialEq, strum_macros::AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum PlanetAction {
    /// Load the list of known planets
    GetPlanets,
    /// Append a single planet
    AddPlanet(String),
}

impl PlanetAction {
    pub fn get_planets() -> Self {
        PlanetAction::GetPlanets
    }

    pub fn add_planet(name: impl Into<String>) -> Self {
        PlanetAction::AddPlanet(name.into())
    }

    /// Stable identifier of the action, e.g. `getPlanets`
    pub fn identifier(&self) -> &str {
        self.as_ref()
    }

    /// The data this action carries into the reducers.
    ///
    /// Always a sequence: `AddPlanet` wraps its single value so that
    /// every handler can concatenate.
    pub fn payload(&self) -> Vector<String> {
        match self {
            PlanetAction::GetPlanets => CLASSICAL_PLANETS.iter().map(|p| p.to_string()).collect(),
            PlanetAction::AddPlanet(name) => Vector::unit(name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identifiers_are_camel_case() {
        assert_eq!(PlanetAction::get_planets().identifier(), "getPlanets");
        assert_eq!(PlanetAction::add_planet("x").identifier(), "addPlanet");
    }

    #[test]
    fn get_planets_payload_is_the_classical_list() {
        let payload: Vec<String> = PlanetAction::get_planets().payload().into_iter().collect();
        assert_eq!(payload, CLASSICAL_PLANETS.to_vec());
    }

    #[test]
    fn add_planet_payload_is_its_value() {
        let payload = PlanetAction::add_planet(ALPHA_CENTAURI).payload();
        assert_eq!(payload, Vector::unit(ALPHA_CENTAURI.to_string()));
    }

    #[test]
    fn add_planet_does_not_validate() {
        let payload = PlanetAction::add_planet("").payload();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0], "");
    }
}
