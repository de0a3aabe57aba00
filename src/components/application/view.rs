use dioxus::prelude::*;

use super::presenter::{ApplicationModel, ViewStore};
use crate::environment::Environment;

#[inline_props]
pub fn ApplicationView<'a>(cx: Scope<'a>, environment: &'a Environment) -> Element<'a> {
    log::trace!("rerender application");
    let environment: &Environment = environment;
    let store: ViewStore = navicula::root(cx, &[], environment, ApplicationModel::default);

    cx.render(rsx!(Header { store: store }))
}

#[inline_props]
fn Header<'a>(cx: Scope<'a>, store: ViewStore<'a>) -> Element<'a> {
    let count = store.planet_count;
    render! {
        header { class: "application",
            h1 { "{store.title}" }
            p { class: "count", "{count} planets" }
        }
    }
}
