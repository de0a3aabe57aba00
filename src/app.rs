#![allow(non_snake_case)]

use crate::environment::{config::AppConfig, Environment};
use crate::routes::Routes;
use crate::Defer;
use dioxus::prelude::*;

use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let config = AppConfig::load();
    log::info!("starting {} at {}", config.title, config.route);

    let title = &config.title;
    let desktop_config = Config::new()
        .with_custom_head(format!(
            r#"
        <title>{title}</title>
        "#
        ))
        .with_root_name(config.mount_id.clone())
        .with_window(default_window(&config));

    dioxus_desktop::launch_with_props(RootApp, RootAppProps { config }, desktop_config);
}

fn default_window(config: &AppConfig) -> WindowBuilder {
    let size = LogicalSize::new(f64::from(config.width), f64::from(config.height));
    WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(size)
}

pub struct RootAppProps {
    config: AppConfig,
}

pub fn RootApp(cx: Scope<'_, RootAppProps>) -> Element<'_> {
    log::trace!("rerender root-app");
    let environment_state = use_state(cx, || Environment::new(cx.props.config.clone()));
    let environment = environment_state.get();

    // The repo lives exactly as long as the root component
    cx.use_hook(|| Defer::action(&environment.repo, |repo| repo.teardown()));

    cx.render(rsx! {
        Routes { environment: environment }
    })
}
