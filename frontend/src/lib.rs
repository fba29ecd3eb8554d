use customers_shared::config::DEFAULT_LOG_LEVEL;
use customers_shared::{Customer, CustomerSource, CustomersConfig, FakeCustomers};
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod logging;
pub mod pages;

use components::layout::{Layout, Route};
use pages::customers::CustomersPage;

const TAILWIND_URL: &str = "https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css";

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub customers: Vec<Customer>,
}

fn switch(route: Route, customers: &[Customer]) -> Html {
    match route {
        Route::Home | Route::Customers => html! { <CustomersPage customers={customers.to_vec()} /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-white">{"404"}</h1>
                    <p class="text-xl mt-4 text-gray-400">{"Page Not Found"}</p>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let customers = props.customers.clone();

    html! {
        <BrowserRouter>
            <Layout>
                <Switch<Route> render={move |route: Route| switch(route, &customers)} />
            </Layout>
        </BrowserRouter>
    }
}

fn load_stylesheet(href: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    let link = document.create_element("link")?;
    link.set_attribute("href", href)?;
    link.set_attribute("rel", "stylesheet")?;
    head.append_child(&link)?;
    Ok(())
}

/// Loads settings, installs logging, generates the sample customers and mounts the app.
pub fn start() {
    let loaded = config::load();
    logging::init(
        loaded
            .as_ref()
            .map(|config| config.log_level.as_str())
            .unwrap_or(DEFAULT_LOG_LEVEL),
    );
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "stored customers config unreadable, using defaults");
        CustomersConfig::default()
    });

    if let Err(err) = load_stylesheet(TAILWIND_URL) {
        tracing::warn!(?err, "failed to load stylesheet");
    }

    let seed = config.seed_or(js_sys::Date::now() as u64);
    let customers =
        FakeCustomers::seeded(seed, config.capped_sample_size(), chrono::Utc::now()).customers();
    tracing::info!(seed, count = customers.len(), "starting customers view");

    yew::Renderer::<App>::with_props(AppProps { customers }).render();
}
