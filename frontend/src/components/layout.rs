use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/customers")]
    Customers,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Dark admin shell: top header with navigation, page content below
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Home);
    let on_customers = matches!(current_route, Route::Home | Route::Customers);

    html! {
        <div class="min-h-screen bg-gray-900 flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700 h-14 flex-shrink-0 z-40">
                <div class="h-full flex items-center px-4 space-x-6">
                    <div class="flex items-center space-x-2">
                        <div class="w-8 h-8 bg-blue-500 rounded flex items-center justify-center">
                            <span class="text-white font-bold text-lg">{"A"}</span>
                        </div>
                        <span class="text-white font-semibold text-lg">{"Admin"}</span>
                    </div>

                    <nav class="flex items-center space-x-1">
                        <NavTab route={Route::Customers} label="Customers" active={on_customers} />
                    </nav>
                </div>
            </header>

            <main class="flex-1 overflow-y-auto">
                {props.children.clone()}
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavTabProps {
    route: Route,
    label: &'static str,
    active: bool,
}

#[function_component(NavTab)]
fn nav_tab(props: &NavTabProps) -> Html {
    let classes = if props.active {
        "px-3 py-2 text-sm font-medium text-white border-b-2 border-blue-500"
    } else {
        "px-3 py-2 text-sm font-medium text-gray-300 hover:text-white border-b-2 border-transparent hover:border-gray-500"
    };

    html! {
        <Link<Route> to={props.route.clone()} classes={classes}>
            {props.label}
        </Link<Route>>
    }
}
