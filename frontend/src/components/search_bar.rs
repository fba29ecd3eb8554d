use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub value: AttrValue,
    pub on_search: Callback<String>,
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
}

/// Free-text filter input; emits the full query on every keystroke
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = props.on_search.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div class="relative">
            <svg class="absolute left-3 top-1/2 transform -translate-y-1/2 w-4 h-4 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
            </svg>
            <input
                type="search"
                aria-label="Search"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
                class="w-64 pl-10 pr-4 py-1.5 rounded-lg text-sm bg-gray-700 border border-gray-600 text-white focus:ring-blue-500 focus:border-blue-500"
            />
        </div>
    }
}
