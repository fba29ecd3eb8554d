use customers_shared::{Customer, CustomerField, CustomerForm, CustomerPatch};
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CustomerModalProps {
    /// Record being edited; `None` creates a new one
    #[prop_or_default]
    pub seed: Option<Customer>,
    /// Emits the saved values, or `None` on cancel
    pub on_close: Callback<Option<CustomerPatch>>,
}

#[function_component(CustomerModal)]
pub fn customer_modal(props: &CustomerModalProps) -> Html {
    let form = use_state(|| CustomerForm::new(props.seed.clone()));

    // A different seed replaces the draft instead of keeping stale values
    {
        let form = form.clone();
        use_effect_with(props.seed.clone(), move |seed| {
            if form.seed() != seed.as_ref() {
                let mut next = (*form).clone();
                next.reseed(seed.clone());
                form.set(next);
            }
            || ()
        });
    }

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            match next.set_named_field(&input.name(), input.value()) {
                Ok(()) => form.set(next),
                Err(err) => tracing::warn!(%err, "ignoring input"),
            }
        })
    };

    let cancel = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |()| {
            let mut next = (*form).clone();
            let result = next.cancel();
            form.set(next);
            on_close.emit(result);
        })
    };
    let on_cancel = cancel.reform(|_: MouseEvent| ());

    let on_keydown = {
        let cancel = cancel.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cancel.emit(());
            }
        })
    };

    // Focus the dialog on open so Escape reaches it before any input is clicked
    let dialog_ref = use_node_ref();
    {
        let dialog_ref = dialog_ref.clone();
        use_effect_with((), move |_| {
            if let Some(Err(err)) = dialog_ref.cast::<HtmlElement>().map(|dialog| dialog.focus()) {
                tracing::debug!(?err, "could not focus customer dialog");
            }
            || ()
        });
    }

    let on_submit = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.save() {
                Ok(patch) => {
                    form.set(next);
                    on_close.emit(Some(patch));
                }
                Err(err) => tracing::debug!(%err, "save blocked"),
            }
        })
    };

    let field_input = |field: CustomerField| {
        let invalid = form.shows_invalid(field);
        let border = if invalid { "border-red-500" } else { "border-gray-600" };

        html! {
            <div>
                <label for={field.as_str()} class="block text-sm font-medium text-gray-300 mb-1">
                    {field.label()}
                </label>
                <input
                    type="text"
                    id={field.as_str()}
                    name={field.as_str()}
                    value={form.value(field).to_string()}
                    oninput={oninput.clone()}
                    aria-invalid={invalid.to_string()}
                    class={classes!("w-full", "bg-gray-700", "border", border, "text-white", "rounded-lg", "px-3", "py-2", "focus:ring-blue-500", "focus:border-blue-500")}
                />
            </div>
        }
    };

    html! {
        <div class="fixed inset-0 z-50 overflow-y-auto" onkeydown={on_keydown}>
            <div class="flex min-h-full items-center justify-center p-4">
                // Backdrop
                <div class="fixed inset-0 bg-black/50" onclick={on_cancel.clone()}></div>

                <div ref={dialog_ref} role="dialog" aria-modal="true" tabindex="-1" class="relative focus:outline-none bg-gray-800 rounded-lg shadow-xl border border-gray-700 w-full max-w-lg">
                    <div class="px-6 py-4 border-b border-gray-700">
                        <h5 class="text-lg font-medium text-white">{form.title()}</h5>
                    </div>

                    <form onsubmit={on_submit}>
                        <div class="p-6 space-y-4">
                            { for CustomerField::ALL.into_iter().map(field_input) }
                        </div>

                        <div class="px-6 py-4 border-t border-gray-700 flex justify-end space-x-3">
                            <button type="button" onclick={on_cancel} class="px-4 py-2 text-blue-400 hover:text-blue-300">
                                {"Close"}
                            </button>
                            <button
                                type="submit"
                                disabled={!form.is_valid()}
                                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg disabled:opacity-50"
                            >
                                {"Save"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
