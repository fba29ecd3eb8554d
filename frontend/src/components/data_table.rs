// Generic sortable table driven by a column schema

use customers_shared::{ColumnDef, SortState, TableRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DataTableProps<R: TableRow + PartialEq + Clone + 'static> {
    pub columns: Vec<ColumnDef<R::Column>>,
    /// Rows already filtered and sorted, in display order
    pub rows: Vec<R>,
    pub sort: SortState<R::Column>,
    pub on_sort: Callback<R::Column>,
    pub on_select: Callback<R::Key>,
    #[prop_or(AttrValue::Static("No records found"))]
    pub empty_message: AttrValue,
}

#[function_component(DataTable)]
pub fn data_table<R>(props: &DataTableProps<R>) -> Html
where
    R: TableRow + PartialEq + Clone + 'static,
{
    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead class="border-b border-gray-700">
                    <tr>
                        { for props.columns.iter().map(|column| header_cell(column, &props.sort, &props.on_sort)) }
                    </tr>
                </thead>
                <tbody>
                    if props.rows.is_empty() {
                        <tr>
                            <td colspan={props.columns.len().to_string()} class="px-4 py-6 text-center text-gray-400">
                                {props.empty_message.clone()}
                            </td>
                        </tr>
                    } else {
                        { for props.rows.iter().enumerate().map(|(index, row)| body_row(index, row, &props.columns, &props.on_select)) }
                    }
                </tbody>
            </table>
        </div>
    }
}

fn header_cell<C>(column: &ColumnDef<C>, sort: &SortState<C>, on_sort: &Callback<C>) -> Html
where
    C: Copy + Eq + 'static,
{
    if !column.sortable {
        return html! {
            <th scope="col" class="px-4 py-3 text-left font-medium text-gray-300">{column.label}</th>
        };
    }

    let indicator = sort.indicator(column.key);
    let key = column.key;
    let onclick = on_sort.reform(move |_: MouseEvent| key);

    html! {
        <th
            scope="col"
            aria-sort={indicator.aria_sort()}
            {onclick}
            class="px-4 py-3 text-left font-medium text-gray-300 cursor-pointer select-none hover:text-white"
        >
            <span>{column.label}</span>
            <span class="sort-indicator ml-1 text-gray-500" data-sort={indicator.aria_sort()}>
                {indicator.glyph()}
            </span>
        </th>
    }
}

fn body_row<R>(
    index: usize,
    row: &R,
    columns: &[ColumnDef<R::Column>],
    on_select: &Callback<R::Key>,
) -> Html
where
    R: TableRow + 'static,
{
    let key = row.key();
    let onclick = on_select.reform(move |_: MouseEvent| key);
    let stripe = if index % 2 == 0 { "bg-gray-900" } else { "bg-gray-800" };

    html! {
        <tr
            key={key.to_string()}
            data-key={key.to_string()}
            {onclick}
            class={classes!(stripe, "cursor-pointer", "hover:bg-gray-700")}
        >
            { for columns.iter().map(|column| html! {
                <td class="px-4 py-2 text-gray-200 whitespace-nowrap">{column.display(row)}</td>
            }) }
        </tr>
    }
}
