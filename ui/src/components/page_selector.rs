use yew::prelude::*;

use crate::state::PAGE_NUMBERS;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub current_page: u32,
    pub on_select: Callback<u32>,
}

/// The fixed row of page buttons under the members table.
#[function_component]
pub fn PageSelector(props: &Props) -> Html {
    html! {
        <div class="mt-4 flex justify-end gap-2">
            {for PAGE_NUMBERS.iter().map(|&page| {
                let selected = props.current_page == page;
                let onclick = props.on_select.reform(move |_: MouseEvent| page);
                let class = if selected {
                    "w-8 h-8 rounded-md text-sm bg-blue-500 text-white"
                } else {
                    "w-8 h-8 rounded-md text-sm bg-gray-200 text-gray-700"
                };

                html! {
                    <button
                        key={page}
                        type="button"
                        {onclick}
                        {class}
                        aria-current={selected.then_some("page")}
                    >
                        {page}
                    </button>
                }
            })}
        </div>
    }
}
