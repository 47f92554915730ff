use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component]
pub fn MemberSearch(props: &Props) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <input
            type="text"
            placeholder="Search members..."
            value={props.value.clone()}
            oninput={on_input}
            class="mb-4 w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
        />
    }
}
