use payloads::Role;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub role: Role,
}

#[function_component]
pub fn RoleBadge(props: &Props) -> Html {
    let classes = match props.role {
        Role::Admin => "bg-blue-100 text-blue-700",
        Role::Moderator => "bg-green-100 text-green-700",
        Role::Member => "bg-gray-100 text-gray-600",
    };

    html! {
        <span class={format!("px-2 py-1 rounded-full text-xs font-semibold {}", classes)}>
            {props.role.to_string()}
        </span>
    }
}
