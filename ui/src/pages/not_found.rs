use yew::prelude::*;

#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <div class="text-center">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="text-gray-600">{"Page not found"}</p>
            <a href="/" class="text-sm text-blue-600 hover:underline">
                {"Back to your group"}
            </a>
        </div>
    }
}
