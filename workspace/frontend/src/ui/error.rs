use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Plain-text error paragraph used inside the results area.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error">
            <i class="fas fa-exclamation-circle"></i>
            <p>{&props.message}</p>
        </div>
    }
}
