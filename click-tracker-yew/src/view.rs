use click_tracker::{TrackerTransition, ViewModel};
use yew::{html, Callback, Html};

/// What a [TrackerView] can do besides render: push transitions back into the
/// owning component.
pub struct ViewContext {
    pub callback: Callback<TrackerTransition>,
}

/// Renders a [ViewModel]. The component owns the state and hands the view a
/// fresh model on every redraw, so implementations hold no state of their own.
pub trait TrackerView: 'static {
    fn view(model: &ViewModel, context: &ViewContext) -> Html;
}

/// The stock single-page layout.
pub struct DefaultView;

impl TrackerView for DefaultView {
    fn view(model: &ViewModel, context: &ViewContext) -> Html {
        let on_clear = context.callback.reform(|_| TrackerTransition::Clear);

        html! {
            <div style="font-family: system-ui; padding: 24px; max-width: 560px; margin: 0 auto">
                <h1>{ model.heading }</h1>
                <p><small>{ &model.api_line }</small></p>
                if let Some(loading) = model.loading_line {
                    <p>{ loading }</p>
                }
                if let Some(error) = &model.error_line {
                    <p style="color: red">{ error }</p>
                }

                <div style="display: flex; gap: 12px; margin-top: 12px">
                    { for model.buttons.iter().map(|view| {
                        let button = view.button;
                        html! {
                            <button
                                onclick={context.callback.reform(move |_| TrackerTransition::Press(button))}
                                style="padding: 12px 20px; font-size: 18px"
                            >
                                { &view.label }
                            </button>
                        }
                    }) }
                </div>

                <div style="margin-top: 20px; font-size: 18px">
                    { for model.buttons.iter().map(|view| html! {
                        <div><strong>{ &view.count_label }</strong>{ format!(" {}", view.count) }</div>
                    }) }
                </div>

                <div style="margin-top: 20px">
                    <button
                        onclick={on_clear}
                        style="padding: 10px 16px; font-size: 16px; background-color: #f66; color: #fff; border: none; border-radius: 4px"
                    >
                        { model.clear_label }
                    </button>
                </div>
            </div>
        }
    }
}
