//! Start exploration button.

use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct StartButtonProps {
    pub visible: bool,
    /// CSS background colour.
    pub color: AttrValue,
    pub onclick: Callback<()>,
}

/// `#startButton`. Must stay the first button in the document.
#[function_component(StartButton)]
pub fn start_button(props: &StartButtonProps) -> Html {
    let onclick = {
        let cb = props.onclick.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let display = if props.visible { "inline-flex" } else { "none" };
    let style = format!("display: {display}; background-color: {};", props.color);

    html! {
        <button id="startButton" class="start-button" {style} {onclick}>
            <Icon data={IconData::LUCIDE_PLAY} width="18" height="18" />
            <span>{ "Ξεκινήστε την εξερεύνηση" }</span>
        </button>
    }
}
